//! hostname-sync-core - Core library for hostname-sync
//!
//! Parses OpenSSH client config files into header and host blocks, and
//! mirrors one host's HostName onto an alias across two config files while
//! leaving every other line untouched.

pub mod config;
pub mod propagate;
pub mod ssh_config;

pub use config::{Config, load_config, resolve_sync_paths};
pub use propagate::{SyncPaths, mirror_within, propagate, update_host};
pub use ssh_config::{
    Block, ConfigStore, DryRunStore, FsStore, HostBlock, PendingWrite, SshConfig, SshConfigError,
};
