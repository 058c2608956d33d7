//! SSH config block model
//!
//! Lossless handling of OpenSSH client config files:
//! - Parsing into a header block followed by host blocks
//! - Exact-name host lookup
//! - In-place HostName rewrites that keep indentation
//! - Rendering back to text, byte-for-byte when unmodified

mod block;
mod document;
mod error;
mod lookup;
mod parser;
mod store;

// Public exports
pub use block::{Block, HeaderBlock, HostBlock, is_host_line, is_hostname_line};
pub use document::{SshConfig, render_blocks};
pub use error::SshConfigError;
pub use lookup::{find_host, find_host_mut};
pub use parser::{parse_header_block, parse_host_block, parse_lines, split_lines};
pub use store::{ConfigStore, DryRunStore, FsStore, MemoryStore, PendingWrite, backup_path};
