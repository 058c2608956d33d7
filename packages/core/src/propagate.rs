//! HostName propagation between two SSH config files
//!
//! The source file holds both the instance host (whose HostName changes,
//! e.g. a WSL VM address) and a stable alias for it. The target file holds
//! the same alias. Propagation copies the instance's HostName onto the alias
//! in both files.

use std::path::{Path, PathBuf};

use crate::ssh_config::{ConfigStore, SshConfig, SshConfigError};

/// The two config files a propagation run touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    /// Config holding the instance host and its alias
    pub source: PathBuf,
    /// Second config holding only the alias
    pub target: PathBuf,
}

/// Copy `source_host`'s HostName onto `target_host` within one file
///
/// Returns the propagated hostname. Nothing is written unless both hosts
/// are found.
pub fn mirror_within<S: ConfigStore>(
    store: &mut S,
    path: &Path,
    source_host: &str,
    target_host: &str,
) -> Result<String, SshConfigError> {
    let mut config = SshConfig::parse(&store.read(path)?)?;

    let hostname = config.host(source_host)?.hostname.clone();
    tracing::debug!(
        "Host '{}' resolves to '{}' in {}",
        source_host,
        hostname,
        path.display()
    );

    config.host_mut(target_host)?.set_hostname(&hostname);
    store.write(path, &config.render())?;

    tracing::info!(
        "Set HostName of '{}' to '{}' in {}",
        target_host,
        hostname,
        path.display()
    );
    Ok(hostname)
}

/// Set `host`'s HostName to `hostname` in one file
pub fn update_host<S: ConfigStore>(
    store: &mut S,
    path: &Path,
    host: &str,
    hostname: &str,
) -> Result<(), SshConfigError> {
    let mut config = SshConfig::parse(&store.read(path)?)?;
    config.host_mut(host)?.set_hostname(hostname);
    store.write(path, &config.render())?;

    tracing::info!(
        "Set HostName of '{}' to '{}' in {}",
        host,
        hostname,
        path.display()
    );
    Ok(())
}

/// Propagate `source_host`'s HostName to `target_host` in both files
///
/// The source file is written before the target file is read. If the
/// target step fails, the source file keeps its update.
pub fn propagate<S: ConfigStore>(
    store: &mut S,
    paths: &SyncPaths,
    source_host: &str,
    target_host: &str,
) -> Result<String, SshConfigError> {
    let hostname = mirror_within(store, &paths.source, source_host, target_host)?;
    update_host(store, &paths.target, target_host, &hostname)?;
    Ok(hostname)
}
