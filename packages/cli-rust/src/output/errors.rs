//! Error formatting for propagation failures
//!
//! Turns `SshConfigError` into a headline, the underlying message, and a
//! tip pointing at the line or file the user needs to fix.

use console::style;
use hostname_sync_core::{SshConfigError, SyncPaths};

/// Print a rich error message for a failed propagation run
pub fn show_sync_error(err: &SshConfigError, instance: &str, alias: &str, paths: &SyncPaths) {
    eprintln!("{} {}", style("Error:").red().bold(), headline(err));
    eprintln!();
    eprintln!("  {err}");
    eprintln!();
    eprintln!("  {} {}", style("Tip:").cyan(), error_tip(err, instance, alias, paths));
}

/// Print a rich error message when the SSH config paths cannot be resolved
pub fn show_paths_error(err: &anyhow::Error, config_path: &str) {
    eprintln!("{} No target SSH config", style("Error:").red().bold());
    eprintln!();
    eprintln!("  {err:#}");
    eprintln!();
    eprintln!("  Config file: {}", style(config_path).yellow());
    eprintln!();
    eprintln!("  {} {}", style("Tip:").cyan(), paths_tip(config_path));
}

fn paths_tip(config_path: &str) -> String {
    format!(
        "Add \"target_config\": \"/mnt/c/Users/<name>/.ssh/config\" to {config_path}, \
         or pass --target-config <PATH>."
    )
}

fn headline(err: &SshConfigError) -> &'static str {
    match err {
        e if e.is_parse_error() => "Could not parse SSH config",
        SshConfigError::HostNotFound(_) => "Host lookup failed",
        SshConfigError::ReadFailed(_) => "Could not read SSH config",
        SshConfigError::WriteFailed(_) => "Could not write SSH config",
        _ => "SSH config update failed",
    }
}

/// Hint for fixing the failure
fn error_tip(err: &SshConfigError, instance: &str, alias: &str, paths: &SyncPaths) -> String {
    match err {
        SshConfigError::MissingHostName(host) => {
            format!("Add a 'HostName <address>' line under 'Host {host}'.")
        }
        SshConfigError::MalformedHost(_) => {
            "Each 'Host' line needs a name, e.g. 'Host devbox'.".to_string()
        }
        SshConfigError::HostNotFound(host) if host == instance => format!(
            "'{instance}' must have a Host entry in {}.",
            paths.source.display()
        ),
        SshConfigError::HostNotFound(host) if host == alias => format!(
            "'{alias}' must have a Host entry in both {} and {}. Names are case-sensitive.",
            paths.source.display(),
            paths.target.display()
        ),
        SshConfigError::HostNotFound(_) => {
            "Host names must match the 'Host' line exactly.".to_string()
        }
        SshConfigError::ReadFailed(_) => format!(
            "Check that {} and {} exist, or set --source-config / --target-config.",
            paths.source.display(),
            paths.target.display()
        ),
        SshConfigError::WriteFailed(_) => {
            "Check write permissions for the SSH config and its directory.".to_string()
        }
    }
}
