//! Configuration schema for hostname-sync
//!
//! Defines the structure and defaults for the config.json file.

use serde::{Deserialize, Serialize};

/// Main configuration structure for hostname-sync
///
/// Serialized to/from `~/.config/hostname-sync/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    pub version: u32,

    /// SSH config holding both the instance host and its alias
    /// (default: "~/.ssh/config")
    #[serde(default = "default_source_config")]
    pub source_config: String,

    /// Second SSH config holding only the alias, e.g. the Windows side
    /// of a WSL setup: "/mnt/c/Users/<name>/.ssh/config"
    /// No default; must be set here or passed on the command line.
    #[serde(default)]
    pub target_config: Option<String>,

    /// Copy each SSH config to `<file>.bak` before rewriting it (default: false)
    #[serde(default)]
    pub backup: bool,
}

fn default_source_config() -> String {
    "~/.ssh/config".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            source_config: default_source_config(),
            target_config: None,
            backup: false,
        }
    }
}

impl Config {
    /// Whether a target config path has been configured
    pub fn has_target(&self) -> bool {
        self.target_config
            .as_deref()
            .is_some_and(|path| !path.trim().is_empty())
    }
}
