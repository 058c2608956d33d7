//! Configuration management for hostname-sync
//!
//! Handles loading, saving, and validating the JSONC configuration file,
//! and turns it into the pair of SSH config paths a run operates on.

pub mod paths;
pub mod schema;

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jsonc_parser::parse_to_serde_value;

use crate::propagate::SyncPaths;
pub use paths::{expand_home, get_config_dir, get_config_path, get_home_dir};
pub use schema::Config;

/// Ensure the config directory exists
///
/// Creates `~/.config/hostname-sync/` if it doesn't exist.
/// Returns the path to the config directory.
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir =
        get_config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;
        tracing::info!("Created config directory: {}", config_dir.display());
    }

    Ok(config_dir)
}

/// Load configuration from the default config file
///
/// If the config file doesn't exist, creates a new one with default values.
pub fn load_config() -> Result<Config> {
    let config_path =
        get_config_path().ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?;

    if !config_path.exists() {
        tracing::info!(
            "Config file not found, creating default at: {}",
            config_path.display()
        );
        let config = Config::default();
        ensure_config_dir()?;
        save_config_to(&config, &config_path)?;
        return Ok(config);
    }

    load_config_from(&config_path)
}

/// Load configuration from a specific file
///
/// Supports JSONC (JSON with comments).
/// Rejects unknown fields for strict validation.
pub fn load_config_from(config_path: &Path) -> Result<Config> {
    let mut file = File::open(config_path)
        .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    // Parse JSONC (JSON with comments)
    let parsed_value = parse_to_serde_value(&contents, &Default::default())
        .map_err(|e| anyhow::anyhow!("Invalid JSONC in config file: {}", e))?
        .ok_or_else(|| anyhow::anyhow!("Config file is empty"))?;

    // deny_unknown_fields rejects unknown keys here
    let config: Config = serde_json::from_value(parsed_value).with_context(|| {
        format!(
            "Invalid configuration in {}. Check for unknown fields or invalid values.",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Save configuration to a specific file
///
/// Creates a backup of the existing config (config.json.bak) before overwriting.
pub fn save_config_to(config: &Config, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        let backup_path = config_path.with_extension("json.bak");
        fs::copy(config_path, &backup_path)
            .with_context(|| format!("Failed to create backup at: {}", backup_path.display()))?;
        tracing::debug!("Created config backup: {}", backup_path.display());
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;

    let mut file = File::create(config_path)
        .with_context(|| format!("Failed to create config file: {}", config_path.display()))?;

    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    tracing::debug!("Saved config to: {}", config_path.display());

    Ok(())
}

/// Work out which SSH config files a run touches
///
/// Command-line overrides win over the config file. `~` is expanded in
/// both. The target has no default and must come from one of the two.
pub fn resolve_sync_paths(
    config: &Config,
    source_override: Option<&Path>,
    target_override: Option<&Path>,
) -> Result<SyncPaths> {
    let source = match source_override {
        Some(path) => expand_home(&path.to_string_lossy()),
        None => expand_home(&config.source_config),
    };

    let target = match (target_override, config.target_config.as_deref()) {
        (Some(path), _) => expand_home(&path.to_string_lossy()),
        (None, Some(path)) if config.has_target() => expand_home(path.trim()),
        _ => anyhow::bail!(
            "No target SSH config configured. Set \"target_config\" in {} or pass --target-config",
            get_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "config.json".to_string())
        ),
    };

    Ok(SyncPaths { source, target })
}
