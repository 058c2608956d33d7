//! hostname-sync CLI - Mirror an SSH host's HostName onto an alias
//!
//! This module contains the CLI implementation used by the binary.

mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use hostname_sync_core::{
    Config, DryRunStore, FsStore, SyncPaths, config, load_config, propagate, resolve_sync_paths,
};
use tracing_subscriber::EnvFilter;

/// Copy a host's HostName onto an alias in two SSH config files
#[derive(Parser, Debug)]
#[command(name = "hostname-sync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Copy a host's HostName onto an alias in two SSH config files")]
#[command(
    long_about = "Reads INSTANCE's HostName from the source SSH config, writes it onto ALIAS \
                  in that same file, then writes it onto ALIAS in the target SSH config. \
                  All other lines are left exactly as they were."
)]
struct Cli {
    /// Host whose HostName is copied (e.g. the WSL instance entry)
    instance: String,

    /// Alias whose HostName is overwritten in both files
    alias: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show the lines that would change without writing anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Source SSH config (overrides "source_config" in config.json)
    #[arg(long, value_name = "PATH")]
    source_config: Option<PathBuf>,

    /// Target SSH config (overrides "target_config" in config.json)
    #[arg(long, value_name = "PATH")]
    target_config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = load_config_or_exit();
    let paths = match resolve_sync_paths(
        &config,
        cli.source_config.as_deref(),
        cli.target_config.as_deref(),
    ) {
        Ok(paths) => paths,
        Err(e) => {
            let config_path = config::get_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "config.json".to_string());
            output::show_paths_error(&e, &config_path);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "Propagating '{}' -> '{}' (source: {}, target: {})",
        cli.instance,
        cli.alias,
        paths.source.display(),
        paths.target.display()
    );

    if cli.dry_run {
        return run_dry(&cli, &paths);
    }

    let mut store = FsStore::new(config.backup);
    match propagate(&mut store, &paths, &cli.instance, &cli.alias) {
        Ok(hostname) => {
            if !cli.quiet {
                output::print_summary(&hostname, &cli.alias, &paths);
            }
            Ok(())
        }
        Err(e) => {
            output::show_sync_error(&e, &cli.instance, &cli.alias, &paths);
            std::process::exit(1);
        }
    }
}

fn run_dry(cli: &Cli, paths: &SyncPaths) -> Result<()> {
    let mut store = DryRunStore::new(FsStore::default());
    match propagate(&mut store, paths, &cli.instance, &cli.alias) {
        Ok(hostname) => {
            output::print_dry_run(&hostname, store.pending());
            Ok(())
        }
        Err(e) => {
            output::show_sync_error(&e, &cli.instance, &cli.alias, paths);
            std::process::exit(1);
        }
    }
}

/// Log to stderr; `--debug` lowers the level, `RUST_LOG` overrides both
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();
}

/// Load config.json, or print a rich error and exit
fn load_config_or_exit() -> Config {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            let config_path = config::get_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {e:#}");
            eprintln!();
            eprintln!("  Config file: {}", style(config_path).yellow());
            eprintln!();
            eprintln!(
                "  {} Check the config file for syntax errors or unknown fields.",
                style("Tip:").cyan()
            );
            std::process::exit(1);
        }
    }
}
