//! Success and dry-run output

use console::style;
use hostname_sync_core::{PendingWrite, SyncPaths};

/// Report a completed propagation
pub fn print_summary(hostname: &str, alias: &str, paths: &SyncPaths) {
    println!(
        "{} HostName of '{}' is now {}",
        style("Updated:").green(),
        style(alias).cyan(),
        style(hostname).bold()
    );
    for path in [&paths.source, &paths.target] {
        println!("  {} {}", style("wrote").dim(), path.display());
    }
}

/// Show what a dry run would have written
pub fn print_dry_run(hostname: &str, pending: &[PendingWrite]) {
    println!(
        "{} would set HostName to {}",
        style("Dry run:").yellow(),
        style(hostname).bold()
    );
    for write in pending {
        println!();
        println!("  {}", style(write.path.display()).yellow());
        let changes = write.changed_lines();
        if changes.is_empty() {
            println!("    {}", style("(already up to date)").dim());
        }
        for line in diff_lines(&changes) {
            println!("{line}");
        }
    }
}

/// Unstyled `-`/`+` pairs for each changed line
fn diff_lines(changes: &[(&str, &str)]) -> Vec<String> {
    changes
        .iter()
        .flat_map(|(before, after)| {
            [
                format!("    {}", style(format!("- {before}")).red()),
                format!("    {}", style(format!("+ {after}")).green()),
            ]
        })
        .collect()
}
