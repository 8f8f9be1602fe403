//! `tokslim revert`: restore originals from backups.

use anyhow::{Context, Result};
use colored::Colorize;
use slim_storage::{list_backups, restore};

use super::{file_label, Workspace};

pub fn execute(ws: &Workspace, file: Option<&str>) -> Result<()> {
    if let Some(name) = file {
        match restore(&ws.dir.join(name)) {
            Ok(_) => println!("  {} {name} restored", "✓".green()),
            Err(e) => println!("  {} {name}: {e}", "✗".red()),
        }
        return Ok(());
    }

    let backups = list_backups(&ws.dir)
        .with_context(|| format!("Failed to list backups in {}", ws.dir.display()))?;
    if backups.is_empty() {
        println!("{}", "No backups found.".dimmed());
        return Ok(());
    }

    let mut restored = 0usize;
    for entry in &backups {
        let name = file_label(&entry.file);
        match restore(&entry.file) {
            Ok(_) => {
                restored += 1;
                let when = entry
                    .backed_up_at
                    .map(|t| format!(" (backup from {})", t.format("%Y-%m-%d %H:%M")))
                    .unwrap_or_default();
                println!("  {} {name} restored{}", "✓".green(), when.dimmed());
            }
            Err(e) => println!("  {} {name}: {e}", "✗".red()),
        }
    }
    println!("{}", "─".repeat(50));
    println!("  {restored} of {} file(s) restored", backups.len());
    Ok(())
}
