//! `tokslim compress`: rewrite files in place with backups.

use anyhow::Result;
use colored::Colorize;
use slim_storage::{write_compressed, WriteOutcome};

use super::{file_label, Workspace};
use crate::output::savings_colored;

pub fn execute(ws: &Workspace, dry_run: bool, file: Option<&str>) -> Result<()> {
    let files = ws.files(file)?;
    if files.is_empty() {
        println!("{}", "No context files found.".dimmed());
        return Ok(());
    }
    if dry_run {
        println!("{}", "Dry run: no files will be written.".yellow());
    }

    let (mut before, mut after, mut written, mut failed) = (0usize, 0usize, 0usize, 0usize);
    for path in &files {
        let name = file_label(path);
        let analysis = match ws.analyze(path) {
            Ok(a) => a,
            Err(e) => {
                failed += 1;
                println!("  {} {name}: {e}", "✗".red());
                continue;
            }
        };
        let result = &analysis.result;
        let write_result =
            write_compressed(path, &result.original_text, &result.compressed_text, dry_run);
        let outcome = match write_result {
            Ok(o) => o,
            Err(e) => {
                failed += 1;
                println!("  {} {name}: {e}", "✗".red());
                continue;
            }
        };

        before += result.original_tokens;
        match outcome {
            WriteOutcome::Written { .. } | WriteOutcome::DryRun => {
                after += result.compressed_tokens;
                if matches!(outcome, WriteOutcome::Written { .. }) {
                    written += 1;
                }
                println!(
                    "  {} {name}: {} → {} tokens ({})",
                    "✓".green(),
                    result.original_tokens,
                    result.compressed_tokens,
                    savings_colored(result.savings_percent)
                );
                tracing::debug!(file = %name, rules = ?result.rules_applied, "rules applied");
            }
            WriteOutcome::NoBenefit => {
                after += result.original_tokens;
                println!("  {} {name}: no benefit, unchanged", "-".dimmed());
            }
        }
    }

    println!("{}", "─".repeat(50));
    println!(
        "  {} → {} tokens ({}), {} file(s) {}",
        before,
        after.to_string().bold(),
        savings_colored(slim_compactor::savings_percent(before, after)),
        written,
        if dry_run { "would change" } else { "written" }
    );
    if failed > 0 {
        println!("  {} {failed} file(s) failed", "!".yellow());
    }
    Ok(())
}
