//! `tokslim persist`: teach future writers the compact notation.

use anyhow::{Context, Result};
use colored::Colorize;
use slim_compactor::templates::AGENTS_FILE;
use std::path::Path;

use super::Workspace;

pub const MARKER: &str = "<!-- tokslim:persistent-mode -->";

pub const GUIDE: &str = "## Compact notation
- `A → B`: when A, do B
- `GOAL:` / `CRITICAL:` / `DO:` prefixes instead of full sentences
- `•` bullets, no filler words or politeness
- one blank line between blocks at most
";

/// Append the guide to `AGENTS.md` unless it is already there. Returns
/// whether the file changed.
pub fn append_guide(dir: &Path) -> Result<bool> {
    let path = dir.join(AGENTS_FILE);
    let existing = if path.exists() {
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };
    if existing.contains(MARKER) {
        return Ok(false);
    }

    let mut text = existing;
    if !text.is_empty() {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push('\n');
    }
    text.push_str(MARKER);
    text.push('\n');
    text.push_str(GUIDE);

    std::fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(file = %path.display(), "appended compact-notation guide");
    Ok(true)
}

pub fn execute(ws: &Workspace) -> Result<()> {
    if append_guide(&ws.dir)? {
        println!("  {} compact-notation guide added to {AGENTS_FILE}", "✓".green());
    } else {
        println!("  {} {AGENTS_FILE} already has the guide", "-".dimmed());
    }
    Ok(())
}
