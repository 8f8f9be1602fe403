//! `tokslim rules`: the rewrite pipeline in application order.

use anyhow::Result;
use colored::Colorize;
use slim_compactor::BlockTable;
use std::collections::BTreeMap;

use super::Workspace;
use crate::output::print_header;

/// Template labels per target file, in table order within a file.
pub fn templates_by_file(blocks: &BlockTable) -> BTreeMap<&str, Vec<&str>> {
    let mut by_file: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for rule in blocks.rules() {
        by_file.entry(rule.filename.as_str()).or_default().push(rule.label.as_str());
    }
    by_file
}

pub fn execute(ws: &Workspace) -> Result<()> {
    print_header("Block templates (per file, applied first)", 56);
    let by_file = templates_by_file(ws.compactor.blocks());
    if by_file.is_empty() {
        println!("{}", "No block templates.".dimmed());
    }
    for (file, labels) in &by_file {
        println!("  {}", file.cyan());
        for label in labels {
            println!("    {label}");
        }
    }

    println!();
    print_header("Generic rules (every file, in order)", 56);
    for (i, label) in ws.compactor.rule_labels().iter().enumerate() {
        println!("  {:>2}. {label}", i + 1);
    }
    Ok(())
}
