//! `tokslim scan`: token counts, potential and cost per file.

use anyhow::Result;
use colored::Colorize;
use slim_core::{PricingTier, UsageProfile};
use slim_pricing::PricingCatalog;

use super::Workspace;
use crate::output::{file_cell, potential_colored, print_header, savings_colored};
use crate::report::{format_usd, Report, RowStatus};

/// Cheapest model of one tier for the scanned token count.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPick {
    pub tier: PricingTier,
    pub model_id: String,
    pub monthly: Option<f64>,
}

pub struct Scan {
    pub report: Report,
    pub cheapest: Vec<TierPick>,
}

impl Scan {
    /// Files that could be read.
    pub fn scanned(&self) -> usize {
        self.report.rows.len() - self.report.errors()
    }
}

/// Lowest input price per tier, tiers without models skipped.
pub fn cheapest_per_tier(
    catalog: &PricingCatalog,
    tokens: usize,
    usage: &UsageProfile,
) -> Vec<TierPick> {
    let tiers = catalog.by_tier();
    PricingTier::ALL
        .into_iter()
        .filter_map(|tier| {
            let entry = tiers.get(&tier)?.first()?;
            Some(TierPick {
                tier,
                model_id: entry.model_id.clone(),
                monthly: catalog.monthly_cost(&entry.model_id, tokens, usage),
            })
        })
        .collect()
}

pub fn scan(ws: &Workspace) -> Result<Scan> {
    let report = super::report::build(ws, None)?;
    let cheapest = cheapest_per_tier(&ws.catalog, report.total_original, &ws.config.usage);
    Ok(Scan { report, cheapest })
}

pub fn execute(ws: &Workspace) -> Result<()> {
    let scan = scan(ws)?;
    let usage = &ws.config.usage;

    print_header(&format!("Scan of {}", ws.dir.display()), 72);
    if scan.report.rows.is_empty() {
        println!("{}", "No context files found.".dimmed());
        return Ok(());
    }

    println!(
        "{:<28} {:>8} {:>10} {:>8} {:>14}",
        "File", "Tokens", "Potential", "Saving", "Monthly"
    );
    println!("{}", "─".repeat(72));

    for row in &scan.report.rows {
        if let RowStatus::Error(e) = &row.status {
            println!("{} {}", file_cell(&row.file), format!("error: {e}").red());
            continue;
        }
        let monthly = ws.catalog.monthly_cost(&usage.model, row.original_tokens, usage);
        println!(
            "{} {:>8} {:>10} {:>8} {:>14}",
            file_cell(&row.file),
            row.original_tokens,
            potential_colored(row.potential),
            savings_colored(row.savings_percent),
            format_usd(monthly)
        );
    }

    let total = scan.report.total_original;
    println!("{}", "─".repeat(72));
    println!(
        "  {} tokens per call across {} files, {} monthly on {}",
        total.to_string().bold(),
        scan.scanned(),
        format_usd(ws.catalog.monthly_cost(&usage.model, total, usage)).cyan(),
        usage.model
    );

    println!();
    println!("{}", "Cheapest model per tier".bold());
    for pick in &scan.cheapest {
        println!(
            "  {:<10} {:<28} {:>12}",
            pick.tier.to_string(),
            pick.model_id,
            format_usd(pick.monthly)
        );
    }

    if scan.report.errors() > 0 {
        tracing::warn!(failed = scan.report.errors(), "some files could not be read");
    }
    Ok(())
}
