//! `tokslim models`: pricing catalog grouped by tier.

use anyhow::Result;
use colored::Colorize;
use slim_core::{PricingEntry, PricingTier};
use slim_pricing::PricingCatalog;

use super::Workspace;
use crate::output::print_header;

pub struct TierSection<'a> {
    pub tier: PricingTier,
    /// Cheapest input price first.
    pub models: Vec<&'a PricingEntry>,
}

/// Non-empty tiers from free to premium.
pub fn tier_sections(catalog: &PricingCatalog) -> Vec<TierSection<'_>> {
    catalog
        .by_tier()
        .into_iter()
        .map(|(tier, models)| TierSection { tier, models })
        .collect()
}

pub fn execute(ws: &Workspace) -> Result<()> {
    print_header("Model pricing (USD per million tokens)", 56);
    let current = ws.config.usage.model.as_str();

    for section in tier_sections(&ws.catalog) {
        println!();
        println!("{}", section.tier.to_string().to_uppercase().bold());
        println!("{:<32} {:>10} {:>10}", "Model", "Input", "Output");
        println!("{}", "─".repeat(56));
        for entry in section.models {
            let marker = if entry.model_id == current { "*".cyan() } else { " ".normal() };
            println!(
                "{}{:<31} {:>10.2} {:>10.2}",
                marker, entry.model_id, entry.input_per_mtok, entry.output_per_mtok
            );
        }
    }

    if ws.catalog.get(current).is_none() {
        println!();
        println!("{} configured model {current} has no price", "!".yellow());
    }
    Ok(())
}
