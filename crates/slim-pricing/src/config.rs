//! Default pricing catalog, USD per million tokens.

use slim_core::{PricingEntry, PricingTier};
use std::sync::LazyLock;

fn entry(model_id: &str, input: f64, output: f64, tier: PricingTier) -> PricingEntry {
    PricingEntry::new(model_id, input, output, tier)
}

/// Built-in price table.
pub fn default_pricing() -> Vec<PricingEntry> {
    use PricingTier::*;
    vec![
        entry("llama-3.1-8b-local", 0.0, 0.0, Free),
        entry("gemini-2.0-flash-exp", 0.0, 0.0, Free),
        entry("gpt-4o-mini", 0.15, 0.60, Budget),
        entry("deepseek-chat", 0.27, 1.10, Budget),
        entry("gemini-2.5-flash", 0.30, 2.50, Budget),
        entry("claude-haiku-3.5", 0.80, 4.00, Budget),
        entry("gemini-2.5-pro", 1.25, 10.00, Standard),
        entry("gpt-4o", 2.50, 10.00, Standard),
        entry("claude-sonnet-4", 3.00, 15.00, Standard),
        entry("o1", 15.00, 60.00, Premium),
        entry("claude-opus-4", 15.00, 75.00, Premium),
    ]
}

/// The default catalog entries.
pub static DEFAULT_PRICING: LazyLock<Vec<PricingEntry>> = LazyLock::new(default_pricing);
