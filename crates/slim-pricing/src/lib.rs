//! Tokslim pricing: per-model token prices and monthly cost projection.

pub mod config;
pub mod selector;
pub mod types;

pub use config::{default_pricing, DEFAULT_PRICING};
pub use selector::PricingCatalog;
pub use types::CostEstimate;

use slim_core::PricingEntry;

/// Average weeks per month.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// `tokens * calls * sessions * 4.33 * input_price / 1_000_000`.
pub fn monthly_cost(
    tokens_per_call: u64,
    calls_per_session: u64,
    sessions_per_week: u64,
    model: &PricingEntry,
) -> f64 {
    let monthly_tokens = tokens_per_call as f64
        * calls_per_session as f64
        * sessions_per_week as f64
        * WEEKS_PER_MONTH;
    monthly_tokens * model.input_per_mtok / 1_000_000.0
}

#[cfg(test)]
mod tests;
