//! Model lookup and grouping.

use slim_core::{PricingEntry, PricingTier, SlimConfig, UsageProfile};
use std::collections::BTreeMap;

use crate::config::DEFAULT_PRICING;
use crate::monthly_cost;
use crate::types::CostEstimate;

/// Read-only model id → price map. Passed to whoever needs prices.
#[derive(Debug, Clone, Default)]
pub struct PricingCatalog {
    entries: BTreeMap<String, PricingEntry>,
}

impl PricingCatalog {
    pub fn new(entries: impl IntoIterator<Item = PricingEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.model_id.clone(), e))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(DEFAULT_PRICING.iter().cloned())
    }

    /// Built-in prices with config entries layered on top (same id overrides).
    pub fn from_config(config: &SlimConfig) -> Self {
        let mut catalog = Self::builtin();
        for e in &config.pricing {
            if catalog.entries.contains_key(&e.model_id) {
                tracing::debug!(model = %e.model_id, "pricing overridden by config");
            }
            catalog.entries.insert(e.model_id.clone(), e.clone());
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &PricingEntry> {
        self.entries.values()
    }

    /// Exact id only. Dated or variant ids (`o1-pro`, `claude-sonnet-4-20250514`)
    /// are unknown unless listed in the catalog or config.
    pub fn get(&self, model_id: &str) -> Option<&PricingEntry> {
        self.entries.get(model_id)
    }

    /// Entries grouped by tier, cheapest input price first within a tier.
    pub fn by_tier(&self) -> BTreeMap<PricingTier, Vec<&PricingEntry>> {
        let mut groups: BTreeMap<PricingTier, Vec<&PricingEntry>> = BTreeMap::new();
        for e in self.entries.values() {
            groups.entry(e.tier).or_default().push(e);
        }
        for list in groups.values_mut() {
            list.sort_by(|a, b| a.input_per_mtok.total_cmp(&b.input_per_mtok));
        }
        groups
    }

    /// Monthly cost of sending `tokens_per_call` tokens. `None` for unknown models.
    pub fn monthly_cost(
        &self,
        model_id: &str,
        tokens_per_call: usize,
        usage: &UsageProfile,
    ) -> Option<f64> {
        let entry = self.get(model_id);
        if entry.is_none() {
            tracing::debug!(model = model_id, "no pricing for model");
        }
        entry.map(|e| {
            monthly_cost(
                tokens_per_call as u64,
                usage.calls_per_session,
                usage.sessions_per_week,
                e,
            )
        })
    }

    /// Before/after monthly cost for the given token counts.
    pub fn estimate(
        &self,
        model_id: &str,
        original_tokens: usize,
        compressed_tokens: usize,
        usage: &UsageProfile,
    ) -> Option<CostEstimate> {
        let entry = self.get(model_id)?;
        let cost = |tokens: usize| {
            monthly_cost(tokens as u64, usage.calls_per_session, usage.sessions_per_week, entry)
        };
        Some(CostEstimate {
            model_id: entry.model_id.clone(),
            tier: entry.tier,
            monthly_before: cost(original_tokens),
            monthly_after: cost(compressed_tokens),
        })
    }
}
