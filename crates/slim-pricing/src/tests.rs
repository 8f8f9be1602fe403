use crate::*;
use slim_core::{PricingEntry, PricingTier, SlimConfig, UsageProfile};

fn usage(calls: u64, sessions: u64) -> UsageProfile {
    UsageProfile {
        calls_per_session: calls,
        sessions_per_week: sessions,
        model: "claude-sonnet-4".into(),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ========== Cost arithmetic ==========

#[test]
fn test_monthly_cost_formula() {
    let m = PricingEntry::new("m", 3.0, 15.0, PricingTier::Standard);
    // 1000 * 10 * 5 * 4.33 = 216_500 tokens; * $3 / 1M
    assert!(close(monthly_cost(1000, 10, 5, &m), 0.6495));
}

#[test]
fn test_monthly_cost_zero_tokens() {
    let m = PricingEntry::new("m", 3.0, 15.0, PricingTier::Standard);
    assert_eq!(monthly_cost(0, 10, 5, &m), 0.0);
}

#[test]
fn test_free_model_costs_nothing() {
    let c = PricingCatalog::builtin();
    let cost = c.monthly_cost("llama-3.1-8b-local", 50_000, &usage(20, 10)).unwrap();
    assert_eq!(cost, 0.0);
}

// ========== Catalog ==========

#[test]
fn test_unknown_model_is_none() {
    let c = PricingCatalog::builtin();
    assert!(c.get("mystery-model").is_none());
    assert!(c.monthly_cost("mystery-model", 100, &usage(1, 1)).is_none());
    assert!(c.estimate("mystery-model", 100, 50, &usage(1, 1)).is_none());
}

#[test]
fn test_lookup_is_exact() {
    let c = PricingCatalog::builtin();
    assert_eq!(c.get("gpt-4o").unwrap().model_id, "gpt-4o");
    assert_eq!(c.get("gpt-4o-mini").unwrap().model_id, "gpt-4o-mini");
    // variants of a known id are not priced as that id
    assert!(c.get("o1-pro").is_none());
    assert!(c.get("gpt-4o-audio-preview").is_none());
    assert!(c.get("claude-sonnet-4-20250514").is_none());
    assert!(c.monthly_cost("o1-pro", 1000, &usage(20, 10)).is_none());
}

#[test]
fn test_config_alias_prices_variant() {
    let mut cfg = SlimConfig::default();
    let alias = "claude-sonnet-4-20250514";
    cfg.pricing.push(PricingEntry::new(alias, 3.0, 15.0, PricingTier::Standard));
    let c = PricingCatalog::from_config(&cfg);
    assert_eq!(c.get(alias).unwrap().input_per_mtok, 3.0);
}

#[test]
fn test_by_tier_groups_all() {
    let c = PricingCatalog::builtin();
    let groups = c.by_tier();
    let total: usize = groups.values().map(|g| g.len()).sum();
    assert_eq!(total, c.len());
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), PricingTier::ALL.to_vec());
    let budget = &groups[&PricingTier::Budget];
    assert_eq!(budget[0].model_id, "gpt-4o-mini");
}

#[test]
fn test_injected_catalog() {
    let c = PricingCatalog::new(vec![PricingEntry::new("fixed", 1.0, 2.0, PricingTier::Budget)]);
    assert_eq!(c.len(), 1);
    // 1M tokens * 1 * 1 * 4.33 * $1
    assert!(close(c.monthly_cost("fixed", 1_000_000, &usage(1, 1)).unwrap(), 4.33));
}

#[test]
fn test_config_overrides_and_extends() {
    let mut cfg = SlimConfig::default();
    cfg.pricing.push(PricingEntry::new("gpt-4o", 1.0, 4.0, PricingTier::Budget));
    cfg.pricing.push(PricingEntry::new("house-model", 0.5, 0.5, PricingTier::Budget));
    let c = PricingCatalog::from_config(&cfg);
    assert_eq!(c.len(), default_pricing().len() + 1);
    assert_eq!(c.get("gpt-4o").unwrap().input_per_mtok, 1.0);
    assert!(c.get("house-model").is_some());
}

#[test]
fn test_entries_sorted_by_id() {
    let c = PricingCatalog::builtin();
    let ids: Vec<&str> = c.entries().map(|e| e.model_id.as_str()).collect();
    assert_eq!(ids.len(), c.len());
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

// ========== Estimates ==========

#[test]
fn test_estimate_savings() {
    let c = PricingCatalog::new(vec![PricingEntry::new("m", 2.0, 8.0, PricingTier::Standard)]);
    let est = c.estimate("m", 500, 50, &usage(10, 10)).unwrap();
    // 500 * 100 * 4.33 * 2 / 1M = 0.433 ; 50 → 0.0433
    assert!(close(est.monthly_before, 0.433));
    assert!(close(est.monthly_after, 0.0433));
    assert!(close(est.monthly_savings(), 0.3897));
    assert!(close(est.yearly_savings(), 0.3897 * 12.0));
    assert_eq!(est.tier, PricingTier::Standard);
}

#[test]
fn test_estimate_serializes() {
    let c = PricingCatalog::builtin();
    let est = c.estimate("claude-opus-4", 1000, 800, &usage(1, 1)).unwrap();
    let json = serde_json::to_value(&est).unwrap();
    assert_eq!(json["tier"], "premium");
    assert_eq!(json["model_id"], "claude-opus-4");
}
