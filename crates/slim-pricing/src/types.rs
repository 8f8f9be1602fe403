use serde::Serialize;
use slim_core::PricingTier;

/// Monthly cost of one token count versus another for a single model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub model_id: String,
    pub tier: PricingTier,
    pub monthly_before: f64,
    pub monthly_after: f64,
}

impl CostEstimate {
    pub fn monthly_savings(&self) -> f64 {
        self.monthly_before - self.monthly_after
    }

    pub fn yearly_savings(&self) -> f64 {
        self.monthly_savings() * 12.0
    }
}
