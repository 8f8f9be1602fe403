//! Report model shared by the console, JSON and HTML renderers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use slim_compactor::savings_percent;
use slim_core::UsageProfile;
use slim_pricing::{CostEstimate, PricingCatalog};

use crate::commands::FileAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RowStatus {
    Compressible,
    NoBenefit,
    Error(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub file: String,
    pub original_tokens: usize,
    pub compressed_tokens: usize,
    pub savings_percent: i64,
    pub potential: u32,
    pub rules_applied: Vec<String>,
    pub status: RowStatus,
}

impl ReportRow {
    /// Files without benefit are left as they are, so they save nothing.
    pub fn from_analysis(file: String, analysis: &FileAnalysis) -> Self {
        let r = &analysis.result;
        let (status, savings_percent) = if r.is_beneficial() {
            (RowStatus::Compressible, r.savings_percent)
        } else {
            (RowStatus::NoBenefit, 0)
        };
        Self {
            file,
            original_tokens: r.original_tokens,
            compressed_tokens: r.compressed_tokens,
            savings_percent,
            potential: analysis.potential,
            rules_applied: r.rules_applied.clone(),
            status,
        }
    }

    pub fn failed(file: String, error: impl ToString) -> Self {
        Self {
            file,
            original_tokens: 0,
            compressed_tokens: 0,
            savings_percent: 0,
            potential: 0,
            rules_applied: Vec::new(),
            status: RowStatus::Error(error.to_string()),
        }
    }

    /// Tokens that would be sent after compression. Files without benefit
    /// keep their original text.
    pub fn effective_tokens(&self) -> usize {
        match self.status {
            RowStatus::Compressible => self.compressed_tokens,
            _ => self.original_tokens,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub usage: UsageProfile,
    pub rows: Vec<ReportRow>,
    pub total_original: usize,
    pub total_compressed: usize,
    pub savings_percent: i64,
    /// `None` when the model has no price.
    pub cost: Option<CostEstimate>,
}

impl Report {
    pub fn build(
        rows: Vec<ReportRow>,
        model: &str,
        usage: &UsageProfile,
        catalog: &PricingCatalog,
    ) -> Self {
        let total_original: usize = rows.iter().map(|r| r.original_tokens).sum();
        let total_compressed: usize = rows.iter().map(|r| r.effective_tokens()).sum();
        let cost = catalog.estimate(model, total_original, total_compressed, usage);
        Self {
            generated_at: Utc::now(),
            model: model.to_string(),
            usage: usage.clone(),
            rows,
            total_original,
            total_compressed,
            savings_percent: savings_percent(total_original, total_compressed),
            cost,
        }
    }

    pub fn errors(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r.status, RowStatus::Error(_)))
            .count()
    }
}

/// `$1.23`, with more precision for sub-cent amounts; `unknown` when unpriced.
pub fn format_usd(amount: Option<f64>) -> String {
    match amount {
        None => "unknown".to_string(),
        Some(v) if v != 0.0 && v.abs() < 0.01 => format!("${v:.4}"),
        Some(v) => format!("${v:.2}"),
    }
}
