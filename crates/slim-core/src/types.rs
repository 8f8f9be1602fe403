use serde::{Deserialize, Serialize};
use std::fmt;

/// Text length in UTF-16 code units, the unit token estimates are based on.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// A text file handed to the compactor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocument {
    pub filename: String,
    pub content: String,
}

impl TextDocument {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Document without a filename hint. Only generic rules apply to it.
    pub fn anonymous(content: impl Into<String>) -> Self {
        Self::new(String::new(), content)
    }
}

/// Coarse price class of a model, used for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Free = 0,
    Budget = 1,
    Standard = 2,
    Premium = 3,
}

impl PricingTier {
    pub const ALL: [PricingTier; 4] = [Self::Free, Self::Budget, Self::Standard, Self::Premium];
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Free => "free",
            Self::Budget => "budget",
            Self::Standard => "standard",
            Self::Premium => "premium",
        };
        f.write_str(s)
    }
}

/// Per-model token prices, USD per million tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    pub model_id: String,
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
    pub tier: PricingTier,
}

impl PricingEntry {
    pub fn new(model_id: impl Into<String>, input: f64, output: f64, tier: PricingTier) -> Self {
        Self {
            model_id: model_id.into(),
            input_per_mtok: input,
            output_per_mtok: output,
            tier,
        }
    }
}

/// A filename-keyed block replacement.
///
/// `pattern` is a regex matched against the whole document; every match is
/// replaced by `replacement`, which may reference capture groups (`$1`, `$name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTemplate {
    pub filename: String,
    pub label: String,
    pub pattern: String,
    pub replacement: String,
}

impl BlockTemplate {
    pub fn new(
        filename: impl Into<String>,
        label: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            label: label.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// How often context files are sent to a model, for monthly cost projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageProfile {
    pub calls_per_session: u64,
    pub sessions_per_week: u64,
    pub model: String,
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self {
            calls_per_session: 20,
            sessions_per_week: 10,
            model: "claude-sonnet-4".into(),
        }
    }
}
