//! Compression pipeline: block templates, then the generic rules.

use serde::Serialize;
use slim_core::{utf16_len, Result, SlimConfig, TextDocument};
use std::sync::LazyLock;

use crate::blocks::BlockTable;
use crate::estimator::CharHeuristic;
use crate::rules::default_rules;
use crate::traits::{TokenEstimator, Transform};

/// Outcome of compressing one document.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    pub filename: String,
    pub original_tokens: usize,
    pub compressed_tokens: usize,
    pub original_text: String,
    pub compressed_text: String,
    pub savings_percent: i64,
    pub rules_applied: Vec<String>,
}

impl CompressionResult {
    /// Negative when the rewrite lengthened the text.
    pub fn tokens_saved(&self) -> i64 {
        self.original_tokens as i64 - self.compressed_tokens as i64
    }

    /// True only if the compressed text is strictly shorter.
    pub fn is_beneficial(&self) -> bool {
        utf16_len(&self.compressed_text) < utf16_len(&self.original_text)
    }
}

/// `round((original - compressed) / original * 100)`, half rounding up.
/// Zero original tokens yields 0.
pub fn savings_percent(original_tokens: usize, compressed_tokens: usize) -> i64 {
    if original_tokens == 0 {
        return 0;
    }
    let pct = (original_tokens as f64 - compressed_tokens as f64) / original_tokens as f64 * 100.0;
    (pct + 0.5).floor() as i64
}

/// The compactor: an estimator, a block table and an ordered rule list.
pub struct Compactor {
    estimator: Box<dyn TokenEstimator>,
    blocks: BlockTable,
    rules: Vec<Box<dyn Transform>>,
}

impl Compactor {
    pub fn new(blocks: BlockTable) -> Self {
        let rules = default_rules()
            .into_iter()
            .map(|r| Box::new(r) as Box<dyn Transform>)
            .collect();
        Self {
            estimator: Box::new(CharHeuristic),
            blocks,
            rules,
        }
    }

    pub fn builtin() -> Self {
        Self::new(BlockTable::builtin())
    }

    pub fn from_config(config: &SlimConfig) -> Result<Self> {
        Ok(Self::new(BlockTable::from_config(config)?))
    }

    pub fn with_estimator(mut self, estimator: Box<dyn TokenEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    /// Append a transform after the built-in rules.
    pub fn with_rule(mut self, rule: Box<dyn Transform>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn estimator(&self) -> &dyn TokenEstimator {
        self.estimator.as_ref()
    }

    pub fn blocks(&self) -> &BlockTable {
        &self.blocks
    }

    pub fn rule_labels(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.label()).collect()
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        self.estimator.count(text)
    }

    /// Compress a document. Never fails; the worst case is an unchanged text.
    pub fn compress(&self, doc: &TextDocument) -> CompressionResult {
        let original_tokens = self.estimator.count(&doc.content);
        let mut text = doc.content.clone();
        let mut applied = Vec::new();

        if self.blocks.has_templates_for(&doc.filename) {
            let (replaced, hits) = self.blocks.apply(&text, &doc.filename);
            text = replaced;
            applied.extend(hits);
        }

        for rule in &self.rules {
            let next = rule.apply(&text);
            if next != text {
                tracing::debug!(file = %doc.filename, rule = rule.label(), "rule applied");
                applied.push(rule.label().to_string());
                text = next;
            }
        }

        let compressed_tokens = self.estimator.count(&text);
        CompressionResult {
            filename: doc.filename.clone(),
            original_tokens,
            compressed_tokens,
            original_text: doc.content.clone(),
            compressed_text: text,
            savings_percent: savings_percent(original_tokens, compressed_tokens),
            rules_applied: applied,
        }
    }

    pub fn compress_text(&self, text: &str) -> CompressionResult {
        self.compress(&TextDocument::anonymous(text))
    }
}

impl Default for Compactor {
    fn default() -> Self {
        Self::builtin()
    }
}

static DEFAULT_COMPACTOR: LazyLock<Compactor> = LazyLock::new(Compactor::builtin);

/// Compress with the built-in rules and templates.
pub fn compress(doc: &TextDocument) -> CompressionResult {
    DEFAULT_COMPACTOR.compress(doc)
}
