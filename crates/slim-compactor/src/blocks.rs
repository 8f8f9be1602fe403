//! File-specific block replacement driven by a template table.

use regex::Regex;
use slim_core::{BlockTemplate, Result, SlimConfig, SlimError, TemplatesMode};
use std::path::Path;
use std::sync::LazyLock;

use crate::templates::default_templates;
use crate::traits::Transform;

/// A compiled [`BlockTemplate`].
#[derive(Debug, Clone)]
pub struct BlockRule {
    pub filename: String,
    pub label: String,
    pub matcher: Regex,
    pub replacement: String,
}

impl BlockRule {
    pub fn compile(template: &BlockTemplate) -> Result<Self> {
        let matcher = Regex::new(&template.pattern).map_err(|e| SlimError::InvalidPattern {
            label: template.label.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            filename: template.filename.clone(),
            label: template.label.clone(),
            matcher,
            replacement: template.replacement.clone(),
        })
    }

    /// Case-insensitive comparison on the final path component.
    pub fn applies_to(&self, filename: &str) -> bool {
        base_name(filename).eq_ignore_ascii_case(&self.filename)
    }
}

impl Transform for BlockRule {
    fn label(&self) -> &str {
        &self.label
    }

    fn apply(&self, text: &str) -> String {
        self.matcher.replace_all(text, self.replacement.as_str()).into_owned()
    }
}

fn base_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

/// Ordered table of block rules for all known files.
#[derive(Debug, Clone, Default)]
pub struct BlockTable {
    rules: Vec<BlockRule>,
}

impl BlockTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile a template list. Fails on the first invalid pattern.
    pub fn compile(templates: &[BlockTemplate]) -> Result<Self> {
        let rules = templates
            .iter()
            .map(BlockRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn builtin() -> Self {
        BUILTIN_TABLE.clone()
    }

    /// Built-in templates extended or replaced by the configured ones.
    pub fn from_config(config: &SlimConfig) -> Result<Self> {
        let mut templates = match config.templates_mode {
            TemplatesMode::Extend => default_templates(),
            TemplatesMode::Replace => Vec::new(),
        };
        templates.extend(config.templates.iter().cloned());
        Self::compile(&templates)
    }

    pub fn rules(&self) -> &[BlockRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn has_templates_for(&self, filename: &str) -> bool {
        !filename.is_empty() && self.rules.iter().any(|r| r.applies_to(filename))
    }

    /// Apply every rule keyed to `filename`, returning the new text and the
    /// labels of the rules that changed it. Unmatched blocks are left as is.
    pub fn apply(&self, text: &str, filename: &str) -> (String, Vec<String>) {
        let mut result = text.to_string();
        let mut hits = Vec::new();
        for rule in self.rules.iter().filter(|r| r.applies_to(filename)) {
            let next = rule.apply(&result);
            if next != result {
                tracing::debug!(file = filename, template = %rule.label, "block template matched");
                hits.push(rule.label.clone());
                result = next;
            }
        }
        (result, hits)
    }
}

static BUILTIN_TABLE: LazyLock<BlockTable> = LazyLock::new(|| {
    BlockTable::compile(&default_templates()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in block templates failed to compile");
        BlockTable::empty()
    })
});

/// Apply the built-in block templates for `filename` to `text`.
pub fn apply_file_specific_blocks(text: &str, filename: &str) -> String {
    BUILTIN_TABLE.apply(text, filename).0
}
