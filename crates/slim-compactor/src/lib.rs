//! Tokslim compactor: heuristic token estimation and rule-based rewriting.
//!
//! Pipeline:
//! 1. Block templates keyed by filename (MEMORY.md, USER.md, AGENTS.md by default)
//! 2. Generic rules: conditionals, goals, directives, politeness, fillers,
//!    bullets, headers, blank lines
//!
//! Tokens are estimated before and after as `ceil(len / 4)`.

pub mod blocks;
pub mod estimator;
pub mod pipeline;
pub mod rules;
pub mod templates;
pub mod traits;

pub use blocks::{apply_file_specific_blocks, BlockRule, BlockTable};
pub use estimator::{
    approximate_token_count, assess_compression_potential, CharHeuristic, PotentialBreakdown,
};
pub use pipeline::{compress, savings_percent, Compactor, CompressionResult};
pub use rules::{apply_generic_rules, CompressionRule, Replacement};
pub use traits::{TokenEstimator, Transform};

#[cfg(test)]
mod tests;
