//! Seams of the compaction engine.

/// Maps text to an approximate token count.
pub trait TokenEstimator: Send + Sync {
    fn name(&self) -> &str;
    fn count(&self, text: &str) -> usize;
}

/// One step of the rewrite pipeline: a pure text-to-text function.
pub trait Transform: Send + Sync {
    fn label(&self) -> &str;
    fn apply(&self, text: &str) -> String;
}
