//! Shared types, configuration and errors for tokslim.

pub mod config;
pub mod error;
pub mod types;

pub use config::{DiscoveryConfig, SlimConfig, TemplatesMode};
pub use error::{Result, SlimError};
pub use types::{BlockTemplate, PricingEntry, PricingTier, TextDocument, UsageProfile, utf16_len};
