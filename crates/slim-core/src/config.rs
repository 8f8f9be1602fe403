use crate::error::{Result, SlimError};
use crate::types::{BlockTemplate, PricingEntry, UsageProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".tokslim.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlimConfig {
    /// Entries here override (by model id) or extend the built-in catalog.
    pub pricing: Vec<PricingEntry>,
    pub templates: Vec<BlockTemplate>,
    pub templates_mode: TemplatesMode,
    pub usage: UsageProfile,
    pub discovery: DiscoveryConfig,
}

/// Whether configured templates add to or replace the built-in table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplatesMode {
    #[default]
    Extend,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub extensions: Vec<String>,
    pub exclude_suffixes: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".into(), "txt".into()],
            exclude_suffixes: vec![".backup".into(), ".bak".into(), ".orig".into()],
        }
    }
}

impl SlimConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SlimError::Config(format!("read {}: {e}", path.display())))?;
        let config: SlimConfig = serde_json::from_str(&raw)
            .map_err(|e| SlimError::Config(format!("parse {}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            templates = config.templates.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Resolve config: explicit path, then workspace-local file, then the
    /// user config dir, then defaults. Only an explicit path is required to exist.
    pub fn resolve(explicit: Option<&Path>, workspace: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = workspace.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }
        if let Some(user) = user_config_path().filter(|p| p.is_file()) {
            return Self::load(&user);
        }
        Ok(Self::default())
    }
}

/// `~/.config/tokslim/config.json` (platform equivalent).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tokslim").join("config.json"))
}
