//! CLI command definitions and shared workspace state.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slim_compactor::{assess_compression_potential, Compactor, CompressionResult};
use slim_core::{SlimConfig, SlimError};
use slim_pricing::PricingCatalog;
use std::path::{Path, PathBuf};

pub mod compress;
pub mod models;
pub mod persist;
pub mod report;
pub mod revert;
pub mod rules;
pub mod scan;

#[derive(Parser)]
#[command(name = "tokslim", version, about = "Estimate, shrink and price agent context files")]
pub struct Cli {
    /// Workspace directory holding the context files (default: current directory)
    #[arg(long, global = true, env = "TOKSLIM_DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (default: <dir>/.tokslim.json, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show token counts, compression potential and monthly cost per file
    Scan,

    /// Compress files in place, keeping a .backup of each original
    Compress {
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
        /// Only this file (name inside the workspace)
        #[arg(long)]
        file: Option<String>,
    },

    /// Restore files from their .backup siblings
    Revert {
        /// Only this file (name inside the workspace)
        #[arg(long)]
        file: Option<String>,
    },

    /// Savings report without touching any file
    Report {
        /// Also write an HTML report to this path
        #[arg(long)]
        html: Option<PathBuf>,
        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Price against this model instead of the configured one
        #[arg(long)]
        model: Option<String>,
    },

    /// List the pricing catalog by tier
    Models,

    /// List rewrite rules and block templates in application order
    Rules,

    /// Append the compact-notation guide to AGENTS.md
    Persist,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let ws = Workspace::open(self.dir, self.config.as_deref())?;
        match self.command {
            Commands::Scan => scan::execute(&ws),
            Commands::Compress { dry_run, file } => {
                compress::execute(&ws, dry_run, file.as_deref())
            }
            Commands::Revert { file } => revert::execute(&ws, file.as_deref()),
            Commands::Report { html, json, model } => {
                report::execute(&ws, html.as_deref(), json, model.as_deref())
            }
            Commands::Models => models::execute(&ws),
            Commands::Rules => rules::execute(&ws),
            Commands::Persist => persist::execute(&ws),
        }
    }
}

/// Everything a command needs: where the files are and how to process them.
pub struct Workspace {
    pub dir: PathBuf,
    pub config: SlimConfig,
    pub compactor: Compactor,
    pub catalog: PricingCatalog,
}

impl Workspace {
    pub fn open(dir: Option<PathBuf>, config: Option<&Path>) -> Result<Self> {
        let dir = match dir {
            Some(d) => d,
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };
        let config = SlimConfig::resolve(config, &dir).context("Failed to load config")?;
        let compactor = Compactor::from_config(&config).context("Invalid block template")?;
        let catalog = PricingCatalog::from_config(&config);
        tracing::debug!(
            dir = %dir.display(),
            templates = compactor.blocks().len(),
            models = catalog.len(),
            "workspace ready"
        );
        Ok(Self {
            dir,
            config,
            compactor,
            catalog,
        })
    }

    /// Discovered files, or just `only` when given.
    pub fn files(&self, only: Option<&str>) -> Result<Vec<PathBuf>> {
        let files = slim_storage::discover(&self.dir, &self.config.discovery)
            .with_context(|| format!("Failed to scan {}", self.dir.display()))?;
        match only {
            None => Ok(files),
            Some(name) => {
                let picked: Vec<PathBuf> = files
                    .into_iter()
                    .filter(|p| p.file_name().is_some_and(|n| n == name))
                    .collect();
                if picked.is_empty() {
                    bail!("{name} is not a context file in {}", self.dir.display());
                }
                Ok(picked)
            }
        }
    }

    /// Load and compress one file in memory.
    pub fn analyze(&self, path: &Path) -> std::result::Result<FileAnalysis, SlimError> {
        let doc = slim_storage::load(path)?;
        let potential = assess_compression_potential(&doc.content);
        let result = self.compactor.compress(&doc);
        Ok(FileAnalysis {
            path: path.to_path_buf(),
            potential,
            result,
        })
    }
}

pub struct FileAnalysis {
    pub path: PathBuf,
    pub potential: u32,
    pub result: CompressionResult,
}

/// Display name of a workspace file.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Workspace over `dir` with an empty config file, so the user config dir is
/// never consulted.
#[cfg(test)]
pub(crate) fn isolated_workspace(dir: &Path) -> Workspace {
    let config = dir.join(slim_core::config::LOCAL_CONFIG_FILE);
    std::fs::write(&config, "{}").unwrap();
    Workspace::open(Some(dir.to_path_buf()), Some(&config)).unwrap()
}
