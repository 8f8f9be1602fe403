//! Workspace scan for compressible text files.

use slim_core::{DiscoveryConfig, Result, SlimError, TextDocument};
use std::path::{Path, PathBuf};

fn source_unavailable(path: &Path, e: impl std::fmt::Display) -> SlimError {
    SlimError::SourceUnavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// True when `name` is a candidate under `config`: allowed extension, not
/// hidden, not a backup artefact.
pub fn is_candidate(name: &str, config: &DiscoveryConfig) -> bool {
    if name.starts_with('.') {
        return false;
    }
    if config.exclude_suffixes.iter().any(|s| name.ends_with(s.as_str())) {
        return false;
    }
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

/// List candidate files directly inside `dir`, sorted by name.
pub fn discover(dir: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| source_unavailable(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| is_candidate(n, config))
        })
        .collect();
    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered files");
    Ok(files)
}

/// Read a file into a [`TextDocument`] named by its file name.
pub fn load(path: &Path) -> Result<TextDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| source_unavailable(path, e))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(TextDocument::new(filename, content))
}
