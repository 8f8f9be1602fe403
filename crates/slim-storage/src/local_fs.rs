//! Guarded writes with `.backup` siblings, and restore from them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use slim_core::{utf16_len, Result, SlimError};
use std::path::{Path, PathBuf};

pub const BACKUP_SUFFIX: &str = ".backup";

/// `<file>.backup` next to `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

fn storage_err(op: &str, path: &Path, e: std::io::Error) -> SlimError {
    SlimError::Storage(format!("{op} {}: {e}", path.display()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WriteOutcome {
    Written { backup: PathBuf },
    /// Compressed text was not strictly shorter; nothing touched.
    NoBenefit,
    /// Would have written; dry run.
    DryRun,
}

/// Replace `path` with `compressed` if it is strictly shorter than `original`.
///
/// The original is copied to the backup first. An existing backup is kept
/// as is, since it holds the pristine pre-compression text.
pub fn write_compressed(
    path: &Path,
    original: &str,
    compressed: &str,
    dry_run: bool,
) -> Result<WriteOutcome> {
    if utf16_len(compressed) >= utf16_len(original) {
        tracing::debug!(file = %path.display(), "no compression benefit, leaving file untouched");
        return Ok(WriteOutcome::NoBenefit);
    }
    if dry_run {
        return Ok(WriteOutcome::DryRun);
    }

    let backup = backup_path(path);
    if backup.exists() {
        tracing::debug!(backup = %backup.display(), "keeping existing backup");
    } else {
        std::fs::write(&backup, original).map_err(|e| storage_err("backup", &backup, e))?;
    }
    std::fs::write(path, compressed).map_err(|e| storage_err("write", path, e))?;
    tracing::info!(file = %path.display(), backup = %backup.display(), "wrote compressed file");
    Ok(WriteOutcome::Written { backup })
}

/// Copy the backup over `path` and delete the backup.
pub fn restore(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    if !backup.is_file() {
        return Err(SlimError::NoBackup {
            path: path.display().to_string(),
        });
    }
    std::fs::copy(&backup, path).map_err(|e| storage_err("restore", path, e))?;
    std::fs::remove_file(&backup).map_err(|e| storage_err("remove", &backup, e))?;
    tracing::info!(file = %path.display(), "restored from backup");
    Ok(backup)
}

/// A file with a backup next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupEntry {
    pub file: PathBuf,
    pub backup: PathBuf,
    pub backed_up_at: Option<DateTime<Utc>>,
}

/// All `*.backup` files in `dir`, paired with the file they restore to.
pub fn list_backups(dir: &Path) -> Result<Vec<BackupEntry>> {
    let entries = std::fs::read_dir(dir).map_err(|e| storage_err("list", dir, e))?;
    let mut backups: Vec<BackupEntry> = entries
        .flatten()
        .filter_map(|entry| {
            let backup = entry.path();
            let name = backup.file_name()?.to_str()?.to_string();
            let original = name.strip_suffix(BACKUP_SUFFIX).filter(|n| !n.is_empty())?;
            let backed_up_at = entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            Some(BackupEntry {
                file: dir.join(original),
                backup,
                backed_up_at,
            })
        })
        .collect();
    backups.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(backups)
}
