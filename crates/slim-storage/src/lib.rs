//! Tokslim storage: workspace file discovery and backup/restore.

pub mod discovery;
pub mod local_fs;

pub use discovery::{discover, load};
pub use local_fs::{backup_path, list_backups, restore, write_compressed, BackupEntry, WriteOutcome};
