//! Ошибки чтения/записи snapshot
//!
//! Recoverable-исходы синхронизации (SourceMissing, EmptySnapshot, UnknownName)
//! ошибками не являются и живут в `SyncOutcome`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Ошибка чтения или разбора snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ошибка экспорта snapshot
#[derive(Debug, Error)]
pub enum ExportError {
    /// У корня нет детей — файл не пишется
    #[error("export root has no children, nothing to export")]
    NothingToExport,

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write snapshot {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
