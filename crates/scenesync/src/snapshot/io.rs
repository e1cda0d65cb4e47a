//! Источник и приёмник snapshot (файл)

use crate::error::{ExportError, SnapshotError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Откуда синхронизатор читает snapshot
pub trait SnapshotSource {
    /// `Ok(None)` — источника нет (штатное состояние, появится позже)
    fn read(&self) -> Result<Option<String>, SnapshotError>;

    /// Человекочитаемое описание для логов
    fn describe(&self) -> String;
}

/// Куда экспортёр пишет snapshot
pub trait SnapshotSink {
    fn write(&self, content: &str) -> Result<(), ExportError>;

    fn describe(&self) -> String;
}

/// Snapshot-файл на диске
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl SnapshotSource for FileSource {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SnapshotError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Запись snapshot в файл; недостающие директории создаются
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSink for FileSink {
    fn write(&self, content: &str) -> Result<(), ExportError> {
        let write_error = |source: std::io::Error| ExportError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(write_error)?;
                crate::logger::log_info(&format!("Created directory {}", parent.display()));
            }
        }

        fs::write(&self.path, content).map_err(write_error)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
