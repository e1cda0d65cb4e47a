//! Конфигурация синхронизации (Resource)

use bevy::prelude::*;
use std::path::PathBuf;

use crate::logger::LogLevel;

/// Snapshot, который синхронизатор читает каждый кадр
pub const DEFAULT_SNAPSHOT_PATH: &str = "assets/streaming/generate.json";
/// Куда экспортёр пишет позиции детей ExportRoot
pub const DEFAULT_EXPORT_PATH: &str = "assets/streaming/components.json";

pub const SNAPSHOT_PATH_ENV: &str = "SCENESYNC_SNAPSHOT_PATH";
pub const EXPORT_PATH_ENV: &str = "SCENESYNC_EXPORT_PATH";

#[derive(Resource, Debug, Clone)]
pub struct SnapshotConfig {
    pub snapshot_path: PathBuf,
    pub export_path: PathBuf,
    /// false — PostUpdate система синхронизации ничего не делает
    pub sync_enabled: bool,
    pub log_level: LogLevel,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            sync_enabled: true,
            log_level: LogLevel::Debug,
        }
    }
}

impl SnapshotConfig {
    /// Defaults + пути из env (`SCENESYNC_SNAPSHOT_PATH`, `SCENESYNC_EXPORT_PATH`)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(SNAPSHOT_PATH_ENV) {
            config.snapshot_path = PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os(EXPORT_PATH_ENV) {
            config.export_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = path.into();
        self
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
