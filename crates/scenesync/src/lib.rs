//! SceneSync
//!
//! Синхронизация живой сцены с декларативным snapshot-ом именованных позиций.
//!
//! - registry: полный скан сцены на старте → имя → handle
//! - sync: каждый тик читает snapshot, двигает известные сущности,
//!   неизвестные создаёт из PrefabCatalog
//! - export: one-shot выгрузка позиций детей корня в тот же формат
//!
//! Ядро (registry/sync/export) не знает про Bevy: сцена — trait `SceneGraph`.
//! Модуль `ecs` подключает ядро к Bevy World через `SceneSyncPlugin`.

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod export;
pub mod logger;
pub mod registry;
pub mod snapshot;
pub mod sync;

pub use components::*;
pub use config::SnapshotConfig;
pub use ecs::{
    build_entity_registry, export_marked_roots, sync_snapshot_system, EntityRegistry, Prefab,
    PrefabCatalog, SyncStatus,
};
pub use error::{ExportError, SnapshotError};
pub use export::{export, export_to};
pub use logger::{init_logger, LogLevel, LogPrinter};
pub use registry::{build_registry, Registry, SceneGraph};
pub use snapshot::{parse_snapshot, FileSink, FileSource, Snapshot, SnapshotRecord};
pub use sync::{apply_snapshot, sync, FactoryCatalog, SyncOutcome, SyncReport};

/// Plugin синхронизации сцены
///
/// Ресурсы (`SnapshotConfig`, `PrefabCatalog`) можно вставить до plugin-а —
/// `init_resource` их не перезапишет.
pub struct SceneSyncPlugin;

impl Plugin for SceneSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SnapshotConfig>()
            .init_resource::<PrefabCatalog>()
            .init_resource::<EntityRegistry>()
            .init_resource::<SyncStatus>()
            // Registry строится после Startup, когда host уже заспавнил сцену
            .add_systems(PostStartup, (build_entity_registry, export_marked_roots).chain())
            // Late update: после gameplay систем текущего кадра
            .add_systems(PostUpdate, sync_snapshot_system);

        if let Some(config) = app.world().get_resource::<SnapshotConfig>() {
            logger::set_log_level(config.log_level);
        }
    }
}

/// Создаёт minimal Bevy App для headless запуска (без рендера)
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins);

    app
}
