//! Системы синхронизации
//!
//! Порядок:
//! 1. PostStartup: build_entity_registry → export_marked_roots
//! 2. PostUpdate (каждый кадр, после gameplay систем): sync_snapshot_system

use bevy::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

use super::{EntityRegistry, PrefabCatalog, SyncStatus};
use crate::components::{ExportPath, ExportRoot};
use crate::config::SnapshotConfig;
use crate::export::export_to;
use crate::logger;
use crate::registry::build_registry;
use crate::snapshot::{FileSink, FileSource};
use crate::sync::sync;

/// Полный скан сцены → EntityRegistry (один раз на старте)
pub fn build_entity_registry(world: &mut World) {
    let registry = build_registry(world);
    world.insert_resource(EntityRegistry(registry));

    let source = FileSource::new(world.resource::<SnapshotConfig>().snapshot_path.clone());
    if !source.exists() {
        logger::log_warning(&format!(
            "Snapshot not found yet: {}",
            source.path().display()
        ));
    }
}

/// Экспорт детей каждого ExportRoot
///
/// Файл — `ExportPath` корня либо `SnapshotConfig::export_path`. Корни с
/// общим файлом пишут по очереди (порядок спавна), последний перезаписывает.
pub fn export_marked_roots(world: &mut World) {
    let default_path = world.resource::<SnapshotConfig>().export_path.clone();

    let mut roots: Vec<(Entity, FileSink)> = world
        .query_filtered::<(Entity, Option<&ExportPath>), With<ExportRoot>>()
        .iter(world)
        .map(|(root, path)| {
            let sink = match path {
                Some(path) => FileSink::new(&path.path),
                None => FileSink::new(&default_path),
            };
            (root, sink)
        })
        .collect();
    roots.sort_by_key(|(root, _)| root.index());

    let mut written: HashSet<PathBuf> = HashSet::new();
    let mut exports = Vec::with_capacity(roots.len());

    for (root, sink) in roots {
        if !written.insert(sink.path().to_path_buf()) {
            logger::log_warning(&format!(
                "ExportRoot {:?} shares {} with another root, overwriting",
                root,
                sink.path().display()
            ));
        }
        logger::log_info(&format!("Exporting children of {:?} to {}", root, sink.path().display()));

        let result = export_to(&*world, &root, &sink)
            .map(|snapshot| snapshot.len())
            .map_err(|e| e.to_string());
        exports.push((root, result));
    }

    world.resource_mut::<SyncStatus>().exports = exports;
}

/// Один тик синхронизации (аналог late update)
pub fn sync_snapshot_system(world: &mut World) {
    let (snapshot_path, enabled) = {
        let config = world.resource::<SnapshotConfig>();
        (config.snapshot_path.clone(), config.sync_enabled)
    };
    if !enabled {
        return;
    }

    let source = FileSource::new(snapshot_path);

    let outcome = world.resource_scope(|world, mut registry: Mut<EntityRegistry>| {
        world.resource_scope(|world, catalog: Mut<PrefabCatalog>| {
            sync(&mut registry.0, world, &source, &*catalog)
        })
    });

    world.resource_mut::<SyncStatus>().record(outcome);
}
