//! Snapshot exporter — прямые дети корня → snapshot
//!
//! One-shot утилита, независимая от синхронизатора: пишет тот же
//! канонический формат, который синхронизатор читает.

use crate::error::ExportError;
use crate::logger;
use crate::registry::SceneGraph;
use crate::snapshot::{Snapshot, SnapshotSink};

/// Собирает snapshot из прямых детей `root` (без рекурсии, в их порядке)
///
/// Дети без имени или позиции пропускаются.
pub fn export<S: SceneGraph>(scene: &S, root: &S::Handle) -> Result<Snapshot, ExportError> {
    let mut snapshot = Snapshot::default();

    for child in scene.children(root) {
        let (Some(name), Some(position)) = (scene.name(&child), scene.position(&child)) else {
            continue;
        };
        logger::log(&format!("Found child {} at {}", name, position));
        snapshot.push(name, position);
    }

    if snapshot.is_empty() {
        logger::log_warning("Export root has no children, snapshot not generated");
        return Err(ExportError::NothingToExport);
    }

    Ok(snapshot)
}

/// export + сериализация + запись в sink
///
/// На `NothingToExport` sink не трогается. Частичный файл при ошибке
/// записи не гарантируется и не чистится.
pub fn export_to<S: SceneGraph>(
    scene: &S,
    root: &S::Handle,
    sink: &impl SnapshotSink,
) -> Result<Snapshot, ExportError> {
    let snapshot = export(scene, root)?;
    let json = snapshot.to_json_pretty()?;

    if let Err(e) = sink.write(&json) {
        logger::log_error(&format!("❌ Export failed: {}", e));
        return Err(e);
    }

    logger::log_info(&format!(
        "Exported {} records to {}",
        snapshot.len(),
        sink.describe()
    ));

    Ok(snapshot)
}
