//! Маркеры сцены: Hidden, ExportRoot, ExportPath, PrefabPath

use bevy::prelude::*;

/// Скрытая сущность (editor-only, служебные ноды)
///
/// Registry builder такие сущности не видит — их нельзя двигать из snapshot.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Hidden;

/// Корень для экспорта: прямые дети сериализуются в snapshot на старте
///
/// Экспортируется каждый корень. Без `ExportPath` пишет в
/// `SnapshotConfig::export_path`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ExportRoot;

/// Собственный файл экспорта для конкретного ExportRoot
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ExportPath {
    pub path: String,
}

impl ExportPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Путь prefab-шаблона, из которого создана сущность
///
/// Ставится только на сущности, созданные через PrefabCatalog.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PrefabPath {
    pub path: String,
}

impl PrefabPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
