//! PrefabCatalog — шаблоны сущностей по имени

use bevy::prelude::*;
use std::collections::HashMap;

use crate::components::PrefabPath;
use crate::sync::FactoryCatalog;

/// Каталог prefab-ов по умолчанию ищет шаблоны здесь
pub const DEFAULT_PREFAB_DIR: &str = "Prefabs";

/// Шаблон сущности
///
/// Инстанс получает `default_name` (как движковый клон "Cube(Clone)"),
/// синхронизатор потом переименовывает его под имя из snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefab {
    pub path: String,
    pub default_name: String,
    pub scale: Vec3,
}

impl Prefab {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let stem = path
            .rsplit('/')
            .next()
            .and_then(|file| file.split('.').next())
            .unwrap_or_default();
        let default_name = format!("{}(Clone)", stem);

        Self {
            path,
            default_name,
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Read-only каталог шаблонов (Resource)
#[derive(Resource, Debug, Clone, Default)]
pub struct PrefabCatalog {
    prefabs: HashMap<String, Prefab>,
}

impl PrefabCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, prefab: Prefab) {
        self.prefabs.insert(name.into(), prefab);
    }

    /// Регистрирует шаблон по конвенции `Prefabs/<name>`
    pub fn with_prefab(mut self, name: &str) -> Self {
        self.register(name, Prefab::new(format!("{}/{}", DEFAULT_PREFAB_DIR, name)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Prefab> {
        self.prefabs.get(name)
    }

    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }
}

impl FactoryCatalog<World> for PrefabCatalog {
    fn instantiate(&self, world: &mut World, name: &str) -> Option<Entity> {
        let prefab = self.get(name)?;

        let entity = world
            .spawn((
                Name::new(prefab.default_name.clone()),
                Transform::from_scale(prefab.scale),
                PrefabPath::new(prefab.path.clone()),
            ))
            .id();

        Some(entity)
    }
}
