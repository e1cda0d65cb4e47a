//! Registry builder — маппинг имя → handle живой сущности
//!
//! Строится один раз на старте полным сканом сцены, дальше только
//! пополняется синхронизатором (удалений нет).

use crate::components::Position;
use crate::logger;
use std::collections::HashMap;

/// Возможности host-сцены, которые нужны registry/sync/export
///
/// Handle — ссылка на живую сущность (в ECS это `Entity`).
pub trait SceneGraph {
    type Handle: Clone;

    /// Все живые видимые (не Hidden) именованные сущности
    fn visible_entities(&mut self) -> Vec<(String, Self::Handle)>;

    fn name(&self, handle: &Self::Handle) -> Option<String>;

    fn position(&self, handle: &Self::Handle) -> Option<Position>;

    /// Перезаписывает позицию на месте. `false` если handle мёртв.
    fn set_position(&mut self, handle: &Self::Handle, position: Position) -> bool;

    fn rename(&mut self, handle: &Self::Handle, name: &str);

    /// Прямые дети в их текущем порядке (один уровень)
    fn children(&self, handle: &Self::Handle) -> Vec<Self::Handle>;
}

/// Registry: имя → handle
///
/// Инвариант: ключ совпадает с именем сущности.
#[derive(Debug, Clone)]
pub struct Registry<H> {
    handles: HashMap<String, H>,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> Registry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Вставка с перезаписью (last writer wins). Возвращает старый handle.
    pub fn insert(&mut self, name: impl Into<String>, handle: H) -> Option<H> {
        self.handles.insert(name.into(), handle)
    }

    pub fn get(&self, name: &str) -> Option<&H> {
        self.handles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.handles.iter().map(|(name, handle)| (name.as_str(), handle))
    }

    /// Имена в алфавитном порядке (стабильный вывод для логов/тестов)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Полный скан сцены → Registry
///
/// Hidden-сущности отфильтрованы самой сценой. Дубликат имени
/// перезаписывает предыдущую запись.
pub fn build_registry<S: SceneGraph>(scene: &mut S) -> Registry<S::Handle> {
    let mut registry = Registry::new();

    for (name, handle) in scene.visible_entities() {
        if registry.insert(name.clone(), handle).is_some() {
            logger::log_warning(&format!(
                "Duplicate entity name '{}' in scene, last one wins",
                name
            ));
        }
    }

    logger::log_info(&format!(
        "Registry initialised: {} entities found",
        registry.len()
    ));
    for name in registry.names() {
        if let Some(position) = registry.get(name).and_then(|h| scene.position(h)) {
            logger::log(&format!("  → {} at {}", name, position));
        }
    }

    registry
}
