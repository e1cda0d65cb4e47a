//! World → SceneGraph (handle = Entity)
//!
//! Имя — `Name`, позиция — `Transform::translation`, дети — `Children`.

use bevy::prelude::*;

use crate::components::{Hidden, Position};
use crate::registry::SceneGraph;

impl SceneGraph for World {
    type Handle = Entity;

    fn visible_entities(&mut self) -> Vec<(String, Entity)> {
        let mut query = self.query_filtered::<(Entity, &Name), Without<Hidden>>();
        let mut found: Vec<(String, Entity)> = query
            .iter(self)
            .map(|(entity, name)| (name.as_str().to_string(), entity))
            .collect();

        // Порядок спавна — детерминированный "last wins" для дубликатов
        found.sort_by_key(|(_, entity)| entity.index());
        found
    }

    fn name(&self, handle: &Entity) -> Option<String> {
        self.get::<Name>(*handle).map(|name| name.as_str().to_string())
    }

    fn position(&self, handle: &Entity) -> Option<Position> {
        self.get::<Transform>(*handle)
            .map(|transform| transform.translation.into())
    }

    fn set_position(&mut self, handle: &Entity, position: Position) -> bool {
        let Ok(mut entity) = self.get_entity_mut(*handle) else {
            return false;
        };

        if entity.contains::<Transform>() {
            if let Some(mut transform) = entity.get_mut::<Transform>() {
                transform.translation = position.into();
            }
        } else {
            entity.insert(Transform::from_translation(position.into()));
        }

        true
    }

    fn rename(&mut self, handle: &Entity, name: &str) {
        if let Ok(mut entity) = self.get_entity_mut(*handle) {
            entity.insert(Name::new(name.to_string()));
        }
    }

    fn children(&self, handle: &Entity) -> Vec<Entity> {
        self.get::<Children>(*handle)
            .map(|children| children.to_vec())
            .unwrap_or_default()
    }
}
