//! Bevy ECS host: World как SceneGraph, PrefabCatalog, ресурсы и системы
//!
//! Все системы exclusive (`&mut World`): registry/sync/export работают
//! через SceneGraph поверх World, а не через отдельные Query.

mod prefab;
mod resources;
mod systems;
mod world;

pub use prefab::*;
pub use resources::*;
pub use systems::*;
