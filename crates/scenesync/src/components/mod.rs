//! ECS компоненты и value-типы сцены
//!
//! - position: Position (value-тип x/y/z, общий для snapshot и Transform)
//! - scene: Hidden, PrefabPath, ExportRoot, ExportPath

pub mod position;
pub mod scene;

pub use position::*;
pub use scene::*;
