//! Position — мировая позиция сущности (x, y, z)

use bevy::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Позиция в мировых координатах
///
/// Value-тип без identity. Отсутствующие в JSON оси читаются как 0.0,
/// значения вне диапазона f32 — ошибка разбора.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "finite_axis")]
    pub x: f32,
    #[serde(default, deserialize_with = "finite_axis")]
    pub y: f32,
    #[serde(default, deserialize_with = "finite_axis")]
    pub z: f32,
}

/// Ось читается как f64 и сужается до f32 только если значение конечно
fn finite_axis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value.abs() > f64::from(f32::MAX) {
        return Err(D::Error::custom(format!(
            "coordinate {} is outside f32 range",
            value
        )));
    }
    Ok(value as f32)
}

impl Position {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position> for Vec3 {
    fn from(p: Position) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
