//! Snapshot — упорядоченный список именованных позиций
//!
//! Канонический формат (вход синхронизатора и выход экспортёра):
//! `{"objects": [{"name": "...", "position": {"x": 0, "y": 0, "z": 0}}]}`

mod io;

pub use io::*;

use crate::components::Position;
use crate::error::SnapshotError;
use crate::logger;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ключ списка записей в каноническом документе
const OBJECTS_KEY: &str = "objects";

/// Одна запись snapshot: имя сущности + позиция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub name: String,
    #[serde(default, deserialize_with = "position_or_origin")]
    pub position: Position,
}

/// `"position": null` читается как начало координат, как и отсутствующее поле
fn position_or_origin<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Position, D::Error> {
    Ok(Option::<Position>::deserialize(deserializer)?.unwrap_or_default())
}

impl SnapshotRecord {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Snapshot сцены
///
/// Уникальность имён не проверяется: дубликаты применяются по порядку,
/// последний выигрывает.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Snapshot {
    #[serde(rename = "objects")]
    pub records: Vec<SnapshotRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<SnapshotRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn push(&mut self, name: impl Into<String>, position: Position) {
        self.records.push(SnapshotRecord::new(name, position));
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Разбирает текст snapshot
///
/// `Ok(None)` — пустой snapshot: пустой/пробельный текст, `null`,
/// отсутствующий/`null`/пустой `objects`. Документ, записи и `position`
/// обязаны быть JSON-объектами; любая другая форма — ошибка разбора.
pub fn parse_snapshot(content: &str) -> Result<Option<Snapshot>, SnapshotError> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let document = match serde_json::from_str::<Value>(content)? {
        Value::Null => return Ok(None),
        Value::Object(document) => document,
        other => return Err(shape_error(format!("snapshot must be an object, got {}", kind_of(&other)))),
    };

    for key in document.keys().filter(|key| key.as_str() != OBJECTS_KEY) {
        logger::log_warning(&format!("Unrecognised snapshot key '{}' ignored", key));
    }

    let records = match document.get(OBJECTS_KEY) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(records)) => records,
        Some(other) => {
            return Err(shape_error(format!("'objects' must be an array, got {}", kind_of(other))))
        }
    };

    let mut snapshot = Snapshot::default();
    for (index, record) in records.iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(shape_error(format!("record {} must be an object, got {}", index, kind_of(record))));
        };
        match fields.get("position") {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(other) => {
                return Err(shape_error(format!(
                    "record {}: 'position' must be an object, got {}",
                    index,
                    kind_of(other)
                )))
            }
        }
        let record: SnapshotRecord = serde_json::from_value(record.clone())?;
        snapshot.records.push(record);
    }

    Ok((!snapshot.is_empty()).then_some(snapshot))
}

fn shape_error(message: String) -> SnapshotError {
    SnapshotError::Parse(serde::de::Error::custom(message))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
