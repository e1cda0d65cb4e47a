//! Snapshot synchronizer
//!
//! Каждый тик: прочитать snapshot целиком → разобрать → применить записи
//! по порядку. Известные имена двигаются на месте, неизвестные создаются
//! через FactoryCatalog и добавляются в registry.
//!
//! Все исходы recoverable: плохой файл или одна неизвестная запись
//! не останавливают цикл синхронизации.

use crate::logger;
use crate::registry::{Registry, SceneGraph};
use crate::snapshot::{parse_snapshot, Snapshot, SnapshotSource};


/// Каталог шаблонов (prefab) по имени — read-only коллаборатор
pub trait FactoryCatalog<S: SceneGraph> {
    /// Создаёт новую сущность из шаблона `name`. `None` — шаблона нет.
    ///
    /// Имя и позицию выставляет синхронизатор, шаблон может назвать
    /// сущность как угодно.
    fn instantiate(&self, scene: &mut S, name: &str) -> Option<S::Handle>;
}

/// Итог применения snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Записи, сдвинувшие уже зарегистрированные сущности
    pub updated: usize,
    /// Имена созданных из шаблонов сущностей (в порядке создания)
    pub spawned: Vec<String>,
    /// UnknownName: нет ни в registry, ни в каталоге (или шаблон не дал
    /// живую сущность)
    pub unknown: Vec<String>,
}

impl SyncReport {
    pub fn applied(&self) -> usize {
        self.updated + self.spawned.len()
    }
}

/// Исход одного тика синхронизации
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Источника нет — штатное состояние, no-op
    SourceMissing,
    /// Источник есть, но не читается (права, I/O) — повтор на следующем тике
    Unreadable(String),
    /// Битый snapshot — registry не тронут, повтор на следующем тике
    ParseError(String),
    /// Пустой/null список записей — no-op
    EmptySnapshot,
    Applied(SyncReport),
}

impl SyncOutcome {
    pub fn report(&self) -> Option<&SyncReport> {
        match self {
            SyncOutcome::Applied(report) => Some(report),
            _ => None,
        }
    }
}

/// Один тик: source → parse → apply
pub fn sync<S, F>(
    registry: &mut Registry<S::Handle>,
    scene: &mut S,
    source: &impl SnapshotSource,
    factory: &F,
) -> SyncOutcome
where
    S: SceneGraph,
    F: FactoryCatalog<S>,
{
    let content = match source.read() {
        Ok(Some(content)) => content,
        Ok(None) => {
            logger::log_warning(&format!("Snapshot not found: {}", source.describe()));
            return SyncOutcome::SourceMissing;
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            return SyncOutcome::Unreadable(e.to_string());
        }
    };

    logger::log(&format!("Read snapshot {} ({} bytes)", source.describe(), content.len()));

    let snapshot = match parse_snapshot(&content) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            logger::log_warning("Snapshot is empty, nothing to apply");
            return SyncOutcome::EmptySnapshot;
        }
        Err(e) => {
            logger::log_error(&format!("❌ Failed to parse snapshot: {}", e));
            return SyncOutcome::ParseError(e.to_string());
        }
    };

    logger::log(&format!("Parsed snapshot: {} records", snapshot.len()));

    SyncOutcome::Applied(apply_snapshot(registry, scene, &snapshot, factory))
}

/// Применяет записи snapshot по порядку (дубликаты: последняя выигрывает)
pub fn apply_snapshot<S, F>(
    registry: &mut Registry<S::Handle>,
    scene: &mut S,
    snapshot: &Snapshot,
    factory: &F,
) -> SyncReport
where
    S: SceneGraph,
    F: FactoryCatalog<S>,
{
    let mut report = SyncReport::default();

    for record in &snapshot.records {
        if let Some(handle) = registry.get(&record.name) {
            if scene.set_position(handle, record.position) {
                report.updated += 1;
                logger::log(&format!("{} moved to {}", record.name, record.position));
                continue;
            }
            // Handle умер вне registry (despawn host-ом) — пересоздаём из шаблона
            logger::log_warning(&format!(
                "Registered entity '{}' is gone, re-instantiating",
                record.name
            ));
        }

        let Some(handle) = factory.instantiate(scene, &record.name) else {
            logger::log_warning(&format!("No entity or template named '{}'", record.name));
            report.unknown.push(record.name.clone());
            continue;
        };

        // Имя шаблона может отличаться — выравниваем под ключ registry
        scene.rename(&handle, &record.name);
        if !scene.set_position(&handle, record.position) {
            // Каталог вернул мёртвый handle — без позиции в registry не кладём
            logger::log_warning(&format!(
                "Instantiated '{}' is not a live entity, skipping",
                record.name
            ));
            report.unknown.push(record.name.clone());
            continue;
        }
        registry.insert(record.name.clone(), handle);
        report.spawned.push(record.name.clone());

        logger::log_info(&format!(
            "Instantiated '{}' at {}",
            record.name, record.position
        ));
    }

    report
}
