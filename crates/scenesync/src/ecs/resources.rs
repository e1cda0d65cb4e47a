//! Ресурсы синхронизации: EntityRegistry, SyncStatus

use bevy::prelude::*;

use crate::registry::Registry;
use crate::sync::SyncOutcome;

/// Registry сцены (имя → Entity). Владелец — World, без глобальных синглтонов.
#[derive(Resource, Debug, Default)]
pub struct EntityRegistry(pub Registry<Entity>);

/// Статистика синхронизации для host-а (debug overlay, тесты)
#[derive(Resource, Debug, Default)]
pub struct SyncStatus {
    pub ticks: u64,
    pub last: Option<SyncOutcome>,
    pub spawned_total: usize,
    pub unknown_total: usize,
    /// Стартовый экспорт по корням: Ok(кол-во записей) / Err(причина)
    pub exports: Vec<(Entity, Result<usize, String>)>,
}

impl SyncStatus {
    pub fn record(&mut self, outcome: SyncOutcome) {
        self.ticks += 1;
        if let Some(report) = outcome.report() {
            self.spawned_total += report.spawned.len();
            self.unknown_total += report.unknown.len();
        }
        self.last = Some(outcome);
    }
}
