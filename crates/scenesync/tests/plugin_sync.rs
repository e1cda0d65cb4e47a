//! SceneSyncPlugin integration test
//!
//! Проверяем полный цикл в headless App:
//! - PostStartup: registry + экспорт ExportRoot
//! - PostUpdate: синхронизация с файлом каждый кадр
//! - Ошибки файла не ломают цикл, следующий кадр самовосстанавливается

use bevy::prelude::*;
use scenesync::*;
use std::fs;
use std::path::Path;

/// Helper: App с plugin-ом и путями во временной директории
fn create_sync_app(dir: &Path, catalog: PrefabCatalog) -> App {
    let mut app = create_headless_app();
    app.insert_resource(
        SnapshotConfig::default()
            .with_snapshot_path(dir.join("generate.json"))
            .with_export_path(dir.join("streaming").join("components.json")),
    )
    .insert_resource(catalog)
    .add_plugins(SceneSyncPlugin);
    app
}

fn write_snapshot(dir: &Path, content: &str) {
    fs::write(dir.join("generate.json"), content).unwrap();
}

fn translation_of(app: &App, name: &str) -> Vec3 {
    let entity = *app.world().resource::<EntityRegistry>().0.get(name).unwrap();
    app.world().get::<Transform>(entity).unwrap().translation
}

#[test]
fn test_startup_registry_and_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_sync_app(dir.path(), PrefabCatalog::new());

    app.world_mut().spawn((Name::new("A"), Transform::default()));
    app.world_mut().spawn((Name::new("B"), Transform::default()));
    app.world_mut().spawn((Name::new("Gizmo"), Transform::default(), Hidden));

    app.update();

    let registry = &app.world().resource::<EntityRegistry>().0;
    assert_eq!(registry.names(), vec!["A", "B"]);

    let status = app.world().resource::<SyncStatus>();
    assert_eq!(status.ticks, 1);
    assert_eq!(status.last, Some(SyncOutcome::SourceMissing));
    // Нет ExportRoot — экспорта не было
    assert!(status.exports.is_empty());
}

#[test]
fn test_snapshot_moves_and_spawns() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_sync_app(dir.path(), PrefabCatalog::new().with_prefab("B"));

    app.world_mut().spawn((Name::new("A"), Transform::default()));
    app.update();

    write_snapshot(
        dir.path(),
        r#"{"objects": [
            {"name": "A", "position": {"x": 1, "y": 2, "z": 3}},
            {"name": "B", "position": {"x": 1, "y": 1, "z": 1}},
            {"name": "Unknown", "position": {"x": 0, "y": 0, "z": 0}}
        ]}"#,
    );
    app.update();

    assert_eq!(translation_of(&app, "A"), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(translation_of(&app, "B"), Vec3::new(1.0, 1.0, 1.0));

    let status = app.world().resource::<SyncStatus>();
    assert_eq!(status.spawned_total, 1);
    assert_eq!(status.unknown_total, 1);
    assert_eq!(app.world().resource::<EntityRegistry>().0.len(), 2);

    // Следующий кадр: тот же файл — B не спавнится повторно
    app.update();
    assert_eq!(app.world().resource::<SyncStatus>().spawned_total, 1);
    assert_eq!(app.world().resource::<EntityRegistry>().0.len(), 2);
}

#[test]
fn test_parse_error_recovers_next_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_sync_app(dir.path(), PrefabCatalog::new());
    app.world_mut().spawn((Name::new("A"), Transform::default()));

    write_snapshot(dir.path(), r#"{"objects": [{"name": "A", "#);
    app.update();

    assert!(matches!(
        app.world().resource::<SyncStatus>().last,
        Some(SyncOutcome::ParseError(_))
    ));
    assert_eq!(translation_of(&app, "A"), Vec3::ZERO);

    write_snapshot(dir.path(), r#"{"objects": [{"name": "A", "position": {"x": 5, "y": 0, "z": 0}}]}"#);
    app.update();

    assert!(matches!(
        app.world().resource::<SyncStatus>().last,
        Some(SyncOutcome::Applied(_))
    ));
    assert_eq!(translation_of(&app, "A"), Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_export_root_written_on_startup() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_sync_app(dir.path(), PrefabCatalog::new());

    app.world_mut()
        .spawn((Name::new("Components"), Transform::default(), ExportRoot))
        .with_children(|parent| {
            parent.spawn((Name::new("Cube"), Transform::from_xyz(0.0, 0.5, 0.0)));
            parent.spawn((Name::new("Sphere"), Transform::from_xyz(2.0, 1.0, -1.0)));
        });

    app.update();

    let status = app.world().resource::<SyncStatus>();
    assert_eq!(status.exports.len(), 1);
    assert_eq!(status.exports[0].1, Ok(2));

    let content = fs::read_to_string(dir.path().join("streaming").join("components.json")).unwrap();
    let snapshot = parse_snapshot(&content).unwrap().unwrap();
    assert_eq!(snapshot.records[0], SnapshotRecord::new("Cube", Position::new(0.0, 0.5, 0.0)));
    assert_eq!(snapshot.records[1], SnapshotRecord::new("Sphere", Position::new(2.0, 1.0, -1.0)));
}

#[test]
fn test_every_export_root_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_sync_app(dir.path(), PrefabCatalog::new());
    let props_path = dir.path().join("props.json");

    app.world_mut()
        .spawn((Name::new("Components"), Transform::default(), ExportRoot))
        .with_children(|parent| {
            parent.spawn((Name::new("Cube"), Transform::from_xyz(1.0, 0.0, 0.0)));
        });
    app.world_mut()
        .spawn((
            Name::new("Props"),
            Transform::default(),
            ExportRoot,
            ExportPath::new(props_path.to_string_lossy()),
        ))
        .with_children(|parent| {
            parent.spawn((Name::new("Barrel"), Transform::from_xyz(0.0, 2.0, 0.0)));
            parent.spawn((Name::new("Crate"), Transform::from_xyz(0.0, 0.0, 3.0)));
        });

    app.update();

    let status = app.world().resource::<SyncStatus>();
    let counts: Vec<Result<usize, String>> = status.exports.iter().map(|(_, r)| r.clone()).collect();
    assert_eq!(counts, vec![Ok(1), Ok(2)]);

    let components = fs::read_to_string(dir.path().join("streaming").join("components.json")).unwrap();
    let components = parse_snapshot(&components).unwrap().unwrap();
    assert_eq!(components.records, vec![SnapshotRecord::new("Cube", Position::new(1.0, 0.0, 0.0))]);

    let props = parse_snapshot(&fs::read_to_string(&props_path).unwrap()).unwrap().unwrap();
    let names: Vec<&str> = props.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Barrel", "Crate"]);
}

#[test]
fn test_export_roots_sharing_a_file_write_in_spawn_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_sync_app(dir.path(), PrefabCatalog::new());

    app.world_mut()
        .spawn((Name::new("First"), Transform::default(), ExportRoot))
        .with_children(|parent| {
            parent.spawn((Name::new("Cube"), Transform::default()));
        });
    app.world_mut()
        .spawn((Name::new("Second"), Transform::default(), ExportRoot))
        .with_children(|parent| {
            parent.spawn((Name::new("Sphere"), Transform::default()));
        });

    app.update();

    assert_eq!(app.world().resource::<SyncStatus>().exports.len(), 2);

    // Оба корня экспортированы, в файле остался последний
    let content = fs::read_to_string(dir.path().join("streaming").join("components.json")).unwrap();
    let snapshot = parse_snapshot(&content).unwrap().unwrap();
    assert_eq!(snapshot.records[0].name, "Sphere");
}

#[test]
fn test_empty_export_root_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_sync_app(dir.path(), PrefabCatalog::new());
    app.world_mut()
        .spawn((Name::new("Components"), Transform::default(), ExportRoot));

    app.update();

    let status = app.world().resource::<SyncStatus>();
    assert_eq!(status.exports.len(), 1);
    assert!(status.exports[0].1.is_err());
    assert!(!dir.path().join("streaming").join("components.json").exists());
}

#[test]
fn test_exported_snapshot_drives_sync() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_headless_app();
    // Экспорт и синхронизация смотрят в один файл
    let shared = dir.path().join("scene.json");
    app.insert_resource(
        SnapshotConfig::default()
            .with_snapshot_path(&shared)
            .with_export_path(&shared),
    )
    .add_plugins(SceneSyncPlugin);

    app.world_mut()
        .spawn((Name::new("Components"), Transform::default(), ExportRoot))
        .with_children(|parent| {
            parent.spawn((Name::new("Cube"), Transform::from_xyz(1.0, 1.0, 1.0)));
        });
    app.update();

    // Сдвигаем Cube руками — следующий кадр вернёт позицию из файла
    let cube = *app.world().resource::<EntityRegistry>().0.get("Cube").unwrap();
    app.world_mut().get_mut::<Transform>(cube).unwrap().translation = Vec3::new(9.0, 9.0, 9.0);
    app.update();

    assert_eq!(translation_of(&app, "Cube"), Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn test_sync_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = create_headless_app();
    let mut config = SnapshotConfig::default().with_snapshot_path(dir.path().join("generate.json"));
    config.sync_enabled = false;
    app.insert_resource(config).add_plugins(SceneSyncPlugin);

    app.world_mut().spawn((Name::new("A"), Transform::default()));
    write_snapshot(dir.path(), r#"{"objects": [{"name": "A", "position": {"x": 1, "y": 0, "z": 0}}]}"#);

    app.update();
    app.update();

    let status = app.world().resource::<SyncStatus>();
    assert_eq!(status.ticks, 0);
    assert!(status.last.is_none());
    assert_eq!(translation_of(&app, "A"), Vec3::ZERO);
}
