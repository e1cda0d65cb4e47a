//! Headless SceneSync
//!
//! Спавнит демо-сцену, экспортирует её и синхронизирует с snapshot-файлом
//! каждый кадр.

use bevy::prelude::*;
use scenesync::{
    create_headless_app, ExportRoot, Prefab, PrefabCatalog, SceneSyncPlugin, SnapshotConfig,
    SyncStatus,
};

const FRAME_COUNT: u64 = 600;

fn spawn_demo_scene(mut commands: Commands) {
    commands
        .spawn((Name::new("Components"), Transform::default(), ExportRoot))
        .with_children(|parent| {
            parent.spawn((Name::new("Cube"), Transform::from_xyz(0.0, 0.5, 0.0)));
            parent.spawn((Name::new("Sphere"), Transform::from_xyz(2.0, 1.0, -1.0)));
            parent.spawn((Name::new("Cylinder"), Transform::from_xyz(-2.0, 1.0, 3.0)));
        });
}

fn main() {
    let config = SnapshotConfig::from_env();
    println!(
        "Starting SceneSync headless (snapshot: {}, export: {})",
        config.snapshot_path.display(),
        config.export_path.display()
    );

    let mut catalog = PrefabCatalog::new().with_prefab("Cube").with_prefab("Sphere");
    catalog.register(
        "Capsule",
        Prefab::new("Prefabs/Capsule").with_scale(Vec3::new(0.5, 1.0, 0.5)),
    );

    let mut app = create_headless_app();
    app.insert_resource(config)
        .insert_resource(catalog)
        .add_plugins(SceneSyncPlugin)
        .add_systems(Startup, spawn_demo_scene);

    for frame in 0..FRAME_COUNT {
        app.update();

        if frame % 100 == 0 {
            let status = app.world().resource::<SyncStatus>();
            println!(
                "Frame {}: last={:?} spawned={} unknown={}",
                frame, status.last, status.spawned_total, status.unknown_total
            );
        }
    }

    println!("SceneSync complete!");
}
