//! Headless сценарий доски
//!
//! Factory без prototype → goblin в (2, 3, 0), lookup factory через registry,
//! клики по траве, drop в trash bin.

use bevy::prelude::*;
use gridboard_simulation::*;

const CATALOG: &str = r#"[
    { "id": "goblin", "display_name": "Goblin", "max_health": 30, "move_speed": 1.5, "attack_damage": 4 }
]"#;

fn main() {
    let catalog = match EnemyCatalog::from_json(CATALOG) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Failed to load enemy catalog: {}", err);
            std::process::exit(1);
        }
    };

    let mut app = create_board_app(catalog);

    let factory = app.world_mut().spawn(EnemyFactory::new()).id();
    let bin = app
        .world_mut()
        .spawn((
            TrashBin::default(),
            Transform::from_xyz(6.0, 0.0, 0.0),
            SpriteVisual::authored("ui/trash_bin.png"),
        ))
        .id();
    spawn_grid(app.world_mut(), 4, 4, |_| TileKind::grass());

    app.world_mut().send_event(SpawnEnemyIntent {
        enemy_id: "goblin".to_string(),
        position: Vec3::new(2.0, 3.0, 0.0),
    });
    app.update();

    let resolved = app.world().resource::<ServiceRegistry>().resolve::<EnemyFactory>();
    println!("Factory {:?} resolved via registry: {:?}", factory, resolved);
    println!("Trash bin {:?} resolved via registry: {:?}", bin, resolved_bin(&app));
    for (capability, provider) in app.world().resource::<ServiceRegistry>().capabilities() {
        println!("  service {} → {:?}", capability, provider);
    }

    let mut enemies = app.world_mut().query::<(Entity, &Name, &Transform, &Enemy)>();
    for (entity, name, transform, enemy) in enemies.iter(app.world()) {
        println!(
            "{:?} '{}' id={} at {:?}",
            entity, name, enemy.id, transform.translation
        );
    }

    for _ in 0..3 {
        app.world_mut().send_event(TileClickIntent { coord: IVec2::new(1, 1) });
        app.update();
    }

    let item = app.world_mut().spawn(Trashable).id();
    app.world_mut().send_event(DragMoved {
        item,
        point: Vec2::new(6.5, 0.0),
    });
    app.world_mut().send_event(DragReleased {
        item,
        point: Vec2::new(6.5, 0.0),
    });
    app.update();

    println!(
        "Item {:?} trashed: {}",
        item,
        app.world().get_entity(item).is_err()
    );
    println!("Scenario complete!");
}

fn resolved_bin(app: &App) -> Option<Entity> {
    resolve_service::<TrashBin>(app.world()).map(|(provider, _)| provider)
}
