//! Board interaction integration test
//!
//! Клики по клеткам через TileClickIntent и drag-and-drop в trash bin.

use bevy::prelude::*;
use gridboard_simulation::*;

fn create_test_app() -> App {
    create_board_app(EnemyCatalog::default())
}

fn clicked_events(app: &App) -> Vec<TileClicked> {
    let events = app.world().resource::<Events<TileClicked>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).copied().collect()
}

fn trashed_events(app: &App) -> Vec<ItemTrashed> {
    let events = app.world().resource::<Events<ItemTrashed>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).copied().collect()
}

#[test]
fn test_grid_tiles_initialized_with_coords() {
    let mut app = create_test_app();
    spawn_grid(app.world_mut(), 3, 3, |_| TileKind::grass());

    let grid = app.world().resource::<TileGrid>();
    assert_eq!(grid.len(), 9);

    for (coord, entity) in grid.iter() {
        let tile = app.world().get::<Tile>(entity).unwrap();
        assert_eq!(tile.coord(), Some(coord));

        let visual = app.world().get::<SpriteVisual>(entity).unwrap();
        assert!(visual.visible);
        assert!(visual.image.as_ref().is_some_and(|image| image.is_placeholder()));
    }
}

#[test]
fn test_click_intent_reaches_tile() {
    let mut app = create_test_app();
    spawn_grid(app.world_mut(), 2, 2, |_| TileKind::grass());
    let target = app.world().resource::<TileGrid>().get(IVec2::new(1, 0)).unwrap();

    app.world_mut().send_event(TileClickIntent { coord: IVec2::new(1, 0) });
    app.update();

    let clicked = clicked_events(&app);
    assert_eq!(
        clicked,
        vec![TileClicked {
            entity: target,
            coord: IVec2::new(1, 0),
            clicks: 1,
        }]
    );
}

#[test]
fn test_repeated_clicks_trample_grass() {
    let mut app = create_test_app();
    spawn_grid(app.world_mut(), 1, 1, |_| TileKind::grass());
    let threshold = app.world().resource::<BoardConfig>().trample_threshold;

    for _ in 0..threshold {
        app.world_mut().send_event(TileClickIntent { coord: IVec2::ZERO });
        app.update();
    }

    let entity = app.world().resource::<TileGrid>().get(IVec2::ZERO).unwrap();
    let tile = app.world().get::<Tile>(entity).unwrap();
    assert_eq!(tile.clicks(), threshold);
    assert!(matches!(tile.kind(), TileKind::Grass(grass) if grass.is_trampled()));
}

#[test]
fn test_despawned_tile_leaves_grid_index() {
    let mut app = create_test_app();
    let tiles = spawn_grid(app.world_mut(), 1, 1, |_| TileKind::grass());

    app.world_mut().despawn(tiles[0]);

    let grid = app.world().resource::<TileGrid>();
    assert_eq!(grid.len(), 0);
    assert_eq!(grid.get(IVec2::ZERO), None);

    // Клик по освободившейся координате — без события
    app.world_mut().send_event(TileClickIntent { coord: IVec2::ZERO });
    app.update();
    assert!(clicked_events(&app).is_empty());

    // Новая клетка на той же координате снова кликабельна
    let replacement = app.world_mut().spawn(Tile::plain()).id();
    assert!(initialize_tile(app.world_mut(), replacement, 0, 0));
    assert_eq!(
        app.world().resource::<TileGrid>().get(IVec2::ZERO),
        Some(replacement)
    );
}

#[test]
fn test_click_outside_grid_is_ignored() {
    let mut app = create_test_app();
    spawn_grid(app.world_mut(), 1, 1, |_| TileKind::Plain);

    app.world_mut().send_event(TileClickIntent { coord: IVec2::new(-5, 9) });
    app.update();

    assert!(clicked_events(&app).is_empty());
}

#[test]
fn test_drag_over_bin_highlights_and_release_trashes() {
    let mut app = create_test_app();
    let normal = Color::srgb(0.5, 0.5, 0.5);
    let bin = app
        .world_mut()
        .spawn((
            TrashBin::default(),
            Transform::from_xyz(4.0, 4.0, 0.0),
            SpriteVisual::authored("ui/trash_bin.png").with_tint(normal),
        ))
        .id();
    let item = app.world_mut().spawn(Trashable).id();

    app.world_mut().send_event(DragMoved {
        item,
        point: Vec2::new(4.2, 4.1),
    });
    app.update();

    assert!(app.world().get::<TrashBin>(bin).unwrap().is_highlighted());
    assert_ne!(app.world().get::<SpriteVisual>(bin).unwrap().tint, normal);

    app.world_mut().send_event(DragReleased {
        item,
        point: Vec2::new(4.2, 4.1),
    });
    app.update();

    assert_eq!(trashed_events(&app), vec![ItemTrashed { item, bin }]);
    assert!(app.world().get_entity(item).is_err());
    assert!(!app.world().get::<TrashBin>(bin).unwrap().is_highlighted());
    assert_eq!(app.world().get::<SpriteVisual>(bin).unwrap().tint, normal);
}

#[test]
fn test_release_away_from_bin_keeps_item() {
    let mut app = create_test_app();
    app.world_mut()
        .spawn((TrashBin::default(), Transform::from_xyz(4.0, 4.0, 0.0)));
    let item = app.world_mut().spawn(Trashable).id();

    app.world_mut().send_event(DragReleased {
        item,
        point: Vec2::new(0.0, 0.0),
    });
    app.update();

    assert!(trashed_events(&app).is_empty());
    assert!(app.world().get_entity(item).is_ok());
}

#[test]
fn test_non_trashable_entity_survives_drop() {
    let mut app = create_test_app();
    app.world_mut().spawn(TrashBin::default());
    let tile = app.world_mut().spawn(Tile::plain()).id();

    app.world_mut().send_event(DragReleased {
        item: tile,
        point: Vec2::ZERO,
    });
    app.update();

    assert!(app.world().get_entity(tile).is_ok());
}

#[test]
fn test_drop_without_bin_is_noop() {
    let mut app = create_test_app();
    let item = app.world_mut().spawn(Trashable).id();

    app.world_mut().send_event(DragReleased {
        item,
        point: Vec2::ZERO,
    });
    app.update();

    assert!(app.world().get_entity(item).is_ok());
}
