//! Gridboard Simulation Core
//!
//! Headless ECS-слой grid board game на Bevy 0.16.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = game state (tiles, enemies, drop zones, service lookup)
//! - Внешний слой = rendering, input, physics (читает/пишет через components и events)

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod enemy;
pub mod error;
pub mod logger;
pub mod registry;
pub mod tile;
pub mod trash_bin;

pub use components::*;
pub use config::BoardConfig;
pub use enemy::{
    Enemy, EnemyCatalog, EnemyData, EnemyFactory, EnemyPlugin, EnemyPrototype, EnemySpawned,
    EnemyStats, SpawnEnemyIntent,
};
pub use error::{ContentError, RegistryError};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use registry::{resolve_service, AppServiceExt, RegistryPlugin, Service, ServiceRegistry};
pub use tile::{
    initialize_tile, spawn_grid, GrassTile, Tile, TileClickIntent, TileClicked, TileGrid,
    TileKind, TilePlugin,
};
pub use trash_bin::{
    DragMoved, DragReleased, ItemTrashed, TrashBin, TrashBinPlugin, Trashable,
    TRASH_BIN_FALLBACK_RADIUS,
};

/// Главный plugin доски (объединяет все подсистемы)
///
/// Порядок не важен: каждый plugin сам делает init_resource нужного ему.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardConfig>()
            .add_plugins((RegistryPlugin, TilePlugin, EnemyPlugin, TrashBinPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции (без BoardPlugin)
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins);

    app
}

/// Headless App с BoardPlugin и заданным content каталогом
pub fn create_board_app(catalog: EnemyCatalog) -> App {
    let mut app = create_headless_app();
    app.add_plugins(BoardPlugin).insert_resource(catalog);

    app
}
