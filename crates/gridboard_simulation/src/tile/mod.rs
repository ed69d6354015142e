//! Tiles — клетки доски
//!
//! # Architecture
//! - `Tile` (component) + `TileKind` (закрытый набор variants: Plain, Grass)
//! - Grid builder (`spawn_grid` / `initialize_tile`) вызывает Initialize ровно раз на клетку
//! - Despawn клетки снимает её из `TileGrid` (observer `OnRemove<Tile>`)
//! - Input слой (внешний) шлёт `TileClickIntent` → `process_tile_clicks` → `TileClicked`

use bevy::prelude::*;

pub mod base;
pub mod grass;
pub mod grid;

pub use base::{Tile, TileKind};
pub use grass::GrassTile;
pub use grid::{initialize_tile, spawn_grid, TileGrid};

use crate::components::SpriteVisual;
use crate::config::BoardConfig;
use crate::logger::log;

/// Event: клик по клетке (от input слоя)
#[derive(Event, Debug, Clone, Copy)]
pub struct TileClickIntent {
    pub coord: IVec2,
}

/// Event: клик обработан (base + variant шаги выполнены)
///
/// Используется для UI, analytics, звуков.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileClicked {
    pub entity: Entity,
    pub coord: IVec2,
    pub clicks: u32,
}

/// Система: dispatch click intents на клетки
pub fn process_tile_clicks(
    mut intents: EventReader<TileClickIntent>,
    grid: Res<TileGrid>,
    config: Res<BoardConfig>,
    mut tiles: Query<(&mut Tile, &mut SpriteVisual)>,
    mut clicked: EventWriter<TileClicked>,
) {
    for intent in intents.read() {
        let Some(entity) = grid.get(intent.coord) else {
            log(&format!("Click at {:?}: no tile", intent.coord));
            continue;
        };

        let Ok((mut tile, mut visual)) = tiles.get_mut(entity) else {
            continue;
        };

        if let Some(coord) = tile.click(&mut visual, &config) {
            clicked.write(TileClicked {
                entity,
                coord,
                clicks: tile.clicks(),
            });
        }
    }
}

/// Observer: Tile удалён (или entity despawn) → убрать клетку из индекса
pub fn unindex_removed_tile(trigger: Trigger<OnRemove, Tile>, grid: Option<ResMut<TileGrid>>) {
    if let Some(mut grid) = grid {
        grid.remove(trigger.target());
    }
}

/// Tile plugin
pub struct TilePlugin;

impl Plugin for TilePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardConfig>()
            .init_resource::<TileGrid>()
            .add_event::<TileClickIntent>()
            .add_event::<TileClicked>()
            .add_observer(unindex_removed_tile)
            .add_systems(Update, process_tile_clicks);
    }
}
