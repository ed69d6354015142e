//! TileGrid — индекс клеток по координате + grid-builder helpers

use bevy::prelude::*;
use std::collections::HashMap;

use super::base::{Tile, TileKind};
use crate::components::SpriteVisual;
use crate::config::BoardConfig;
use crate::logger::log_warning;

/// Координата → tile entity
///
/// Обновляется при (пере)инициализации клетки; despawn снимает запись (observer в `TilePlugin`).
#[derive(Resource, Debug, Default)]
pub struct TileGrid {
    tiles: HashMap<IVec2, Entity>,
}

impl TileGrid {
    pub fn get(&self, coord: IVec2) -> Option<Entity> {
        self.tiles.get(&coord).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IVec2, Entity)> + '_ {
        self.tiles.iter().map(|(coord, entity)| (*coord, *entity))
    }

    fn place(&mut self, previous: Option<IVec2>, coord: IVec2, entity: Entity) {
        if let Some(previous) = previous {
            if self.tiles.get(&previous) == Some(&entity) {
                self.tiles.remove(&previous);
            }
        }

        // Занятость живой клеткой проверяет initialize_tile; здесь перезаписываются только stale записи
        self.tiles.insert(coord, entity);
    }

    /// Удалить entity из индекса (despawn клетки)
    pub fn remove(&mut self, entity: Entity) {
        self.tiles.retain(|_, tile| *tile != entity);
    }
}

/// Initialize(x, y) для tile entity + обновление `TileGrid` и `Name`
///
/// false если у entity нет Tile или координата занята другой живой клеткой
/// (клетка тогда остаётся как была).
pub fn initialize_tile(world: &mut World, entity: Entity, x: i32, y: i32) -> bool {
    let coord = IVec2::new(x, y);
    let occupant = world
        .get_resource::<TileGrid>()
        .and_then(|grid| grid.get(coord))
        .filter(|other| *other != entity && world.get::<Tile>(*other).is_some());
    if let Some(occupant) = occupant {
        log_warning(&format!(
            "initialize_tile: {:?} rejected, {:?} already occupied by {:?}",
            entity, coord, occupant
        ));
        return false;
    }

    let config = world
        .get_resource::<BoardConfig>()
        .cloned()
        .unwrap_or_default();

    let (previous, name) = {
        let mut tiles = world.query::<(&mut Tile, &mut SpriteVisual)>();
        let Ok((mut tile, mut visual)) = tiles.get_mut(world, entity) else {
            log_warning(&format!("initialize_tile: {:?} is not a tile", entity));
            return false;
        };

        let previous = tile.coord();
        tile.initialize(x, y, &mut visual, &config);
        (previous, tile.name().to_string())
    };

    world.entity_mut(entity).insert(Name::new(name));
    world
        .get_resource_or_insert_with(TileGrid::default)
        .place(previous, coord, entity);

    true
}

/// Строит прямоугольную доску width×height, variant выбирает `kind_for`
///
/// Возвращает entities построчно (y, затем x).
pub fn spawn_grid(
    world: &mut World,
    width: i32,
    height: i32,
    kind_for: impl Fn(IVec2) -> TileKind,
) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(width.max(0) as usize * height.max(0) as usize);

    for y in 0..height {
        for x in 0..width {
            let entity = world.spawn(Tile::new(kind_for(IVec2::new(x, y)))).id();
            initialize_tile(world, entity, x, y);
            spawned.push(entity);
        }
    }

    spawned
}
