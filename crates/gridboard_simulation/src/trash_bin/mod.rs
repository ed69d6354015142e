//! Trash bin — drop zone для удаления предметов/юнитов drag-and-drop'ом
//!
//! # Flow
//! - Input слой (внешний) шлёт `DragMoved` / `DragReleased` с точкой в плоскости доски
//! - `highlight_trash_bin_on_drag` — подсветка, пока точка над bin
//! - `trash_dropped_items` — release над bin → despawn `Trashable` entity + `ItemTrashed`
//!
//! Bin ищется через `ServiceRegistry`; не зарегистрирован (или registry уже снесён) →
//! drag просто игнорируется.

use bevy::prelude::*;

pub mod bin;

pub use bin::{TrashBin, DEFAULT_HIGHLIGHT_COLOR, TRASH_BIN_FALLBACK_RADIUS};

use crate::components::SpriteVisual;
use crate::logger::{log, log_info};
use crate::registry::ServiceRegistry;

/// Маркер: entity можно выбросить в trash bin
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Trashable;

/// Event: перетаскиваемый item сдвинулся
#[derive(Event, Debug, Clone, Copy)]
pub struct DragMoved {
    pub item: Entity,
    pub point: Vec2,
}

/// Event: item отпущен
#[derive(Event, Debug, Clone, Copy)]
pub struct DragReleased {
    pub item: Entity,
    pub point: Vec2,
}

/// Event: item выброшен
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTrashed {
    pub item: Entity,
    pub bin: Entity,
}

/// Система: подсветка bin по последней позиции drag за frame
pub fn highlight_trash_bin_on_drag(
    mut moves: EventReader<DragMoved>,
    registry: Option<Res<ServiceRegistry>>,
    mut bins: Query<(&mut TrashBin, &Transform, Option<&mut SpriteVisual>)>,
) {
    let Some(last) = moves.read().last().copied() else {
        return;
    };

    let Some(provider) = registry.and_then(|registry| registry.resolve::<TrashBin>()) else {
        return;
    };

    let Ok((mut bin, transform, mut visual)) = bins.get_mut(provider) else {
        return;
    };

    let over = bin.is_point_over(transform, last.point);
    if over != bin.is_highlighted() {
        bin.set_highlight(over, visual.as_deref_mut());
    }
}

/// Система: drop над bin → despawn item
pub fn trash_dropped_items(
    mut commands: Commands,
    mut releases: EventReader<DragReleased>,
    registry: Option<Res<ServiceRegistry>>,
    mut bins: Query<(&mut TrashBin, &Transform, Option<&mut SpriteVisual>)>,
    trashable: Query<(), With<Trashable>>,
    mut trashed: EventWriter<ItemTrashed>,
) {
    for release in releases.read() {
        let Some(provider) = registry
            .as_ref()
            .and_then(|registry| registry.resolve::<TrashBin>())
        else {
            log(&format!("Drop of {:?}: no trash bin registered", release.item));
            continue;
        };

        let Ok((mut bin, transform, mut visual)) = bins.get_mut(provider) else {
            continue;
        };

        if bin.is_highlighted() {
            bin.set_highlight(false, visual.as_deref_mut());
        }

        if !bin.is_point_over(transform, release.point) || !trashable.contains(release.item) {
            continue;
        }

        if let Ok(mut item) = commands.get_entity(release.item) {
            item.despawn();
            trashed.write(ItemTrashed {
                item: release.item,
                bin: provider,
            });
            log_info(&format!("🗑️ {:?} dropped into trash bin {:?}", release.item, provider));
        }
    }
}

/// Trash bin plugin
///
/// Регистрация TrashBin как сервиса — в `RegistryPlugin`.
pub struct TrashBinPlugin;

impl Plugin for TrashBinPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ServiceRegistry>()
            .add_event::<DragMoved>()
            .add_event::<DragReleased>()
            .add_event::<ItemTrashed>()
            .add_systems(
                Update,
                (highlight_trash_bin_on_drag, trash_dropped_items).chain(),
            );
    }
}
