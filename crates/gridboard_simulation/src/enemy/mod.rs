//! Enemies — content descriptors + factory service
//!
//! # Flow
//! - Wave/AI слой (внешний) шлёт `SpawnEnemyIntent { enemy_id, position }`
//! - `process_spawn_intents` находит factory через `ServiceRegistry`,
//!   EnemyData через `EnemyCatalog`, вызывает `create_enemy`
//! - Результат: `EnemySpawned` event
//!
//! Нет factory / нет data — нормальные окна startup/shutdown, лог и пропуск.

use bevy::prelude::*;

pub mod data;
pub mod factory;

pub use data::{Enemy, EnemyCatalog, EnemyData, EnemyStats};
pub use factory::{shell_name, EnemyFactory, EnemyPrototype};

use crate::logger::{log, log_warning};
use crate::registry::ServiceRegistry;

/// Event: запрос на spawn врага
#[derive(Event, Debug, Clone)]
pub struct SpawnEnemyIntent {
    pub enemy_id: String,
    pub position: Vec3,
}

/// Event: враг создан
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemySpawned {
    pub entity: Entity,
    pub enemy_id: String,
}

/// Система: обработка SpawnEnemyIntent через factory из registry
pub fn process_spawn_intents(
    mut commands: Commands,
    mut intents: EventReader<SpawnEnemyIntent>,
    registry: Option<Res<ServiceRegistry>>,
    catalog: Res<EnemyCatalog>,
    factories: Query<&EnemyFactory>,
    mut spawned: EventWriter<EnemySpawned>,
) {
    for intent in intents.read() {
        // Registry снесён (shutdown) — то же, что незарегистрированная factory
        let Some(factory) = registry
            .as_ref()
            .and_then(|registry| registry.resolve::<EnemyFactory>())
            .and_then(|provider| factories.get(provider).ok())
        else {
            log_warning(&format!(
                "SpawnEnemyIntent '{}': no EnemyFactory registered",
                intent.enemy_id
            ));
            continue;
        };

        let data = catalog.get(&intent.enemy_id);
        if data.is_none() {
            log(&format!(
                "SpawnEnemyIntent '{}': not in catalog, nothing to spawn",
                intent.enemy_id
            ));
        }

        if let Some(entity) = factory.create_enemy(&mut commands, data, intent.position) {
            spawned.write(EnemySpawned {
                entity,
                enemy_id: intent.enemy_id.clone(),
            });
        }
    }
}

/// Enemy plugin
///
/// Регистрация EnemyFactory как сервиса — в `RegistryPlugin`.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ServiceRegistry>()
            .init_resource::<EnemyCatalog>()
            .add_event::<SpawnEnemyIntent>()
            .add_event::<EnemySpawned>()
            .add_systems(Update, process_spawn_intents);
    }
}
