//! Enemy content: immutable descriptors + runtime компоненты, в которые они применяются

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use crate::components::Health;
use crate::error::ContentError;

/// Descriptor врага (read-only content record)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnemyData {
    /// Stable identity ("goblin", "slime")
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_max_health")]
    pub max_health: u32,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default)]
    pub attack_damage: u32,
}

fn default_max_health() -> u32 {
    10
}

fn default_move_speed() -> f32 {
    1.0
}

impl EnemyData {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            max_health: default_max_health(),
            move_speed: default_move_speed(),
            attack_damage: 0,
        }
    }

    /// Runtime компоненты, которые несут identity + stats на entity
    pub fn apply(&self) -> (Enemy, Health, EnemyStats) {
        let display_name = if self.display_name.is_empty() {
            self.id.clone()
        } else {
            self.display_name.clone()
        };

        (
            Enemy {
                id: self.id.clone(),
                display_name,
            },
            Health::new(self.max_health),
            EnemyStats {
                move_speed: self.move_speed,
                attack_damage: self.attack_damage,
            },
        )
    }
}

/// Маркер врага + identity из EnemyData
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Enemy {
    pub id: String,
    pub display_name: String,
}

/// Боевые/двигательные stats (копия из EnemyData на момент spawn)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EnemyStats {
    pub move_speed: f32,
    pub attack_damage: u32,
}

/// Каталог EnemyData по id (content configuration)
#[derive(Resource, Debug, Default, Clone)]
pub struct EnemyCatalog {
    enemies: HashMap<String, EnemyData>,
}

impl EnemyCatalog {
    /// JSON массив записей EnemyData; пустые и повторные id отклоняются
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let records: Vec<EnemyData> = serde_json::from_str(source)?;

        let mut catalog = Self::default();
        for record in records {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, data: EnemyData) -> Result<(), ContentError> {
        if data.id.is_empty() {
            return Err(ContentError::EmptyId);
        }
        if self.enemies.contains_key(&data.id) {
            return Err(ContentError::DuplicateEnemy(data.id));
        }

        self.enemies.insert(data.id.clone(), data);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&EnemyData> {
        self.enemies.get(id)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json_with_defaults() {
        let catalog = EnemyCatalog::from_json(
            r#"[
                { "id": "goblin", "display_name": "Goblin", "max_health": 30, "attack_damage": 4 },
                { "id": "slime" }
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let slime = catalog.get("slime").unwrap();
        assert_eq!(slime.max_health, 10);
        assert_eq!(slime.move_speed, 1.0);
        assert_eq!(catalog.get("goblin").unwrap().attack_damage, 4);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let err = EnemyCatalog::from_json(r#"[{ "id": "bat" }, { "id": "bat" }]"#).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateEnemy(id) if id == "bat"));
    }

    #[test]
    fn test_catalog_rejects_empty_id_and_bad_json() {
        assert!(matches!(
            EnemyCatalog::from_json(r#"[{ "id": "" }]"#),
            Err(ContentError::EmptyId)
        ));
        assert!(matches!(
            EnemyCatalog::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_apply_transfers_identity_and_stats() {
        let data = EnemyData {
            id: "orc".into(),
            display_name: String::new(),
            max_health: 55,
            move_speed: 0.5,
            attack_damage: 9,
        };

        let (enemy, health, stats) = data.apply();

        assert_eq!(enemy.id, "orc");
        assert_eq!(enemy.display_name, "orc"); // пустое имя → id
        assert_eq!(health, Health::new(55));
        assert_eq!(stats.attack_damage, 9);
    }
}
