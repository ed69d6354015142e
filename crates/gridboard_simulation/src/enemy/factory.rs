//! EnemyFactory — сервис создания врагов
//!
//! Self-registration: компонент на entity → `ServiceRegistry` (observers в registry).
//! Factory не пулит и не ограничивает число живых врагов.

use bevy::prelude::*;

use super::data::EnemyData;
use crate::components::SpriteVisual;
use crate::logger::log;
use crate::registry::Service;

/// Шаблон для instantiate (аналог prefab)
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyPrototype {
    pub name: String,
    pub scale: Vec3,
    pub visual: Option<SpriteVisual>,
}

impl EnemyPrototype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scale: Vec3::ONE,
            visual: None,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_visual(mut self, visual: SpriteVisual) -> Self {
        self.visual = Some(visual);
        self
    }

    fn instantiate(&self, commands: &mut Commands, position: Vec3) -> Entity {
        let mut entity = commands.spawn((
            Name::new(self.name.clone()),
            Transform::from_translation(position).with_scale(self.scale),
        ));

        if let Some(visual) = &self.visual {
            entity.insert(visual.clone());
        }

        entity.id()
    }
}

/// Имя bare entity без prototype
pub fn shell_name(enemy_id: &str) -> String {
    format!("Enemy_{}", enemy_id)
}

#[derive(Component, Debug, Clone, Default)]
pub struct EnemyFactory {
    prototype: Option<EnemyPrototype>,
}

impl Service for EnemyFactory {}

impl EnemyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prototype(prototype: EnemyPrototype) -> Self {
        Self {
            prototype: Some(prototype),
        }
    }

    pub fn prototype(&self) -> Option<&EnemyPrototype> {
        self.prototype.as_ref()
    }

    /// Заменяет шаблон для будущих spawn; уже созданные враги не меняются
    pub fn set_prototype(&mut self, prototype: Option<EnemyPrototype>) {
        self.prototype = prototype;
    }

    /// CreateEntity(data, position)
    ///
    /// `data = None` → None, ничего не создаётся (не ошибка).
    /// Prototype есть → instantiate, иначе bare entity `Enemy_{id}` в `position`.
    /// Затем EnemyData применяется к entity (identity + stats).
    pub fn create_enemy(
        &self,
        commands: &mut Commands,
        data: Option<&EnemyData>,
        position: Vec3,
    ) -> Option<Entity> {
        let data = data?;

        let entity = match &self.prototype {
            Some(prototype) => prototype.instantiate(commands, position),
            None => commands
                .spawn((
                    Name::new(shell_name(&data.id)),
                    Transform::from_translation(position),
                ))
                .id(),
        };

        commands.entity(entity).insert(data.apply());

        log(&format!(
            "Enemy '{}' created: {:?} at {:?}",
            data.id, entity, position
        ));
        Some(entity)
    }
}
