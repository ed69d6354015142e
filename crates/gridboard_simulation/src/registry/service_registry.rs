//! ServiceRegistry — capability type → provider entity
//!
//! Явный context object (Resource), не глобальный singleton: всё, кому нужен
//! lookup, получают `Res<ServiceRegistry>` или `&World`.
//!
//! Дисциплина: владелец добавляет свою запись, владелец удаляет свою запись.
//! Двойная регистрация другой entity отклоняется (первый provider остаётся),
//! явная перезапись — только через `replace`.

use bevy::prelude::*;
use std::any::{type_name, TypeId};
use std::collections::HashMap;

use crate::error::RegistryError;
use crate::logger::log;

/// Capability marker: компонент, который можно найти через registry
///
/// Ключ lookup — сам тип компонента (`EnemyFactory`, `TrashBin`).
pub trait Service: Component {}

#[derive(Debug, Clone, Copy)]
struct ServiceEntry {
    provider: Entity,
    capability: &'static str,
}

#[derive(Resource, Debug, Default)]
pub struct ServiceRegistry {
    entries: HashMap<TypeId, ServiceEntry>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Регистрирует `provider` как единственный instance capability `T`.
    ///
    /// Повторная регистрация той же entity — Ok (idempotent).
    /// Другая entity → `RegistryError::AlreadyRegistered`, запись не меняется.
    pub fn register<T: Service>(&mut self, provider: Entity) -> Result<(), RegistryError> {
        let capability = type_name::<T>();

        if let Some(existing) = self.entries.get(&TypeId::of::<T>()) {
            if existing.provider == provider {
                return Ok(());
            }

            return Err(RegistryError::AlreadyRegistered {
                capability,
                existing: existing.provider,
                rejected: provider,
            });
        }

        self.entries
            .insert(TypeId::of::<T>(), ServiceEntry { provider, capability });
        log(&format!("📋 Registered service `{}` → {:?}", capability, provider));
        Ok(())
    }

    /// Явная перезапись (last-writer-wins), возвращает прежнего provider
    pub fn replace<T: Service>(&mut self, provider: Entity) -> Option<Entity> {
        let capability = type_name::<T>();
        let previous = self
            .entries
            .insert(TypeId::of::<T>(), ServiceEntry { provider, capability })
            .map(|entry| entry.provider);

        log(&format!(
            "📋 Replaced service `{}`: {:?} → {:?}",
            capability, previous, provider
        ));
        previous
    }

    /// Удаляет запись `T`. Отсутствие записи — не ошибка (порядок shutdown не гарантирован).
    pub fn unregister<T: Service>(&mut self) -> Option<Entity> {
        let removed = self
            .entries
            .remove(&TypeId::of::<T>())
            .map(|entry| entry.provider);

        if let Some(provider) = removed {
            log(&format!(
                "🗑️ Unregistered service `{}` ({:?})",
                type_name::<T>(),
                provider
            ));
        }
        removed
    }

    /// Удаляет запись `T` только если её владелец — `provider`.
    ///
    /// Отклонённый дубликат при despawn не должен снести чужую запись.
    pub fn unregister_provider<T: Service>(&mut self, provider: Entity) -> bool {
        match self.entries.get(&TypeId::of::<T>()) {
            Some(entry) if entry.provider == provider => self.unregister::<T>().is_some(),
            _ => false,
        }
    }

    /// Текущий provider capability `T` (None во время startup/shutdown — норма)
    pub fn resolve<T: Service>(&self) -> Option<Entity> {
        self.entries
            .get(&TypeId::of::<T>())
            .map(|entry| entry.provider)
    }

    pub fn contains<T: Service>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Имена зарегистрированных capabilities (debug overlay, логи)
    pub fn capabilities(&self) -> impl Iterator<Item = (&'static str, Entity)> + '_ {
        self.entries
            .values()
            .map(|entry| (entry.capability, entry.provider))
    }
}

/// Resolve capability `T` прямо из World: provider entity + его компонент
///
/// None если registry отсутствует, запись пуста или entity уже без компонента.
pub fn resolve_service<T: Service>(world: &World) -> Option<(Entity, &T)> {
    let provider = world.get_resource::<ServiceRegistry>()?.resolve::<T>()?;
    world.get::<T>(provider).map(|service| (provider, service))
}
