//! Service registry — lookup сервисов по capability type
//!
//! # Architecture
//! - `ServiceRegistry` (Resource) хранит capability → provider entity
//! - Self-registration через observers: `OnAdd<T>` регистрирует, `OnRemove<T>` удаляет
//! - Сервис активен ровно пока его компонент живёт на entity
//!
//! Registry может быть удалён раньше сервисов (shutdown) — observers это переживают.

use bevy::prelude::*;

pub mod service_registry;

pub use service_registry::{resolve_service, Service, ServiceRegistry};

use crate::logger::{log_error, log_warning};

/// Observer: компонент `T` появился → provider регистрируется
pub fn register_on_add<T: Service>(
    trigger: Trigger<OnAdd, T>,
    registry: Option<ResMut<ServiceRegistry>>,
) {
    let provider = trigger.target();

    let Some(mut registry) = registry else {
        log_warning(&format!(
            "ServiceRegistry missing: {:?} activated without registration ({})",
            provider,
            std::any::type_name::<T>()
        ));
        return;
    };

    // Политика: reject + error log, первый provider остаётся
    if let Err(err) = registry.register::<T>(provider) {
        log_error(&format!("Service activation rejected: {}", err));
    }
}

/// Observer: компонент `T` удалён (или entity despawn) → снять свою запись
pub fn unregister_on_remove<T: Service>(
    trigger: Trigger<OnRemove, T>,
    registry: Option<ResMut<ServiceRegistry>>,
) {
    // Registry уже снесён (shutdown) — нечего чистить
    if let Some(mut registry) = registry {
        registry.unregister_provider::<T>(trigger.target());
    }
}

/// Подключение self-registration для capability `T`
pub trait AppServiceExt {
    fn register_service<T: Service>(&mut self) -> &mut Self;
}

impl AppServiceExt for App {
    fn register_service<T: Service>(&mut self) -> &mut Self {
        self.init_resource::<ServiceRegistry>()
            .add_observer(register_on_add::<T>)
            .add_observer(unregister_on_remove::<T>)
    }
}

/// Registry plugin: resource + observers для сервисов доски
///
/// Сервисы: `EnemyFactory`, `TrashBin`.
pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ServiceRegistry>()
            .register_service::<crate::enemy::EnemyFactory>()
            .register_service::<crate::trash_bin::TrashBin>();
    }
}
