//! Ошибки симуляции
//!
//! Gameplay пути не возвращают ошибки (absence = `Option`, misconfiguration = fallback).
//! Здесь только то, что реально стоит показать вызывающему: lifecycle баги
//! registry и битый content.

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Вторая (другая) entity пытается занять уже занятую capability
    #[error("service `{capability}` already provided by {existing:?}, rejected {rejected:?}")]
    AlreadyRegistered {
        capability: &'static str,
        existing: Entity,
        rejected: Entity,
    },
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse enemy catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate enemy id `{0}` in catalog")]
    DuplicateEnemy(String),

    #[error("enemy record with empty id")]
    EmptyId,
}
