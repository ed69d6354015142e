//! Board configuration (Resource)

use bevy::prelude::*;

/// Настройки доски
///
/// Значения по умолчанию = дефолтная сцена. Хост может перезаписать
/// resource до первого `initialize_tile`.
#[derive(Resource, Debug, Clone)]
pub struct BoardConfig {
    /// Seed для процедурного shade травы (детерминизм между запусками)
    pub seed: u64,
    /// Базовый цвет grass placeholder
    pub grass_color: Color,
    /// Разброс яркости placeholder: shade ∈ [1 - jitter, 1 + jitter]
    pub grass_shade_jitter: f32,
    /// После скольких кликов трава считается вытоптанной
    pub trample_threshold: u32,
    /// Множитель tint для вытоптанной травы
    pub trampled_darken: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grass_color: Color::srgb(0.30, 0.69, 0.31),
            grass_shade_jitter: 0.08,
            trample_threshold: 3,
            trampled_darken: 0.75,
        }
    }
}
