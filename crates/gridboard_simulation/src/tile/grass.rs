//! Grass variant: процедурный placeholder + вытаптывание

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::components::{SpriteImage, SpriteVisual};
use crate::config::BoardConfig;

/// Декорация травы (приватное состояние variant)
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct GrassTile {
    shade: f32,
    trampled: bool,
}

impl Default for GrassTile {
    fn default() -> Self {
        Self {
            shade: 1.0,
            trampled: false,
        }
    }
}

impl GrassTile {
    pub fn is_trampled(&self) -> bool {
        self.trampled
    }

    pub fn shade(&self) -> f32 {
        self.shade
    }

    /// Variant шаг initialize: гарантирует наличие визуала и включает его
    ///
    /// Authored image не трогаем; без него — solid-color placeholder 1×1.
    pub(super) fn on_initialize(
        &mut self,
        coord: IVec2,
        visual: &mut SpriteVisual,
        config: &BoardConfig,
    ) {
        if visual.image.is_none() {
            self.shade = grass_shade(config, coord);
            visual.image = Some(SpriteImage::placeholder(scale_color(
                config.grass_color,
                self.shade,
            )));
        }

        visual.visible = true;
    }

    /// Variant шаг click: вызывается строго после base шага, `clicks` уже учитывает этот клик
    pub(super) fn on_click(&mut self, clicks: u32, visual: &mut SpriteVisual, config: &BoardConfig) {
        if self.trampled || clicks < config.trample_threshold {
            return;
        }

        self.trampled = true;
        visual.tint = scale_color(visual.tint, config.trampled_darken);
    }
}

/// Детерминированный shade для клетки: один и тот же seed + coord → один и тот же цвет
fn grass_shade(config: &BoardConfig, coord: IVec2) -> f32 {
    let jitter = config.grass_shade_jitter.abs().min(1.0);
    if jitter == 0.0 {
        return 1.0;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(coord_seed(config.seed, coord));
    rng.gen_range((1.0 - jitter)..=(1.0 + jitter))
}

fn coord_seed(seed: u64, coord: IVec2) -> u64 {
    let packed = ((coord.x as u32 as u64) << 32) | coord.y as u32 as u64;
    seed ^ packed
}

/// Умножает RGB (alpha без изменений), clamp в [0, 1]
pub(crate) fn scale_color(color: Color, factor: f32) -> Color {
    let srgba = color.to_srgba();
    Color::srgba(
        (srgba.red * factor).clamp(0.0, 1.0),
        (srgba.green * factor).clamp(0.0, 1.0),
        (srgba.blue * factor).clamp(0.0, 1.0),
        srgba.alpha,
    )
}
