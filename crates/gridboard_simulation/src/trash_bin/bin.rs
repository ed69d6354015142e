//! TrashBin — drop zone с hit-test и подсветкой

use bevy::prelude::*;
use bevy_rapier3d::prelude::Collider;

use crate::components::SpriteVisual;
use crate::registry::Service;

/// Радиус degraded-mode проверки, когда hit-region не задан (world units)
pub const TRASH_BIN_FALLBACK_RADIUS: f32 = 1.0;

pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 0.35, 0.35);

/// Drop zone
///
/// Hit-region — rapier shape в локальных координатах bin (Transform entity).
/// Без shape bin всё равно отвечает на запросы (proximity fallback).
#[derive(Component, Clone)]
#[require(Transform)]
pub struct TrashBin {
    hit_region: Option<Collider>,
    highlight_color: Color,
    normal_color: Option<Color>,
    highlighted: bool,
}

impl Service for TrashBin {}

impl Default for TrashBin {
    fn default() -> Self {
        Self {
            hit_region: None,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            normal_color: None,
            highlighted: false,
        }
    }
}

impl TrashBin {
    pub fn new(hit_region: Option<Collider>) -> Self {
        Self {
            hit_region,
            ..Default::default()
        }
    }

    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn has_hit_region(&self) -> bool {
        self.hit_region.is_some()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// IsPointOver: точка (в плоскости доски) внутри bin?
    ///
    /// Shape есть → точное containment, иначе distance < `TRASH_BIN_FALLBACK_RADIUS`.
    pub fn is_point_over(&self, transform: &Transform, point: Vec2) -> bool {
        let origin = transform.translation;

        match &self.hit_region {
            Some(shape) => shape.contains_point(origin, transform.rotation, point.extend(origin.z)),
            None => origin.truncate().distance(point) < TRASH_BIN_FALLBACK_RADIUS,
        }
    }

    /// SetHighlight: highlight tint ↔ исходный tint
    ///
    /// Исходный tint фиксируется при первом вызове. Без визуала — no-op.
    pub fn set_highlight(&mut self, active: bool, visual: Option<&mut SpriteVisual>) {
        let Some(visual) = visual else {
            return;
        };

        let normal = *self.normal_color.get_or_insert(visual.tint);
        visual.tint = if active { self.highlight_color } else { normal };
        self.highlighted = active;
    }
}
