//! Visual slot: что рисовать, а не как
//!
//! Рендер-слой (внешний) читает `SpriteVisual` через Changed<SpriteVisual>
//! и синхронизирует свои sprite nodes. Симуляция только пишет сюда.

use bevy::prelude::*;

/// Размер процедурного placeholder (1×1 world unit)
pub const PLACEHOLDER_SIZE: Vec2 = Vec2::ONE;

/// Источник изображения
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum SpriteImage {
    /// Pre-authored asset (путь в asset storage рендер-слоя)
    Authored(String),
    /// Процедурный solid-color квадрат
    Placeholder { color: Color, size: Vec2 },
}

impl SpriteImage {
    pub fn placeholder(color: Color) -> Self {
        Self::Placeholder {
            color,
            size: PLACEHOLDER_SIZE,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Renderable slot: текущее изображение + видимость + tint
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SpriteVisual {
    pub image: Option<SpriteImage>,
    pub visible: bool,
    pub tint: Color,
}

impl Default for SpriteVisual {
    fn default() -> Self {
        Self {
            image: None,
            visible: false,
            tint: Color::WHITE,
        }
    }
}

impl SpriteVisual {
    pub fn authored(path: impl Into<String>) -> Self {
        Self {
            image: Some(SpriteImage::Authored(path.into())),
            visible: true,
            tint: Color::WHITE,
        }
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}
