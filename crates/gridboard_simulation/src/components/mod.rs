//! ECS Components, общие для нескольких доменов
//!
//! - actor: runtime состояние живых entity (Health)
//! - visual: data-driven описание визуала (SpriteVisual), рендерит внешний слой

pub mod actor;
pub mod visual;

pub use actor::*;
pub use visual::*;
