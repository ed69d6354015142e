//! Tile — одна клетка доски
//!
//! State machine: Uninitialized (coord = None) → Initialized.
//! Общие hooks идут в два явных шага: base, затем variant.
//! Variant не может пропустить base (click analytics, логи).

use bevy::prelude::*;

use super::grass::GrassTile;
use crate::components::SpriteVisual;
use crate::config::BoardConfig;
use crate::logger::{log, log_warning};

/// Закрытый набор variants
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum TileKind {
    /// Только base поведение
    Plain,
    Grass(GrassTile),
}

impl TileKind {
    pub fn grass() -> Self {
        Self::Grass(GrassTile::default())
    }

    pub fn label(&self) -> &'static str {
        match self {
            TileKind::Plain => "plain",
            TileKind::Grass(_) => "grass",
        }
    }

    fn on_variant_initialize(&mut self, coord: IVec2, visual: &mut SpriteVisual, config: &BoardConfig) {
        match self {
            TileKind::Plain => {}
            TileKind::Grass(grass) => grass.on_initialize(coord, visual, config),
        }
    }

    fn on_variant_click(&mut self, clicks: u32, visual: &mut SpriteVisual, config: &BoardConfig) {
        match self {
            TileKind::Plain => {}
            TileKind::Grass(grass) => grass.on_click(clicks, visual, config),
        }
    }
}

/// Клетка доски
///
/// Visual slot (`SpriteVisual`) — Required Component, рендерит внешний слой.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(SpriteVisual)]
pub struct Tile {
    coord: Option<IVec2>,
    name: String,
    clicks: u32,
    kind: TileKind,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            coord: None,
            name: "Tile".to_string(),
            clicks: 0,
            kind,
        }
    }

    pub fn plain() -> Self {
        Self::new(TileKind::Plain)
    }

    pub fn grass() -> Self {
        Self::new(TileKind::grass())
    }

    pub fn coord(&self) -> Option<IVec2> {
        self.coord
    }

    pub fn is_initialized(&self) -> bool {
        self.coord.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    /// Initialize(x, y): base (coords + имя), затем variant
    ///
    /// Повторный вызов допустим: координаты перезаписываются, variant решает сам.
    pub fn initialize(&mut self, x: i32, y: i32, visual: &mut SpriteVisual, config: &BoardConfig) {
        if let Some(previous) = self.coord {
            log_warning(&format!(
                "Tile {} re-initialized: {:?} → ({}, {})",
                self.name, previous, x, y
            ));
        }

        let coord = IVec2::new(x, y);
        self.on_base_initialize(coord);
        self.kind.on_variant_initialize(coord, visual, config);
    }

    /// OnTileClicked: base шаг, затем variant шаг
    ///
    /// Возвращает координату обработанной клетки; неинициализированная клетка игнорируется.
    pub fn click(&mut self, visual: &mut SpriteVisual, config: &BoardConfig) -> Option<IVec2> {
        let Some(coord) = self.coord else {
            log_warning(&format!("Click on uninitialized tile {} ignored", self.name));
            return None;
        };

        self.on_base_click(coord);
        self.kind.on_variant_click(self.clicks, visual, config);

        Some(coord)
    }

    fn on_base_initialize(&mut self, coord: IVec2) {
        self.coord = Some(coord);
        self.name = format!("Tile_{}_{}", coord.x, coord.y);
    }

    fn on_base_click(&mut self, coord: IVec2) {
        self.clicks += 1;
        log(&format!(
            "Tile {} ({}) clicked at {:?}, clicks = {}",
            self.name,
            self.kind.label(),
            coord,
            self.clicks
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_sets_exact_coords() {
        let config = BoardConfig::default();

        for (x, y) in [(0, 0), (4, 9), (-3, 7), (-12, -1), (i32::MIN, i32::MAX)] {
            let mut tile = Tile::plain();
            let mut visual = SpriteVisual::default();

            tile.initialize(x, y, &mut visual, &config);

            assert_eq!(tile.coord(), Some(IVec2::new(x, y)));
        }
    }

    #[test]
    fn test_base_sets_default_name() {
        let mut tile = Tile::plain();
        tile.initialize(2, -5, &mut SpriteVisual::default(), &BoardConfig::default());

        assert_eq!(tile.name(), "Tile_2_-5");
    }

    #[test]
    fn test_plain_tile_leaves_visual_untouched() {
        let mut tile = Tile::plain();
        let mut visual = SpriteVisual::default();

        tile.initialize(1, 1, &mut visual, &BoardConfig::default());

        assert_eq!(visual, SpriteVisual::default());
    }

    #[test]
    fn test_grass_creates_visible_placeholder() {
        let mut tile = Tile::grass();
        let mut visual = SpriteVisual::default();

        tile.initialize(0, 0, &mut visual, &BoardConfig::default());

        match visual.image {
            Some(crate::components::SpriteImage::Placeholder { size, .. }) => {
                assert_eq!(size, Vec2::ONE)
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
        assert!(visual.visible);
    }

    #[test]
    fn test_reinitialize_moves_coords_and_keeps_placeholder() {
        let config = BoardConfig::default();
        let mut tile = Tile::grass();
        let mut visual = SpriteVisual::default();

        tile.initialize(0, 0, &mut visual, &config);
        let first_image = visual.image.clone();
        tile.initialize(6, 6, &mut visual, &config);

        assert_eq!(tile.coord(), Some(IVec2::new(6, 6)));
        assert_eq!(visual.image, first_image);
    }

    #[test]
    fn test_click_uninitialized_is_ignored() {
        let mut tile = Tile::grass();
        let mut visual = SpriteVisual::default();

        assert_eq!(tile.click(&mut visual, &BoardConfig::default()), None);
        assert_eq!(tile.clicks(), 0);
    }

    #[test]
    fn test_base_click_runs_before_variant() {
        let config = BoardConfig {
            trample_threshold: 1,
            ..Default::default()
        };
        let mut tile = Tile::grass();
        let mut visual = SpriteVisual::default();
        tile.initialize(0, 0, &mut visual, &config);

        // Threshold = 1: variant видит уже увеличенный base счётчик на первом клике
        tile.click(&mut visual, &config);

        assert_eq!(tile.clicks(), 1);
        match tile.kind() {
            TileKind::Grass(grass) => assert!(grass.is_trampled()),
            TileKind::Plain => unreachable!(),
        }
    }

    #[test]
    fn test_grass_tramples_once() {
        let config = BoardConfig::default();
        let mut tile = Tile::grass();
        let mut visual = SpriteVisual::default();
        tile.initialize(0, 0, &mut visual, &config);

        for _ in 0..config.trample_threshold {
            tile.click(&mut visual, &config);
        }
        let trampled_tint = visual.tint;
        assert_ne!(trampled_tint, Color::WHITE);

        // Дальнейшие клики не затемняют повторно
        tile.click(&mut visual, &config);
        assert_eq!(visual.tint, trampled_tint);
        assert_eq!(tile.clicks(), config.trample_threshold + 1);
    }
}
