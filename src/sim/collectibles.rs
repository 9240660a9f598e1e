//! Dot and power pellet registry
//!
//! Collectibles are generated from the grid's pellet cells and removed as the
//! player eats them. Once both sets are empty the registry refills itself from
//! the same layout, so the maze never runs dry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use crate::consts::{DOT_SCORE, POWER_PELLET_SCORE};

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Dot,
    PowerPellet,
}

/// A collectible entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub kind: CollectibleKind,
}

/// Points awarded per collectible kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PelletScores {
    pub dot: u64,
    pub power_pellet: u64,
}

impl Default for PelletScores {
    fn default() -> Self {
        Self {
            dot: DOT_SCORE,
            power_pellet: POWER_PELLET_SCORE,
        }
    }
}

/// Outcome of one consumption pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Consumption {
    pub score_delta: u64,
    /// At least one power pellet was eaten
    pub triggered_power: bool,
    pub dots_eaten: u32,
    pub power_pellets_eaten: u32,
    /// Both sets emptied and were refilled from the layout
    pub repopulated: bool,
}

impl Consumption {
    pub fn is_empty(&self) -> bool {
        self.dots_eaten == 0 && self.power_pellets_eaten == 0
    }
}

/// Live dots and power pellets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectibles {
    dots: Vec<Vec2>,
    power_pellets: Vec<Vec2>,
    /// Full set as generated from the grid, used to refill
    layout: Vec<Collectible>,
    scores: PelletScores,
}

impl Collectibles {
    /// Build the registry from a grid and populate it
    pub fn new(grid: &Grid, scores: PelletScores) -> Self {
        let mut registry = Self {
            dots: Vec::new(),
            power_pellets: Vec::new(),
            layout: Vec::new(),
            scores,
        };
        registry.initialize(grid);
        registry
    }

    /// Rescan the grid and repopulate every collectible
    pub fn initialize(&mut self, grid: &Grid) {
        self.layout = grid
            .cells()
            .filter_map(|(col, row, cell)| {
                let kind = match cell {
                    Cell::Pellet => CollectibleKind::Dot,
                    Cell::PowerPellet => CollectibleKind::PowerPellet,
                    Cell::Wall | Cell::Open => return None,
                };
                Some(Collectible {
                    pos: grid.cell_center(col, row),
                    kind,
                })
            })
            .collect();
        self.repopulate();
    }

    /// Refill both sets from the stored layout
    pub fn repopulate(&mut self) {
        self.dots = self.positions_of(CollectibleKind::Dot);
        self.power_pellets = self.positions_of(CollectibleKind::PowerPellet);
    }

    fn positions_of(&self, kind: CollectibleKind) -> Vec<Vec2> {
        self.layout
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.pos)
            .collect()
    }

    /// Remove every collectible strictly within `radius` of `point`
    pub fn consume_near(&mut self, point: Vec2, radius: f32) -> Consumption {
        let dots_before = self.dots.len();
        self.dots.retain(|dot| dot.distance(point) >= radius);
        let dots_eaten = (dots_before - self.dots.len()) as u32;

        let pellets_before = self.power_pellets.len();
        self.power_pellets
            .retain(|pellet| pellet.distance(point) >= radius);
        let power_pellets_eaten = (pellets_before - self.power_pellets.len()) as u32;

        let mut result = Consumption {
            score_delta: dots_eaten as u64 * self.scores.dot
                + power_pellets_eaten as u64 * self.scores.power_pellet,
            triggered_power: power_pellets_eaten > 0,
            dots_eaten,
            power_pellets_eaten,
            repopulated: false,
        };

        if self.is_cleared() && !self.layout.is_empty() {
            self.repopulate();
            result.repopulated = true;
            log::debug!("Maze cleared, repopulated {} collectibles", self.layout.len());
        }

        result
    }

    /// Both live sets are empty
    pub fn is_cleared(&self) -> bool {
        self.dots.is_empty() && self.power_pellets.is_empty()
    }

    pub fn dots(&self) -> &[Vec2] {
        &self.dots
    }

    pub fn power_pellets(&self) -> &[Vec2] {
        &self.power_pellets
    }

    /// Live collectibles remaining
    pub fn remaining(&self) -> usize {
        self.dots.len() + self.power_pellets.len()
    }

    /// Collectible counts of a fresh layout as (dots, power pellets)
    pub fn initial_counts(&self) -> (usize, usize) {
        let dots = self
            .layout
            .iter()
            .filter(|c| c.kind == CollectibleKind::Dot)
            .count();
        (dots, self.layout.len() - dots)
    }
}
