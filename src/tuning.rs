//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here. Defaults reproduce the
//! classic board; a page can override any subset with a JSON blob.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::GhostColor;
use crate::sim::collectibles::PelletScores;

/// Where a ghost starts, in cell units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostSpawn {
    pub cell: [f32; 2],
    pub color: GhostColor,
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub cell_size: f32,
    pub player_radius: f32,
    /// Pixels per tick
    pub player_speed: f32,
    /// Player spawn in cell units
    pub player_spawn: [f32; 2],
    pub ghost_radius: f32,
    /// Pixels per tick
    pub ghost_speed: f32,
    pub ghost_spawns: Vec<GhostSpawn>,
    pub power_duration_ms: f64,
    pub dot_score: u64,
    pub power_pellet_score: u64,
    pub ghost_score: u64,
    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_spawn: PLAYER_SPAWN_CELL,
            ghost_radius: GHOST_RADIUS,
            ghost_speed: GHOST_SPEED,
            ghost_spawns: vec![
                GhostSpawn {
                    cell: [14.5, 8.5],
                    color: GhostColor::Red,
                },
                GhostSpawn {
                    cell: [14.5, 9.5],
                    color: GhostColor::Pink,
                },
                GhostSpawn {
                    cell: [9.5, 9.5],
                    color: GhostColor::Cyan,
                },
                GhostSpawn {
                    cell: [5.5, 5.5],
                    color: GhostColor::Orange,
                },
            ],
            power_duration_ms: POWER_PELLET_DURATION_MS,
            dot_score: DOT_SCORE,
            power_pellet_score: POWER_PELLET_SCORE,
            ghost_score: GHOST_SCORE,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Cell-unit coordinates to pixels
    pub fn cell_to_pixels(&self, cell: [f32; 2]) -> Vec2 {
        Vec2::new(cell[0] * self.cell_size, cell[1] * self.cell_size)
    }

    pub fn player_spawn_pos(&self) -> Vec2 {
        self.cell_to_pixels(self.player_spawn)
    }

    pub fn pellet_scores(&self) -> PelletScores {
        PelletScores {
            dot: self.dot_score,
            power_pellet: self.power_pellet_score,
        }
    }

    /// Load overrides embedded in the page (`<script id="tuning" type="application/json">`)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    return tuning;
                }
                Err(e) => log::warn!("Ignoring malformed tuning: {}", e),
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
