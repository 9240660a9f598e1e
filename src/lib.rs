//! Maze Chomp - a browser maze-chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, actors, ghost AI, session loop)
//! - `render`: Draw requests consumed by the canvas presentation layer
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz, one animation frame)
    pub const SIM_DT_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Side length of one maze cell in pixels
    pub const CELL_SIZE: f32 = 20.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 6.0;
    pub const PLAYER_SPEED: f32 = 2.0;
    /// Player spawn, in cell units (center of cell 1,1)
    pub const PLAYER_SPAWN_CELL: [f32; 2] = [1.5, 1.5];

    /// Ghost defaults
    pub const GHOST_RADIUS: f32 = 6.0;
    pub const GHOST_SPEED: f32 = 1.5;

    /// How long a power pellet keeps ghosts frightened
    pub const POWER_PELLET_DURATION_MS: f64 = 10_000.0;

    /// Scoring
    pub const DOT_SCORE: u64 = 10;
    pub const POWER_PELLET_SCORE: u64 = 50;
    pub const GHOST_SCORE: u64 = 200;

    pub const STARTING_LIVES: u32 = 3;
}
