//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, fixed step order
//! - Seeded RNG only
//! - Stable iteration order (ghosts in spawn-slot order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collectibles;
pub mod direction;
pub mod ghost;
pub mod grid;
pub mod player;
pub mod state;
pub mod tick;
pub mod timer;

pub use actor::{Actor, Probe};
pub use collectibles::{Collectible, CollectibleKind, Collectibles, Consumption, PelletScores};
pub use direction::Direction;
pub use ghost::{Ghost, GhostColor, GhostState};
pub use grid::{Cell, Grid, GridError};
pub use player::Player;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use timer::PowerTimer;
