//! Ghost actors and their AI
//!
//! Each ghost runs a three-state machine:
//! - `Normal`: steer toward the player
//! - `Frightened`: steer away from the player (power pellet active)
//! - `Eaten`: head back to the spawn point, then resume as `Normal`
//!
//! Steering prefers the axis of greatest displacement. When that direction is
//! walled off, the ghost picks a random non-reversing direction instead. All
//! randomness comes from the caller's RNG so runs are reproducible.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Probe};
use super::direction::Direction;
use super::grid::Grid;

/// Behavioral state of a ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GhostState {
    #[default]
    Normal,
    Frightened,
    Eaten,
}

/// Ghost identity, one per starting slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostColor {
    Red,
    Pink,
    Cyan,
    Orange,
}

impl GhostColor {
    /// CSS color name used by the canvas
    pub fn css(self) -> &'static str {
        match self {
            GhostColor::Red => "red",
            GhostColor::Pink => "pink",
            GhostColor::Cyan => "cyan",
            GhostColor::Orange => "orange",
        }
    }
}

/// A ghost entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ghost {
    pub actor: Actor,
    pub state: GhostState,
    pub color: GhostColor,
    spawn: Vec2,
    spawn_direction: Direction,
}

impl Ghost {
    /// Create a ghost at `spawn` facing a random direction
    pub fn new<R: Rng + ?Sized>(
        spawn: Vec2,
        color: GhostColor,
        radius: f32,
        speed: f32,
        rng: &mut R,
    ) -> Self {
        let direction = Direction::random(rng);
        Self {
            actor: Actor::new(spawn, radius, speed, direction),
            state: GhostState::Normal,
            color,
            spawn,
            spawn_direction: direction,
        }
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Back to spawn position, direction and `Normal` state
    pub fn reset(&mut self) {
        self.actor.pos = self.spawn;
        self.actor.direction = self.spawn_direction;
        self.state = GhostState::Normal;
    }

    /// Advance one tick given the player's position
    pub fn update<R: Rng + ?Sized>(&mut self, grid: &Grid, player_pos: Vec2, rng: &mut R) {
        match self.state {
            GhostState::Eaten => self.return_to_spawn(grid),
            GhostState::Frightened => {
                let preferred = self.flee_direction(player_pos);
                self.choose_direction(grid, preferred, rng);
                self.update_position(grid, rng);
            }
            GhostState::Normal => {
                let preferred = self.chase_direction(player_pos);
                self.choose_direction(grid, preferred, rng);
                self.update_position(grid, rng);
            }
        }
    }

    /// Direction that closes the distance to the player fastest
    pub fn chase_direction(&self, player_pos: Vec2) -> Direction {
        Direction::toward(self.actor.pos, player_pos)
    }

    /// Direction that opens the distance to the player fastest
    pub fn flee_direction(&self, player_pos: Vec2) -> Direction {
        Direction::toward(player_pos, self.actor.pos)
    }

    /// Adopt `preferred` if open, else a random open non-reversing direction
    ///
    /// If every candidate is walled off the current direction is kept.
    pub fn choose_direction<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        preferred: Direction,
        rng: &mut R,
    ) {
        if !self.actor.is_blocked(grid, preferred, Probe::Lookahead) {
            self.actor.direction = preferred;
            return;
        }

        let reverse = self.actor.direction.opposite();
        let mut candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|dir| *dir != reverse)
            .collect();
        candidates.shuffle(rng);

        if let Some(dir) = candidates
            .into_iter()
            .find(|dir| !self.actor.is_blocked(grid, *dir, Probe::Lookahead))
        {
            self.actor.direction = dir;
        }
    }

    /// Step in the current direction; a wall hit rerolls the direction for next tick
    fn update_position<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        if !self.actor.try_step(grid, Probe::Body) {
            self.actor.direction = Direction::random(rng);
        }
    }

    /// Point the ghost at `target` along the dominant axis
    pub fn move_towards(&mut self, target: Vec2) {
        self.actor.direction = Direction::toward(self.actor.pos, target);
    }

    fn return_to_spawn(&mut self, grid: &Grid) {
        self.move_towards(self.spawn);
        if self.actor.distance_to(self.spawn) < self.actor.speed {
            self.state = GhostState::Normal;
            log::debug!("{:?} ghost back home", self.color);
            return;
        }
        self.actor.try_step(grid, Probe::Body);
    }

    /// Power pellet eaten. Returns whether the state changed.
    pub fn enter_frightened(&mut self) -> bool {
        if self.state == GhostState::Normal {
            self.state = GhostState::Frightened;
            return true;
        }
        false
    }

    /// Power pellet expired. Returns whether the state changed.
    pub fn exit_frightened(&mut self) -> bool {
        if self.state == GhostState::Frightened {
            self.state = GhostState::Normal;
            return true;
        }
        false
    }

    /// Caught by the player while frightened: send it home
    pub fn eat(&mut self) {
        self.state = GhostState::Eaten;
        self.actor.pos = self.spawn;
        log::debug!("{:?} ghost eaten", self.color);
    }
}
