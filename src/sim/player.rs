//! The player-controlled actor

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Probe};
use super::direction::Direction;
use super::grid::Grid;

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub actor: Actor,
    /// Requested turn, applied as soon as the maze allows it
    pub next_direction: Direction,
    spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            actor: Actor::new(spawn, radius, speed, Direction::Right),
            next_direction: Direction::Right,
            spawn,
        }
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Back to the spawn point, facing right with no pending turn
    pub fn reset(&mut self) {
        self.actor.pos = self.spawn;
        self.actor.direction = Direction::Right;
        self.next_direction = Direction::Right;
    }

    /// Advance one tick
    ///
    /// A pending turn is taken first if the leading edge has room, then the player
    /// steps in whatever direction it now faces. Returns whether it moved.
    pub fn update(&mut self, grid: &Grid) -> bool {
        if self.next_direction != self.actor.direction
            && !self
                .actor
                .is_blocked(grid, self.next_direction, Probe::LeadingEdge)
        {
            self.actor.direction = self.next_direction;
        }

        self.actor.try_step(grid, Probe::LeadingEdge)
    }
}
