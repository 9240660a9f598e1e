//! Shared motion and contact primitives for the player and ghosts
//!
//! Wall checks sample a single point (see [`Grid::is_wall`]). Each probe style
//! picks which point stands in for the actor's body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Grid;

/// Which point stands in for the actor when testing a step against walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Step destination pushed forward by the radius (player movement)
    LeadingEdge,
    /// Step destination itself (ghost movement)
    Body,
    /// Step destination itself, sampled with a one pixel wider buffer (ghost steering)
    Lookahead,
}

/// A moving circle in maze space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick
    pub speed: f32,
    pub direction: Direction,
}

impl Actor {
    pub fn new(pos: Vec2, radius: f32, speed: f32, direction: Direction) -> Self {
        Self {
            pos,
            radius,
            speed,
            direction,
        }
    }

    /// Where one step in `dir` would land
    #[inline]
    pub fn step_target(&self, dir: Direction) -> Vec2 {
        self.pos + dir.unit() * self.speed
    }

    /// Whether one step in `dir` would run into a wall
    pub fn is_blocked(&self, grid: &Grid, dir: Direction, probe: Probe) -> bool {
        let target = self.step_target(dir);
        match probe {
            Probe::LeadingEdge => grid.is_wall_at(target + dir.unit() * self.radius, 0.0),
            Probe::Body => grid.is_wall_at(target, self.radius),
            Probe::Lookahead => grid.is_wall_at(target, self.radius + 1.0),
        }
    }

    /// Step once in the current direction unless blocked
    ///
    /// Returns whether the actor moved. A blocked step leaves the position untouched.
    pub fn try_step(&mut self, grid: &Grid, probe: Probe) -> bool {
        if self.is_blocked(grid, self.direction, probe) {
            return false;
        }
        self.pos = self.step_target(self.direction);
        true
    }

    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }

    /// Circles overlap (center distance strictly below the radius sum)
    pub fn overlaps(&self, other: &Actor) -> bool {
        self.distance_to(other.pos) < self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_room() -> Grid {
        Grid::parse("#####\n#   #\n#   #\n#   #\n#####", 20.0).unwrap()
    }

    #[test]
    fn test_step_moves_by_speed() {
        let grid = open_room();
        let mut actor = Actor::new(Vec2::new(50.0, 50.0), 6.0, 2.0, Direction::Down);
        assert!(actor.try_step(&grid, Probe::LeadingEdge));
        assert_eq!(actor.pos, Vec2::new(50.0, 52.0));
    }

    #[test]
    fn test_leading_edge_stops_short_of_wall() {
        let grid = open_room();
        // Right wall starts at x = 80; 72 + 2 + 6 = 80 hits it
        let mut actor = Actor::new(Vec2::new(72.0, 50.0), 6.0, 2.0, Direction::Right);
        assert!(!actor.try_step(&grid, Probe::LeadingEdge));
        assert_eq!(actor.pos, Vec2::new(72.0, 50.0));

        // Body probe only samples the step destination, so it still fits
        assert!(actor.try_step(&grid, Probe::Body));
        assert_eq!(actor.pos, Vec2::new(74.0, 50.0));
    }

    #[test]
    fn test_blocked_never_enters_wall() {
        let grid = open_room();
        let mut actor = Actor::new(Vec2::new(50.0, 50.0), 6.0, 1.5, Direction::Up);
        for _ in 0..100 {
            actor.try_step(&grid, Probe::Body);
            assert!(!grid.is_wall_at(actor.pos, 0.0));
        }
        assert!(actor.pos.y >= 20.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Actor::new(Vec2::new(0.0, 0.0), 6.0, 2.0, Direction::Right);
        let touching = Actor::new(Vec2::new(12.0, 0.0), 6.0, 1.5, Direction::Left);
        let inside = Actor::new(Vec2::new(11.9, 0.0), 6.0, 1.5, Direction::Left);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }
}
