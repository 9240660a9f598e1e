//! Cardinal movement directions

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Direction of travel on screen (y grows downward)
///
/// The declaration order matches the quarter-turn index used for drawing:
/// Right = 0, Down = 1, Left = 2, Up = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All directions in quarter-turn order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The 180° reversal of this direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// Unit vector in screen space
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::X,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Up => Vec2::NEG_Y,
        }
    }

    /// Quarter-turn index (Right = 0 ... Up = 3)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Screen angle in radians, clockwise from +x
    pub fn angle(self) -> f32 {
        self.index() as f32 * std::f32::consts::FRAC_PI_2
    }

    /// Uniformly random direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Direction along the axis of greatest displacement from `from` to `to`
    ///
    /// Horizontal wins ties. A zero horizontal delta on the horizontal branch
    /// resolves to Left, a zero vertical delta to Up.
    pub fn toward(from: Vec2, to: Vec2) -> Self {
        let delta = to - from;
        if delta.x.abs() >= delta.y.abs() {
            if delta.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if delta.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}
