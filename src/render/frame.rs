//! Draw request generation
//!
//! Turns a [`GameState`] into an ordered list of primitive draw commands. The
//! presentation layer replays them onto whatever surface it owns.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState, GhostState};

/// Radius of a regular dot
pub const DOT_RADIUS: f32 = 3.0;
/// Radius of a power pellet
pub const POWER_PELLET_RADIUS: f32 = 6.0;
/// Half-opening of the player's mouth in radians
pub const MOUTH_ANGLE: f32 = 0.2;

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const WALL: &str = "blue";
    pub const DOT: &str = "white";
    pub const POWER_PELLET: &str = "white";
    pub const PLAYER: &str = "yellow";
    pub const FRIGHTENED: &str = "lightblue";
    pub const GAME_OVER: &str = "red";
    pub const BANNER: &str = "white";
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear { width: f32, height: f32 },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    /// Filled pie slice from `start` to `end` (radians, clockwise)
    Wedge {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: &'static str,
    },
    /// Centered text
    Text {
        center: Vec2,
        text: String,
        font: &'static str,
        color: &'static str,
    },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Build the draw list for the current state
    ///
    /// Order: clear, walls, collectibles, player, ghosts, overlay text.
    pub fn build(state: &GameState) -> Self {
        let size = state.grid.pixel_size();
        let cell = state.grid.cell_size();
        let mut commands = vec![DrawCommand::Clear {
            width: size.x,
            height: size.y,
        }];

        commands.extend(state.grid.cells().filter(|(_, _, c)| c.is_wall()).map(
            |(col, row, _)| {
                let origin = state.grid.cell_origin(col, row);
                DrawCommand::Rect {
                    x: origin.x,
                    y: origin.y,
                    width: cell,
                    height: cell,
                    color: colors::WALL,
                }
            },
        ));

        if state.phase == GamePhase::Ready {
            commands.push(banner(size, "Press Start", colors::BANNER));
            return Self {
                width: size.x,
                height: size.y,
                commands,
            };
        }

        commands.extend(state.collectibles.dots().iter().map(|&center| {
            DrawCommand::Circle {
                center,
                radius: DOT_RADIUS,
                color: colors::DOT,
            }
        }));
        commands.extend(state.collectibles.power_pellets().iter().map(|&center| {
            DrawCommand::Circle {
                center,
                radius: POWER_PELLET_RADIUS,
                color: colors::POWER_PELLET,
            }
        }));

        let player = &state.player.actor;
        let facing = player.direction.angle();
        commands.push(DrawCommand::Wedge {
            center: player.pos,
            radius: player.radius,
            start: facing + MOUTH_ANGLE,
            end: facing + TAU - MOUTH_ANGLE,
            color: colors::PLAYER,
        });

        commands.extend(state.ghosts.iter().map(|ghost| DrawCommand::Circle {
            center: ghost.actor.pos,
            radius: ghost.actor.radius,
            color: match ghost.state {
                GhostState::Frightened => colors::FRIGHTENED,
                GhostState::Normal | GhostState::Eaten => ghost.color.css(),
            },
        }));

        if state.phase == GamePhase::GameOver {
            commands.push(banner(size, "Game Over!", colors::GAME_OVER));
        }

        Self {
            width: size.x,
            height: size.y,
            commands,
        }
    }
}

fn banner(size: Vec2, text: &str, color: &'static str) -> DrawCommand {
    DrawCommand::Text {
        center: size / 2.0,
        text: text.to_string(),
        font: "48px Arial",
        color,
    }
}
