//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]: the board, actors,
//! score, lives, power countdown and RNG. The tick loop is the only writer.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collectibles::Collectibles;
use super::ghost::{Ghost, GhostColor, GhostState};
use super::grid::Grid;
use super::player::Player;
use super::timer::PowerTimer;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    Ready,
    /// Active gameplay, frames keep being scheduled
    Running,
    /// Out of lives
    GameOver,
}

/// Something that happened during a tick, for HUD, sound and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    DotEaten { count: u32 },
    PowerPelletEaten,
    GhostEaten { color: GhostColor },
    PowerExpired,
    LifeLost { lives_left: u32 },
    GameOver { score: u64 },
    /// Every collectible was eaten and the maze refilled
    LevelRepopulated,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed of the current session
    pub seed: u64,
    pub tuning: Tuning,
    pub grid: Grid,
    pub collectibles: Collectibles,
    pub player: Player,
    /// Ghosts in spawn-slot order
    pub ghosts: Vec<Ghost>,
    pub score: u64,
    /// Highest score seen since the page loaded
    pub best_score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    pub power_timer: PowerTimer,
    /// Game clock in milliseconds, advanced only while running
    pub clock_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Session on the classic board with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let grid = Grid::classic(tuning.cell_size);
        Self::with_grid(seed, tuning, grid)
    }

    /// Session on a custom board
    pub fn with_grid(seed: u64, tuning: Tuning, grid: Grid) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let collectibles = Collectibles::new(&grid, tuning.pellet_scores());
        let player = Player::new(
            tuning.player_spawn_pos(),
            tuning.player_radius,
            tuning.player_speed,
        );
        let ghosts = spawn_ghosts(&tuning, &mut rng);

        Self {
            seed,
            lives: tuning.starting_lives,
            tuning,
            grid,
            collectibles,
            player,
            ghosts,
            score: 0,
            best_score: 0,
            phase: GamePhase::Ready,
            power_timer: PowerTimer::default(),
            clock_ms: 0.0,
            time_ticks: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Start a fresh session: score, lives, board and ghosts all reset
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.player.reset();
        self.collectibles.initialize(&self.grid);
        self.ghosts = spawn_ghosts(&self.tuning, &mut self.rng);
        self.power_timer.cancel();
        self.clock_ms = 0.0;
        self.time_ticks = 0;
        self.events.clear();
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::SessionStarted);
        log::info!("Session started (best score {})", self.best_score);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Power pellet currently active
    pub fn is_powered(&self) -> bool {
        self.power_timer.is_armed()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub(crate) fn add_score(&mut self, points: u64) {
        self.score += points;
        self.best_score = self.best_score.max(self.score);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Frighten every ghost that is not on its way home and (re)start the countdown
    pub fn activate_power(&mut self) {
        let frightened = self
            .ghosts
            .iter_mut()
            .map(|g| g.enter_frightened())
            .filter(|changed| *changed)
            .count();
        let rearmed = self.power_timer.is_armed();
        self.power_timer
            .arm(self.clock_ms, self.tuning.power_duration_ms);
        log::debug!(
            "Power pellet: {} ghosts frightened{}",
            frightened,
            if rearmed { " (timer restarted)" } else { "" }
        );
    }

    /// Fire the power countdown if it is due
    pub fn update_power_timer(&mut self) {
        if self.power_timer.poll(self.clock_ms) {
            for ghost in &mut self.ghosts {
                ghost.exit_frightened();
            }
            self.push_event(GameEvent::PowerExpired);
            log::debug!("Power pellet expired at {:.0}ms", self.clock_ms);
        }
    }

    /// Player caught a frightened ghost
    pub fn eat_ghost(&mut self, idx: usize) {
        let Some(ghost) = self.ghosts.get_mut(idx) else {
            return;
        };
        if ghost.state != GhostState::Frightened {
            return;
        }
        ghost.eat();
        let color = ghost.color;
        self.add_score(self.tuning.ghost_score);
        self.push_event(GameEvent::GhostEaten { color });
    }

    /// Player caught by a ghost
    ///
    /// Returns true when this ends the session.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.power_timer.cancel();

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.push_event(GameEvent::GameOver { score: self.score });
            log::info!("Game over with score {}", self.score);
            return true;
        }

        self.reset_positions();
        self.push_event(GameEvent::LifeLost {
            lives_left: self.lives,
        });
        log::info!("Life lost, {} remaining", self.lives);
        false
    }

    /// Put the player and every ghost back at their spawns
    ///
    /// Score and the remaining collectibles are untouched.
    pub fn reset_positions(&mut self) {
        self.player.reset();
        for ghost in &mut self.ghosts {
            ghost.reset();
        }
        self.power_timer.cancel();
    }
}

/// Create the ghosts for every configured spawn slot
fn spawn_ghosts(tuning: &Tuning, rng: &mut Pcg32) -> Vec<Ghost> {
    tuning
        .ghost_spawns
        .iter()
        .map(|spawn| {
            Ghost::new(
                tuning.cell_to_pixels(spawn.cell),
                spawn.color,
                tuning.ghost_radius,
                tuning.ghost_speed,
                rng,
            )
        })
        .collect()
}
