//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame. The order of the
//! steps is fixed so that identical inputs always give identical sessions.

use super::direction::Direction;
use super::ghost::GhostState;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest arrow key intent; becomes the player's pending turn
    pub direction: Option<Direction>,
    /// Start button: begins a fresh session whatever the current phase
    pub start: bool,
}

/// Advance the game state by one frame of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    if input.start {
        state.restart();
    }

    // Nothing moves before the first start or after game over
    if !state.is_running() {
        return;
    }

    if let Some(dir) = input.direction {
        state.player.next_direction = dir;
    }

    state.time_ticks += 1;
    state.clock_ms += dt_ms;
    state.update_power_timer();

    // 1. Ghost AI and movement
    let player_pos = state.player.actor.pos;
    for ghost in &mut state.ghosts {
        ghost.update(&state.grid, player_pos, &mut state.rng);
    }

    // 2. Ghost contact. One caught-by-ghost event per frame at most.
    let mut caught = false;
    for idx in 0..state.ghosts.len() {
        let ghost = &state.ghosts[idx];
        if !ghost.actor.overlaps(&state.player.actor) {
            continue;
        }
        let ghost_state = ghost.state;
        match ghost_state {
            GhostState::Frightened => state.eat_ghost(idx),
            GhostState::Normal => {
                caught = true;
                break;
            }
            GhostState::Eaten => {}
        }
    }
    if caught && state.lose_life() {
        return;
    }

    // 3. Player movement
    state.player.update(&state.grid);

    // 4. Collectibles under the player
    let consumed = state
        .collectibles
        .consume_near(state.player.actor.pos, state.player.actor.radius);
    if consumed.is_empty() {
        return;
    }

    state.add_score(consumed.score_delta);
    if consumed.dots_eaten > 0 {
        state.push_event(GameEvent::DotEaten {
            count: consumed.dots_eaten,
        });
    }
    if consumed.triggered_power {
        state.push_event(GameEvent::PowerPelletEaten);
        state.activate_power();
    }
    if consumed.repopulated {
        state.push_event(GameEvent::LevelRepopulated);
        log::info!("Maze cleared at score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::Tuning;
    use crate::consts::SIM_DT_MS;
    use crate::sim::ghost::{Ghost, GhostColor};
    use crate::sim::grid::Grid;
    use crate::sim::player::Player;
    use crate::sim::state::GamePhase;

    /// Two sealed corridors: the player's on row 1, a second one on row 3.
    /// The stray dot on row 3 keeps the maze from ever being cleared.
    fn scenario_state() -> GameState {
        corridor_state(
            "##########\n\
             # .o     #\n\
             ##########\n\
             #     .  #\n\
             ##########",
        )
    }

    fn corridor_state(layout: &str) -> GameState {
        let grid = Grid::parse(layout, 20.0).unwrap();
        let mut state = GameState::with_grid(42, Tuning::default(), grid);
        state.restart();
        state.drain_events();

        state.player = Player::new(Vec2::new(30.0, 30.0), 6.0, 2.0);
        let mut rng = rand_pcg::Pcg32::new(1, 1);
        state.ghosts = vec![
            Ghost::new(Vec2::new(150.0, 30.0), GhostColor::Red, 6.0, 1.5, &mut rng),
            Ghost::new(Vec2::new(170.0, 70.0), GhostColor::Pink, 6.0, 1.5, &mut rng),
        ];
        state
    }

    fn run(state: &mut GameState, ticks: u32) {
        for _ in 0..ticks {
            tick(state, &TickInput::default(), SIM_DT_MS);
        }
    }

    #[test]
    fn test_ready_session_does_not_tick() {
        let mut state = GameState::new(5);
        let before = state.player.actor.pos;
        tick(&mut state, &TickInput::default(), SIM_DT_MS);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.actor.pos, before);
    }

    #[test]
    fn test_start_command_begins_session() {
        let mut state = GameState::new(5);
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT_MS);
        assert!(state.is_running());
        assert_eq!(state.time_ticks, 1);
        // The player starts on a dot and moves right off it
        assert_eq!(state.player.actor.pos, Vec2::new(32.0, 30.0));
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_direction_input_sets_pending_turn() {
        let mut state = GameState::new(5);
        state.restart();
        let input = TickInput {
            direction: Some(Direction::Down),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT_MS);
        assert_eq!(state.player.next_direction, Direction::Down);
        assert_eq!(state.player.actor.direction, Direction::Down);
        assert_eq!(state.player.actor.pos, Vec2::new(30.0, 32.0));
    }

    #[test]
    fn test_dot_power_ghost_expiry_scenario() {
        let mut state = scenario_state();
        assert_eq!(state.score(), 0);
        assert_eq!(state.lives(), 3);

        // Dot at x = 50 is eaten once the player passes x = 44
        run(&mut state, 8);
        assert_eq!(state.player.actor.pos.x, 46.0);
        assert_eq!(state.score(), 10);
        // Only the stray dot on row 3 is left
        assert_eq!(state.collectibles.dots(), &[Vec2::new(130.0, 70.0)]);

        // Power pellet at x = 70 is eaten at x = 66
        run(&mut state, 10);
        assert_eq!(state.player.actor.pos.x, 66.0);
        assert_eq!(state.score(), 60);
        assert!(state.is_powered());
        assert!(state.ghosts.iter().all(|g| g.state == GhostState::Frightened));

        // Put the red ghost on top of the player
        state.ghosts[0].actor.pos = state.player.actor.pos;
        run(&mut state, 1);
        assert_eq!(state.score(), 260);
        assert_eq!(state.ghosts[0].state, GhostState::Eaten);
        assert_eq!(state.ghosts[1].state, GhostState::Frightened);
        assert_eq!(state.lives(), 3);

        // Let the countdown run out
        tick(&mut state, &TickInput::default(), 10_000.0);
        assert!(!state.is_powered());
        assert_eq!(state.ghosts[1].state, GhostState::Normal);
        assert_ne!(state.ghosts[0].state, GhostState::Frightened);
        assert_eq!(state.score(), 260);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PowerPelletEaten));
        assert!(events.contains(&GameEvent::GhostEaten {
            color: GhostColor::Red
        }));
        assert!(events.contains(&GameEvent::PowerExpired));
    }

    #[test]
    fn test_maze_refills_after_last_collectible() {
        let mut state = corridor_state(
            "##########\n\
             # .o     #\n\
             ##########\n\
             #        #\n\
             ##########",
        );
        // Both collectibles sit ahead of the player in the corridor
        run(&mut state, 18);
        assert_eq!(state.score(), 60);
        let (dots, pellets) = state.collectibles.initial_counts();
        assert_eq!(state.collectibles.remaining(), dots + pellets);
        assert!(state.drain_events().contains(&GameEvent::LevelRepopulated));
    }

    #[test]
    fn test_normal_contact_costs_one_life() {
        let mut state = scenario_state();
        state.ghosts[0].actor.pos = state.player.actor.pos;
        state.ghosts[1].actor.pos = state.player.actor.pos;
        run(&mut state, 1);
        assert_eq!(state.lives(), 2);
        assert!(state.is_running());
        assert_eq!(state.ghosts[0].actor.pos, state.ghosts[0].spawn());
        assert_eq!(state.ghosts[1].actor.pos, state.ghosts[1].spawn());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LifeLost { lives_left: 2 }]
        );
    }

    #[test]
    fn test_last_life_is_game_over() {
        let mut state = scenario_state();
        state.lives = 1;
        state.ghosts[0].actor.pos = state.player.actor.pos;
        run(&mut state, 1);
        assert_eq!(state.lives(), 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.is_running());

        // No further ticks take effect
        let ticks = state.time_ticks;
        let pos = state.player.actor.pos;
        run(&mut state, 30);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.player.actor.pos, pos);
        assert_eq!(state.lives(), 0);
    }

    #[test]
    fn test_start_after_game_over_restarts() {
        let mut state = GameState::new(9);
        state.restart();
        state.lives = 1;
        state.ghosts[0].actor.pos = state.player.actor.pos;
        run(&mut state, 1);
        assert_eq!(state.phase, GamePhase::GameOver);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT_MS);
        assert!(state.is_running());
        assert_eq!(state.lives(), 3);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_eaten_ghost_is_harmless() {
        let mut state = scenario_state();
        state.ghosts[0].state = GhostState::Eaten;
        state.ghosts[0].actor.pos = state.player.actor.pos + Vec2::new(4.0, 0.0);
        run(&mut state, 1);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                start: true,
                ..Default::default()
            },
            TickInput {
                direction: Some(Direction::Down),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                direction: Some(Direction::Right),
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[(i / 150) % inputs.len()];
            let input = if i % 150 == 0 { *input } else { TickInput::default() };
            tick(&mut state1, &input, SIM_DT_MS);
            tick(&mut state2, &input, SIM_DT_MS);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.lives(), state2.lives());
        assert_eq!(state1.player.actor.pos, state2.player.actor.pos);
        for (a, b) in state1.ghosts.iter().zip(&state2.ghosts) {
            assert_eq!(a.actor.pos, b.actor.pos);
            assert_eq!(a.state, b.state);
        }
    }
}
