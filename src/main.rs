//! Maze Chomp entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use maze_chomp::Tuning;
    use maze_chomp::consts::*;
    use maze_chomp::render::{CanvasRenderer, Frame};
    use maze_chomp::sim::{Direction, GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        accumulator: f64,
        last_time: f64,
        /// An animation frame is scheduled
        loop_active: bool,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer) -> Self {
            Self {
                state,
                renderer,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                loop_active: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt_ms: f64) {
            self.accumulator += dt_ms.min(SIM_DT_MS * MAX_SUBSTEPS as f64);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, SIM_DT_MS);
                self.accumulator -= SIM_DT_MS;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input = TickInput::default();
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::DotEaten { .. } => {}
                    GameEvent::GameOver { score } => {
                        log::info!("Final score: {} (best {})", score, self.state.best_score)
                    }
                    other => log::debug!("{:?}", other),
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Err(e) = self.renderer.draw(&Frame::build(&self.state)) {
                log::error!("Render failed: {:?}", e);
            }
        }

        /// Update HUD elements
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score())));
            }
            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&format!("Lives: {}", self.state.lives())));
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Maze Chomp starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        log::info!("Seed: {}", seed);
        let state = GameState::with_tuning(seed, Tuning::load());

        let size = state.grid.pixel_size();
        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);

        let renderer = CanvasRenderer::new(&canvas)?;
        let game = Rc::new(RefCell::new(Game::new(state, renderer)));
        {
            let g = game.borrow();
            g.render();
            g.update_hud();
        }

        setup_keyboard(&window, game.clone())?;
        setup_start_button(&document, game)?;

        log::info!("Maze Chomp ready, press Start");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let direction = match event.key().as_str() {
                "ArrowUp" => Direction::Up,
                "ArrowDown" => Direction::Down,
                "ArrowLeft" => Direction::Left,
                "ArrowRight" => Direction::Right,
                _ => return,
            };
            // Keep the page from scrolling
            event.prevent_default();

            let mut g = game.borrow_mut();
            if g.state.is_running() {
                g.input.direction = Some(direction);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_start_button(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("startButton") else {
            log::warn!("No start button found");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let start_loop = {
                let mut g = game.borrow_mut();
                g.input.start = true;
                !std::mem::replace(&mut g.loop_active, true)
            };
            if start_loop {
                game.borrow_mut().last_time = 0.0;
                request_animation_frame(game.clone());
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                SIM_DT_MS
            };
            g.last_time = time;

            g.update(dt_ms);
            g.render();
            g.update_hud();

            // A pending start restarts a finished session on the next frame
            let keep = g.state.is_running() || g.input.start;
            g.loop_active = keep;
            keep
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Maze Chomp (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);
    demo_session(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a scripted session until game over or a tick limit, logging what happens
#[cfg(not(target_arch = "wasm32"))]
fn demo_session(seed: u64) {
    use maze_chomp::Tuning;
    use maze_chomp::consts::SIM_DT_MS;
    use maze_chomp::sim::{Direction, GameState, TickInput, tick};

    const MAX_TICKS: u64 = 60 * 120;
    const TURN_EVERY: u64 = 45;

    let mut state = GameState::with_tuning(seed, Tuning::load());
    log::info!("Seed: {}", seed);

    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
        SIM_DT_MS,
    );

    let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Left];
    for i in 1..MAX_TICKS {
        if !state.is_running() {
            break;
        }
        let direction = (i % TURN_EVERY == 0).then(|| turns[(i / TURN_EVERY) as usize % turns.len()]);
        tick(
            &mut state,
            &TickInput {
                direction,
                ..Default::default()
            },
            SIM_DT_MS,
        );
        for event in state.drain_events() {
            log::info!("[{:>5}] {:?}", state.time_ticks, event);
        }
    }

    println!(
        "Session over after {} ticks: score {}, lives {}, {} collectibles left",
        state.time_ticks,
        state.score(),
        state.lives(),
        state.collectibles.remaining()
    );
}
