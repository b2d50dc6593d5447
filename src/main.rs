//! Turret Gallery entry point
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

    use turret_gallery::Settings;
    use turret_gallery::audio::AudioManager;
    use turret_gallery::hud::Hud;
    use turret_gallery::platform::{Command, InitError};
    use turret_gallery::renderer::{CanvasRenderer, Scene};
    use turret_gallery::sim::{GameEvent, GameState, tick};

    /// DOM id of the game canvas
    const CANVAS_ID: &str = "gameCanvas";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        hud: Hud,
        audio: Option<AudioManager>,
    }

    impl Game {
        /// Apply a command immediately, then flush any events it raised
        fn command(&mut self, command: Command) {
            command.apply(&mut self.state);
            self.flush_events();
        }

        /// One frame: simulate, draw, notify
        fn frame(&mut self) {
            tick(&mut self.state);
            self.renderer.draw(&Scene::capture(&self.state));
            self.flush_events();
        }

        fn flush_events(&mut self) {
            let events = self.state.drain_events();
            if events.is_empty() {
                return;
            }

            if let Some(score) = events.iter().rev().find_map(|e| match e {
                GameEvent::ScoreChanged { score } => Some(*score),
                _ => None,
            }) {
                self.hud.set_score(score);
            }

            if let Some(audio) = &self.audio {
                audio.play_events(&events);
            }
        }
    }

    pub fn run() -> Result<(), InitError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Turret Gallery starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let query = window.location().search().unwrap_or_default();
        let settings = Settings::from_query(&query);
        log::info!("Settings: {:?}", settings);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| InitError::NoCanvas(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(CANVAS_ID.to_string()))?;

        let renderer = CanvasRenderer::new(&canvas, settings.sprites)?;
        let hud = Hud::new(&document, settings.locale);
        let audio = settings
            .sound
            .then(|| AudioManager::new(settings.effective_volume()));

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed);
        hud.set_score(state.score);
        log::info!("Game initialized with seed: {}", state.seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            hud,
            audio,
        }));

        setup_input_handlers(&canvas, &document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Turret Gallery running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) {
        // Click fires
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().command(Command::Fire);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // A/D rotate
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = Command::from_key(&event.key()) {
                    game.borrow_mut().command(command);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window disappeared, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| {
        log::error!("Startup failed: {}", e);
        JsValue::from(e)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Turret Gallery (native) starting...");
    log::info!("Native mode has no canvas - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Sweep the turret back and forth, firing on a fixed cadence, and log how
/// the run went. Seeded, so every run is identical.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use turret_gallery::consts::AIM_STEP;
    use turret_gallery::platform::Command;
    use turret_gallery::renderer::Scene;
    use turret_gallery::sim::{GameEvent, GameState, tick};

    const SEED: u64 = 2024;
    const TICKS: u32 = 60 * 60;

    let mut state = GameState::new(SEED);
    log::info!("Headless demo, seed {}", state.seed);
    let mut shots = 0u32;
    let mut hits = 0u32;
    let mut kills = 0u32;
    let mut sweep = Command::RotateRight;

    for frame in 0..TICKS {
        if frame % 12 == 0 {
            // Swing between roughly 45° left and right of vertical
            let offset = state.turret.aim + std::f32::consts::FRAC_PI_2;
            if offset > 8.0 * AIM_STEP {
                sweep = Command::RotateLeft;
            } else if offset < -8.0 * AIM_STEP {
                sweep = Command::RotateRight;
            }
            sweep.apply(&mut state);
            if Command::Fire.apply(&mut state) {
                shots += 1;
            }
        }

        tick(&mut state);

        for event in state.drain_events() {
            match event {
                GameEvent::Hit { .. } => hits += 1,
                GameEvent::TargetDestroyed { tier, score } => {
                    kills += 1;
                    log::info!("frame {}: destroyed {:?} (+{})", frame, tier, score);
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Demo finished: {} shots, {} hits, {} kills, final score {}",
        shots,
        hits,
        kills,
        state.score
    );

    match serde_json::to_string_pretty(&Scene::capture(&state)) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final scene: {}", e),
    }
}
