pub mod animation;
pub mod runner;

pub use animation::AnimationLoop;
pub use runner::{Scoreboard, SimRunner};
pub use hoop_engine;

use wasm_bindgen::JsValue;

/// Convert a Rust error into a JavaScript `Error` for a rejected export.
pub fn js_error(e: &impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Generate all `#[wasm_bindgen]` exports for a court.
///
/// Generates:
/// - `thread_local!` storage for the SimRunner and its animation loop
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (lifecycle, pointer input, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod court;
///
/// hoop_web::export_simulation!(court::config(), "my-court");
/// ```
///
/// # Arguments
///
/// - `$config`: An expression evaluating to a `hoop_engine::SimConfig`
/// - `$name`: A string literal used in log messages
///
/// Pointer exports return `true` when the event changed the drag state.
/// Rejected input is logged and returns `false`.
#[macro_export]
macro_rules! export_simulation {
    ($config:expr, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner>> = RefCell::new(None);
            static LOOP: RefCell<Option<$crate::AnimationLoop>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Simulation not initialized. Call sim_init() first.");
                f(runner)
            })
        }

        fn install(result: Result<$crate::SimRunner, $crate::hoop_engine::ConfigError>) -> Result<(), JsValue> {
            let runner = result.map_err(|e| {
                log::error!("{}: {}", $name, e);
                $crate::js_error(&e)
            })?;
            sim_stop_loop();
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $name);
            Ok(())
        }

        fn sim_stop_loop() {
            // Dropping the loop cancels its pending frame.
            let stopped = LOOP.with(|cell| cell.borrow_mut().take());
            drop(stopped);
        }

        fn log_input(
            result: Result<$crate::hoop_engine::DragTransition, $crate::hoop_engine::InputError>,
        ) -> bool {
            match result {
                Ok(t) => t != $crate::hoop_engine::DragTransition::Ignored,
                Err(e) => {
                    log::warn!("{}: {}", $name, e);
                    false
                }
            }
        }

        #[wasm_bindgen]
        pub fn sim_init() -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
            install($crate::SimRunner::new($config))
        }

        /// Like `sim_init`, with a JSON override of the default config.
        #[wasm_bindgen]
        pub fn sim_init_with_config(json: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
            install($crate::SimRunner::from_json(json))
        }

        /// Start the match and drive it from `requestAnimationFrame`.
        #[wasm_bindgen]
        pub fn sim_start() -> Result<(), JsValue> {
            sim_stop_loop();
            with_runner(|r| r.start());
            let animation = $crate::AnimationLoop::start(|dt| {
                RUNNER
                    .try_with(|cell| match cell.try_borrow_mut() {
                        Ok(mut borrow) => match borrow.as_mut() {
                            Some(runner) => {
                                runner.tick(dt);
                                runner.is_running()
                            }
                            None => false,
                        },
                        // Re-entered from an export; try again next frame.
                        Err(_) => true,
                    })
                    .unwrap_or(false)
            })?;
            LOOP.with(|cell| {
                *cell.borrow_mut() = Some(animation);
            });
            Ok(())
        }

        /// Stop the animation loop and the scheduler. No tick runs afterwards.
        #[wasm_bindgen]
        pub fn sim_stop() {
            sim_stop_loop();
            with_runner(|r| r.stop());
        }

        /// Advance by `dt` seconds. For hosts that own their frame loop;
        /// only ticks between `sim_start` and `sim_stop`.
        #[wasm_bindgen]
        pub fn sim_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn sim_set_active(active: bool) {
            with_runner(|r| r.set_active(active));
        }

        #[wasm_bindgen]
        pub fn sim_set_surface(width: f32, height: f32) {
            with_runner(|r| r.set_surface(width, height));
        }

        #[wasm_bindgen]
        pub fn sim_restart() -> Result<(), JsValue> {
            with_runner(|r| r.restart()).map_err(|e| $crate::js_error(&e))
        }

        // ---- Pointer input ----

        #[wasm_bindgen]
        pub fn sim_pointer_down(x: f32, y: f32) -> bool {
            log_input(with_runner(|r| r.pointer_down(x, y)))
        }

        #[wasm_bindgen]
        pub fn sim_pointer_move(x: f32, y: f32) -> bool {
            log_input(with_runner(|r| r.pointer_move(x, y)))
        }

        #[wasm_bindgen]
        pub fn sim_pointer_up(x: f32, y: f32) -> bool {
            log_input(with_runner(|r| r.pointer_up(x, y)))
        }

        #[wasm_bindgen]
        pub fn sim_pointer_leave() -> bool {
            with_runner(|r| r.pointer_leave()) != $crate::hoop_engine::DragTransition::Ignored
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_buffer_ptr() -> *const f32 {
            with_runner(|r| r.buffer_ptr())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        /// Scores since the last call. The host owns the running total.
        #[wasm_bindgen]
        pub fn take_score_count() -> u32 {
            with_runner(|r| r.take_score_count())
        }

        #[wasm_bindgen]
        pub fn get_total_score() -> u32 {
            with_runner(|r| r.scoreboard().total())
        }
    };
}
