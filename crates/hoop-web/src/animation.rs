use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    window: web_sys::Window,
    raf_id: Cell<Option<i32>>,
    last_ms: Cell<Option<f64>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<FrameCallback>>,
}

impl LoopState {
    fn request(&self) {
        if self.stopped.get() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {e:?}");
                self.raf_id.set(None);
            }
        }
    }
}

/// A `requestAnimationFrame` loop that hands each frame's delta (in seconds)
/// to `on_frame`.
///
/// `on_frame` returns `false` to stop requesting frames. [`AnimationLoop::stop`]
/// (or dropping the loop) cancels the pending frame and releases the callback,
/// so nothing runs after teardown. Do not call `stop` from inside `on_frame`;
/// return `false` instead.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut(f32) -> bool + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from(js_sys::Error::new("no window")))?;
        let state = Rc::new(LoopState {
            window,
            raf_id: Cell::new(None),
            last_ms: Cell::new(None),
            stopped: Cell::new(false),
            callback: RefCell::new(None),
        });

        // The closure holds a weak handle so dropping the loop frees everything.
        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |now_ms: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.raf_id.set(None);
            if state.stopped.get() {
                return;
            }
            let dt = match state.last_ms.replace(Some(now_ms)) {
                Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
                None => 0.0,
            };
            if on_frame(dt) {
                state.request();
            } else {
                state.stopped.set(true);
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.request();
        log::debug!("animation loop started");
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }

    /// Cancel the pending frame and release the callback.
    pub fn stop(&mut self) {
        self.state.stopped.set(true);
        if let Some(id) = self.state.raf_id.take() {
            if let Err(e) = self.state.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
        if self.state.callback.borrow_mut().take().is_some() {
            log::debug!("animation loop stopped");
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
