use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// A one-shot `setTimeout` wrapper that cancels when dropped.
///
/// Dropping the handle before the delay elapses clears the underlying
/// browser timer, which is what makes the autosave debounce work: each
/// new keystroke replaces (and thereby cancels) the pending handle.
/// Call [`Timeout::forget`] for timers that must run to completion.
pub struct Timeout {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// Schedules `f` to run once after `ms` milliseconds.
    pub fn new<F: FnOnce() + 'static>(ms: i32, f: F) -> Self {
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);

        let id = web_sys::window()
            .and_then(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        closure.as_ref().unchecked_ref::<Function>(),
                        ms,
                    )
                    .ok()
            })
            .unwrap_or(0);

        Self {
            id,
            closure: Some(closure),
        }
    }

    /// Leaks the handle so the timer fires no matter what.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }

    /// Explicitly cancels the timer. Equivalent to dropping the handle.
    pub fn cancel(self) {}

    fn clear(&mut self) {
        if self.closure.take().is_some() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(self.id);
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Runs `f` on the next animation frame.
pub fn request_animation_frame<F: FnOnce() + 'static>(f: F) {
    let mut f = Some(f);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);

    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref::<Function>());
    }
    closure.forget();
}

/// Resolves after `ms` milliseconds on the browser event loop.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
