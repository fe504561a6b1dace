//! Thin wrappers over `window.setTimeout` / `setInterval`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Run `f` once after `ms`. Returns the handle for [`clear_timeout`].
pub fn set_timeout(f: impl FnOnce() + 'static, ms: i32) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = Closure::once(f);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    callback.forget();
    Some(id)
}

pub fn clear_timeout(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(id);
    }
}

/// Run `f` every `ms` until [`clear_interval`] is called with the handle.
pub fn set_interval(f: impl FnMut() + 'static, ms: i32) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    callback.forget();
    Some(id)
}

pub fn clear_interval(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_interval_with_handle(id);
    }
}

/// Milliseconds since page load, for frame deltas.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
