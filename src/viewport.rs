use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::telemetry::{ScrollSnapshot, ScrollTelemetry};

const EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Clone, Copy)]
pub struct Viewport {
    pub snapshot: ReadSignal<ScrollSnapshot>,
    pub height: ReadSignal<f64>,
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn inner_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Track scroll position, viewport height and the top of `anchor`.
///
/// Listeners are passive and removed when the owning view is disposed.
pub fn use_viewport(anchor: NodeRef<html::Div>) -> Viewport {
    let (snapshot, set_snapshot) = signal(ScrollSnapshot::default());
    let (height, set_height) = signal(inner_height());
    let telemetry = StoredValue::new(ScrollTelemetry::default());

    let sample = move || {
        let anchor_top = anchor
            .get_untracked()
            .map(|el| el.get_bounding_client_rect().top())
            .unwrap_or(f64::INFINITY);
        let next = ScrollSnapshot {
            scroll_offset: scroll_y(),
            anchor_top,
        };
        if telemetry.try_update_value(|t| t.observe(next)) == Some(true) {
            let _ = set_snapshot.try_set(next);
        }
        let h = inner_height();
        if height.try_get_untracked() != Some(h) {
            let _ = set_height.try_set(h);
        }
    };

    // Re-sample once the anchor is in the DOM
    Effect::new(move |_| {
        let _ = anchor.get();
        sample();
    });

    let Some(window) = web_sys::window() else {
        return Viewport { snapshot, height };
    };

    let listener = Closure::<dyn Fn()>::new(sample);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    for event in EVENTS {
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            listener.as_ref().unchecked_ref(),
            &options,
        );
    }

    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        let Some(listener) = listener.try_update_value(|l| l.take()).flatten() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            for event in EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
    });

    Viewport { snapshot, height }
}

/// Pages other than home open at the top, as a fresh page load would.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
