use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::earnings::{format_delta, WORD_PULSE_MS};
use crate::rewards::RewardsContext;
use crate::timer;

/// A highlighted word worth `value` points, collectable once per session.
#[component]
pub fn ClickableWord(#[prop(into)] id: String, value: i64, children: Children) -> impl IntoView {
    let rewards = expect_context::<RewardsContext>();
    let (pulsing, set_pulsing) = signal(false);
    let (position, set_position) = signal((0.0_f64, 0.0_f64));
    let pulse_timer = StoredValue::new(None::<i32>);

    let claimed = {
        let id = id.clone();
        Memo::new(move |_| rewards.book.with(|b| b.is_claimed(&id)))
    };

    let on_click = move |ev: MouseEvent| {
        if pulsing.get_untracked() || !rewards.collect(&id, value) {
            return;
        }

        // Float the award from where the pointer landed
        if let Some(target) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            let rect = target.get_bounding_client_rect();
            set_position.set((
                ev.client_x() as f64 - rect.left(),
                ev.client_y() as f64 - rect.top(),
            ));
        }

        set_pulsing.set(true);
        let handle = timer::set_timeout(
            move || {
                let _ = set_pulsing.try_set(false);
            },
            WORD_PULSE_MS,
        );
        pulse_timer.set_value(handle);
    };

    on_cleanup(move || {
        if let Some(handle) = pulse_timer.try_get_value().flatten() {
            timer::clear_timeout(handle);
        }
    });

    view! {
        <span class="clickable-word-wrap">
            <span
                class="clickable-word"
                class:claimed=move || claimed.get()
                class:pulsing=move || pulsing.get()
                on:click=on_click
            >
                {children()}
            </span>
            <Show when=move || pulsing.get()>
                <span
                    class="money-float"
                    style:left=move || format!("{}px", position.get().0)
                    style:top=move || format!("{}px", position.get().1)
                >
                    {format_delta(value)}
                </span>
            </Show>
        </span>
    }
}
