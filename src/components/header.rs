use leptos::prelude::*;

use crate::earnings::{format_delta, format_money, CounterTween, HeaderVisibility};
use crate::rewards::RewardsContext;
use crate::timer;
use crate::viewport::use_viewport;

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/10ep7k9FxkevmyLvNVe8t2HCa_Fd2GVAZ/view?usp=sharing";

/// Fixed header with the earnings counter and site navigation.
///
/// The counter has two slots: the running total and, while a reveal is in
/// progress, the amount just earned. The header hides when scrolling down
/// and is pinned while a reveal is showing.
#[component]
pub fn Header() -> impl IntoView {
    let rewards = expect_context::<RewardsContext>();
    let viewport = use_viewport(NodeRef::new());

    let visibility = StoredValue::new(HeaderVisibility::default());
    let (visible, set_visible) = signal(true);
    let revealing = Memo::new(move |_| rewards.display.with(|d| d.is_revealing()));
    let delta = Memo::new(move |_| rewards.display.with(|d| d.shown_delta()));

    // Only real scrolling hides the header; the end of a reveal does not
    Effect::new(move |_| {
        let scroll = viewport.snapshot.get().scroll_offset;
        let pinned = revealing.get_untracked();
        if let Some(shown) = visibility.try_update_value(|h| h.on_scroll(scroll, pinned)) {
            set_visible.set(shown);
        }
    });

    Effect::new(move |_| {
        if !revealing.get() {
            return;
        }
        let shown = visibility.try_update_value(|h| {
            h.pin();
            h.is_visible()
        });
        if let Some(shown) = shown {
            set_visible.set(shown);
        }
    });

    // Count the total slot up to each new committed total
    let (counter, set_counter) = signal(rewards.display.with_untracked(|d| d.shown_total()));
    let tween_timer = StoredValue::new(None::<i32>);

    Effect::new(move |_| {
        let target = rewards.display.with(|d| d.shown_total());
        if let Some(handle) = tween_timer.get_value() {
            timer::clear_interval(handle);
            tween_timer.set_value(None);
        }

        let from = counter.get_untracked();
        if from == target {
            return;
        }

        let mut tween = CounterTween::new(from, target);
        let interval = tween.interval_ms();
        let handle = timer::set_interval(
            move || {
                let _ = set_counter.try_set(tween.advance());
                if tween.is_done() {
                    if let Some(handle) = tween_timer.try_get_value().flatten() {
                        timer::clear_interval(handle);
                    }
                }
            },
            interval,
        );
        tween_timer.set_value(handle);
    });

    on_cleanup(move || {
        if let Some(handle) = tween_timer.try_get_value().flatten() {
            timer::clear_interval(handle);
        }
    });

    view! {
        <header class="site-header" class:hidden=move || !visible.get()>
            <div class="site-header-inner">
                <div class="earnings">
                    <span class="earnings-label">"Your Earnings:"</span>
                    <div class="earnings-slots" class:revealing=move || revealing.get()>
                        <span class="earnings-total">{move || format_money(counter.get())}</span>
                        <span class="earnings-delta">{move || format_delta(delta.get())}</span>
                    </div>
                </div>

                <nav class="site-nav">
                    <a href="/" class="nav-pill">"Home"</a>
                    <span class="nav-divider">"|"</span>
                    <a href="/projects" class="nav-pill">"Projects"</a>
                    <span class="nav-divider">"|"</span>
                    <a href="/about" class="nav-pill">"About Me"</a>
                    <span class="nav-divider">"|"</span>
                    <a href=RESUME_URL target="_blank" rel="noopener noreferrer" class="nav-pill">
                        "Resume"
                    </a>
                </nav>
            </div>
        </header>
    }
}
