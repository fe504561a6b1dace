use leptos::prelude::*;

use crate::telemetry::{star_field, ParallaxFrame, RoverState, BACKGROUND_NORMALIZATION, STAR_COUNT};
use crate::timer;
use crate::viewport::Viewport;

const ROVER_FRAME_MS: i32 = 16;

/// Mars scene behind every page: stars, Earth, mountains, colony, terrain
/// and the rover, each moving at its own rate as the page scrolls.
#[component]
pub fn ParallaxBackground(viewport: Viewport) -> impl IntoView {
    let frame = Memo::new(move |_| {
        ParallaxFrame::derive(viewport.snapshot.get().scroll_offset, BACKGROUND_NORMALIZATION)
    });

    let stars = star_field(STAR_COUNT, js_sys::Math::random);

    // The rover runs on its own clock, independent of scrolling
    let (rover, set_rover) = signal(RoverState::default());
    let last_frame = StoredValue::new(None::<f64>);
    let rover_timer = timer::set_interval(
        move || {
            let now = timer::now_ms();
            if let Some(Some(last)) = last_frame.try_update_value(|l| l.replace(now)) {
                let _ = set_rover.try_update(|r| r.advance(now - last));
            }
        },
        ROVER_FRAME_MS,
    );
    on_cleanup(move || {
        if let Some(handle) = rover_timer {
            timer::clear_interval(handle);
        }
    });

    view! {
        <div class="mars-scene" aria-hidden="true">
            <div class="space-gradient"></div>

            <div
                class="stars-layer"
                style:transform=move || format!("translateY({}px)", frame.get().stars_offset)
            >
                {stars
                    .into_iter()
                    .map(|star| {
                        view! {
                            <div
                                class="star"
                                style=format!(
                                    "width: {size}px; height: {size}px; left: {}%; top: {}vh; opacity: {op}; box-shadow: 0 0 {}px rgba(255, 255, 255, {op});",
                                    star.left_pct,
                                    star.top_vh,
                                    star.size * 2.0,
                                    size = star.size,
                                    op = star.opacity,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div
                class="earth"
                style:left=move || format!("{}%", frame.get().earth_x_pct)
                style:top=move || format!("{}vh", frame.get().earth_y_vh)
                style:transform=move || format!("rotate({}deg)", frame.get().earth_rotation_deg)
            >
                <svg viewBox="0 0 200 200">
                    <defs>
                        <radialGradient id="earthGradient" cx="35%" cy="35%">
                            <stop offset="0%" stop-color="#6495ED"></stop>
                            <stop offset="50%" stop-color="#4169E1"></stop>
                            <stop offset="100%" stop-color="#1E3A5F"></stop>
                        </radialGradient>
                    </defs>
                    <circle cx="100" cy="100" r="90" fill="url(#earthGradient)"></circle>
                    <path
                        d="M60,50 Q80,45 100,50 T140,55 Q145,65 140,75 L120,80 Q110,85 95,80 L70,70 Z"
                        fill="#228B22"
                        opacity="0.7"
                    ></path>
                    <path
                        d="M130,90 Q150,85 160,95 L165,120 Q160,135 145,130 L125,125 Q120,115 125,105 Z"
                        fill="#228B22"
                        opacity="0.6"
                    ></path>
                    <ellipse cx="85" cy="140" rx="25" ry="15" fill="#228B22" opacity="0.55"></ellipse>
                    <ellipse cx="70" cy="60" rx="15" ry="8" fill="white" opacity="0.4"></ellipse>
                </svg>
            </div>

            <div
                class="mountains-layer"
                style:transform=move || format!("translateY({}px)", -frame.get().mountains_offset)
            >
                <svg viewBox="0 0 1200 400" preserveAspectRatio="none">
                    <path
                        d="M0,250 L200,200 L350,220 L500,180 L650,210 L800,170 L950,200 L1200,190 L1200,400 L0,400 Z"
                        fill="#8B4513"
                        opacity="0.3"
                    ></path>
                    <path
                        d="M0,280 L150,240 L300,260 L450,230 L600,250 L750,220 L900,245 L1200,235 L1200,400 L0,400 Z"
                        fill="#A0522D"
                        opacity="0.4"
                    ></path>
                </svg>
            </div>

            <div
                class="terrain-layer"
                style:transform=move || format!("translateY({}px)", -frame.get().terrain_offset)
            >
                <svg viewBox="0 0 1200 300" preserveAspectRatio="none">
                    <path
                        d="M0,150 Q150,120 300,140 T600,130 T900,145 T1200,135 L1200,300 L0,300 Z"
                        fill="#ff7f50"
                        opacity="0.6"
                    ></path>
                    <path
                        d="M0,180 Q200,160 400,175 T800,170 T1200,180 L1200,300 L0,300 Z"
                        fill="#ff6347"
                        opacity="0.8"
                    ></path>
                    <path
                        d="M0,220 Q150,200 300,210 T600,205 T900,215 T1200,210 L1200,1500 L0,1500 Z"
                        fill="#d2691e"
                    ></path>
                </svg>
            </div>

            <div
                class="colony-layer"
                style:transform=move || format!("translateY({}px)", -frame.get().colony_offset)
            >
                <div class="dome" style="bottom: 24vh; left: 15%; width: 6rem;"></div>
                <div class="dome" style="bottom: 26vh; left: 35%; width: 8rem;"></div>
                <div class="dome" style="bottom: 23vh; left: 58%; width: 5rem;"></div>
                <div class="building" style="bottom: 22vh; left: 25%; width: 4rem; height: 5rem;"></div>
                <div class="building" style="bottom: 24vh; left: 48%; width: 3rem; height: 6rem;"></div>
                <div class="tower" style="bottom: 22vh; left: 80%;"></div>
            </div>

            <div
                class="rover"
                style:left=move || format!("{}%", rover.get().x_pct())
                style:transform=move || {
                    let r = rover.get();
                    format!(
                        "translateY({}px) rotate({}deg) scaleX({})",
                        r.bounce_px() - frame.get().terrain_offset,
                        r.tilt_deg(),
                        r.direction(),
                    )
                }
            >
                <svg viewBox="0 0 280 180">
                    <rect x="60" y="95" width="160" height="40" rx="6" fill="#A0A0A0"></rect>
                    <rect x="80" y="80" width="120" height="15" fill="#1a1a2e"></rect>
                    <rect x="50" y="140" width="180" height="8" rx="2" fill="#505050"></rect>
                    <circle cx="60" cy="155" r="22" fill="#3a3a3a" stroke="#1a1a1a" stroke-width="3"></circle>
                    <circle cx="140" cy="155" r="22" fill="#3a3a3a" stroke="#1a1a1a" stroke-width="3"></circle>
                    <circle cx="220" cy="155" r="22" fill="#3a3a3a" stroke="#1a1a1a" stroke-width="3"></circle>
                    <line x1="190" y1="95" x2="200" y2="45" stroke="#606060" stroke-width="4"></line>
                    <rect x="188" y="30" width="28" height="18" rx="3" fill="#808080"></rect>
                </svg>
                <Show when=move || rover.get().shows_dust()>
                    <div class="rover-dust"></div>
                </Show>
            </div>
        </div>
    }
}
