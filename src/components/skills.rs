use leptos::prelude::*;

use crate::components::clickable_word::ClickableWord;
use crate::earnings::format_delta;
use crate::rewards::RewardsContext;

#[derive(Clone, Copy)]
struct Skill {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    value: i64,
}

const SKILLS: [Skill; 4] = [
    Skill {
        id: "skill-development",
        icon: "</>",
        title: "Development",
        description: "Expert in React, TypeScript, and modern web technologies",
        value: 2500,
    },
    Skill {
        id: "skill-design",
        icon: "✎",
        title: "Design",
        description: "Creating beautiful, user-centered interfaces",
        value: 2000,
    },
    Skill {
        id: "skill-performance",
        icon: "🚀",
        title: "Performance",
        description: "Optimizing for speed and scalability",
        value: 1800,
    },
    Skill {
        id: "skill-collaboration",
        icon: "👥",
        title: "Collaboration",
        description: "Working effectively in agile teams",
        value: 1500,
    },
];

/// Skill cards are collectable too; each pays out once.
#[component]
pub fn Skills() -> impl IntoView {
    let rewards = expect_context::<RewardsContext>();

    view! {
        <section class="page-section shaded">
            <div class="section-heading">
                <h2>"Skills & Expertise"</h2>
                <p>
                    "What I bring to the "
                    <ClickableWord id="skills-table" value=2500>"table"</ClickableWord>
                </p>
            </div>
            <div class="card-grid four">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        let Skill { id, icon, title, description, value } = *skill;
                        view! {
                            <div
                                class="skill-card"
                                class:claimed=move || rewards.is_claimed(id)
                                on:click=move |_| {
                                    rewards.collect(id, value);
                                }
                            >
                                <span class="skill-icon">{icon}</span>
                                <h3>{title}</h3>
                                <p>{description}</p>
                                <p class="skill-value">{format_delta(value)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
