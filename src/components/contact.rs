use leptos::prelude::*;

use crate::components::clickable_word::ClickableWord;
use crate::earnings::format_money;
use crate::rewards::RewardsContext;

const SOCIAL_VALUE: i64 = 1000;

const SOCIALS: [(&str, &str, &str); 3] = [
    ("social-github", "GitHub", "https://github.com/aaronrhim"),
    ("social-linkedin", "LinkedIn", "https://www.linkedin.com/in/aaron-rhim"),
    ("social-twitter", "Twitter", "https://twitter.com"),
];

#[component]
pub fn Contact() -> impl IntoView {
    let rewards = expect_context::<RewardsContext>();
    let total = Memo::new(move |_| rewards.display.with(|d| d.settled_total()));

    view! {
        <section class="page-section contact">
            <h2>"Ready to Cash Out?"</h2>
            <p class="contact-earned">
                "You've earned "
                <span class="contact-total">{move || format_money(total.get())}</span>
                " exploring my portfolio!"
            </p>
            <p class="contact-pitch">
                "Let's turn those earnings into a real "
                <ClickableWord id="contact-collaboration" value=5000>"collaboration"</ClickableWord>
                ". Reach out and let's build something amazing together."
            </p>
            <a href="mailto:your.email@example.com" class="cta-button">"Get In Touch"</a>
            <div class="social-links">
                {SOCIALS
                    .iter()
                    .map(|&(id, label, link)| {
                        view! {
                            <a
                                href=link
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=label
                                class="social-link"
                                on:click=move |_| {
                                    rewards.collect(id, SOCIAL_VALUE);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
