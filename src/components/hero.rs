use leptos::prelude::*;

use crate::components::clickable_word::ClickableWord;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-card">
                <h1 class="hero-name">"Aaron Rhim"</h1>
                <div class="hero-rule"></div>
                <p class="hero-intro">
                    "Hi, I'm Aaron, an AI enthusiast who loves exploring the unknown... 🚀"
                </p>
            </div>
            <p class="hero-hint">
                "Welcome to my portfolio! Try clicking on the "
                <ClickableWord id="hero-red-words" value=500>"red words"</ClickableWord>
                " throughout the site to increase your earnings. Scroll down to checkout some of my other work--and good luck exploring! :)"
            </p>
        </section>
    }
}
