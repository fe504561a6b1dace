use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div>
                    <p class="footer-copyright">"© 2025 AARON RHIM. All rights reserved."</p>
                    <p class="footer-credit">"Designed and developed by AARON RHIM."</p>
                </div>
                <div class="footer-links">
                    <a href="https://github.com/aaronrhim" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        "GitHub"
                    </a>
                    <a href="https://www.linkedin.com/in/aaron-rhim" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </footer>
    }
}
