//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 Mintkit • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://docs.pinata.cloud" class="footer-link" target="_blank">
                    "Pinata Docs"
                </a>
                <a href="https://sepolia.basescan.org" class="footer-link" target="_blank">
                    "BaseScan"
                </a>
                <a href="https://github.com/mintkit" class="footer-link" target="_blank">
                    "GitHub"
                </a>
            </div>
        </footer>
    }
}
