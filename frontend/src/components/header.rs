use leptos::*;

use crate::config::NETWORK_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"MINTKIT"</a>
                <span class="badge">{NETWORK_NAME}</span>
            </div>
            <div class="header-right">
                <span class="network-note">"testnet only"</span>
            </div>
        </header>
    }
}
