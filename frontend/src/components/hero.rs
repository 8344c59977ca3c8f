//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload NFT Metadata to Pinata & Deploy Contracts"</h1>
            <p class="subtitle">
                "Compose ERC-721 or ERC-1155 metadata, pin it to IPFS and deploy "
                "a contract pointing at it on Base Sepolia."
            </p>
        </div>
    }
}
