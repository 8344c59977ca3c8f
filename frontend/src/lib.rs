//! Mintkit - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for composing NFT metadata, pinning it to
//! IPFS and deploying ERC-721/ERC-1155 contracts on Base Sepolia.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (network badge)                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── StandardsInfo (ERC-721 vs ERC-1155 primer)             │
//! │  ├── MetadataForm (editor, pin and deploy controls)         │
//! │  ├── IpfsCard (after a successful pin)                      │
//! │  ├── DeployingNotice + DeploymentStatus (while deploying)   │
//! │  └── DeployedCard / ErrorCard (attempt outcome)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (wire DTOs, AppError)
//! - [`metadata`] - Draft editing and metadata composition
//! - [`progress`] - Deployment progress state and its timer driver
//! - [`components`] - UI components (Header, MetadataForm, etc.)
//! - [`services`] - Collaborator clients (pin gateway, deploy API)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod metadata;
pub mod progress;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Standards
    TokenStandard,
    // API
    DeployRequest, DeployResponse, PinReceipt,
    // Errors
    AppError, AppResult,
};

// Metadata composition
pub use metadata::{MetadataDraft, NftMetadata};

// Progress tracking
pub use progress::{
    deployment_steps, DeploymentProgress, DeploymentStep, ProgressDriver, StepStatus,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Mintkit - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (ipfs_url, set_ipfs_url) = create_signal(None::<String>);
    let (deploying, set_deploying) = create_signal(false);
    let (progress, set_progress) = create_signal(None::<DeploymentProgress>);
    let (deployed_address, set_deployed_address) = create_signal(None::<String>);
    let (error_message, set_error_message) = create_signal(None::<String>);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <StandardsInfo/>

            <MetadataForm
                ipfs_url=ipfs_url
                set_ipfs_url=set_ipfs_url
                deploying=deploying
                set_deploying=set_deploying
                set_progress=set_progress
                set_deployed_address=set_deployed_address
                set_error_message=set_error_message
            />

            // Gateway link of the last pin
            <Show
                when=move || ipfs_url.get().is_some()
                fallback=|| view! { }
            >
                <IpfsCard ipfs_url=ipfs_url/>
            </Show>

            // Long-running call notice
            <Show
                when=move || deploying.get()
                fallback=|| view! { }
            >
                <DeployingNotice/>
            </Show>

            // Step list stays up after resolution, until the next
            // attempt replaces it
            <Show
                when=move || progress.get().is_some()
                fallback=|| view! { }
            >
                <DeploymentStatus progress=progress/>
            </Show>

            <Show
                when=move || deployed_address.get().is_some()
                fallback=|| view! { }
            >
                <DeployedCard deployed_address=deployed_address/>
            </Show>

            <Show
                when=move || error_message.get().is_some()
                fallback=|| view! { }
            >
                <ErrorCard error_message=error_message/>
            </Show>
        </div>

        <Footer/>
    }
}
