//! Deployment status cards: progress list, IPFS link, outcome banners.

use leptos::*;

use crate::config::EXPLORER_URL;
use crate::progress::{DeploymentProgress, StepStatus};

/// Icon shown in front of a step, one per status.
fn step_icon(status: StepStatus) -> View {
    match status {
        StepStatus::Pending => view! { <span class="step-icon step-dot"></span> }.into_view(),
        StepStatus::Loading => view! { <span class="step-icon spinner"></span> }.into_view(),
        StepStatus::Complete => view! { <span class="step-icon step-check">"✓"</span> }.into_view(),
        StepStatus::Error => view! { <span class="step-icon step-cross">"✕"</span> }.into_view(),
    }
}

/// Scripted step list for the current (or last) deployment attempt.
///
/// The whole list is re-rendered on every change; it never holds more
/// than a handful of rows.
#[component]
pub fn DeploymentStatus(progress: ReadSignal<Option<DeploymentProgress>>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Deployment Progress"</h3>
            <div class="steps">
                {move || {
                    progress.get().map(|state| {
                        state
                            .steps()
                            .iter()
                            .map(|step| {
                                let status = step.status;
                                view! {
                                    <div class="step">
                                        {step_icon(status)}
                                        <span class=format!("step-label {}", status.css_class())>
                                            {step.message.clone()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

/// Card with the gateway link of the last pinned document.
#[component]
pub fn IpfsCard(ipfs_url: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="card">
            <p class="card-label">"IPFS URL:"</p>
            {move || {
                ipfs_url.get().map(|url| {
                    view! {
                        <a href=url.clone() target="_blank" rel="noopener noreferrer" class="link break-all">
                            {url}
                        </a>
                    }
                })
            }}
        </div>
    }
}

/// Banner shown while a deploy request is in flight.
#[component]
pub fn DeployingNotice() -> impl IntoView {
    view! {
        <div class="card card-info">
            <p>
                "Attempting to deploy contract. This may take a few minutes "
                "as we request funds from faucet..."
            </p>
        </div>
    }
}

/// Success banner with the contract address and an explorer link.
#[component]
pub fn DeployedCard(deployed_address: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="card card-success">
            <p class="card-label">"Contract Deployed Successfully!"</p>
            {move || {
                deployed_address.get().map(|address| {
                    view! {
                        <p class="break-all">"Contract Address: " {address.clone()}</p>
                        <a
                            href=format!("{}/address/{}", EXPLORER_URL, address)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="link"
                        >
                            "View on BaseScan"
                        </a>
                    }
                })
            }}
        </div>
    }
}

/// Inline error banner for failed uploads and deployments.
#[component]
pub fn ErrorCard(error_message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="card card-error">
            <p>{move || error_message.get().unwrap_or_default()}</p>
        </div>
    }
}
