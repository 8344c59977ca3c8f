//! Metadata editor with pinning and deployment controls.
//!
//! Owns the draft being edited and the upload flag; everything the
//! rest of the page needs to see (IPFS link, deployment state, errors)
//! is written through props.

use leptos::*;

use crate::components::AttributeInfo;
use crate::config::EXPLORER_URL;
use crate::metadata::MetadataDraft;
use crate::progress::{deployment_steps, DeploymentProgress, ProgressDriver};
use crate::services::{pin_metadata, request_deployment, Deployment};
use crate::types::{DeployRequest, TokenStandard};

/// Blocking prompt, used for validation failures and the deployment
/// summary.
fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

/// Text of the post-deployment summary prompt.
fn success_message(deployment: &Deployment) -> String {
    format!(
        "Contract successfully deployed!\n\n\
         Contract Address: {}\n\
         Wallet Address: {}\n\
         Wallet Balance: {} ETH\n\n\
         View on BaseScan: {}/address/{}",
        deployment.contract_address,
        deployment.wallet_address.as_deref().unwrap_or("unknown"),
        deployment.wallet_balance.as_deref().unwrap_or("unknown"),
        EXPLORER_URL,
        deployment.contract_address,
    )
}

#[component]
pub fn MetadataForm(
    ipfs_url: ReadSignal<Option<String>>,
    set_ipfs_url: WriteSignal<Option<String>>,
    deploying: ReadSignal<bool>,
    set_deploying: WriteSignal<bool>,
    set_progress: WriteSignal<Option<DeploymentProgress>>,
    set_deployed_address: WriteSignal<Option<String>>,
    set_error_message: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (draft, set_draft) = create_signal(MetadataDraft::default());
    let (uploading, set_uploading) = create_signal(false);

    let on_upload = move |_| {
        // Compose first: validation and parse failures prompt and stop
        // before anything leaves the browser.
        let metadata = match draft.get().compose() {
            Ok(metadata) => metadata,
            Err(error) => {
                alert(error.message());
                return;
            }
        };

        set_uploading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            log::info!("📌 Pinning metadata \"{}\"...", metadata.name);

            match pin_metadata(&metadata).await {
                Ok(receipt) => {
                    log::info!("✅ Pinned as {}", receipt.cid);
                    set_ipfs_url.set(Some(receipt.link()));
                }
                Err(error) => {
                    log::error!("❌ Pinning failed: {}", error);
                    set_error_message
                        .set(Some(format!("Error uploading metadata: {}", error.message())));
                }
            }

            set_uploading.set(false);
        });
    };

    let deploy = move |standard: TokenStandard| {
        let Some(base_uri) = ipfs_url.get() else {
            alert("Please upload metadata to IPFS before deploying.");
            return;
        };
        let name = draft.get().name;

        set_deploying.set(true);
        set_error_message.set(None);
        set_deployed_address.set(None);

        spawn_local(async move {
            let driver = match ProgressDriver::start(set_progress, deployment_steps(standard)) {
                Ok(driver) => driver,
                Err(error) => {
                    set_error_message.set(Some(error.message().to_string()));
                    set_deploying.set(false);
                    return;
                }
            };

            let request = DeployRequest::new(standard, name, base_uri);
            log::info!("🚀 Requesting {} deployment...", standard);

            match request_deployment(&request).await {
                Ok(deployment) => {
                    log::info!("✅ Contract deployed at {}", deployment.contract_address);
                    driver.succeed(&format!(
                        "Contract deployed at: {}",
                        deployment.contract_address
                    ));
                    alert(&success_message(&deployment));
                    set_deployed_address.set(Some(deployment.contract_address));
                }
                Err(error) => {
                    log::error!("❌ Deployment failed: {}", error);
                    driver.fail();
                    set_error_message.set(Some(error.message().to_string()));
                }
            }

            set_deploying.set(false);
        });
    };

    view! {
        <div class="card">
            <div class="preset-row">
                <button
                    class="btn btn-green"
                    disabled=move || uploading.get()
                    on:click=move |_| set_draft.set(MetadataDraft::preset(TokenStandard::Erc721))
                >
                    "Use ERC721 Standard"
                </button>
                <button
                    class="btn btn-purple"
                    disabled=move || uploading.get()
                    on:click=move |_| set_draft.set(MetadataDraft::preset(TokenStandard::Erc1155))
                >
                    "Use ERC1155 Standard"
                </button>
            </div>

            <AttributeInfo/>

            <div class="form-field">
                <label>"NFT Name:"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().name
                    on:input=move |ev| set_draft.update(|draft| draft.name = event_target_value(&ev))
                    disabled=move || uploading.get()
                />
            </div>

            <div class="form-field">
                <label>"Description:"</label>
                <textarea
                    prop:value=move || draft.get().description
                    on:input=move |ev| set_draft.update(|draft| draft.description = event_target_value(&ev))
                    disabled=move || uploading.get()
                ></textarea>
            </div>

            <div class="form-field">
                <label>"Image URL:"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().image
                    on:input=move |ev| set_draft.update(|draft| draft.image = event_target_value(&ev))
                    disabled=move || uploading.get()
                />
            </div>

            <div class="form-field">
                <label>"Attributes (JSON format):"</label>
                <textarea
                    class="attributes-input"
                    prop:value=move || draft.get().attributes
                    on:input=move |ev| set_draft.update(|draft| draft.attributes = event_target_value(&ev))
                    placeholder=r#"e.g. [{"trait_type": "Base", "value": "Starfish"}]"#
                    disabled=move || uploading.get()
                ></textarea>
            </div>

            <button
                class="btn btn-primary btn-upload"
                disabled=move || uploading.get()
                on:click=on_upload
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload Metadata" }}
            </button>

            <div class="deploy-row">
                <button
                    class="btn btn-deploy"
                    disabled=move || deploying.get() || ipfs_url.get().is_none()
                    on:click=move |_| deploy(TokenStandard::Erc721)
                >
                    {move || if deploying.get() { "Deploying..." } else { "Deploy ERC-721 NFT Contract" }}
                </button>
                <button
                    class="btn btn-deploy"
                    disabled=move || deploying.get() || ipfs_url.get().is_none()
                    on:click=move |_| deploy(TokenStandard::Erc1155)
                >
                    {move || if deploying.get() { "Deploying..." } else { "Deploy ERC-1155 Contract" }}
                </button>
            </div>
        </div>
    }
}
