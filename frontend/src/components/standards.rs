//! Informational panels about token standards and attributes.

use leptos::*;

/// Static primer on the two deployable standards.
#[component]
pub fn StandardsInfo() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"About ERC721 vs ERC1155"</h2>
            <p>"Ethereum's main token types:"</p>
            <ul>
                <li>"ERC-20: Regular tokens that are all identical"</li>
                <li>"ERC-721: NFTs where each token is unique (like digital art)"</li>
                <li>"ERC-1155: Most flexible - can do both unique and identical items"</li>
            </ul>
            <p>
                "Choose ERC-721 for unique items only, or ERC-1155 for more "
                "flexibility and lower costs."
            </p>
        </div>
    }
}

/// Collapsible explainer for the attributes field, toggled by a
/// full-width button.
#[component]
pub fn AttributeInfo() -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    view! {
        <div class="attribute-info">
            <button
                class="btn btn-toggle"
                on:click=move |_| set_expanded.update(|value| *value = !*value)
            >
                {move || if expanded.get() { "Hide Attribute Information" } else { "Show Attribute Information" }}
            </button>
            <Show
                when=move || expanded.get()
                fallback=|| view! { }
            >
                <div class="attribute-info-body">
                    <h3>"Attributes Overview"</h3>
                    <p>
                        "The " <strong>"attributes"</strong> " you define are the metadata "
                        "properties that make each NFT unique. These can vary based on "
                        "the token standard:"
                    </p>
                    <ul>
                        <li>
                            "For " <strong>"ERC-721"</strong> ", attributes often represent "
                            "traits such as visual features or status values."
                        </li>
                        <li>
                            "For " <strong>"ERC-1155"</strong> ", attributes can be more "
                            "dynamic, representing properties for game items or collectibles."
                        </li>
                    </ul>
                    <p>
                        "Ensure attributes are formatted as valid JSON, using "
                        <code>"trait_type"</code> " and " <code>"value"</code> " pairs."
                    </p>
                </div>
            </Show>
        </div>
    }
}
