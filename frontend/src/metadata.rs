//! Metadata composition.
//!
//! A [`MetadataDraft`] mirrors the form fields verbatim, including the
//! attributes textarea as raw text. [`MetadataDraft::compose`] turns a
//! draft into the [`NftMetadata`] document that gets pinned, validating
//! completeness and parsing the attributes on the way.

use serde::Serialize;
use serde_json::Value;

use crate::types::{AppError, AppResult, TokenStandard};

/// Sample attributes for the ERC-721 preset, kept pretty-printed so the
/// textarea shows something worth editing.
const ERC721_ATTRIBUTES: &str = r#"[
  {
    "trait_type": "Base",
    "value": "Starfish"
  },
  {
    "trait_type": "Eyes",
    "value": "Big"
  },
  {
    "trait_type": "Level",
    "value": 5
  },
  {
    "display_type": "boost_percentage",
    "trait_type": "Stamina Increase",
    "value": 10
  }
]"#;

/// Sample attributes for the ERC-1155 preset.
const ERC1155_ATTRIBUTES: &str = r#"[
  {
    "trait_type": "Material",
    "value": "Gold"
  },
  {
    "trait_type": "Durability",
    "value": 80
  },
  {
    "display_type": "number",
    "trait_type": "Level",
    "value": 2
  }
]"#;

/// Form state for the metadata editor.
///
/// All fields are raw strings; nothing is validated until
/// [`compose`](Self::compose) runs. Whitespace-only input counts as
/// filled in, matching the permissive completeness check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataDraft {
    /// Token name, also reused as the contract name at deploy time.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Attributes as JSON text, exactly as typed into the textarea.
    pub attributes: String,
}

impl MetadataDraft {
    /// Sample draft for the given standard, overwriting every field.
    pub fn preset(standard: TokenStandard) -> Self {
        match standard {
            TokenStandard::Erc721 => Self {
                name: "Sample ERC721 NFT".to_string(),
                description: "This is an example metadata for an ERC721 NFT.".to_string(),
                image: "https://example.com/sample-image.png".to_string(),
                attributes: ERC721_ATTRIBUTES.to_string(),
            },
            TokenStandard::Erc1155 => Self {
                name: "Sample ERC1155 NFT".to_string(),
                description: "This is an example metadata for an ERC1155 NFT.".to_string(),
                image: "https://example.com/sample-image.png".to_string(),
                attributes: ERC1155_ATTRIBUTES.to_string(),
            },
        }
    }

    /// Validate the draft and build the document to pin.
    ///
    /// Fails with [`AppError::Validation`] when any field is empty and
    /// with [`AppError::Parse`] when the attributes text is not valid
    /// JSON. Any JSON shape is accepted as attributes; marketplaces
    /// expect an array of traits, but that is the author's call.
    pub fn compose(&self) -> AppResult<NftMetadata> {
        if self.name.is_empty()
            || self.description.is_empty()
            || self.image.is_empty()
            || self.attributes.is_empty()
        {
            return Err(AppError::Validation("Please fill out all fields.".to_string()));
        }

        let attributes: Value = serde_json::from_str(&self.attributes).map_err(|_| {
            AppError::Parse(
                "Invalid JSON format in attributes. Please ensure attributes are valid JSON."
                    .to_string(),
            )
        })?;

        Ok(NftMetadata {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            attributes,
        })
    }
}

/// Metadata document pinned to IPFS, following the ERC-721 metadata
/// JSON layout that ERC-1155 tooling also understands.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Parsed attributes, carried as arbitrary JSON.
    pub attributes: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> MetadataDraft {
        MetadataDraft {
            name: "Test NFT".to_string(),
            description: "A test token".to_string(),
            image: "https://example.com/i.png".to_string(),
            attributes: r#"[{"trait_type": "Color", "value": "Blue"}]"#.to_string(),
        }
    }

    #[test]
    fn test_erc721_preset_composes() {
        let metadata = MetadataDraft::preset(TokenStandard::Erc721).compose().unwrap();

        assert_eq!(metadata.name, "Sample ERC721 NFT");
        let attrs = metadata.attributes.as_array().unwrap();
        assert_eq!(attrs.len(), 4);
        assert_eq!(attrs[0]["trait_type"], "Base");
        assert_eq!(attrs[0]["value"], "Starfish");
        assert_eq!(attrs[3]["display_type"], "boost_percentage");
    }

    #[test]
    fn test_erc1155_preset_composes() {
        let metadata = MetadataDraft::preset(TokenStandard::Erc1155).compose().unwrap();

        assert_eq!(metadata.name, "Sample ERC1155 NFT");
        let attrs = metadata.attributes.as_array().unwrap();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs[2]["display_type"], "number");
        assert_eq!(attrs[1]["value"], 80);
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let mut draft = filled_draft();
        draft.description = String::new();

        match draft.compose() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Please fill out all fields."),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut draft = filled_draft();
        draft.name = "   ".to_string();

        // Completeness is byte-level, not trimmed.
        assert!(draft.compose().is_ok());
    }

    #[test]
    fn test_malformed_attributes_are_rejected() {
        let mut draft = filled_draft();
        draft.attributes = r#"[{"trait_type": "Color", "#.to_string();

        assert!(matches!(draft.compose(), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_non_array_attributes_are_accepted() {
        let mut draft = filled_draft();
        draft.attributes = r#"{"rarity": "legendary"}"#.to_string();

        let metadata = draft.compose().unwrap();
        assert_eq!(metadata.attributes["rarity"], "legendary");
    }

    #[test]
    fn test_composed_document_shape() {
        let metadata = filled_draft().compose().unwrap();
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["name"], "Test NFT");
        assert_eq!(json["image"], "https://example.com/i.png");
        assert!(json["attributes"].is_array());
    }
}
