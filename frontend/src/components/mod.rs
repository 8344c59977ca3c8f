//! UI Components for the Mintkit application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Top bar with the network badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`StandardsInfo`] - Primer on ERC-721 vs ERC-1155
//! - [`AttributeInfo`] - Collapsible attributes explainer
//! - [`MetadataForm`] - Metadata editor with pin and deploy controls
//! - [`DeploymentStatus`] - Scripted deployment step list
//! - [`IpfsCard`] / [`DeployedCard`] / [`ErrorCard`] - Outcome cards

mod deployment;
mod footer;
mod header;
mod hero;
mod metadata_form;
mod standards;

pub use deployment::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use metadata_form::*;
pub use standards::*;
