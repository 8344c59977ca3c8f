//! HTTP services for the two external collaborators.
//!
//! # Services
//!
//! - [`pinning`] - metadata upload through the pin gateway
//! - [`deploy`] - contract deployment through the deploy API
//!
//! Both collaborators speak JSON over HTTP; neither call is retried or
//! deduplicated here.

pub mod deploy;
pub mod pinning;

pub use deploy::*;
pub use pinning::*;
