//! # svelte-mock-core
//!
//! Core types for svelte-mock.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other svelte-mock crates. It provides:
//!
//! - Props mappings and canonical serialization
//! - Component construction options
//! - The prop-history traits shared by the mock factory and the matchers
//! - Error types
//! - Configuration
//!
//! ## Architecture
//!
//! This is Layer 0 - the factory and matcher crates both depend on this one
//! and never on each other.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod history;
pub mod props;

// Re-export commonly used types
pub use config::{LoggingSettings, MatcherSettings, SvelteMockConfig};
pub use error::{Error, Result};
pub use history::{PropHistory, ResolveMock};
pub use props::{
    canonical, canonical_eq, normalize_numbers, to_props, ComponentOptions, Props, UNDEFINED,
};
