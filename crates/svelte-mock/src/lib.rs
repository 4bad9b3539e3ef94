//! # svelte-mock
//!
//! Mock Svelte-style components and assert on the props they were rendered
//! with, including every `$set` applied afterwards.
//!
//! ## Overview
//!
//! - [`mock_component`] wraps a component type so constructions and `$set`
//!   calls are recorded
//! - [`expect`] asserts on the collapsed props with `to_have_svelte_prop` and
//!   `to_have_svelte_props`
//! - [`setup`] initializes logging and registers the matchers by name
//!
//! ```
//! use serde_json::json;
//! use svelte_mock::{
//!     expect, mock_component, ComponentInstance, ComponentOptions, Props, Result, SvelteComponent,
//! };
//!
//! struct Avatar;
//!
//! impl ComponentInstance for Avatar {
//!     fn set(&mut self, _props: Props) {}
//! }
//!
//! impl SvelteComponent for Avatar {
//!     fn construct(_options: &ComponentOptions) -> Result<Self> {
//!         Ok(Avatar)
//!     }
//! }
//!
//! let module = mock_component::<Avatar>();
//! let mut avatar = module
//!     .default
//!     .construct(ComponentOptions::from_props(json!({ "size": 32, "alt": "me" })).unwrap())
//!     .unwrap();
//! avatar.set_prop("size", 64);
//!
//! expect(&module).to_have_svelte_prop("size", 64);
//! expect(&module).to_have_svelte_props(json!({ "alt": "me" }));
//! ```
//!
//! ## Architecture
//!
//! This is the top layer - it ties together:
//! - svelte-mock-core: props, errors, config
//! - svelte-mock-factory: mocked constructors
//! - svelte-mock-matchers: prop assertion engine

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod setup;

pub use logging::init_logging;
pub use setup::{setup, setup_from_file, SvelteMock};

pub use svelte_mock_core::{
    canonical, to_props, ComponentOptions, Error, PropHistory, Props, ResolveMock, Result,
    SvelteMockConfig,
};
pub use svelte_mock_factory::{
    mock_component, CallHistory, ComponentConstructor, ComponentInstance, ComponentProxy,
    Constructor, MockedComponent, ModuleExport, SvelteComponent,
};
pub use svelte_mock_matchers::{
    collapse_props, expect, register_svelte_matchers, DiffFormatter, Expectation, Matcher,
    MatcherContext, MatcherRegistry, MatcherResult, PrettyDiff,
};
