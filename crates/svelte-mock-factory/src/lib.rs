//! # svelte-mock-factory
//!
//! Mock factory for svelte-mock.
//!
//! Wraps a component constructor so every instantiation is observable:
//! - each construction records its [`ComponentOptions`](svelte_mock_core::ComponentOptions)
//! - each `$set` on a constructed instance is recorded by the mock's set spy
//!   instead of reaching the real component
//! - everything else passes through to the genuine instance
//!
//! ## Architecture
//!
//! This is Layer 1 - it depends only on svelte-mock-core. The matchers read
//! what it records through [`PropHistory`](svelte_mock_core::PropHistory).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call_history;
pub mod component;
pub mod mock;

// Re-export commonly used types
pub use call_history::CallHistory;
pub use component::{ComponentConstructor, ComponentInstance, Constructor, SvelteComponent};
pub use mock::{mock_component, ComponentProxy, MockedComponent, ModuleExport};
