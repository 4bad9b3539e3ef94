//! # svelte-mock-matchers
//!
//! Prop assertion engine for svelte-mock.
//!
//! This crate provides:
//! - Prop collapsing (latest construction props + every `$set` in order)
//! - The `toHaveSvelteProp` and `toHaveSvelteProps` predicates
//! - The matcher contract (context, utils, lazily rendered messages)
//! - An explicit matcher registry
//! - `expect(mock)` assertions
//!
//! ## Architecture
//!
//! This is Layer 1 - it depends only on svelte-mock-core and reads mocks
//! through [`ResolveMock`](svelte_mock_core::ResolveMock), so any recorder
//! implementing the history traits can be asserted on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collapse;
pub mod context;
pub mod diff;
pub mod expect;
pub mod registry;
pub mod svelte;

// Re-export commonly used types
pub use collapse::{collapse_props, filter_to_keys};
pub use context::{MatcherContext, MatcherResult, MatcherUtils, MessageFn};
pub use diff::{DiffFormatter, DiffOptions, PrettyDiff, DIFF_CONTEXT_KEYS};
pub use expect::{assert_matcher, expect, Expectation};
pub use registry::{
    register_svelte_matchers, Matcher, MatcherRegistry, SveltePropMatcher, SveltePropsMatcher,
};
pub use svelte::{
    to_have_svelte_prop, to_have_svelte_props, TO_HAVE_SVELTE_PROP, TO_HAVE_SVELTE_PROPS,
};
