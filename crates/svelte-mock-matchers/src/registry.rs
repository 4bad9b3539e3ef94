//! Named matcher registry.
//!
//! Matchers are registered explicitly by the test setup; nothing is added
//! on load.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use svelte_mock_core::{Error, Props, ResolveMock, Result};

use crate::context::{MatcherContext, MatcherResult};
use crate::svelte::{
    to_have_svelte_prop, to_have_svelte_props, TO_HAVE_SVELTE_PROP, TO_HAVE_SVELTE_PROPS,
};

/// An assertion predicate that can be looked up by name.
pub trait Matcher: Send + Sync {
    /// Name the matcher is registered under.
    fn name(&self) -> &'static str;

    /// Evaluate against `received` with positional arguments.
    fn evaluate(
        &self,
        ctx: &MatcherContext,
        received: &dyn ResolveMock,
        args: &[Value],
    ) -> Result<MatcherResult>;
}

/// `toHaveSvelteProp(name, expected)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SveltePropMatcher;

impl Matcher for SveltePropMatcher {
    fn name(&self) -> &'static str {
        TO_HAVE_SVELTE_PROP
    }

    fn evaluate(
        &self,
        ctx: &MatcherContext,
        received: &dyn ResolveMock,
        args: &[Value],
    ) -> Result<MatcherResult> {
        let (name, expected) = match args {
            [Value::String(name)] => (name, None),
            [Value::String(name), expected] => (name, Some(expected)),
            [_] | [_, _] => {
                return Err(Error::invalid_arguments(
                    self.name(),
                    "prop name must be a string",
                ))
            }
            _ => {
                return Err(Error::invalid_arguments(
                    self.name(),
                    format!("expected 1 or 2 arguments, got {}", args.len()),
                ))
            }
        };

        to_have_svelte_prop(ctx, received, name, expected)
    }
}

/// `toHaveSvelteProps(expectedProps)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SveltePropsMatcher;

impl Matcher for SveltePropsMatcher {
    fn name(&self) -> &'static str {
        TO_HAVE_SVELTE_PROPS
    }

    fn evaluate(
        &self,
        ctx: &MatcherContext,
        received: &dyn ResolveMock,
        args: &[Value],
    ) -> Result<MatcherResult> {
        let expected: &Props = match args {
            [Value::Object(expected)] => expected,
            _ => {
                return Err(Error::invalid_arguments(
                    self.name(),
                    "expected a single object of props",
                ))
            }
        };

        to_have_svelte_props(ctx, received, expected)
    }
}

/// Registry of matchers, keyed by name.
#[derive(Default, Clone)]
pub struct MatcherRegistry {
    matchers: BTreeMap<&'static str, Arc<dyn Matcher>>,
}

impl MatcherRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the two Svelte prop matchers.
    pub fn with_svelte_matchers() -> Result<Self> {
        let mut registry = Self::new();
        register_svelte_matchers(&mut registry)?;
        Ok(registry)
    }

    /// Add a matcher. Names must be unique.
    pub fn register(&mut self, matcher: Arc<dyn Matcher>) -> Result<()> {
        let name = matcher.name();
        if self.matchers.contains_key(name) {
            return Err(Error::DuplicateMatcher(name.to_string()));
        }

        tracing::debug!(matcher = name, "registered matcher");
        self.matchers.insert(name, matcher);
        Ok(())
    }

    /// Look up a matcher by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Matcher>> {
        self.matchers.get(name)
    }

    /// Whether a matcher is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.matchers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.matchers.keys().copied().collect()
    }

    /// Evaluate the matcher registered under `name`.
    pub fn evaluate(
        &self,
        name: &str,
        ctx: &MatcherContext,
        received: &dyn ResolveMock,
        args: &[Value],
    ) -> Result<MatcherResult> {
        let matcher = self
            .get(name)
            .ok_or_else(|| Error::UnknownMatcher(name.to_string()))?;
        matcher.evaluate(ctx, received, args)
    }
}

/// Register `toHaveSvelteProp` and `toHaveSvelteProps`.
pub fn register_svelte_matchers(registry: &mut MatcherRegistry) -> Result<()> {
    registry.register(Arc::new(SveltePropMatcher))?;
    registry.register(Arc::new(SveltePropsMatcher))?;
    Ok(())
}
