//! `expect(mock)` style assertions.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use svelte_mock_core::{to_props, ResolveMock, Result};

use crate::context::{MatcherContext, MatcherResult};
use crate::registry::MatcherRegistry;
use crate::svelte::{to_have_svelte_prop, to_have_svelte_props};

/// Start an assertion on a mock, bare or wrapped.
///
/// # Example
/// ```
/// use serde_json::json;
/// use svelte_mock_core::{ComponentOptions, Props, Result};
/// use svelte_mock_factory::{mock_component, ComponentInstance, SvelteComponent};
/// use svelte_mock_matchers::expect;
///
/// struct Slider;
///
/// impl ComponentInstance for Slider {
///     fn set(&mut self, _props: Props) {}
/// }
///
/// impl SvelteComponent for Slider {
///     fn construct(_options: &ComponentOptions) -> Result<Self> {
///         Ok(Slider)
///     }
/// }
///
/// let module = mock_component::<Slider>();
/// let options = ComponentOptions::from_props(json!({ "value": 15, "max": 100 })).unwrap();
/// let mut slider = module.default.construct(options).unwrap();
/// slider.set_prop("value", 20);
///
/// expect(&module).to_have_svelte_prop("value", 20);
/// expect(&module.default).to_have_svelte_props(json!({ "max": 100 }));
/// expect(&module).not().to_have_svelte_prop("step", 1);
/// ```
pub fn expect<'a, R: ResolveMock + 'a>(received: &'a R) -> Expectation<'a> {
    Expectation {
        received,
        context: MatcherContext::new(),
    }
}

/// A pending assertion on one mock.
pub struct Expectation<'a> {
    received: &'a dyn ResolveMock,
    context: MatcherContext,
}

impl Expectation<'_> {
    /// Negate the assertion.
    pub fn not(mut self) -> Self {
        self.context.is_not = true;
        self
    }

    /// Show full diffs on failure.
    pub fn expand(mut self) -> Self {
        self.context.expand = true;
        self
    }

    /// Evaluate with the given context, keeping its negation and expansion.
    pub fn with_context(mut self, context: MatcherContext) -> Self {
        self.context = context;
        self
    }

    /// The context the assertion will be evaluated with.
    pub fn context(&self) -> &MatcherContext {
        &self.context
    }

    /// Evaluate `toHaveSvelteProp` without panicking.
    pub fn check_svelte_prop<T: Serialize>(&self, name: &str, expected: T) -> Result<MatcherResult> {
        let expected = serde_json::to_value(expected)?;
        to_have_svelte_prop(&self.context, self.received, name, Some(&expected))
    }

    /// Evaluate `toHaveSvelteProps` without panicking.
    pub fn check_svelte_props<T: Serialize>(&self, expected: T) -> Result<MatcherResult> {
        let expected = to_props(expected)?;
        to_have_svelte_props(&self.context, self.received, &expected)
    }

    /// Evaluate a registered matcher by name without panicking.
    pub fn matches(
        &self,
        registry: &MatcherRegistry,
        name: &str,
        args: &[Value],
    ) -> Result<MatcherResult> {
        registry.evaluate(name, &self.context, self.received, args)
    }

    /// Assert the current `name` prop equals `expected`.
    ///
    /// Negated, asserts the prop is absent.
    ///
    /// # Panics
    ///
    /// When the assertion fails or the mock was never constructed.
    #[track_caller]
    pub fn to_have_svelte_prop<T: Serialize>(&self, name: &str, expected: T) {
        assert_matcher(self.check_svelte_prop(name, expected));
    }

    /// Assert the current props contain `expected`.
    ///
    /// Negated, asserts every compared key differs.
    ///
    /// # Panics
    ///
    /// When the assertion fails or the mock was never constructed.
    #[track_caller]
    pub fn to_have_svelte_props<T: Serialize>(&self, expected: T) {
        assert_matcher(self.check_svelte_props(expected));
    }

    /// Assert with a registered matcher.
    ///
    /// # Panics
    ///
    /// When the assertion fails or the matcher cannot be evaluated.
    #[track_caller]
    pub fn to_match(&self, registry: &MatcherRegistry, name: &str, args: &[Value]) {
        assert_matcher(self.matches(registry, name, args));
    }
}

impl fmt::Debug for Expectation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Panic with the matcher's message unless it passed.
#[track_caller]
pub fn assert_matcher(result: Result<MatcherResult>) {
    match result {
        Ok(result) if result.pass => {}
        Ok(result) => panic!("{}", result.message()),
        Err(err) => panic!("{err}"),
    }
}
