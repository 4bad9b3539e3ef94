//! `toHaveSvelteProp` and `toHaveSvelteProps`.
//!
//! Both predicates collapse the mock's prop history first, then compare
//! values by canonical serialization.
//!
//! Negation is not a plain inversion of the positive result:
//! - `.not.toHaveSvelteProp(name, _)` holds only when the prop is absent;
//!   a prop that exists with a different value still fails.
//! - `.not.toHaveSvelteProps(expected)` holds only when every compared key
//!   differs; a single matching key fails it.

use serde_json::Value;
use svelte_mock_core::{canonical_eq, Props, ResolveMock, Result};

use crate::collapse::{collapse_props, filter_to_keys};
use crate::context::{MatcherContext, MatcherResult};

/// Registered name of the single-prop matcher.
pub const TO_HAVE_SVELTE_PROP: &str = "toHaveSvelteProp";

/// Registered name of the multi-prop matcher.
pub const TO_HAVE_SVELTE_PROPS: &str = "toHaveSvelteProps";

/// Assert the component's current `name` prop equals `expected`.
///
/// `expected` of `None` stands for an undefined value.
pub fn to_have_svelte_prop(
    ctx: &MatcherContext,
    received: &dyn ResolveMock,
    name: &str,
    expected: Option<&Value>,
) -> Result<MatcherResult> {
    let props = collapse_props(received.resolve_mock())?;
    let prop = props.get(name).cloned();

    let pass = if ctx.is_not {
        prop.is_none()
    } else {
        canonical_eq(prop.as_ref(), expected)
    };
    tracing::trace!(matcher = TO_HAVE_SVELTE_PROP, name, is_not = ctx.is_not, pass);

    let is_not = ctx.is_not;
    let utils = ctx.utils.clone();
    let differ = ctx.differ();
    let options = ctx.diff_options();
    let name = name.to_string();
    let expected = expected.cloned();

    let message = move || {
        if is_not {
            return format!(
                "{}\n\nExpected Svelte component to not have the prop {}:\nReceived:\n  {}",
                utils.matcher_hint(".not.toHaveSvelteProp"),
                name,
                utils.print_received(prop.as_ref()),
            );
        }

        let difference = differ
            .diff(expected.as_ref(), prop.as_ref(), &options)
            .map(|diff| format!("\n\nDifference:\n\n{diff}"))
            .unwrap_or_default();
        format!(
            "{}\n\nExpected Svelte component to have prop {} with value:\n  {}\nReceived:\n  {}{}",
            utils.matcher_hint(".toHaveSvelteProp"),
            name,
            utils.print_expected(expected.as_ref()),
            utils.print_received(prop.as_ref()),
            difference,
        )
    };

    Ok(MatcherResult::new(pass, props, Box::new(message)))
}

/// Assert the component's current props contain `expected`.
///
/// Only keys that appear in both `expected` and the collapsed props are
/// compared. Extra props on the component are ignored, and so are expected
/// keys the component does not have.
pub fn to_have_svelte_props(
    ctx: &MatcherContext,
    received: &dyn ResolveMock,
    expected: &Props,
) -> Result<MatcherResult> {
    let props = collapse_props(received.resolve_mock())?;
    let filtered = filter_to_keys(&props, expected);

    let is_not = ctx.is_not;
    let pass = filtered.iter().all(|(key, value)| {
        let equivalent = canonical_eq(Some(value), expected.get(key));
        tracing::trace!(matcher = TO_HAVE_SVELTE_PROPS, key = %key, equivalent);
        if is_not {
            !equivalent
        } else {
            equivalent
        }
    });

    let utils = ctx.utils.clone();
    let differ = ctx.differ();
    let options = ctx.diff_options();
    let expected = Value::Object(expected.clone());
    let filtered = Value::Object(filtered);

    let message = move || {
        if is_not {
            return format!(
                "{}\n\nExpected Svelte component not to have props:\n  {}\n\
                 Received (props were filtered to only include expected keys):\n  {}",
                utils.matcher_hint(".not.toHaveSvelteProps"),
                utils.print_expected(Some(&expected)),
                utils.print_received(Some(&filtered)),
            );
        }

        let difference = differ
            .diff(Some(&expected), Some(&filtered), &options)
            .map(|diff| format!("\n\nDifference:\n\n{diff}"))
            .unwrap_or_default();
        format!(
            "{}\n\nExpected Svelte component to have props:\n  {}\n\
             Received (props were filtered to only include expected keys):\n  {}{}",
            utils.matcher_hint(".toHaveSvelteProps"),
            utils.print_expected(Some(&expected)),
            utils.print_received(Some(&filtered)),
            difference,
        )
    };

    Ok(MatcherResult::new(pass, props, Box::new(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::strip_ansi;
    use serde_json::json;
    use svelte_mock_core::{to_props, ComponentOptions, Error};
    use svelte_mock_factory::{
        mock_component, ComponentInstance, MockedComponent, ModuleExport, SvelteComponent,
    };

    struct Input;

    impl ComponentInstance for Input {
        fn set(&mut self, _props: Props) {}
    }

    impl SvelteComponent for Input {
        fn construct(_options: &ComponentOptions) -> Result<Self> {
            Ok(Input)
        }
    }

    fn rendered(props: Value) -> ModuleExport<Input> {
        let module = mock_component::<Input>();
        module
            .default
            .construct(ComponentOptions::from_props(props).unwrap())
            .unwrap();
        module
    }

    fn positive() -> MatcherContext {
        MatcherContext::new()
    }

    fn negated() -> MatcherContext {
        MatcherContext::new().negated(true)
    }

    fn prop(ctx: &MatcherContext, mock: &dyn ResolveMock, name: &str, expected: Value) -> bool {
        to_have_svelte_prop(ctx, mock, name, Some(&expected))
            .unwrap()
            .pass
    }

    fn props(ctx: &MatcherContext, mock: &dyn ResolveMock, expected: Value) -> bool {
        to_have_svelte_props(ctx, mock, &to_props(expected).unwrap())
            .unwrap()
            .pass
    }

    #[test]
    fn test_single_prop_match() {
        let module = rendered(json!({ "value": 15 }));
        assert!(prop(&positive(), &module, "value", json!(15)));
        assert!(!prop(&positive(), &module, "value", json!(16)));
    }

    #[test]
    fn test_single_prop_deep_equality() {
        let module = rendered(json!({ "items": [{ "id": 1, "tags": ["a"] }] }));
        assert!(prop(&positive(), &module, "items", json!([{ "tags": ["a"], "id": 1 }])));
        assert!(!prop(&positive(), &module, "items", json!([{ "id": 1 }])));
    }

    #[test]
    fn test_single_prop_reads_updates() {
        let module = rendered(json!({ "value": 15 }));
        let mut input = module
            .default
            .construct(ComponentOptions::from_props(json!({ "value": 15 })).unwrap())
            .unwrap();
        input.set_prop("value", 20);

        assert!(prop(&positive(), &module, "value", json!(20)));
        assert!(!prop(&positive(), &module, "value", json!(15)));
    }

    #[test]
    fn test_single_prop_missing_does_not_match_null() {
        let module = rendered(json!({ "value": 15 }));
        assert!(!prop(&positive(), &module, "missing", Value::Null));

        let undefined = to_have_svelte_prop(&positive(), &module, "missing", None).unwrap();
        assert!(undefined.pass);
    }

    // Negating `toHaveSvelteProp` asserts absence, not inequality.
    #[test]
    fn test_single_prop_negation_requires_absence() {
        let module = rendered(json!({ "value": 15 }));
        assert!(!prop(&negated(), &module, "value", json!(16)));
        assert!(!prop(&negated(), &module, "value", json!(15)));
        assert!(prop(&negated(), &module, "missing", json!(16)));
    }

    #[test]
    fn test_single_prop_failure_message() {
        let module = rendered(json!({ "value": { "n": 15, "label": "x" } }));
        let result = to_have_svelte_prop(
            &positive(),
            &module,
            "value",
            Some(&json!({ "n": 16, "label": "x" })),
        )
        .unwrap();

        assert!(!result.pass);
        let message = strip_ansi(&result.message());
        assert!(message.starts_with("expect(received).toHaveSvelteProp(expected)\n\n"));
        assert!(message.contains("Expected Svelte component to have prop value with value:\n  {\"label\":\"x\",\"n\":16}"));
        assert!(message.contains("Received:\n  {\"label\":\"x\",\"n\":15}"));
        assert!(message.contains("\n\nDifference:\n\n"));
    }

    #[test]
    fn test_single_prop_scalar_message_has_diff() {
        let module = rendered(json!({ "value": 15 }));
        let result = to_have_svelte_prop(&positive(), &module, "value", Some(&json!(16))).unwrap();
        let message = strip_ansi(&result.message());
        assert!(message.contains("with value:\n  16\nReceived:\n  15\n\nDifference:\n\n"));
    }

    #[test]
    fn test_passing_message_has_no_diff() {
        let module = rendered(json!({ "value": 15 }));
        let result = to_have_svelte_prop(&positive(), &module, "value", Some(&json!(15))).unwrap();
        assert!(result.pass);
        assert!(result.message().ends_with("Received:\n  15"));
    }

    // Integral floats and integers are the same JSON number.
    #[test]
    fn test_integral_float_matches_integer() {
        let module = rendered(json!({ "value": 15, "offset": -0.0 }));
        assert!(prop(&positive(), &module, "value", json!(15.0)));
        assert!(prop(&positive(), &module, "offset", json!(0)));
        assert!(!prop(&positive(), &module, "value", json!(15.5)));

        let mut input = module
            .default
            .construct(ComponentOptions::from_props(json!({ "value": 15 })).unwrap())
            .unwrap();
        input.set_prop("ratio", 0.5 * 4.0);
        assert!(props(&positive(), &module, json!({ "ratio": 2, "value": 15.0 })));
        assert!(!props(&negated(), &module, json!({ "ratio": 2 })));
    }

    #[test]
    fn test_integral_float_printed_as_integer() {
        let module = rendered(json!({ "value": 15.0 }));
        let result = to_have_svelte_prop(&positive(), &module, "value", Some(&json!(16))).unwrap();
        let message = strip_ansi(&result.message());
        assert!(message.contains("Received:\n  15\n"));
        assert!(!message.contains("15.0"));
    }

    #[test]
    fn test_single_prop_negated_message() {
        let module = rendered(json!({ "value": 15 }));
        let result = to_have_svelte_prop(&negated(), &module, "value", Some(&json!(16))).unwrap();
        assert_eq!(
            result.message(),
            "expect(received).not.toHaveSvelteProp(expected)\n\n\
             Expected Svelte component to not have the prop value:\nReceived:\n  15"
        );
    }

    #[test]
    fn test_subset_ignores_extra_props() {
        let module = rendered(json!({ "value": 15, "text": "hi", "color": "blue" }));
        assert!(props(&positive(), &module, json!({ "value": 15, "text": "hi" })));
        assert!(!props(&positive(), &module, json!({ "value": 15, "text": "bye" })));
    }

    #[test]
    fn test_subset_empty_expected_passes() {
        let module = rendered(json!({ "value": 15 }));
        assert!(props(&positive(), &module, json!({})));
        assert!(props(&negated(), &module, json!({})));
    }

    // Expected keys the component lacks drop out of the comparison.
    #[test]
    fn test_subset_skips_keys_component_lacks() {
        let module = rendered(json!({ "value": 15 }));
        assert!(props(&positive(), &module, json!({ "value": 15, "missing": 1 })));
    }

    // Negating `toHaveSvelteProps` requires every compared key to differ.
    #[test]
    fn test_subset_negation_requires_all_keys_to_differ() {
        let module = rendered(json!({ "value": 15, "text": "hi" }));
        assert!(props(&negated(), &module, json!({ "value": 16, "text": "bye" })));
        assert!(!props(&negated(), &module, json!({ "value": 15, "text": "bye" })));
        assert!(!props(&negated(), &module, json!({ "value": 15, "text": "hi" })));
    }

    #[test]
    fn test_subset_failure_message() {
        let module = rendered(json!({ "value": 15, "text": "hi", "color": "blue" }));
        let expected = to_props(json!({ "value": 16, "text": "hi" })).unwrap();
        let result = to_have_svelte_props(&positive(), &module, &expected).unwrap();

        assert!(!result.pass);
        assert_eq!(result.actual.len(), 3);

        let message = strip_ansi(&result.message());
        assert!(message.starts_with("expect(received).toHaveSvelteProps(expected)\n\n"));
        assert!(message.contains("Expected Svelte component to have props:\n  {\"text\":\"hi\",\"value\":16}"));
        assert!(message.contains(
            "Received (props were filtered to only include expected keys):\n  {\"text\":\"hi\",\"value\":15}"
        ));
        assert!(!message.contains("blue"));
        assert!(message.contains("Difference:"));
    }

    #[test]
    fn test_subset_negated_message() {
        let module = rendered(json!({ "value": 15 }));
        let expected = to_props(json!({ "value": 15 })).unwrap();
        let result = to_have_svelte_props(&negated(), &module, &expected).unwrap();

        assert!(!result.pass);
        let message = result.message();
        assert!(message.starts_with("expect(received).not.toHaveSvelteProps(expected)"));
        assert!(message.contains("Expected Svelte component not to have props:"));
    }

    #[test]
    fn test_wrapped_and_bare_agree() {
        let module = rendered(json!({ "value": 15, "text": "hi" }));
        let bare: &MockedComponent<Input> = &module.default;

        for ctx in [positive(), negated()] {
            assert_eq!(
                prop(&ctx, &module, "value", json!(15)),
                prop(&ctx, bare, "value", json!(15))
            );
            assert_eq!(
                props(&ctx, &module, json!({ "text": "hi" })),
                props(&ctx, bare, json!({ "text": "hi" }))
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let module = rendered(json!({ "value": 15 }));
        let first = to_have_svelte_prop(&positive(), &module, "value", Some(&json!(15))).unwrap();
        let second = to_have_svelte_prop(&positive(), &module, "value", Some(&json!(15))).unwrap();

        assert_eq!(first.pass, second.pass);
        assert_eq!(first.actual, second.actual);
        assert_eq!(first.message(), second.message());
    }

    #[test]
    fn test_never_constructed_is_an_error() {
        let module = mock_component::<Input>();
        let err = to_have_svelte_prop(&positive(), &module, "value", Some(&json!(1))).unwrap_err();
        assert!(matches!(err, Error::NoConstruction));

        let err = to_have_svelte_props(&positive(), &module, &Props::new()).unwrap_err();
        assert!(matches!(err, Error::NoConstruction));
    }
}
