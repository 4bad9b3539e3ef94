//! Prop mappings, component construction options and canonical serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A component's props: prop name to JSON value.
///
/// Backed by a sorted map, so two mappings with the same entries serialize
/// identically regardless of insertion order.
pub type Props = Map<String, Value>;

/// Sentinel printed for a prop that is not present at all.
pub const UNDEFINED: &str = "undefined";

/// Convert any serializable value into a [`Props`] mapping.
///
/// Fails with [`crate::Error::Serialization`] when the value does not
/// serialize to a JSON object.
///
/// # Example
/// ```
/// use serde_json::json;
/// use svelte_mock_core::props::to_props;
///
/// let props = to_props(json!({ "value": 15, "text": "Hello" })).unwrap();
/// assert_eq!(props["value"], 15);
/// ```
pub fn to_props<T: Serialize>(value: T) -> crate::Result<Props> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::from_value(value)?)
}

/// Canonical string form used as the deep-equality proxy.
///
/// Compact JSON of the [`normalize_numbers`] form for present values,
/// [`UNDEFINED`] for absent ones.
pub fn canonical(value: Option<&Value>) -> String {
    match value {
        Some(value) => normalize_numbers(value).to_string(),
        None => UNDEFINED.to_string(),
    }
}

/// Copy of `value` with every integral float rewritten as an integer.
///
/// JSON has a single number type: `15.0` prints as `15` and `-0.0` as `0`.
/// Floats with a fractional part, or too large for `i64`/`u64`, are kept.
pub fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(normalize_number(number)),
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), normalize_numbers(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn normalize_number(number: &Number) -> Number {
    let float = match number.as_f64() {
        Some(float) if number.is_f64() && float.is_finite() && float.fract() == 0.0 => float,
        _ => return number.clone(),
    };

    // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bounds
    if float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Number::from(float as i64)
    } else if float >= 0.0 && float < u64::MAX as f64 {
        Number::from(float as u64)
    } else {
        number.clone()
    }
}

/// Whether two values are equal under canonical serialization.
pub fn canonical_eq(left: Option<&Value>, right: Option<&Value>) -> bool {
    canonical(left) == canonical(right)
}

/// Arguments a component is constructed with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOptions {
    /// Element the component mounts into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Sibling the component is inserted before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Initial props
    pub props: Props,
    /// Whether to play intro transitions
    pub intro: bool,
    /// Context entries visible to the component
    pub context: Props,
}

impl ComponentOptions {
    /// Options carrying only initial props.
    pub fn with_props(props: Props) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    /// Options built from any value that serializes to a JSON object.
    pub fn from_props<T: Serialize>(props: T) -> crate::Result<Self> {
        Ok(Self::with_props(to_props(props)?))
    }

    /// Set the mount target.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the anchor element.
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Enable intro transitions.
    pub fn intro(mut self, intro: bool) -> Self {
        self.intro = intro;
        self
    }
}
