//! Prop collapsing: one flat view of a component's current props.

use svelte_mock_core::{Error, PropHistory, Props, Result};

/// Fold a mock's recorded updates over its latest construction props.
///
/// Starts from the props of the most recent construction (earlier
/// constructions are discarded, not merged) and applies every recorded
/// update in call order. Keys are overwritten one at a time, so a key set by
/// an earlier update survives a later update that does not mention it.
///
/// Returns [`Error::NoConstruction`] if the mock was never constructed.
pub fn collapse_props(history: &dyn PropHistory) -> Result<Props> {
    let initial = history
        .last_construction_props()
        .ok_or(Error::NoConstruction)?;
    let updates = history.updates();

    tracing::debug!(
        initial = initial.len(),
        updates = updates.len(),
        "collapsing props"
    );

    Ok(updates.into_iter().fold(initial, |mut props, update| {
        props.extend(update);
        props
    }))
}

/// Keep only the entries of `props` whose key also appears in `expected`.
pub fn filter_to_keys(props: &Props, expected: &Props) -> Props {
    props
        .iter()
        .filter(|(key, _)| expected.contains_key(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
