//! One-time test setup: logging plus matcher registration.

use std::path::Path;

use anyhow::Context;
use svelte_mock_core::SvelteMockConfig;
use svelte_mock_matchers::{register_svelte_matchers, MatcherContext, MatcherRegistry};

/// Everything a test suite needs after setup.
#[derive(Clone)]
pub struct SvelteMock {
    /// Registry holding the Svelte prop matchers
    pub registry: MatcherRegistry,
    /// Context seeded from configuration
    pub context: MatcherContext,
}

/// Initialize logging and register the Svelte matchers.
///
/// Call once from the suite's setup; nothing is registered implicitly.
pub fn setup(config: &SvelteMockConfig) -> svelte_mock_core::Result<SvelteMock> {
    config.validate()?;
    crate::logging::init_logging(&config.logging.level);

    let mut registry = MatcherRegistry::new();
    register_svelte_matchers(&mut registry)?;

    tracing::debug!(
        matchers = ?registry.names(),
        expand = config.matchers.expand,
        "svelte-mock ready"
    );

    Ok(SvelteMock {
        registry,
        context: MatcherContext::from_config(config),
    })
}

/// [`setup`] with configuration read from a YAML file.
pub fn setup_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<SvelteMock> {
    let path = path.as_ref();
    let config = SvelteMockConfig::from_file(path)
        .with_context(|| format!("loading svelte-mock config from {}", path.display()))?;
    Ok(setup(&config)?)
}
