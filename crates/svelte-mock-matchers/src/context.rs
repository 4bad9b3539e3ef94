//! Matcher execution context and result types.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use svelte_mock_core::{canonical, Props, SvelteMockConfig};

use crate::diff::{DiffFormatter, DiffOptions, PrettyDiff};

/// Formatting helpers handed to matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherUtils {
    hint_prefix: String,
}

impl MatcherUtils {
    /// Helpers using `hint_prefix` as the receiver in matcher hints.
    pub fn new(hint_prefix: impl Into<String>) -> Self {
        Self {
            hint_prefix: hint_prefix.into(),
        }
    }

    /// Hint line such as `expect(received).not.toHaveSvelteProp(expected)`.
    ///
    /// `matcher` carries its own leading dot, optionally with `.not`.
    pub fn matcher_hint(&self, matcher: &str) -> String {
        format!("{}{}(expected)", self.hint_prefix, matcher)
    }

    /// Render an expected value.
    pub fn print_expected(&self, value: Option<&Value>) -> String {
        canonical(value)
    }

    /// Render a received value.
    pub fn print_received(&self, value: Option<&Value>) -> String {
        canonical(value)
    }
}

impl Default for MatcherUtils {
    fn default() -> Self {
        Self::new("expect(received)")
    }
}

/// Everything a matcher knows about how it was invoked.
#[derive(Clone)]
pub struct MatcherContext {
    /// The assertion was negated with `.not`
    pub is_not: bool,
    /// Failure diffs show every entry
    pub expand: bool,
    /// Formatting helpers
    pub utils: MatcherUtils,
    differ: Arc<dyn DiffFormatter>,
}

impl MatcherContext {
    /// Default context: not negated, collapsed diffs.
    pub fn new() -> Self {
        Self {
            is_not: false,
            expand: false,
            utils: MatcherUtils::default(),
            differ: Arc::new(PrettyDiff),
        }
    }

    /// Context seeded from configuration.
    pub fn from_config(config: &SvelteMockConfig) -> Self {
        Self {
            expand: config.matchers.expand,
            utils: MatcherUtils::new(config.matchers.hint_prefix.clone()),
            ..Self::new()
        }
    }

    /// Set the negation flag.
    pub fn negated(mut self, is_not: bool) -> Self {
        self.is_not = is_not;
        self
    }

    /// Set the diff expansion flag.
    pub fn expanded(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Replace the diff collaborator.
    pub fn with_differ(mut self, differ: Arc<dyn DiffFormatter>) -> Self {
        self.differ = differ;
        self
    }

    /// Shared handle to the diff collaborator.
    pub fn differ(&self) -> Arc<dyn DiffFormatter> {
        Arc::clone(&self.differ)
    }

    /// Options to pass to the diff collaborator.
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            expand: self.expand,
        }
    }
}

impl Default for MatcherContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatcherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherContext")
            .field("is_not", &self.is_not)
            .field("expand", &self.expand)
            .field("utils", &self.utils)
            .finish_non_exhaustive()
    }
}

/// Lazily built failure message.
pub type MessageFn = Box<dyn Fn() -> String + Send + Sync>;

/// Outcome of one matcher evaluation.
///
/// `pass` already accounts for negation: it is `true` when the assertion as
/// written (with or without `.not`) holds.
pub struct MatcherResult {
    /// Whether the assertion holds
    pub pass: bool,
    /// The full collapsed props the assertion ran against
    pub actual: Props,
    message: MessageFn,
}

impl MatcherResult {
    /// Create a result with a lazily built message.
    pub fn new(pass: bool, actual: Props, message: MessageFn) -> Self {
        Self {
            pass,
            actual,
            message,
        }
    }

    /// Render the message.
    pub fn message(&self) -> String {
        (self.message)()
    }
}

impl fmt::Debug for MatcherResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherResult")
            .field("pass", &self.pass)
            .field("actual", &self.actual)
            .finish_non_exhaustive()
    }
}
