//! Error types for svelte-mock.

use thiserror::Error;

/// Main error type for svelte-mock operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Props were read from a mock that was never constructed
    #[error("Component was never constructed: no construction call recorded")]
    NoConstruction,

    /// The wrapped component constructor failed
    #[error("Failed to construct {component}: {message}")]
    Construction {
        /// Type name of the wrapped component
        component: String,
        /// Message raised by the constructor
        message: String,
    },

    /// Matcher invoked with arguments it cannot interpret
    #[error("Invalid arguments for {matcher}: {message}")]
    InvalidArguments {
        /// Matcher name
        matcher: String,
        /// What was wrong with the arguments
        message: String,
    },

    /// No matcher registered under the requested name
    #[error("Unknown matcher: {0}")]
    UnknownMatcher(String),

    /// A matcher with this name is already registered
    #[error("Matcher already registered: {0}")]
    DuplicateMatcher(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a construction error for component type `C`.
    pub fn construction<C: ?Sized>(message: impl Into<String>) -> Self {
        Self::Construction {
            component: short_type_name::<C>().to_string(),
            message: message.into(),
        }
    }

    /// Build an invalid-arguments error for the named matcher.
    pub fn invalid_arguments(matcher: &str, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            matcher: matcher.to_string(),
            message: message.into(),
        }
    }
}

/// Last path segment of a type name (`my_app::Counter` -> `Counter`).
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
