use std::fmt;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A route resolver could not turn a symbolic name into a URL.
///
/// Route resolvers return this; the engine hands it back to the caller
/// unchanged inside [`Error::Resolution`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to resolve route '{name}': {reason}")]
pub struct ResolutionFailure {
    name: String,
    reason: String,
}

impl ResolutionFailure {
    /// Create a failure for the route `name`.
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The route name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Why it failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The capabilities a [`Ui`](crate::Ui) needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Turns route names into URLs.
    RouteResolver,
    /// Turns text keys into localized strings.
    TextResolver,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::RouteResolver => write!(f, "route resolver"),
            Capability::TextResolver => write!(f, "text resolver"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A symbolic route could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionFailure),
    /// The engine was built without a required capability.
    #[error("no {0} was supplied")]
    MissingCapability(Capability),
}

impl Error {
    /// The resolution failure, if this is one.
    pub fn resolution_failure(&self) -> Option<&ResolutionFailure> {
        match self {
            Error::Resolution(failure) => Some(failure),
            _ => None,
        }
    }
}
