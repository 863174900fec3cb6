use thiserror::Error;

/// The main error type for Pi-hole web API operations.
///
/// Two categories matter to callers: `Cancelled`, which is produced when an
/// operation is abandoned through its cancellation token and must be
/// swallowed, and everything else, which is reported to the user.
#[derive(Error, Debug)]
pub enum PiholeError {
    /// Represents errors that occur while talking to the API
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// A structured error reported by the API
    ///
    /// # Fields
    /// * `status` - HTTP status code of the response
    /// * `key` - Translation key identifying the error
    /// * `message` - Human readable message supplied by the server
    /// * `data` - Structured values for the translation template
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        key: String,
        message: String,
        data: serde_json::Value,
    },

    /// Represents validation failures
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The operation was abandoned before it completed
    #[error("Operation cancelled")]
    Cancelled,
}

impl PiholeError {
    /// Returns true if the error is the result of a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PiholeError::Cancelled)
    }
}

/// Specialized error type for validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a PiholeError
pub type PiholeResult<T> = Result<T, PiholeError>;
