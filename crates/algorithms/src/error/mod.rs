//! Error handling for the number-theoretic primitives

use core::fmt;

use ffdsa_api::Error as ApiError;

/// The error type for number-theoretic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// No modular inverse exists for the given inputs
    NotInvertible {
        /// Operation that required the inverse
        context: &'static str,
    },

    /// A bounded search loop ran out of attempts
    IterationLimit {
        /// Operation whose attempt budget ran out
        operation: &'static str,
        /// The configured attempt bound
        limit: usize,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for number-theoretic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::NotInvertible { context } => {
                write!(f, "No modular inverse exists: {}", context)
            }
            Error::IterationLimit { operation, limit } => {
                write!(f, "{}: attempt budget of {} exhausted", operation, limit)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Conversion into the workspace-level error type
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::NotInvertible { context } => ApiError::InvalidParameter {
                context,
                message: "no modular inverse exists".to_string(),
            },
            Error::IterationLimit { operation, limit } => ApiError::IterationExceeded {
                context: operation,
                limit,
            },
            Error::Other(msg) => ApiError::Other {
                context: "algorithms",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
