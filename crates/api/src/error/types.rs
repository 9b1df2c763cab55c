//! Error type definitions for signature operations

use std::fmt;

/// Primary error type for signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Details of the rejection
        message: String,
    },

    /// Invalid signature error
    InvalidSignature {
        /// Operation that rejected the signature
        context: &'static str,
        /// Details of the rejection
        message: String,
    },

    /// A bounded retry loop exhausted its attempt budget
    IterationExceeded {
        /// Operation whose retry budget ran out
        context: &'static str,
        /// The configured attempt bound
        limit: usize,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Details of the failure
        message: String,
    },
}

/// Result type for signature operations
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::IterationExceeded { context, limit } => {
                write!(f, "{}: retry budget of {} attempts exhausted", context, limit)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}
