//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

#[cfg(feature = "std")]
use thiserror::Error as ThisError;

/// Primary error type for cryptographic operations
#[cfg(feature = "std")]
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An encoded value decodes to an integer outside its permitted range
    #[error("{context}: encoded value out of range")]
    OutOfRange { context: &'static str },

    /// Random generation error
    #[error("Random generation error: {context}")]
    RandomGenerationError { context: &'static str },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Primary error type for cryptographic operations (no_std version)
#[cfg(not(feature = "std"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An encoded value decodes to an integer outside its permitted range
    OutOfRange { context: &'static str },

    /// Random generation error
    RandomGenerationError { context: &'static str },

    /// Other error
    Other { context: &'static str },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::OutOfRange { .. } => Self::OutOfRange { context },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
            #[cfg(feature = "std")]
            Self::Other { message, .. } => Self::Other { context, message },
            #[cfg(not(feature = "std"))]
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::OutOfRange { context }
            | Self::RandomGenerationError { context }
            | Self::Other { context, .. } => context,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            Self::OutOfRange { context } => write!(f, "{}: encoded value out of range", context),
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
