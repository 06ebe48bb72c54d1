//! Error handling for cryptographic primitives

use core::fmt;

use ucrypt_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// An encoding decoded to a value outside its permitted range
    OutOfRange {
        /// Value being decoded
        context: &'static str,
    },

    /// The random-byte source failed to deliver
    RandomGeneration {
        /// Operation that requested randomness
        context: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length { context, expected, actual } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::OutOfRange { context } => {
                write!(f, "Value out of range for {}", context)
            }
            Error::RandomGeneration { context } => {
                write!(f, "Random generation failed in {}", context)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::OutOfRange { context } => CoreError::OutOfRange { context },
            Error::RandomGeneration { context } => CoreError::RandomGenerationError { context },
            Error::Other(msg) => {
                #[cfg(not(feature = "std"))]
                let _ = msg;
                CoreError::Other {
                    context: "primitives",
                    #[cfg(feature = "std")]
                    message: msg.to_string(),
                }
            }
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidLength { context, expected, actual } => Error::Length {
                context,
                expected,
                actual,
            },
            CoreError::OutOfRange { context } => Error::OutOfRange { context },
            CoreError::RandomGenerationError { context } => Error::RandomGeneration { context },
            CoreError::Other { context, .. } => Error::Other(context),
        }
    }
}

// Re-export core error handling traits for convenience
pub use ucrypt_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
