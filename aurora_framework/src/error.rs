//! Error types for the Aurora framework
//!
//! This module defines the error types used throughout the graphics layer,
//! covering argument validation, resource lifecycle and backend failures.

use std::fmt;

/// Result type for Aurora framework operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aurora framework errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A required data slice was empty
    ArgumentNull(&'static str),

    /// Operation is invalid in the current state (size mismatch,
    /// read from a write-only buffer, use after dispose, ...)
    InvalidOperation(String),

    /// Operation is not supported by the backend or graphics profile
    NotSupported(String),

    /// Native API error reported by the backend, carrying the raw error code
    NativeApi { code: u32 },

    /// Out of GPU memory
    OutOfMemory,

    /// Backend-specific error (OpenGL, software, etc.)
    BackendError(String),

    /// Initialization failed (device, backend registry)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArgumentNull(name) => write!(f, "Argument '{}' must not be empty", name),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            Error::NotSupported(msg) => write!(f, "Not supported: {}", msg),
            Error::NativeApi { code } => write!(f, "Native API error: 0x{:04X}", code),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error::InvalidOperation`] and log it through the framework logger
///
/// # Example
///
/// ```
/// use aurora_framework::aurora_err;
///
/// let err = aurora_err!("aurora::VertexBuffer", "count {} exceeds capacity", 12);
/// assert!(err.to_string().contains("count 12 exceeds capacity"));
/// ```
#[macro_export]
macro_rules! aurora_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::dispatch_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::aurora::Error::InvalidOperation(message)
    }};
}

/// Log an error and return early with [`Error::InvalidOperation`]
///
/// # Example
///
/// ```
/// use aurora_framework::aurora::Result;
/// use aurora_framework::aurora_bail;
///
/// fn check(count: usize) -> Result<()> {
///     if count == 0 {
///         aurora_bail!("aurora::VertexBuffer", "count must be greater than zero");
///     }
///     Ok(())
/// }
/// assert!(check(0).is_err());
/// ```
#[macro_export]
macro_rules! aurora_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::aurora_err!($source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
