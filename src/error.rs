//! Error types for the safe sorting entry points.
//!
//! The kernels themselves cannot fail. These errors report a buffer or a
//! network that does not satisfy a kernel's preconditions, which the raw
//! entry points leave to the caller.

use std::fmt;

/// Errors returned by the checked sorting functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdnetError {
    /// The slice length differs from the network size.
    LengthMismatch {
        /// Number of elements the network sorts.
        expected: usize,
        /// Length of the slice that was passed.
        actual: usize,
    },
    /// A register-padded sort needs memory up to the end of the register.
    BufferTooShort {
        /// Elements the full register load reads.
        required: usize,
        /// Length of the slice that was passed.
        actual: usize,
    },
    /// The network does not fit in a 512-bit register for this element type.
    UnsupportedWidth {
        /// Lanes the network touches.
        lanes: usize,
        /// Size of one element in bytes.
        element_bytes: usize,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SimdnetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdnetError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: network sorts {} elements but the slice holds {}",
                expected, actual
            ),
            SimdnetError::BufferTooShort { required, actual } => write!(
                f,
                "Buffer too short: register access needs {} elements, got {}",
                required, actual
            ),
            SimdnetError::UnsupportedWidth {
                lanes,
                element_bytes,
            } => write!(
                f,
                "Unsupported width: {} lanes of {} bytes exceed a 512-bit register",
                lanes, element_bytes
            ),
            SimdnetError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for SimdnetError {}

/// Result type alias for simdnet operations.
pub type Result<T> = std::result::Result<T, SimdnetError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> SimdnetError {
    SimdnetError::LengthMismatch { expected, actual }
}

/// Creates a buffer too short error.
pub fn buffer_too_short(required: usize, actual: usize) -> SimdnetError {
    SimdnetError::BufferTooShort { required, actual }
}

/// Creates an unsupported width error.
pub fn unsupported_width(lanes: usize, element_bytes: usize) -> SimdnetError {
    SimdnetError::UnsupportedWidth {
        lanes,
        element_bytes,
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> SimdnetError {
    SimdnetError::ValidationError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = length_mismatch(16, 15);
        let display = format!("{}", error);
        assert!(display.contains("Length mismatch"));
        assert!(display.contains("16 elements"));
        assert!(display.contains("holds 15"));
    }

    #[test]
    fn test_buffer_too_short_display() {
        let error = buffer_too_short(32, 31);
        let display = format!("{}", error);
        assert!(display.contains("Buffer too short"));
        assert!(display.contains("needs 32 elements"));
        assert!(display.contains("got 31"));
    }

    #[test]
    fn test_unsupported_width_display() {
        let error = unsupported_width(16, 8);
        let display = format!("{}", error);
        assert!(display.contains("Unsupported width"));
        assert!(display.contains("16 lanes of 8 bytes"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = validation_error("length must be a multiple of 4");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("length must be a multiple of 4"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(length_mismatch(4, 3), length_mismatch(4, 3));
        assert_ne!(length_mismatch(4, 3), length_mismatch(4, 5));
        assert_ne!(length_mismatch(4, 3), buffer_too_short(4, 3));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = unsupported_width(64, 2);
        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
