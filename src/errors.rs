// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Error types for the dlog group abstraction.

use thiserror::Error;

/// Errors reported by [`DlogGroup`](crate::DlogGroup) operations.
///
/// All validation and type errors are detected at the point of the call;
/// nothing is retried or deferred by the group layer itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DlogError {
    /// An operation was attempted before `init` succeeded.
    #[error("the group must be initialized before use")]
    Uninitialized,

    /// Structural validation of group parameters failed at init time.
    #[error("invalid group parameters: {0}")]
    InvalidGroupParameters(String),

    /// An operand element does not belong to the group performing the operation.
    #[error("element type doesn't match the group type")]
    TypeMismatch,

    /// Malformed call shape, e.g. mismatched array lengths or an
    /// out-of-range exponent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A random element/point search exceeded its retry bound.
    #[error("couldn't find a random element within the retry bound")]
    SamplingExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DlogError::TypeMismatch;
        assert_eq!(err.to_string(), "element type doesn't match the group type");
        let err = DlogError::InvalidArgument("bases and exponents differ in length".into());
        assert!(err.to_string().contains("bases and exponents"));
    }
}
