// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the tree codec.
//!
//! Every failure the codec can report is a variant of [`CodecError`]. Errors are
//! returned before any work is done, so a failed call never yields a partial tree.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for codec operations.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::errors::CodecError;
///
/// fn check_path(path: &str) -> Result<(), CodecError> {
///     if path.is_empty() {
///         return Err(CodecError::invalid_argument("path must not be empty"));
///     }
///     Ok(())
/// }
///
/// assert!(check_path("").is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// A precondition of expand or flatten was violated.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// A leaf could not be read as the requested type.
    #[error("Failed to convert leaf at '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The flattened key of the leaf being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CodecError {
    /// Creates an `InvalidArgument` error with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CodecError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        CodecError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        CodecError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        CodecError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError for a leaf whose kind cannot hold the target type.
    pub fn kind_mismatch(key: &str, target_type: &str, found: &str) -> Self {
        CodecError::TypeConversionError {
            key: key.to_string(),
            target_type: target_type.to_string(),
            source: format!("leaf is {}", found).into(),
        }
    }

    /// Returns `true` if this is an `InvalidArgument` error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CodecError::InvalidArgument { .. })
    }
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = CodecError::invalid_argument("path must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid argument: path must not be empty"
        );
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = CodecError::TypeConversionError {
            key: "api.port".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("api.port"));
        assert!(error.to_string().contains("i32"));
        assert!(!error.is_invalid_argument());
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i64>().unwrap_err();
        let error = CodecError::from_parse_int_error("api.port".to_string(), parse_err);
        assert!(matches!(error, CodecError::TypeConversionError { .. }));
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = CodecError::from_parse_float_error("ratio".to_string(), parse_err);
        assert!(error.to_string().contains("float"));
    }

    #[test]
    fn test_from_parse_bool_error() {
        let parse_err = "not_a_bool".parse::<bool>().unwrap_err();
        let error = CodecError::from_parse_bool_error("debug".to_string(), parse_err);
        assert!(error.to_string().contains("boolean"));
    }

    #[test]
    fn test_kind_mismatch() {
        let error = CodecError::kind_mismatch("api.enabled", "f64", "a boolean");
        assert_eq!(
            error.to_string(),
            "Failed to convert leaf at 'api.enabled' to type f64: leaf is a boolean"
        );
    }
}
