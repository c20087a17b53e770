//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when engine input or engine configuration is malformed.
///
/// Raised synchronously at the point of computation; nothing is partially
/// computed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' must not be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Rule table for '{grid}' has no quadrant for cell ({first}, {second})")]
    IncompleteRuleTable {
        grid: String,
        first: String,
        second: String,
    },

    #[error("Rule table for '{grid}' maps cell ({first}, {second}) to more than one quadrant")]
    ConflictingRule {
        grid: String,
        first: String,
        second: String,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Checks that a numeric input is finite and not negative.
    pub fn require_non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() {
            return Err(Self::not_finite(field));
        }
        if value < 0.0 {
            return Err(Self::negative(field, value));
        }
        Ok(value)
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,
    IncompleteConfiguration,

    // Collaborator errors
    BenchmarkUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::IncompleteConfiguration => "INCOMPLETE_CONFIGURATION",
            ErrorCode::BenchmarkUnavailable => "BENCHMARK_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let (code, detail) = match &err {
            ValidationError::EmptyField { field } => (ErrorCode::EmptyField, ("field", field)),
            ValidationError::OutOfRange { field, .. } | ValidationError::Negative { field, .. } => {
                (ErrorCode::OutOfRange, ("field", field))
            }
            ValidationError::NotFinite { field } | ValidationError::InvalidFormat { field, .. } => {
                (ErrorCode::InvalidFormat, ("field", field))
            }
            ValidationError::IncompleteRuleTable { grid, .. }
            | ValidationError::ConflictingRule { grid, .. } => {
                (ErrorCode::IncompleteConfiguration, ("grid", grid))
            }
        };
        let (key, value) = detail;
        DomainError::new(code, err.to_string()).with_detail(key, value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("investment_categories");
        assert_eq!(
            format!("{}", err),
            "Field 'investment_categories' cannot be empty"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("actual", 0.0, 5.0, 6.0);
        assert_eq!(
            format!("{}", err),
            "Field 'actual' must be between 0 and 5, got 6"
        );
    }

    #[test]
    fn validation_error_incomplete_rule_table_names_cell() {
        let err = ValidationError::IncompleteRuleTable {
            grid: "risk".to_string(),
            first: "high".to_string(),
            second: "low".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Rule table for 'risk' has no quadrant for cell (high, low)"
        );
    }

    #[test]
    fn require_non_negative_accepts_zero_and_positive() {
        assert_eq!(ValidationError::require_non_negative("gap", 0.0), Ok(0.0));
        assert_eq!(ValidationError::require_non_negative("gap", 4.5), Ok(4.5));
    }

    #[test]
    fn require_non_negative_rejects_negative() {
        assert_eq!(
            ValidationError::require_non_negative("gap", -1.0),
            Err(ValidationError::negative("gap", -1.0))
        );
    }

    #[test]
    fn require_non_negative_rejects_nan_and_infinity() {
        assert_eq!(
            ValidationError::require_non_negative("gap", f64::NAN),
            Err(ValidationError::not_finite("gap"))
        );
        assert_eq!(
            ValidationError::require_non_negative("gap", f64::INFINITY),
            Err(ValidationError::not_finite("gap"))
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::BenchmarkUnavailable, "Benchmarks offline");
        assert_eq!(format!("{}", err), "[BENCHMARK_UNAVAILABLE] Benchmarks offline");
    }

    #[test]
    fn domain_error_from_validation_keeps_field() {
        let err: DomainError = ValidationError::negative("total_gap", -1.0).into();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.details.get("field"), Some(&"total_gap".to_string()));
    }

    #[test]
    fn domain_error_from_rule_table_error_keeps_grid() {
        let err: DomainError = ValidationError::IncompleteRuleTable {
            grid: "risk".to_string(),
            first: "high".to_string(),
            second: "low".to_string(),
        }
        .into();

        assert_eq!(err.details.get("grid"), Some(&"risk".to_string()));
        assert!(err.details.get("field").is_none());
    }

    #[test]
    fn domain_error_from_validation_maps_code() {
        let err: DomainError = ValidationError::empty_field("categories").into();
        assert_eq!(err.code, ErrorCode::EmptyField);

        let err: DomainError = ValidationError::ConflictingRule {
            grid: "initiative".to_string(),
            first: "low".to_string(),
            second: "high".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::IncompleteConfiguration);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::OutOfRange), "OUT_OF_RANGE");
        assert_eq!(
            format!("{}", ErrorCode::BenchmarkUnavailable),
            "BENCHMARK_UNAVAILABLE"
        );
    }
}
