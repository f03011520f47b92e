//! Error types for the overtime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during submission processing,
//! configuration loading, and record persistence.
//!
//! Classification deliberately has no error path: the calendar resolver
//! degrades to a weekday-rule answer (or `Unknown` for an unparseable date)
//! instead of failing.

use thiserror::Error;

/// The main error type for the overtime engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::InvalidDateFormat {
///     value: "2026/01/01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date format: 2026/01/01 (expected YYYY-MM-DD)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A submitted date string was not a valid `YYYY-MM-DD` date.
    #[error("Invalid date format: {value} (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A required submission field was missing or empty.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// The name of the missing field.
        field: String,
    },

    /// The requested leave type is not in the configured leave-type list.
    #[error("Invalid leave type: {name}")]
    InvalidLeaveType {
        /// The leave type that was not recognised.
        name: String,
    },

    /// A personal-leave request did not carry a valid duration.
    #[error("Personal leave requires a duration of -4 (half day) or -8 (full day)")]
    MissingLeaveDuration,

    /// An imported holiday payload could not be understood.
    #[error("Holiday data error: {message}")]
    HolidayDataError {
        /// A description of what made the payload invalid.
        message: String,
    },

    /// The record store failed to read or write.
    ///
    /// Reported upward to the caller layer; the engine performs no retry.
    #[error("Persistence failure: {message}")]
    PersistenceFailure {
        /// A description of the persistence error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/config.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/config.json"
        );
    }

    #[test]
    fn test_invalid_date_format_displays_value() {
        let error = EngineError::InvalidDateFormat {
            value: "01-01-2026".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date format: 01-01-2026 (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_missing_required_field_displays_field() {
        let error = EngineError::MissingRequiredField {
            field: "user".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required field: user");
    }

    #[test]
    fn test_invalid_leave_type_displays_name() {
        let error = EngineError::InvalidLeaveType {
            name: "调岗假".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid leave type: 调岗假");
    }

    #[test]
    fn test_missing_leave_duration_message() {
        let error = EngineError::MissingLeaveDuration;
        assert!(error.to_string().contains("-4"));
        assert!(error.to_string().contains("-8"));
    }

    #[test]
    fn test_persistence_failure_displays_message() {
        let error = EngineError::PersistenceFailure {
            message: "disk full".to_string(),
        };
        assert_eq!(error.to_string(), "Persistence failure: disk full");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_field() -> EngineResult<()> {
            Err(EngineError::MissingRequiredField {
                field: "date".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_field()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
