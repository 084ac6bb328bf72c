use thiserror::Error;

/// Message carried by [`CalcError::InvalidArgument`] when the divisor is zero.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// Message carried by [`CalcError::InvalidArgument`] for a negative radicand.
pub const NEGATIVE_SQRT: &str = "Cannot calculate square root of negative number";

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    #[error("Operation '{operation}' expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A caller-supplied value violated an operation's precondition.
    Argument,
    /// The request itself was malformed (unknown operation, wrong operand count).
    Usage,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidArgument(_) => ErrorCategory::Argument,
            CalcError::UnknownOperation { .. } | CalcError::ArityMismatch { .. } => {
                ErrorCategory::Usage
            }
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Medium,
            ErrorCategory::Argument | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidArgument(message) => message.clone(),
            CalcError::UnknownOperation { name } => {
                format!("'{}' is not a supported operation", name)
            }
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            CalcError::IoError(e) => format!("Could not read a required file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidArgument(message) if message == DIVIDE_BY_ZERO => {
                "Use a nonzero divisor"
            }
            CalcError::InvalidArgument(message) if message == NEGATIVE_SQRT => {
                "Pass a value greater than or equal to zero"
            }
            CalcError::InvalidArgument(_) => "Check the operands passed to the operation",
            CalcError::UnknownOperation { .. } => {
                "Use one of: add, subtract, multiply, divide, sqrt, power"
            }
            CalcError::ArityMismatch { .. } => "Pass the number of operands the operation takes",
            CalcError::ConfigError { .. } => "Make sure the config file is valid TOML",
            CalcError::InvalidConfigValueError { .. } => "Fix the reported config value",
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_bare_message() {
        let err = CalcError::invalid_argument(DIVIDE_BY_ZERO);
        assert_eq!(err.to_string(), "Cannot divide by zero");
        assert_eq!(err.user_friendly_message(), "Cannot divide by zero");
    }

    #[test]
    fn test_classification_and_exit_codes() {
        let arg = CalcError::invalid_argument(NEGATIVE_SQRT);
        assert_eq!(arg.category(), ErrorCategory::Argument);
        assert_eq!(arg.severity().exit_code(), 1);

        let usage = CalcError::UnknownOperation {
            name: "modulo".to_string(),
        };
        assert_eq!(usage.category(), ErrorCategory::Usage);
        assert_eq!(usage.severity().exit_code(), 2);

        let io = CalcError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.severity().exit_code(), 3);
    }

    #[test]
    fn test_recovery_suggestion_depends_on_message() {
        assert_eq!(
            CalcError::invalid_argument(DIVIDE_BY_ZERO).recovery_suggestion(),
            "Use a nonzero divisor"
        );
        assert_eq!(
            CalcError::invalid_argument(NEGATIVE_SQRT).recovery_suggestion(),
            "Pass a value greater than or equal to zero"
        );
    }
}
