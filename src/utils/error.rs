use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Missing argument '{argument}' for tool '{tool}'")]
    MissingArgument { tool: String, argument: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Tool '{name}' is already registered")]
    DuplicateTool { name: String },

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

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Dispatch,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidArgument { .. } | CalcError::MissingArgument { .. } => {
                ErrorCategory::Argument
            }
            CalcError::UnknownTool { .. } | CalcError::DuplicateTool { .. } => {
                ErrorCategory::Dispatch
            }
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::TomlError(_) => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Argument => ErrorSeverity::Medium,
            ErrorCategory::Dispatch => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Argument | ErrorCategory::Dispatch => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidArgument { message } => message.clone(),
            CalcError::MissingArgument { tool, argument } => {
                format!("'{}' needs a value for '{}'", tool, argument)
            }
            CalcError::UnknownTool { name } => format!("There is no tool called '{}'", name),
            CalcError::DuplicateTool { name } => {
                format!("Tool '{}' was registered twice", name)
            }
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CalcError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            CalcError::IoError(e) => format!("I/O failure: {}", e),
            CalcError::SerializationError(e) => format!("Could not encode or decode JSON: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidArgument { .. } => {
                "Check the input values (divisor must be non-zero, square root input must be non-negative)"
            }
            CalcError::MissingArgument { .. } => "Run `calc-tools list` to see each tool's parameters",
            CalcError::UnknownTool { .. } => "Run `calc-tools list` to see the available tools",
            CalcError::DuplicateTool { .. } => "Register each tool name only once",
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::TomlError(_) => "Fix the configuration file and try again",
            CalcError::IoError(_) => "Check that stdin/stdout are open and the file paths exist",
            CalcError::SerializationError(_) => "Send well-formed JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        let err = CalcError::invalid_argument("Cannot divide by zero");
        assert_eq!(err.category(), ErrorCategory::Argument);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Invalid argument: Cannot divide by zero");
        assert_eq!(err.user_friendly_message(), "Cannot divide by zero");
    }

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = CalcError::InvalidConfigValueError {
            field: "logging.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: CalcError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
