use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl PortfolioError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read the content file: {}", e),
            PortfolioError::SerializationError(e) => format!("Could not encode the result: {}", e),
            PortfolioError::ConfigValidationError { field, message } => {
                format!("The content file is invalid ({}): {}", field, message)
            }
            PortfolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' has an invalid value: {}", field, reason)
            }
            PortfolioError::MissingConfigError { field } => {
                format!("'{}' is required but was not provided", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::IoError(_) => "Check that the --content path exists and is readable",
            PortfolioError::SerializationError(_) => "Re-run with --verbose and report the output",
            PortfolioError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with [profile], [[skills]] and [[projects]] tables"
            }
            PortfolioError::InvalidConfigValueError { .. } => {
                "Fill in the highlighted field in the content file"
            }
            PortfolioError::MissingConfigError { .. } => "Add the missing entry to the content file",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = PortfolioError::InvalidConfigValueError {
            field: "profile.name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };

        assert!(err.to_string().contains("profile.name"));
        assert!(err.user_friendly_message().contains("profile.name"));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
