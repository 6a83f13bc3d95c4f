use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing credential: {key}")]
    MissingCredentialError { key: String },

    #[error("Unexpected response from {source_name}: {message}")]
    ResponseError {
        source_name: String,
        message: String,
    },

    #[error("Mail delivery failed: {message}")]
    MailError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Credentials,
    Upstream,
    Delivery,
}

impl NotifierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NotifierError::ConfigError { .. }
            | NotifierError::InvalidConfigValueError { .. }
            | NotifierError::IoError(_) => ErrorCategory::Configuration,
            NotifierError::MissingCredentialError { .. } => ErrorCategory::Credentials,
            NotifierError::ApiError(_)
            | NotifierError::SerializationError(_)
            | NotifierError::TimeParseError(_)
            | NotifierError::ResponseError { .. } => ErrorCategory::Upstream,
            NotifierError::MailError { .. } => ErrorCategory::Delivery,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the configuration file and its values",
            ErrorCategory::Credentials => {
                "Set the missing credential key in the env file or the environment"
            }
            ErrorCategory::Upstream => "The remote API may be down, try again later",
            ErrorCategory::Delivery => "Verify the SMTP host, port and app password",
        }
    }
}

impl From<lettre::error::Error> for NotifierError {
    fn from(e: lettre::error::Error) -> Self {
        NotifierError::MailError {
            message: e.to_string(),
        }
    }
}

impl From<lettre::address::AddressError> for NotifierError {
    fn from(e: lettre::address::AddressError) -> Self {
        NotifierError::MailError {
            message: format!("invalid address: {}", e),
        }
    }
}

impl From<lettre::transport::smtp::Error> for NotifierError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        NotifierError::MailError {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let missing = NotifierError::MissingCredentialError {
            key: "EMAIL".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Credentials);
        assert_eq!(missing.to_string(), "Missing credential: EMAIL");
        assert!(!missing.recovery_suggestion().contains("SEND_TO"));

        let upstream = NotifierError::ResponseError {
            source_name: "iss".to_string(),
            message: "bad latitude".to_string(),
        };
        assert_eq!(upstream.category(), ErrorCategory::Upstream);

        let delivery = NotifierError::MailError {
            message: "connection refused".to_string(),
        };
        assert_eq!(delivery.category(), ErrorCategory::Delivery);
    }
}
