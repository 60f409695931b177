use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeError {
    #[error("Joke request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Joke service returned HTTP {status}")]
    HttpStatusError { status: u16 },

    #[error("Malformed joke response: {message}")]
    MalformedResponseError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類：決定顯示哪一種備援訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    MalformedResponse,
    Configuration,
    Io,
}

impl JokeError {
    pub fn malformed(message: impl Into<String>) -> Self {
        JokeError::MalformedResponseError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            // reqwest 的解碼錯誤代表回應內容有問題，不是網路問題
            JokeError::NetworkError(e) if e.is_decode() => ErrorCategory::MalformedResponse,
            JokeError::NetworkError(_) | JokeError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            JokeError::MalformedResponseError { .. } | JokeError::SerializationError(_) => {
                ErrorCategory::MalformedResponse
            }
            JokeError::ConfigError { .. } | JokeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            JokeError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => "Could not reach the joke service.".to_string(),
            ErrorCategory::MalformedResponse => {
                "The joke service sent something unexpected.".to_string()
            }
            ErrorCategory::Configuration => self.to_string(),
            ErrorCategory::Io => format!("Terminal I/O failed: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Press Enter to try again.",
            ErrorCategory::MalformedResponse => "Press Enter to try again.",
            ErrorCategory::Configuration => {
                "Check the command line flags or the TOML config file"
            }
            ErrorCategory::Io => "Check that stdout and stdin are attached to a terminal or pipe",
        }
    }
}

pub type Result<T> = std::result::Result<T, JokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            JokeError::HttpStatusError { status: 503 }.category(),
            ErrorCategory::Network
        );
        assert_eq!(
            JokeError::malformed("missing joke field").category(),
            ErrorCategory::MalformedResponse
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(
            JokeError::from(json_err).category(),
            ErrorCategory::MalformedResponse
        );

        let cfg = JokeError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(cfg.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_user_friendly_message_hides_details() {
        let err = JokeError::malformed("expected value at line 1 column 1");
        assert_eq!(
            err.user_friendly_message(),
            "The joke service sent something unexpected."
        );
        assert_eq!(err.recovery_suggestion(), "Press Enter to try again.");
    }
}
