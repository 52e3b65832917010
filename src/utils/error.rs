use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardCheckError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Card number contains non-numeric characters")]
    NonNumericInput { value: String },

    #[error("Upload rejected with status {status}: {message}")]
    UploadRejected { status: u16, message: String },

    #[error("No card information could be extracted from the image")]
    ExtractionEmpty,

    #[error("Decryption failed with status {status}")]
    DecryptionFailed { status: u16, body: String },

    #[error("Failed to read '{selector}' from response markup: {reason}")]
    FragmentError { selector: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl CardCheckError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CardCheckError::ConfigError { .. }
                | CardCheckError::InvalidConfigValueError { .. }
                | CardCheckError::MissingConfigError { .. }
                | CardCheckError::UrlError(_)
        )
    }

    /// Short message for people, without transport internals.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CardCheckError::HttpError(e) if e.is_connect() => {
                "Could not reach the card service".to_string()
            }
            CardCheckError::HttpError(_) => "The card service request failed".to_string(),
            CardCheckError::NonNumericInput { .. } => {
                "Please enter only numeric characters.".to_string()
            }
            CardCheckError::UploadRejected { message, .. } => message.clone(),
            CardCheckError::ExtractionEmpty => "Failed to extract card information.".to_string(),
            CardCheckError::DecryptionFailed { .. } => "Decryption failed.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, CardCheckError>;
