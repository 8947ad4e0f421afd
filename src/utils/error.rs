use thiserror::Error;

#[derive(Error, Debug)]
pub enum MamaError {
    #[error("Speech request failed: {0}")]
    SpeechError(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Speech service returned {status}: {message}")]
    SpeechServiceError { status: u16, message: String },

    #[error("Audio playback failed: {message}")]
    PlaybackError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Speech,
    Export,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MamaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MamaError::ConfigError { .. }
            | MamaError::InvalidConfigValueError { .. }
            | MamaError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MamaError::SpeechError(_)
            | MamaError::SpeechServiceError { .. }
            | MamaError::PlaybackError { .. } => ErrorCategory::Speech,
            MamaError::CsvError(_) | MamaError::SerializationError(_) => ErrorCategory::Export,
            MamaError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 語音失敗不影響評估結果，所以嚴重度最低
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Speech => ErrorSeverity::Low,
            ErrorCategory::Export => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MamaError::SpeechError(_) | MamaError::SpeechServiceError { .. } => {
                format!("Voice output error: {}", self)
            }
            MamaError::PlaybackError { message } => {
                format!("Could not play the advice audio: {}", message)
            }
            MamaError::CsvError(_) | MamaError::SerializationError(_) => {
                format!("Could not write the assessment summary: {}", self)
            }
            MamaError::IoError(e) => format!("File system error: {}", e),
            MamaError::ConfigError { message } => format!("Invalid configuration: {}", message),
            MamaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            MamaError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MamaError::SpeechError(_) | MamaError::SpeechServiceError { .. } => {
                "Check your network connection or run again without --speak"
            }
            MamaError::PlaybackError { .. } => {
                "Make sure the audio player is installed, or omit --player to only save the audio file"
            }
            MamaError::CsvError(_) | MamaError::SerializationError(_) | MamaError::IoError(_) => {
                "Check that the output path exists and is writable"
            }
            MamaError::ConfigError { .. } => "Check the configuration file syntax",
            MamaError::InvalidConfigValueError { .. } => {
                "Use a value inside the allowed range shown above"
            }
            MamaError::MissingConfigError { .. } => "Add the missing setting and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, MamaError>;
