use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeerError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Results feed error: {message}")]
    FeedError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TeerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TeerError::ApiError(_) | TeerError::FeedError { .. } => ErrorCategory::Network,
            TeerError::ConfigValidationError { .. } | TeerError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TeerError::IoError(_) | TeerError::ZipError(_) => ErrorCategory::Storage,
            TeerError::CsvError(_)
            | TeerError::SerializationError(_)
            | TeerError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the feed is best effort; a failed fetch still renders fallback data
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TeerError::ApiError(_) | TeerError::FeedError { .. } => {
                "Check network connectivity and the results endpoint, or configure a fallback file"
            }
            TeerError::ConfigValidationError { .. } | TeerError::InvalidConfigValueError { .. } => {
                "Review the command line arguments or the TOML configuration file"
            }
            TeerError::IoError(_) | TeerError::ZipError(_) => {
                "Make sure the output directory exists and is writable"
            }
            TeerError::CsvError(_) | TeerError::SerializationError(_) => {
                "The results data could not be encoded; rerun with --verbose for details"
            }
            TeerError::ProcessingError { .. } => "Rerun with --verbose for details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the results feed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Storage => format!("Could not write the report: {}", self),
            ErrorCategory::Data => format!("Could not process the results: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TeerError>;
