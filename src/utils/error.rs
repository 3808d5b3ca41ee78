use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Backend returned {status} for {endpoint}: {detail}")]
    BackendError {
        endpoint: String,
        status: u16,
        detail: String,
    },

    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Validation,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HealthError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        HealthError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HealthError::ApiError(_) => ErrorCategory::Network,
            HealthError::BackendError { .. } | HealthError::MalformedResponse { .. } => {
                ErrorCategory::Backend
            }
            HealthError::ValidationError { .. } => ErrorCategory::Validation,
            HealthError::ConfigError { .. }
            | HealthError::ConfigValidationError { .. }
            | HealthError::InvalidConfigValueError { .. }
            | HealthError::MissingConfigError { .. } => ErrorCategory::Configuration,
            HealthError::IoError(_) => ErrorCategory::Storage,
            HealthError::CsvError(_) | HealthError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HealthError::ValidationError { .. } => ErrorSeverity::High,
            // 5xx and transport failures are worth another attempt by the user
            HealthError::ApiError(_) => ErrorSeverity::Medium,
            HealthError::BackendError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            HealthError::BackendError { .. } | HealthError::MalformedResponse { .. } => {
                ErrorSeverity::High
            }
            HealthError::CsvError(_) | HealthError::SerializationError(_) => ErrorSeverity::High,
            HealthError::ConfigError { .. }
            | HealthError::ConfigValidationError { .. }
            | HealthError::InvalidConfigValueError { .. }
            | HealthError::MissingConfigError { .. }
            | HealthError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HealthError::ApiError(e) if e.is_timeout() => {
                "The backend took too long to answer. Try again or raise backend.timeout_seconds."
                    .to_string()
            }
            HealthError::ApiError(_) => {
                "Check that the backend is running and backend.base_url is reachable.".to_string()
            }
            HealthError::BackendError { status, .. } if *status >= 500 => {
                "The backend failed while handling the request. Please try again.".to_string()
            }
            HealthError::BackendError { .. } => {
                "The backend rejected the request. Review the submitted values.".to_string()
            }
            HealthError::MalformedResponse { .. } => {
                "The backend answered with an unexpected format. Check the backend version."
                    .to_string()
            }
            HealthError::ValidationError { field, .. } => {
                format!("Correct the value of '{}' and submit again.", field)
            }
            HealthError::ConfigError { .. } | HealthError::ConfigValidationError { .. } => {
                "Review the TOML configuration file.".to_string()
            }
            HealthError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting.", field)
            }
            HealthError::MissingConfigError { field } => {
                format!("Add the '{}' setting to the configuration.", field)
            }
            HealthError::IoError(_) => {
                "Check that the storage path exists and is writable.".to_string()
            }
            HealthError::CsvError(_) | HealthError::SerializationError(_) => {
                "The stored data could not be encoded or decoded.".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => "Could not reach the health service.".to_string(),
            ErrorCategory::Backend => "The health service could not complete the request.".to_string(),
            ErrorCategory::Validation => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Storage => "Could not read or write local data.".to_string(),
            ErrorCategory::Data => "Data could not be processed.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;
