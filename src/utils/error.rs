use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakeError {
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network request failed: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Response stream error: {0}")]
    StreamFailure(#[source] std::io::Error),

    #[error("Unexpected HTTP status: {status}")]
    NonSuccessStatus { status: u16 },

    #[error("Problem parsing the earthquake JSON results: {0}")]
    ParseFailure(#[from] serde_json::Error),

    #[error("Response contained no earthquake features")]
    EmptyResult,

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Network,
    Response,
    Parse,
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

impl QuakeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuakeError::InvalidUrl { .. } => ErrorCategory::Request,
            QuakeError::NetworkFailure(_) | QuakeError::StreamFailure(_) => ErrorCategory::Network,
            QuakeError::NonSuccessStatus { .. } | QuakeError::EmptyResult => {
                ErrorCategory::Response
            }
            QuakeError::ParseFailure(_) => ErrorCategory::Parse,
            QuakeError::ConfigError { .. } | QuakeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            QuakeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 這些都會被降級為「沒有事件」，不影響程式繼續執行
            QuakeError::EmptyResult | QuakeError::NonSuccessStatus { .. } => ErrorSeverity::Low,
            QuakeError::NetworkFailure(_) | QuakeError::StreamFailure(_) => ErrorSeverity::Medium,
            QuakeError::InvalidUrl { .. } | QuakeError::ParseFailure(_) => ErrorSeverity::High,
            QuakeError::ConfigError { .. } | QuakeError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            QuakeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuakeError::InvalidUrl { url, .. } => {
                format!("The earthquake service address is not a valid URL: {}", url)
            }
            QuakeError::NetworkFailure(e) if e.is_timeout() => {
                "The earthquake service did not respond in time".to_string()
            }
            QuakeError::NetworkFailure(_) | QuakeError::StreamFailure(_) => {
                "Could not reach the earthquake service".to_string()
            }
            QuakeError::NonSuccessStatus { status } => {
                format!("The earthquake service answered with HTTP {}", status)
            }
            QuakeError::ParseFailure(_) => {
                "The earthquake service returned data that could not be read".to_string()
            }
            QuakeError::EmptyResult => "No earthquakes matched the query".to_string(),
            QuakeError::ConfigError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            QuakeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not allowed for {}: {}", value, field, reason),
            QuakeError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Request => "Check the endpoint URL in the CLI flags or config file",
            ErrorCategory::Network => "Check the network connection or raise the timeouts",
            ErrorCategory::Response => "Widen the query parameters (date range, magnitude)",
            ErrorCategory::Parse => "Make sure the endpoint returns a GeoJSON feature collection",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuakeError>;
