use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unsupported method: {method}. Use 'get' or 'post'")]
    UnsupportedMethod { method: String },

    #[error("Malformed request data: {source}")]
    MalformedInput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported output format: {path}. Use '.json' or '.csv'")]
    UnsupportedOutputFormat { path: String },

    #[error("Response shape not usable for CSV: {message}")]
    InvalidShape { message: String },

    #[error("Remote request failed with status {status}")]
    RemoteFailure { status: u16, body: String },

    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，用於決定 CLI 的退出碼與提示訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Remote,
    Input,
    System,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::RemoteFailure { .. } => ErrorCategory::Remote,
            ClientError::UnsupportedMethod { .. }
            | ClientError::MalformedInput { .. }
            | ClientError::UnsupportedOutputFormat { .. }
            | ClientError::InvalidShape { .. }
            | ClientError::ValidationError { .. } => ErrorCategory::Input,
            ClientError::NetworkError(_)
            | ClientError::CsvError(_)
            | ClientError::IoError(_)
            | ClientError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Remote => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::RemoteFailure { status, .. } => {
                format!("Server answered with HTTP {}", status)
            }
            ClientError::NetworkError(e) if e.is_connect() => {
                "Could not connect to the remote host".to_string()
            }
            ClientError::NetworkError(e) if e.is_timeout() => {
                "The remote host did not answer in time".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::UnsupportedMethod { .. } => "Use 'get' or 'post' as the method",
            ClientError::MalformedInput { .. } => {
                "Pass a valid JSON document to -d/--data, e.g. '{\"title\":\"a\"}'"
            }
            ClientError::UnsupportedOutputFormat { .. } => {
                "Use an output path ending in .json or .csv"
            }
            ClientError::InvalidShape { .. } => {
                "CSV output needs a non-empty JSON array of objects; try .json instead"
            }
            ClientError::RemoteFailure { .. } => "Check the endpoint fragment and request data",
            ClientError::NetworkError(_) => "Check your network connection and DNS settings",
            ClientError::CsvError(_) | ClientError::IoError(_) => {
                "Check that the output location is writable"
            }
            ClientError::SerializationError(_) => "The response body was not valid JSON",
            ClientError::ValidationError { .. } => "Fix the reported argument and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
