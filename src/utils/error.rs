use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response status: {status}")]
    Status { status: u16 },

    #[error("Order decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Order ID '{order_id}' cannot be used as a path segment")]
    UnroutableOrderId { order_id: String },

    #[error("No order ID was entered")]
    NoInput,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    /// Line shown to the operator when a fetch comes back empty-handed.
    pub fn diagnostic(&self) -> String {
        match self {
            LookupError::Status { status } => {
                format!("Failed to fetch order. Status: {}", status)
            }
            other => format!("Failed to fetch order: {}", other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Status { status: 404 })
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_diagnostic_reports_code() {
        let err = LookupError::Status { status: 404 };
        assert_eq!(err.diagnostic(), "Failed to fetch order. Status: 404");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_errors_diagnostic_carries_message() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LookupError::from(decode);
        assert!(err.diagnostic().starts_with("Failed to fetch order: Order decoding error:"));
        assert!(!err.is_not_found());

        let server_error = LookupError::Status { status: 500 };
        assert!(!server_error.is_not_found());
    }
}
