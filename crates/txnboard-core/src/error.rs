//! Error types for txnboard-core
//!
//! Loading transactions is the only fallible operation in the core; its
//! errors carry a stable code, a severity and resolution hints so the
//! store, the start-up path and `POST /api/reload` log them the same way.

use serde::Serialize;
use std::io;
use thiserror::Error;

/// Stable identifier of a [`CoreError`] kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotLoaded,
    ParseError,
    IoError,
    FileNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotLoaded => "NOT_LOADED",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How loudly an error is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Recoverable by fixing the data location; logged as a warning
    Warning,
    /// The data itself is unusable
    Error,
}

/// Errors raised while loading or reading transactions
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Transactions not loaded")]
    NotLoaded,

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl CoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotLoaded => ErrorCode::NotLoaded,
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::IoError { .. } => ErrorCode::IoError,
            CoreError::FileNotFound { .. } => ErrorCode::FileNotFound,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::NotLoaded | CoreError::FileNotFound { .. } => ErrorSeverity::Warning,
            CoreError::ParseError { .. } | CoreError::IoError { .. } => ErrorSeverity::Error,
        }
    }

    /// What an operator can do about it
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            CoreError::NotLoaded => &["Use POST /api/reload once the transactions file is in place."],
            CoreError::ParseError { .. } => &[
                "The transactions file must hold a JSON array of transactions.",
                "Every transaction needs id, name, amount, type, date, paymentChannel and category.",
            ],
            CoreError::FileNotFound { .. } => &["Check data.path and data.transactions_file in the config."],
            CoreError::IoError { .. } => &[],
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<io::Error> for CoreError {
    fn from(error: io::Error) -> Self {
        CoreError::IoError {
            message: error.to_string(),
        }
    }
}

/// What was being done when an error happened
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub operation: String,
    pub data: serde_json::Value,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            data: serde_json::json!({}),
        }
    }

    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Sink for core errors
pub trait ErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Logs through the `log` facade under the `txnboard::error` target
#[derive(Default)]
pub struct DefaultErrorLogger;

impl DefaultErrorLogger {
    /// Single-line rendering: code, message, context and hints
    pub fn describe(error: &CoreError, context: &ErrorContext) -> String {
        let mut line = format!(
            "[{}] {} (operation: {}, data: {})",
            error.code(),
            error,
            context.operation,
            context.data
        );
        for hint in error.suggestions() {
            line.push_str(" hint: ");
            line.push_str(hint);
        }
        line
    }
}

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        let line = Self::describe(error, context);
        match error.severity() {
            ErrorSeverity::Warning => log::warn!(target: "txnboard::error", "{}", line),
            ErrorSeverity::Error => log::error!(target: "txnboard::error", "{}", line),
        }
    }
}
