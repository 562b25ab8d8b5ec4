//! Error types for txnboard-config

use thiserror::Error;

/// Why a configuration file was rejected
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Cannot read config file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Invalid YAML: {message}")]
    InvalidYaml { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// Hints printed below the error when start-up fails
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ConfigError::FileNotFound { path } => vec![
                format!("Create {} or pass another file with --config.", path),
                "Run with --print-default-config to get a starting file.".to_string(),
            ],
            ConfigError::MissingField { field } => {
                vec![format!("Add a non-empty '{}' to the config file.", field)]
            }
            ConfigError::InvalidYaml { .. } => {
                vec!["Compare the file with the output of --print-default-config.".to_string()]
            }
            ConfigError::Unreadable { .. } | ConfigError::InvalidValue { .. } => vec![],
        }
    }
}

/// Result type with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_name_the_problem() {
        let missing = ConfigError::FileNotFound {
            path: "config.yaml".to_string(),
        };
        let hints = missing.suggestions();
        assert_eq!(hints.len(), 2);
        assert!(hints[0].contains("config.yaml"));

        let field = ConfigError::MissingField {
            field: "data.transactions_file".to_string(),
        };
        assert!(field.suggestions()[0].contains("data.transactions_file"));

        let value = ConfigError::InvalidValue {
            field: "server.port".to_string(),
            reason: "Port must be greater than 0".to_string(),
        };
        assert!(value.suggestions().is_empty());
        assert_eq!(value.to_string(), "Invalid value for server.port: Port must be greater than 0");
    }
}
