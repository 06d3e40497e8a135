//! Configuration error types for the e-commerce client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured client fails at build time rather than on its first request.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_ecommerce::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Mailchimp API key.")]
    EmptyApiKey,

    /// The API key carries no data center suffix and no base URL override was given.
    #[error("API key has no data center suffix (expected 'key-us6'). Provide a key with a suffix or set a base URL.")]
    MissingDataCenter,

    /// The data center suffix of the API key is malformed.
    #[error("Invalid data center '{data_center}'. Expected lowercase letters followed by digits (e.g., 'us6').")]
    InvalidDataCenter {
        /// The invalid data center that was parsed from the key.
        data_center: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://us6.api.mailchimp.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_invalid_data_center_error_message() {
        let error = ConfigError::InvalidDataCenter {
            data_center: "u$1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("u$1"));
        assert!(message.contains("us6"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingDataCenter;
        let _: &dyn std::error::Error = &error;
    }
}
