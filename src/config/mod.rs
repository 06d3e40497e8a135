//! Configuration types for the e-commerce client.
//!
//! # Overview
//!
//! - [`ChimpConfig`]: the resolved configuration held by a client
//! - [`ChimpConfigBuilder`]: a builder for constructing [`ChimpConfig`] instances
//! - [`ApiKey`]: a validated API key newtype with masked debug output
//! - [`BaseUrl`]: a validated base URL
//!
//! # Example
//!
//! ```rust
//! use mailchimp_ecommerce::{ApiKey, ChimpConfig};
//!
//! let config = ChimpConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef-us6").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://us6.api.mailchimp.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Path prefix of the Marketing API version this crate speaks.
pub const API_PATH: &str = "/3.0";

/// Configuration for the e-commerce client.
///
/// The base URL is resolved at build time: an explicit override wins,
/// otherwise it is derived from the data center suffix of the API key.
///
/// # Thread Safety
///
/// `ChimpConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ChimpConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ChimpConfig {
    /// Creates a new builder for constructing a `ChimpConfig`.
    #[must_use]
    pub fn builder() -> ChimpConfigBuilder {
        ChimpConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the resolved base URL (scheme and host, no API path).
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout enforced by the transport, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ChimpConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChimpConfig>();
};

/// Builder for constructing [`ChimpConfig`] instances.
///
/// `api_key` is required. All other fields are optional.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use mailchimp_ecommerce::{ApiKey, BaseUrl, ChimpConfig};
///
/// let config = ChimpConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyShop/1.0")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "http://localhost:8080");
/// ```
#[derive(Debug, Default)]
pub struct ChimpConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ChimpConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the base URL derived from the API key.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ChimpConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// [`ConfigError::MissingDataCenter`] if no base URL can be resolved, and
    /// [`ConfigError::InvalidDataCenter`] if the key suffix is malformed.
    pub fn build(self) -> Result<ChimpConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => {
                let data_center = api_key
                    .data_center()?
                    .ok_or(ConfigError::MissingDataCenter)?;
                BaseUrl::for_data_center(data_center)?
            }
        };

        Ok(ChimpConfig {
            api_key,
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = ChimpConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_derives_base_url_from_key() {
        let config = ChimpConfig::builder()
            .api_key(ApiKey::new("abc-us21").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://us21.api.mailchimp.com");
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_requires_data_center_without_override() {
        let result = ChimpConfig::builder()
            .api_key(ApiKey::new("abc").unwrap())
            .build();

        assert!(matches!(result, Err(ConfigError::MissingDataCenter)));
    }

    #[test]
    fn test_base_url_override_skips_data_center() {
        let config = ChimpConfig::builder()
            .api_key(ApiKey::new("abc").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:9999").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = ChimpConfig::builder()
            .api_key(ApiKey::new("secret-us1").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ChimpConfig"));
        assert!(!debug_str.contains("secret"));
    }
}
