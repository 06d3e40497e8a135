//! Validated newtype wrappers for configuration values.
//!
//! Values are validated on construction; invalid input is rejected with a
//! [`ConfigError`] that names the offending value.

use crate::error::ConfigError;
use std::fmt;

/// A validated Mailchimp API key.
///
/// Mailchimp keys carry the data center they belong to as a `-dc` suffix
/// (`0123456789abcdef-us6`). The key value is masked in debug output.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef-us6").unwrap();
/// assert_eq!(key.data_center().unwrap().unwrap(), "us6");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Returns the data center encoded in the key suffix, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDataCenter`] if a suffix is present but
    /// is not of the form `letters` followed by `digits`.
    pub fn data_center(&self) -> Result<Option<&str>, ConfigError> {
        let Some((_, data_center)) = self.0.rsplit_once('-') else {
            return Ok(None);
        };

        if !is_valid_data_center(data_center) {
            return Err(ConfigError::InvalidDataCenter {
                data_center: data_center.to_string(),
            });
        }

        Ok(Some(data_center))
    }
}

fn is_valid_data_center(dc: &str) -> bool {
    let letters = dc.chars().take_while(char::is_ascii_lowercase).count();
    let digits = &dc[letters..];
    letters > 0 && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for API requests.
///
/// Used to point the client at a proxy or a mock server instead of the
/// data-center host derived from the API key. Trailing slashes are removed.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Builds the base URL for a Mailchimp data center.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDataCenter`] if `data_center` is malformed.
    pub fn for_data_center(data_center: &str) -> Result<Self, ConfigError> {
        if !is_valid_data_center(data_center) {
            return Err(ConfigError::InvalidDataCenter {
                data_center: data_center.to_string(),
            });
        }
        Self::new(format!("https://{data_center}.api.mailchimp.com"))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-us1").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn test_api_key_data_center_parsing() {
        let key = ApiKey::new("abc123-us19").unwrap();
        assert_eq!(key.data_center().unwrap(), Some("us19"));

        let key = ApiKey::new("abc123").unwrap();
        assert_eq!(key.data_center().unwrap(), None);

        let key = ApiKey::new("abc123-US6").unwrap();
        assert!(matches!(
            key.data_center(),
            Err(ConfigError::InvalidDataCenter { data_center }) if data_center == "US6"
        ));

        let key = ApiKey::new("abc123-us").unwrap();
        assert!(key.data_center().is_err());
    }

    #[test]
    fn test_base_url_for_data_center() {
        let url = BaseUrl::for_data_center("us6").unwrap();
        assert_eq!(url.as_ref(), "https://us6.api.mailchimp.com");
        assert_eq!(url.host_name(), Some("us6.api.mailchimp.com"));

        assert!(BaseUrl::for_data_center("6us").is_err());
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));

        assert!(BaseUrl::new("example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
    }
}
