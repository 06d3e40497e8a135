//! Default HTTP transport built on `reqwest`.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{ChimpConfig, API_PATH};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Username sent with basic auth; the API only checks the password (the key).
const BASIC_AUTH_USER: &str = "anystring";

/// HTTP client for the Marketing API.
///
/// The client handles:
/// - Base URI construction from the configured data center or base URL override
/// - Default headers including User-Agent and basic-auth credentials
/// - Per-request timeout from the configuration
///
/// Every request is attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::{ApiKey, ChimpConfig, HttpClient};
///
/// let config = ChimpConfig::builder()
///     .api_key(ApiKey::new("0123456789abcdef-us6").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.base_uri(), "https://us6.api.mailchimp.com");
/// assert_eq!(client.base_path(), "/3.0");
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://us6.api.mailchimp.com`).
    base_uri: String,
    /// Base path (e.g., "/3.0").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &ChimpConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Mailchimp E-commerce Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let credentials = STANDARD.encode(format!(
            "{BASIC_AUTH_USER}:{}",
            config.api_key().as_ref()
        ));

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), format!("Basic {credentials}"));

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri: config.base_url().as_ref().to_string(),
            base_path: API_PATH.to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}{}", self.base_uri, self.base_path, path)
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req_builder = self.client.request(method, &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::trace!(code, url = %url, "received response");

        Ok(HttpResponse::new(code, res_headers, body))
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl};

    fn create_test_config() -> ChimpConfig {
        ChimpConfig::builder()
            .api_key(ApiKey::new("test-key-us6").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_data_center() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_uri(), "https://us6.api.mailchimp.com");
        assert_eq!(client.base_path(), "/3.0");
        assert_eq!(
            client.url_for("/ecommerce/stores"),
            "https://us6.api.mailchimp.com/3.0/ecommerce/stores"
        );
    }

    #[test]
    fn test_client_construction_with_base_url_override() {
        let config = ChimpConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:4010").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_uri(), "http://127.0.0.1:4010");
    }

    #[test]
    fn test_authorization_header_is_basic_auth() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let expected = format!("Basic {}", STANDARD.encode("anystring:test-key-us6"));
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&expected)
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Mailchimp E-commerce Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ChimpConfig::builder()
            .api_key(ApiKey::new("test-key-us6").unwrap())
            .user_agent_prefix("MyShop/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/1.0 | "));
    }

    #[test]
    fn test_debug_output_hides_credentials() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let debug = format!("{client:?}");

        assert!(debug.contains("HttpClient"));
        assert!(!debug.contains("Basic"));
    }
}
