//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response whose body did not match the
//!   structured API error schema
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for everything below the resource layer
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::clients::HttpError;
//!
//! match transport.send(request).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Transport { message }) => println!("Transport error: {message}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error for a non-successful response that carries no structured API error.
///
/// `message` is the raw response body.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: "Bad Gateway".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is not an absolute API path.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport and HTTP-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without a structured error body.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error from the default transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport implementation.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}

impl HttpError {
    /// Returns `true` if no response was obtained from the remote party.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Transport { .. })
    }
}
