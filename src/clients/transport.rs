//! The transport seam between the dispatcher and the network.

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Issues a single HTTP exchange.
///
/// Implementations return the response for every status code, including
/// 4xx and 5xx; an `Err` means no response was obtained at all. A transport
/// is called exactly once per request: retries, if any, are its own business.
///
/// [`HttpClient`](crate::clients::HttpClient) is the default implementation.
/// Tests and embedders can supply their own:
///
/// ```rust
/// use async_trait::async_trait;
/// use mailchimp_ecommerce::clients::{HttpError, HttpRequest, HttpResponse, Transport};
/// use std::collections::HashMap;
///
/// #[derive(Debug)]
/// struct AlwaysEmpty;
///
/// #[async_trait]
/// impl Transport for AlwaysEmpty {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(204, HashMap::new(), String::new()))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the exchange could not be completed
    /// (connectivity, timeout, invalid request).
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
