//! The request dispatcher every resource operation funnels through.

use std::fmt;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::ChimpConfig;
use crate::rest::{QueryParams, ResourceError};

/// Client for the e-commerce endpoints of the Marketing API.
///
/// `RestClient` owns a shared [`Transport`] and exposes two generic
/// operations, [`request`](Self::request) and
/// [`request_ok`](Self::request_ok). The typed resource methods
/// (`get_stores`, `get_order`, ...) are defined alongside their resources in
/// [`crate::rest::resources`] and all go through these two.
///
/// Cloning is cheap: clones share the same transport. Entities returned by
/// the client hold such a clone so they can issue follow-up requests.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use mailchimp_ecommerce::{ApiKey, ChimpConfig, RestClient};
///
/// let config = ChimpConfig::builder()
///     .api_key(ApiKey::new("0123456789abcdef-us6")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let stores = client.get_stores(None).await?;
/// for store in &stores.stores {
///     let orders = store.get_orders(None).await?;
///     println!("{}: {} orders", store.name, orders.meta.total_items);
/// }
/// ```
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the default [`HttpClient`] transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &ChimpConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(base_uri = http_client.base_uri(), "created e-commerce client");
        Ok(Self::with_transport(Arc::new(http_client)))
    }

    /// Creates a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Returns the transport this client sends through.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Sends one request and decodes the response payload into `D`.
    ///
    /// Query parameters are attached when given (an empty set attaches
    /// nothing) and `body` is serialized as JSON when given. An empty success
    /// payload decodes as JSON `null`, so `D` may be `()` or an `Option`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Encode`] if `body` cannot be serialized
    /// - [`ResourceError::Http`] if the transport fails, or for a non-success
    ///   status whose body is not a structured API error
    /// - [`ResourceError::Api`] for a structured API error
    /// - [`ResourceError::Decode`] if the success payload does not fit `D`
    pub async fn request<B, D>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Option<&dyn QueryParams>,
        body: Option<&B>,
    ) -> Result<D, ResourceError>
    where
        B: Serialize + Sync + ?Sized,
        D: DeserializeOwned,
    {
        let response = self.dispatch(method, endpoint, params, body).await?;

        let payload = if response.is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(payload).map_err(|source| {
            let type_name = std::any::type_name::<D>();
            tracing::error!(
                method = %method,
                endpoint,
                type_name,
                error = %source,
                "failed to decode response"
            );
            ResourceError::Decode {
                target: type_name,
                source,
            }
        })
    }

    /// Sends one body-less request and reports success.
    ///
    /// Returns `Ok(true)` for any 2xx status; everything else is an `Err`
    /// with the same classification as [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn request_ok(
        &self,
        method: HttpMethod,
        endpoint: &str,
    ) -> Result<bool, ResourceError> {
        self.dispatch::<()>(method, endpoint, None, None).await?;
        Ok(true)
    }

    async fn dispatch<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Option<&dyn QueryParams>,
        body: Option<&B>,
    ) -> Result<HttpResponse, ResourceError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let mut builder = HttpRequest::builder(method, endpoint);

        if let Some(params) = params {
            builder = builder.query(params.params());
        }

        if let Some(body) = body {
            let value =
                serde_json::to_value(body).map_err(|source| ResourceError::Encode { source })?;
            builder = builder.body(value);
        }

        let request = builder.build()?;

        tracing::debug!(method = %method, endpoint, "sending request");

        let response = self.transport.send(request).await?;

        if !response.is_ok() {
            tracing::warn!(
                method = %method,
                endpoint,
                status = response.code,
                request_id = response.request_id().unwrap_or_default(),
                "request failed"
            );
            return Err(ResourceError::from_http_response(&response));
        }

        Ok(response)
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("transport", &self.transport)
            .finish()
    }
}
