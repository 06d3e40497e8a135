//! HTTP plumbing for the Marketing API.
//!
//! # Overview
//!
//! - [`Transport`]: the seam a request crosses to reach the network
//! - [`HttpClient`]: the default, `reqwest`-based transport
//! - [`HttpRequest`]: a request to be sent through a transport
//! - [`HttpResponse`]: a raw response, returned for every status code
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`rest::RestClient`]: the dispatcher resource operations go through
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::{ApiKey, ChimpConfig, HttpClient, HttpMethod, HttpRequest};
//! use mailchimp_ecommerce::clients::Transport;
//! use std::collections::HashMap;
//!
//! let config = ChimpConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef-us6").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/ecommerce/stores")
//!     .query(HashMap::from([("count".to_string(), "5".to_string())]))
//!     .build()
//!     .unwrap();
//!
//! let response = client.send(request).await?;
//! println!("{} -> {}", response.code, response.body);
//! ```
//!
//! # Retries
//!
//! None. Every request is attempted exactly once.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use rest::RestClient;
