//! # Mailchimp E-commerce Client
//!
//! A typed async client for the e-commerce endpoints of the Mailchimp
//! Marketing API (v3): stores, carts, customers, orders, and order lines.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ChimpConfig`] and [`ChimpConfigBuilder`]
//! - A validated [`ApiKey`] newtype that derives the data center endpoint
//! - A single request dispatcher, [`RestClient`], that every operation goes through
//! - Typed resources whose fetched instances can issue requests scoped to themselves
//! - A pluggable [`clients::Transport`] with a `reqwest`-based default, [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mailchimp_ecommerce::{ApiKey, ChimpConfig};
//! use std::time::Duration;
//!
//! let config = ChimpConfig::builder()
//!     .api_key(ApiKey::new("0123456789abcdef0123456789abcdef-us6").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://us6.api.mailchimp.com");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::{ChimpConfig, RestClient};
//! use mailchimp_ecommerce::rest::resources::StoreCreationRequest;
//!
//! let client = RestClient::new(&config)?;
//!
//! let store = client
//!     .create_store(&StoreCreationRequest {
//!         id: "store_1".to_string(),
//!         list_id: "a1b2c3".to_string(),
//!         name: "Freddie's Merchandise".to_string(),
//!         currency_code: "USD".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // The store carries the client, so follow-up calls need no ids
//! let orders = store.get_orders(None).await?;
//! for order in &orders.orders {
//!     let lines = order.get_lines(None).await?;
//!     println!("order {} has {} lines", order.id, lines.lines.len());
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`rest::ResourceError`]. Local validation
//! failures ([`rest::ValidationError`]) are raised before anything is sent;
//! structured API errors are decoded into [`rest::ApiError`].
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` per request, `warn` for
//! rejected requests, `error` for undecodable responses) and installs no
//! subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and payloads are validated before use
//! - **Single attempt**: requests are never retried
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, ChimpConfig, ChimpConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient,
};

// Re-export the resource layer's error type
pub use rest::ResourceError;
