//! The request dispatcher.
//!
//! [`RestClient`] sits between the typed resource operations and a
//! [`Transport`](crate::clients::Transport). It encodes query parameters and
//! request bodies, sends exactly one request per call, and classifies the
//! response into a decoded value or a
//! [`ResourceError`](crate::rest::ResourceError).
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::{HttpMethod, RestClient};
//! use mailchimp_ecommerce::rest::resources::Store;
//!
//! let client = RestClient::new(&config)?;
//!
//! // Typed operation
//! let store = client.get_store("store_1", None).await?;
//!
//! // The same call through the generic dispatcher
//! let store: Store = client
//!     .request::<(), _>(HttpMethod::Get, "/ecommerce/stores/store_1", None, None)
//!     .await?;
//! ```

mod client;

pub use client::RestClient;
