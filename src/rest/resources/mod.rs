//! The e-commerce resources.
//!
//! ```text
//! Store
//!  ├── Cart
//!  ├── Customer
//!  └── Order
//!       └── OrderLine
//! ```
//!
//! Each resource has a creation-request type holding its writable fields and
//! a full type returned by the API, which embeds the creation request and
//! derefs to it. Operations are available in two equivalent forms:
//!
//! - on [`RestClient`](crate::RestClient), taking every scoping id explicitly
//! - on a fetched [`Store`] or [`Order`], which supply their own ids after
//!   passing their readiness check
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::rest::OrderQueryParams;
//!
//! // Explicit ids
//! let order = client.get_order("store_1", "order_9", None).await?;
//!
//! // Scoped to a fetched store
//! let store = client.get_store("store_1", None).await?;
//! let orders = store
//!     .get_orders(Some(&OrderQueryParams::for_customer("cust_1")))
//!     .await?;
//! for order in &orders.orders {
//!     let lines = order.get_lines(None).await?;
//!     println!("{}: {} lines", order.id, lines.lines.len());
//! }
//! ```

mod cart;
pub(crate) mod common;
mod customer;
mod order;
mod order_line;
mod store;

pub use cart::{Cart, CartCreationRequest, ListOfCarts};
pub use common::{Address, LineItem, Link};
pub use customer::{Customer, CustomerCreationRequest, ListOfCustomers};
pub use order::{ListOfOrders, Order, OrderCreationRequest};
pub use order_line::{ListOfOrderLines, OrderLine};
pub use store::{ListOfStores, Store, StoreCreationRequest};
