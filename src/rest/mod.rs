//! Typed access to the e-commerce resources.
//!
//! - [`resources`]: stores, carts, customers, orders, and order lines
//! - [`QueryParams`] and its implementations: filter and pagination options
//! - [`ListEnvelope`] and [`ListMeta`]: paginated collections
//! - [`Resource`], [`ResourcePath`], [`ResourceOperation`]: endpoint tables
//! - [`ResourceError`], [`ValidationError`], [`ApiError`]: failures
//!
//! The operations themselves are methods on
//! [`RestClient`](crate::RestClient) and on fetched entities; see
//! [`resources`].

mod errors;
mod list;
pub(crate) mod params;
mod path;
pub(crate) mod resource;

pub mod resources;

pub use errors::{ApiError, FieldError, ResourceError, ValidationError};
pub use list::{ListEnvelope, ListMeta};
pub use params::{
    BasicQueryParams, ExtendedQueryParams, OrderQueryParams, QueryParams, UnsetKeyPolicy,
};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::Resource;
