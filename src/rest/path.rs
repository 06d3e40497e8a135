//! Endpoint tables for the e-commerce resources.
//!
//! Every resource declares a static table of [`ResourcePath`]s, one per
//! supported operation. An operation missing from the table is not offered
//! by the API for that resource (carts cannot be deleted, for example), and
//! resolving it fails with
//! [`ResourceError::PathResolutionFailed`](crate::rest::ResourceError::PathResolutionFailed).
//!
//! # Example
//!
//! ```rust
//! use mailchimp_ecommerce::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use mailchimp_ecommerce::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Get,
//!         &["store_id", "cart_id"],
//!         "/ecommerce/stores/{store_id}/carts/{cart_id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Get, &["store_id", "cart_id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("store_id", "store_1");
//! ids.insert("cart_id", "cart_7");
//! assert_eq!(
//!     build_path(path.template, &ids),
//!     "/ecommerce/stores/store_1/carts/cart_7"
//! );
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on an e-commerce resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List a collection (GET).
    List,
    /// Fetch a single resource by id (GET).
    Get,
    /// Create a resource (POST).
    Create,
    /// Partially update a resource (PATCH).
    Update,
    /// Delete a resource (DELETE).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a resource operation.
///
/// Templates are absolute API paths with `{id_name}` placeholders, e.g.
/// `/ecommerce/stores/{store_id}/orders/{order_id}/lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["store_id", "order_id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Paths are filtered by operation and by available IDs; the one requiring
/// the most IDs wins. Returns `None` if nothing matches.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating IDs.
///
/// Placeholders without a matching entry are left as-is.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const LINE_PATHS: &[ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["store_id", "order_id"],
            "/ecommerce/stores/{store_id}/orders/{order_id}/lines",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["store_id", "order_id", "line_id"],
            "/ecommerce/stores/{store_id}/orders/{order_id}/lines/{line_id}",
        ),
    ];

    #[test]
    fn test_path_template_interpolation_nested_ids() {
        let mut ids = HashMap::new();
        ids.insert("store_id", "s1");
        ids.insert("order_id", "o9");
        ids.insert("line_id", "l3");

        let result = build_path(LINE_PATHS[1].template, &ids);
        assert_eq!(result, "/ecommerce/stores/s1/orders/o9/lines/l3");
    }

    #[test]
    fn test_get_path_requires_every_id() {
        let path = get_path(LINE_PATHS, ResourceOperation::Get, &["store_id", "line_id"]);
        assert!(path.is_none());

        let path = get_path(
            LINE_PATHS,
            ResourceOperation::Get,
            &["store_id", "order_id", "line_id"],
        );
        assert_eq!(path.unwrap().id_count(), 3);
    }

    #[test]
    fn test_get_path_filters_by_operation() {
        let path = get_path(LINE_PATHS, ResourceOperation::List, &["store_id", "order_id"]);
        assert_eq!(path.unwrap().operation, ResourceOperation::List);

        let path = get_path(
            LINE_PATHS,
            ResourceOperation::Create,
            &["store_id", "order_id"],
        );
        assert!(path.is_none());
    }

    #[test]
    fn test_get_path_prefers_most_specific() {
        const PATHS: &[ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Get,
                &["store_id"],
                "/ecommerce/stores/{store_id}",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Get,
                &["store_id", "order_id"],
                "/ecommerce/stores/{store_id}/orders/{order_id}",
            ),
        ];

        let path = get_path(PATHS, ResourceOperation::Get, &["store_id", "order_id"]);
        assert_eq!(
            path.unwrap().template,
            "/ecommerce/stores/{store_id}/orders/{order_id}"
        );
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        let ids: HashMap<&str, &str> = HashMap::new();
        let result = build_path("/ecommerce/stores/{store_id}", &ids);
        assert_eq!(result, "/ecommerce/stores/{store_id}");
    }
}
