//! Endpoint resolution shared by every e-commerce resource.

use std::collections::HashMap;

use crate::clients::HttpMethod;
use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// A resource addressed through a static endpoint table.
///
/// Implementors declare a name and their [`ResourcePath`]s; endpoint
/// resolution is provided.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::rest::{Resource, ResourceOperation};
/// use mailchimp_ecommerce::rest::resources::Cart;
/// use mailchimp_ecommerce::HttpMethod;
///
/// let (method, path) = Cart::endpoint(
///     ResourceOperation::Update,
///     &[("store_id", "store_1"), ("cart_id", "cart_7")],
/// )
/// .unwrap();
///
/// assert_eq!(method, HttpMethod::Patch);
/// assert_eq!(path, "/ecommerce/stores/store_1/carts/cart_7");
/// ```
pub trait Resource {
    /// The resource name used in errors and logs (e.g. "Order").
    const NAME: &'static str;

    /// The endpoints this resource supports, one per operation.
    const PATHS: &'static [ResourcePath];

    /// Resolves the method and path of an operation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource does
    /// not support the operation or an id the endpoint needs is missing.
    fn endpoint(
        operation: ResourceOperation,
        ids: &[(&str, &str)],
    ) -> Result<(HttpMethod, String), ResourceError> {
        let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        let ids: HashMap<&str, &str> = ids.iter().copied().collect();
        Ok((path.http_method, build_path(path.template, &ids)))
    }
}

/// Rejects a decoded entity that came back without an identity.
pub(crate) fn ensure_identity(resource: &'static str, id: &str) -> Result<(), ResourceError> {
    if id.is_empty() {
        return Err(ResourceError::IncompleteResponse {
            resource,
            field: "id",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    impl Resource for Widget {
        const NAME: &'static str = "Widget";
        const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["store_id", "widget_id"],
            "/ecommerce/stores/{store_id}/widgets/{widget_id}",
        )];
    }

    #[test]
    fn test_endpoint_fills_template() {
        let (method, path) = Widget::endpoint(
            ResourceOperation::Get,
            &[("store_id", "s1"), ("widget_id", "w2")],
        )
        .unwrap();

        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "/ecommerce/stores/s1/widgets/w2");
    }

    #[test]
    fn test_unsupported_operation_fails_resolution() {
        let error = Widget::endpoint(ResourceOperation::Delete, &[("store_id", "s1")]).unwrap_err();

        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                resource: "Widget",
                operation: "delete"
            }
        ));
    }

    #[test]
    fn test_ensure_identity() {
        assert!(ensure_identity("Widget", "w1").is_ok());
        assert!(matches!(
            ensure_identity("Widget", ""),
            Err(ResourceError::IncompleteResponse { field: "id", .. })
        ));
    }
}
