//! Error types for resource operations.
//!
//! [`ResourceError`] is returned by every resource operation, at both the
//! dispatcher level and the entity level. The variants follow where the
//! failure happened:
//!
//! - **Before the network**: [`ResourceError::Validation`],
//!   [`ResourceError::Encode`], [`ResourceError::NotImplemented`],
//!   [`ResourceError::PathResolutionFailed`]
//! - **In the transport**: [`ResourceError::Http`] with a transport kind
//! - **Remote rejection**: [`ResourceError::Api`] when the body matches the
//!   API error schema, otherwise [`ResourceError::Http`] with
//!   [`HttpError::Response`] carrying the raw status and body
//! - **After a success status**: [`ResourceError::Decode`],
//!   [`ResourceError::IncompleteResponse`]
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::rest::ResourceError;
//!
//! match client.delete_customer("store_1", "cust_1").await {
//!     Ok(_) => println!("deleted"),
//!     Err(ResourceError::Api(e)) if e.status == 404 => println!("already gone"),
//!     Err(e) if e.is_transport() => println!("network trouble: {e}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::{HttpError, HttpResponse, HttpResponseError, InvalidHttpRequestError};

/// A field-level error reported inside an [`ApiError`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    #[serde(default)]
    pub field: String,
    /// What is wrong with it.
    #[serde(default)]
    pub message: String,
}

/// A structured error returned by the API for a non-success status.
///
/// The API reports errors as problem documents:
///
/// ```json
/// {
///   "type": "https://mailchimp.com/developer/marketing/docs/errors/",
///   "title": "Resource Not Found",
///   "status": 404,
///   "detail": "The requested resource could not be found.",
///   "instance": "995c5cb0-3280-4a6e-808b-3b096d0bb219"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{title} ({status}): {detail}")]
pub struct ApiError {
    /// URL identifying the problem type.
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Short, human-readable summary.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    #[serde(default)]
    pub detail: String,
    /// Identifier of this occurrence, useful for support requests.
    #[serde(default)]
    pub instance: String,
    /// Field-level validation errors, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// Local validation failures, raised before any network interaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The entity has no identity.
    #[error("{resource} has no id; it must be fetched or created before making requests")]
    MissingId {
        /// The type name of the entity.
        resource: &'static str,
    },

    /// The entity was not obtained through a client.
    #[error("{resource} is not bound to a client")]
    MissingClient {
        /// The type name of the entity.
        resource: &'static str,
    },

    /// The entity has no owning store id.
    #[error("{resource} has no store id")]
    MissingStoreId {
        /// The type name of the entity.
        resource: &'static str,
    },

    /// A line item in a request payload is invalid.
    #[error("line item {index} is invalid: {reason}")]
    InvalidLineItem {
        /// Position of the line in the payload.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Local validation failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API rejected the request with a structured error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The transport failed, or the API rejected the request without a
    /// structured error body.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A success response could not be decoded into the expected shape.
    #[error("Failed to decode {target} from response: {source}")]
    Decode {
        /// The type the response was decoded into.
        target: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {source}")]
    Encode {
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A success response was missing a field every entity must carry.
    #[error("{resource} response is missing '{field}'")]
    IncompleteResponse {
        /// The type name of the resource.
        resource: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// No endpoint is defined for the operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The operation exists in the API but is not supported by this client.
    #[error("{resource}::{operation} is not implemented")]
    NotImplemented {
        /// The type name of the resource.
        resource: &'static str,
        /// The unsupported operation.
        operation: &'static str,
    },
}

impl ResourceError {
    /// Classifies a non-success response.
    ///
    /// Bodies matching the API error schema become [`ResourceError::Api`];
    /// anything else becomes [`HttpError::Response`] with the raw body.
    #[must_use]
    pub fn from_http_response(response: &HttpResponse) -> Self {
        match serde_json::from_str::<ApiError>(&response.body) {
            Ok(api_error) => Self::Api(api_error),
            Err(_) => Self::Http(HttpError::Response(HttpResponseError {
                code: response.code,
                message: response.body.clone(),
                error_reference: response.request_id().map(ToString::to_string),
            })),
        }
    }

    /// Returns the HTTP status of a remote rejection, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Http(HttpError::Response(e)) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` if the transport could not complete the call.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        match self {
            Self::Http(e) => e.is_transport(),
            _ => false,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) if !e.instance.is_empty() => Some(e.instance.as_str()),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

impl From<InvalidHttpRequestError> for ResourceError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-42".to_string()]);
        HttpResponse::new(code, headers, body.to_string())
    }

    #[test]
    fn test_structured_error_body_maps_to_api() {
        let body = r#"{
            "type": "https://mailchimp.com/developer/marketing/docs/errors/",
            "title": "Resource Not Found",
            "status": 404,
            "detail": "The requested resource could not be found.",
            "instance": "abc-123"
        }"#;

        let error = ResourceError::from_http_response(&response(404, body));

        assert!(matches!(&error, ResourceError::Api(e) if e.title == "Resource Not Found"));
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("abc-123"));
        assert!(!error.is_transport());
    }

    #[test]
    fn test_field_errors_are_decoded() {
        let body = r#"{
            "title": "Invalid Resource",
            "status": 400,
            "detail": "The resource submitted could not be validated.",
            "errors": [{"field": "currency_code", "message": "This value should not be blank."}]
        }"#;

        let error = ResourceError::from_http_response(&response(400, body));

        let ResourceError::Api(api_error) = error else {
            panic!("Expected Api variant");
        };
        assert_eq!(api_error.errors.len(), 1);
        assert_eq!(api_error.errors[0].field, "currency_code");
        assert!(api_error.error_type.is_empty());
    }

    #[test]
    fn test_unstructured_body_maps_to_generic_http() {
        let error = ResourceError::from_http_response(&response(502, "<html>Bad Gateway</html>"));

        match &error {
            ResourceError::Http(HttpError::Response(e)) => {
                assert_eq!(e.code, 502);
                assert_eq!(e.message, "<html>Bad Gateway</html>");
            }
            other => panic!("Expected generic HTTP error, got {other:?}"),
        }
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.request_id(), Some("req-42"));
    }

    #[test]
    fn test_json_without_error_schema_maps_to_generic_http() {
        let error = ResourceError::from_http_response(&response(500, r#"{"oops": true}"#));
        assert!(matches!(error, ResourceError::Http(HttpError::Response(_))));
    }

    #[test]
    fn test_validation_errors_format_resource_name() {
        let error: ResourceError = ValidationError::MissingStoreId { resource: "Order" }.into();
        let message = error.to_string();
        assert!(message.contains("Order"));
        assert!(message.contains("store id"));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_not_implemented_message() {
        let error = ResourceError::NotImplemented {
            resource: "OrderLine",
            operation: "create",
        };
        assert_eq!(error.to_string(), "OrderLine::create is not implemented");
    }

    #[test]
    fn test_transport_errors_are_classified() {
        let error = ResourceError::Http(HttpError::Transport {
            message: "timed out".to_string(),
        });
        assert!(error.is_transport());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_request_converts_to_http() {
        let error: ResourceError = InvalidHttpRequestError::MissingBody {
            method: "POST".to_string(),
        }
        .into();
        assert!(matches!(
            error,
            ResourceError::Http(HttpError::InvalidRequest(_))
        ));
    }
}
