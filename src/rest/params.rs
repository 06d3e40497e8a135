//! Query parameters for list and get operations.
//!
//! Every parameter set implements [`QueryParams`], which flattens the typed
//! options into the string map sent on the query string. Unset options are
//! omitted; list options are comma-joined.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_ecommerce::rest::{BasicQueryParams, ExtendedQueryParams, QueryParams};
//!
//! let params = ExtendedQueryParams {
//!     basic: BasicQueryParams {
//!         fields: vec!["stores.id".to_string(), "stores.name".to_string()],
//!         ..Default::default()
//!     },
//!     count: Some(10),
//!     offset: Some(20),
//! };
//!
//! let query = params.params();
//! assert_eq!(query.get("fields").map(String::as_str), Some("stores.id,stores.name"));
//! assert_eq!(query.get("count").map(String::as_str), Some("10"));
//! assert!(!query.contains_key("status"));
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Converts typed options into a flat query-string map.
pub trait QueryParams: Send + Sync {
    /// Returns the encoded parameters. Implementations have no side effects.
    fn params(&self) -> HashMap<String, String>;
}

/// Filtering and projection options accepted by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BasicQueryParams {
    /// Status filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    /// Sort direction (`ASC` or `DESC`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
    /// Fields to return, in dotted notation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    /// Fields to exclude, in dotted notation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_fields: Vec<String>,
}

impl QueryParams for BasicQueryParams {
    fn params(&self) -> HashMap<String, String> {
        serialize_to_query(self)
    }
}

/// [`BasicQueryParams`] plus pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtendedQueryParams {
    /// The basic options.
    #[serde(flatten)]
    pub basic: BasicQueryParams,
    /// Number of records to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl QueryParams for ExtendedQueryParams {
    fn params(&self) -> HashMap<String, String> {
        serialize_to_query(self)
    }
}

/// How an unset optional key is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsetKeyPolicy {
    /// Leave the key out of the query string.
    #[default]
    Omit,
    /// Send the key with an empty value.
    EmptyString,
}

/// [`ExtendedQueryParams`] plus a customer filter, for order listings.
///
/// An explicit `Some("")` is always sent. An unset `customer_id` follows
/// `unset_customer_id`:
///
/// ```rust
/// use mailchimp_ecommerce::rest::{OrderQueryParams, QueryParams, UnsetKeyPolicy};
///
/// let omitted = OrderQueryParams::default();
/// assert!(!omitted.params().contains_key("customer_id"));
///
/// let legacy = OrderQueryParams {
///     unset_customer_id: UnsetKeyPolicy::EmptyString,
///     ..Default::default()
/// };
/// assert_eq!(legacy.params().get("customer_id").map(String::as_str), Some(""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQueryParams {
    /// The extended options.
    pub extended: ExtendedQueryParams,
    /// Restrict to orders placed by this customer.
    pub customer_id: Option<String>,
    /// Encoding of `customer_id` when it is `None`.
    pub unset_customer_id: UnsetKeyPolicy,
}

impl OrderQueryParams {
    /// Creates order parameters filtered to one customer.
    #[must_use]
    pub fn for_customer(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            ..Default::default()
        }
    }
}

impl QueryParams for OrderQueryParams {
    fn params(&self) -> HashMap<String, String> {
        let mut map = self.extended.params();
        match (&self.customer_id, self.unset_customer_id) {
            (Some(customer_id), _) => {
                map.insert("customer_id".to_string(), customer_id.clone());
            }
            (None, UnsetKeyPolicy::EmptyString) => {
                map.insert("customer_id".to_string(), String::new());
            }
            (None, UnsetKeyPolicy::Omit) => {}
        }
        map
    }
}

/// Erases a concrete parameter set for the dispatcher.
pub(crate) fn as_dyn<P: QueryParams>(params: Option<&P>) -> Option<&dyn QueryParams> {
    params.map(|p| p as &dyn QueryParams)
}

/// Flattens a params struct into a query map.
///
/// Null values are skipped and arrays are comma-joined; an empty array is
/// skipped.
fn serialize_to_query<T: Serialize>(params: &T) -> HashMap<String, String> {
    // Params structs hold only strings, integers and string lists.
    let Ok(Value::Object(map)) = serde_json::to_value(params) else {
        return HashMap::new();
    };

    let mut query = HashMap::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => {
                query.insert(key, s);
            }
            Value::Number(n) => {
                query.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                query.insert(key, b.to_string());
            }
            Value::Array(values) => {
                let values: Vec<String> = values
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.insert(key, values.join(","));
                }
            }
            Value::Object(_) => {
                query.insert(key, value.to_string());
            }
        }
    }
    query
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BasicQueryParams>();
    assert_send_sync::<ExtendedQueryParams>();
    assert_send_sync::<OrderQueryParams>();
};
