//! Hypermedia links attached to entities and collections.

use serde::{Deserialize, Serialize};

/// A link from the `_links` array of a response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Link {
    /// Relation of the linked resource (`self`, `parent`, `create`, ...).
    #[serde(default)]
    pub rel: String,

    /// Absolute URL of the linked resource.
    #[serde(default)]
    pub href: String,

    /// HTTP method to use with `href`.
    #[serde(default)]
    pub method: String,

    /// URL of the JSON schema of the response.
    #[serde(
        rename = "targetSchema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_schema: Option<String>,

    /// URL of the JSON schema of the request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}
