//! Paginated collection envelopes.
//!
//! Every list operation returns a resource-specific envelope (`ListOfStores`,
//! `ListOfOrders`, ...) holding the decoded items and a flattened
//! [`ListMeta`]. The [`ListEnvelope`] trait gives uniform access to both.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::rest::{ExtendedQueryParams, ListEnvelope};
//!
//! let mut params = ExtendedQueryParams { count: Some(50), offset: Some(0), ..Default::default() };
//! loop {
//!     let page = client.get_customers("store_1", Some(&params)).await?;
//!     for customer in page.items() {
//!         println!("{}", customer.email_address);
//!     }
//!     let offset = params.offset.unwrap_or(0);
//!     if !page.has_more(offset) {
//!         break;
//!     }
//!     params.offset = Some(offset + page.returned_count() as u32);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::resources::Link;

/// Pagination metadata shared by every collection response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListMeta {
    /// Total number of items matching the query, across all pages.
    #[serde(default)]
    pub total_items: u64,

    /// Links to related resources.
    #[serde(rename = "_links", default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Uniform access to a page of a collection.
pub trait ListEnvelope {
    /// The element type of the collection.
    type Item;

    /// The items on this page, in server order.
    fn items(&self) -> &[Self::Item];

    /// The pagination metadata of this page.
    fn meta(&self) -> &ListMeta;

    /// Total number of items across all pages, as reported by the server.
    fn total_items(&self) -> u64 {
        self.meta().total_items
    }

    /// Number of items decoded on this page.
    fn returned_count(&self) -> usize {
        self.items().len()
    }

    /// Whether items remain after this page, given the offset it was fetched at.
    fn has_more(&self, offset: u32) -> bool {
        let returned = u64::try_from(self.returned_count()).unwrap_or(u64::MAX);
        u64::from(offset).saturating_add(returned) < self.total_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page {
        items: Vec<u8>,
        meta: ListMeta,
    }

    impl ListEnvelope for Page {
        type Item = u8;

        fn items(&self) -> &[u8] {
            &self.items
        }

        fn meta(&self) -> &ListMeta {
            &self.meta
        }
    }

    fn page(items: usize, total_items: u64) -> Page {
        Page {
            items: vec![0; items],
            meta: ListMeta {
                total_items,
                links: Vec::new(),
            },
        }
    }

    #[test]
    fn test_returned_count_is_decoded_length() {
        let page = page(3, 10);
        assert_eq!(page.returned_count(), 3);
        assert_eq!(page.total_items(), 10);
    }

    #[test]
    fn test_has_more() {
        assert!(page(3, 10).has_more(0));
        assert!(page(3, 10).has_more(6));
        assert!(!page(3, 10).has_more(7));
        assert!(!page(0, 0).has_more(0));
    }

    #[test]
    fn test_has_more_at_largest_offset() {
        assert!(page(2, u64::MAX).has_more(u32::MAX));
        assert!(!page(2, u64::from(u32::MAX)).has_more(u32::MAX));
    }

    #[test]
    fn test_meta_decodes_links() {
        let meta: ListMeta = serde_json::from_str(
            r#"{"total_items": 2, "_links": [{"rel": "self", "href": "https://x", "method": "GET"}]}"#,
        )
        .unwrap();
        assert_eq!(meta.total_items, 2);
        assert_eq!(meta.links[0].rel, "self");
    }
}
