//! Abandoned-cart tracking.
//!
//! Carts belong to a store by path and cannot be deleted through this
//! client.

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::params::as_dyn;
use crate::rest::resource::ensure_identity;
use crate::rest::resources::common::validate_lines;
use crate::rest::resources::{Customer, LineItem, Link, Store};
use crate::rest::{
    BasicQueryParams, ExtendedQueryParams, ListEnvelope, ListMeta, Resource, ResourceError,
    ResourceOperation, ResourcePath, ValidationError,
};

/// The writable fields of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CartCreationRequest {
    /// Unique identifier of the cart.
    #[serde(default)]
    pub id: String,

    /// The customer the cart belongs to.
    #[serde(default)]
    pub customer: Customer,

    /// Campaign that led to the cart, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,

    /// URL the customer can use to resume checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,

    /// Three-letter ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: String,

    /// Total of the cart.
    #[serde(default)]
    pub order_total: f64,

    /// Tax total of the cart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<f64>,

    /// The lines of the cart, in order.
    #[serde(default)]
    pub lines: Vec<LineItem>,
}

impl CartCreationRequest {
    /// Checks the payload before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLineItem`] for the first invalid line.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_lines(&self.lines)
    }
}

/// A cart as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    #[serde(flatten)]
    details: CartCreationRequest,

    #[serde(default, skip_serializing)]
    created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing)]
    updated_at: Option<DateTime<Utc>>,

    #[serde(rename = "_links", default, skip_serializing)]
    links: Vec<Link>,
}

impl Cart {
    /// Returns the writable fields of the cart.
    #[must_use]
    pub const fn details(&self) -> &CartCreationRequest {
        &self.details
    }

    /// When the cart was created.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// When the cart was last updated.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Hypermedia links.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl Deref for Cart {
    type Target = CartCreationRequest;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

impl Resource for Cart {
    const NAME: &'static str = "Cart";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["store_id"],
            "/ecommerce/stores/{store_id}/carts",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["store_id", "cart_id"],
            "/ecommerce/stores/{store_id}/carts/{cart_id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["store_id"],
            "/ecommerce/stores/{store_id}/carts",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["store_id", "cart_id"],
            "/ecommerce/stores/{store_id}/carts/{cart_id}",
        ),
    ];
}

/// A page of carts of one store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ListOfCarts {
    /// The carts on this page.
    #[serde(default)]
    pub carts: Vec<Cart>,

    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,

    #[serde(skip)]
    store_id: String,
}

impl ListOfCarts {
    /// The store the carts belong to.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }
}

impl ListEnvelope for ListOfCarts {
    type Item = Cart;

    fn items(&self) -> &[Cart] {
        &self.carts
    }

    fn meta(&self) -> &ListMeta {
        &self.meta
    }
}

impl RestClient {
    /// Lists the carts of a store.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get_carts(
        &self,
        store_id: &str,
        params: Option<&ExtendedQueryParams>,
    ) -> Result<ListOfCarts, ResourceError> {
        let (method, path) = Cart::endpoint(ResourceOperation::List, &[("store_id", store_id)])?;
        let mut list: ListOfCarts = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;

        for cart in &list.carts {
            ensure_identity(Cart::NAME, &cart.id)?;
        }
        list.store_id = store_id.to_string();
        Ok(list)
    }

    /// Fetches a single cart.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get_cart(
        &self,
        store_id: &str,
        cart_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<Cart, ResourceError> {
        let (method, path) = Cart::endpoint(
            ResourceOperation::Get,
            &[("store_id", store_id), ("cart_id", cart_id)],
        )?;
        let cart: Cart = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;
        ensure_identity(Cart::NAME, &cart.id)?;
        Ok(cart)
    }

    /// Creates a cart in a store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for an invalid line item
    /// without sending anything, otherwise see [`RestClient::request`].
    pub async fn create_cart(
        &self,
        store_id: &str,
        body: &CartCreationRequest,
    ) -> Result<Cart, ResourceError> {
        body.validate()?;
        let (method, path) = Cart::endpoint(ResourceOperation::Create, &[("store_id", store_id)])?;
        let cart: Cart = self.request(method, &path, None, Some(body)).await?;
        ensure_identity(Cart::NAME, &cart.id)?;
        Ok(cart)
    }

    /// Updates a cart.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for an invalid line item
    /// without sending anything, otherwise see [`RestClient::request`].
    pub async fn update_cart(
        &self,
        store_id: &str,
        cart_id: &str,
        body: &CartCreationRequest,
    ) -> Result<Cart, ResourceError> {
        body.validate()?;
        let (method, path) = Cart::endpoint(
            ResourceOperation::Update,
            &[("store_id", store_id), ("cart_id", cart_id)],
        )?;
        let cart: Cart = self.request(method, &path, None, Some(body)).await?;
        ensure_identity(Cart::NAME, &cart.id)?;
        Ok(cart)
    }
}

impl Store {
    /// Lists the carts of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::get_carts`].
    pub async fn get_carts(
        &self,
        params: Option<&ExtendedQueryParams>,
    ) -> Result<ListOfCarts, ResourceError> {
        self.ready()?.get_carts(&self.id, params).await
    }

    /// Fetches a cart of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::get_cart`].
    pub async fn get_cart(
        &self,
        cart_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<Cart, ResourceError> {
        self.ready()?.get_cart(&self.id, cart_id, params).await
    }

    /// Creates a cart in this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::create_cart`].
    pub async fn create_cart(&self, body: &CartCreationRequest) -> Result<Cart, ResourceError> {
        self.ready()?.create_cart(&self.id, body).await
    }

    /// Updates a cart of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::update_cart`].
    pub async fn update_cart(
        &self,
        cart_id: &str,
        body: &CartCreationRequest,
    ) -> Result<Cart, ResourceError> {
        self.ready()?.update_cart(&self.id, cart_id, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_decodes_embedded_customer_and_lines() {
        let cart: Cart = serde_json::from_str(
            r#"{
                "id": "cart_1",
                "customer": {"id": "cust_1", "email_address": "a@b.c", "orders_count": 1},
                "currency_code": "USD",
                "order_total": 30.0,
                "checkout_url": "https://shop.example/cart/1",
                "lines": [
                    {"id": "l1", "product_id": "p1", "product_variant_id": "v1", "quantity": 2, "price": 10.0},
                    {"id": "l2", "product_id": "p2", "product_variant_id": "v2", "quantity": 1, "price": 10.0}
                ],
                "created_at": "2024-05-01T00:00:00+00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(cart.id, "cart_1");
        assert_eq!(cart.customer.id, "cust_1");
        assert_eq!(cart.customer.orders_count(), 1);
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].quantity, 2);
        assert!(cart.created_at().is_some());
    }

    #[test]
    fn test_list_uses_carts_key() {
        let list: ListOfCarts =
            serde_json::from_str(r#"{"carts": [{"id": "c1"}], "total_items": 1}"#).unwrap();
        assert_eq!(list.returned_count(), 1);
        assert_eq!(list.carts[0].id, "c1");
    }

    #[test]
    fn test_carts_cannot_be_deleted() {
        let result = Cart::endpoint(
            ResourceOperation::Delete,
            &[("store_id", "s1"), ("cart_id", "c1")],
        );
        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed {
                resource: "Cart",
                ..
            })
        ));
    }

    #[test]
    fn test_create_cart_posts_to_carts_collection() {
        let (method, path) =
            Cart::endpoint(ResourceOperation::Create, &[("store_id", "s1")]).unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "/ecommerce/stores/s1/carts");
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let body = CartCreationRequest {
            id: "c1".to_string(),
            lines: vec![LineItem {
                price: -2.0,
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(matches!(
            body.validate(),
            Err(ValidationError::InvalidLineItem { index: 0, .. })
        ));
    }
}
