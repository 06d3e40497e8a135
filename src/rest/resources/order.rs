//! Orders placed in a store.
//!
//! An [`Order`] obtained from the client remembers the store it was fetched
//! from and carries a client handle, so its lines can be reached directly:
//!
//! ```rust,ignore
//! let order = client.get_order("store_1", "order_9", None).await?;
//! assert_eq!(order.store_id(), "store_1");
//! let lines = order.get_lines(None).await?;
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::params::as_dyn;
use crate::rest::resource::ensure_identity;
use crate::rest::resources::common::validate_lines;
use crate::rest::resources::{Address, Customer, LineItem, Link, Store};
use crate::rest::{
    BasicQueryParams, ListEnvelope, ListMeta, OrderQueryParams, Resource, ResourceError,
    ResourceOperation, ResourcePath, ValidationError,
};

/// The writable fields of an order.
///
/// The `*_foreign` timestamps are passed through as given.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderCreationRequest {
    /// Unique identifier of the order.
    #[serde(default)]
    pub id: String,

    /// The customer who placed the order.
    #[serde(default)]
    pub customer: Customer,

    /// Campaign that led to the order, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,

    /// Payment status (e.g. `paid`, `pending`, `refunded`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    /// Fulfillment status (e.g. `shipped`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Three-letter ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: String,

    /// Total of the order.
    #[serde(default)]
    pub order_total: f64,

    /// Tax total of the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<f64>,

    /// Shipping total of the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_total: Option<f64>,

    /// When the order was processed, as recorded by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at_foreign: Option<String>,

    /// When the order was cancelled, as recorded by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at_foreign: Option<String>,

    /// When the order was last updated, as recorded by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_foreign: Option<String>,

    /// Shipping address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// Billing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// The lines of the order, in order.
    #[serde(default)]
    pub lines: Vec<LineItem>,
}

impl OrderCreationRequest {
    /// Checks the payload before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLineItem`] for the first invalid line.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_lines(&self.lines)
    }
}

/// An order as returned by the API.
///
/// `store_id` comes from the request path, never from the payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Order {
    #[serde(flatten)]
    details: OrderCreationRequest,

    #[serde(rename = "_links", default, skip_serializing)]
    links: Vec<Link>,

    #[serde(skip)]
    store_id: String,

    #[serde(skip)]
    client: Option<RestClient>,
}

impl Order {
    /// Returns the writable fields of the order.
    #[must_use]
    pub const fn details(&self) -> &OrderCreationRequest {
        &self.details
    }

    /// The store this order was fetched from.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Hypermedia links.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Checks that this order can issue scoped requests.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingId`] without an id,
    /// [`ValidationError::MissingClient`] when unbound, and
    /// [`ValidationError::MissingStoreId`] without a store id.
    pub fn can_make_request(&self) -> Result<(), ValidationError> {
        self.ready().map(|_| ())
    }

    pub(crate) fn ready(&self) -> Result<&RestClient, ValidationError> {
        if self.details.id.is_empty() {
            return Err(ValidationError::MissingId {
                resource: Self::NAME,
            });
        }
        let client = self.client.as_ref().ok_or(ValidationError::MissingClient {
            resource: Self::NAME,
        })?;
        if self.store_id.is_empty() {
            return Err(ValidationError::MissingStoreId {
                resource: Self::NAME,
            });
        }
        Ok(client)
    }

    fn bind(mut self, client: &RestClient, store_id: &str) -> Result<Self, ResourceError> {
        ensure_identity(Self::NAME, &self.details.id)?;
        self.client = Some(client.clone());
        self.store_id = store_id.to_string();
        Ok(self)
    }
}

impl From<OrderCreationRequest> for Order {
    fn from(details: OrderCreationRequest) -> Self {
        Self {
            details,
            ..Default::default()
        }
    }
}

impl Deref for Order {
    type Target = OrderCreationRequest;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

impl Resource for Order {
    const NAME: &'static str = "Order";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["store_id"],
            "/ecommerce/stores/{store_id}/orders",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["store_id", "order_id"],
            "/ecommerce/stores/{store_id}/orders/{order_id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["store_id"],
            "/ecommerce/stores/{store_id}/orders",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["store_id", "order_id"],
            "/ecommerce/stores/{store_id}/orders/{order_id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["store_id", "order_id"],
            "/ecommerce/stores/{store_id}/orders/{order_id}",
        ),
    ];
}

/// A page of orders of one store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListOfOrders {
    /// The orders on this page, each bound to the client and store.
    #[serde(default)]
    pub orders: Vec<Order>,

    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,

    #[serde(skip)]
    store_id: String,
}

impl ListOfOrders {
    /// The store the orders belong to.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }
}

impl ListEnvelope for ListOfOrders {
    type Item = Order;

    fn items(&self) -> &[Order] {
        &self.orders
    }

    fn meta(&self) -> &ListMeta {
        &self.meta
    }
}

impl RestClient {
    /// Lists the orders of a store.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get_orders(
        &self,
        store_id: &str,
        params: Option<&OrderQueryParams>,
    ) -> Result<ListOfOrders, ResourceError> {
        let (method, path) = Order::endpoint(ResourceOperation::List, &[("store_id", store_id)])?;
        let list: ListOfOrders = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;

        let orders = list
            .orders
            .into_iter()
            .map(|order| order.bind(self, store_id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListOfOrders {
            orders,
            meta: list.meta,
            store_id: store_id.to_string(),
        })
    }

    /// Fetches a single order.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`]. A payload without an `id` is
    /// [`ResourceError::IncompleteResponse`].
    pub async fn get_order(
        &self,
        store_id: &str,
        order_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<Order, ResourceError> {
        let (method, path) = Order::endpoint(
            ResourceOperation::Get,
            &[("store_id", store_id), ("order_id", order_id)],
        )?;
        let order: Order = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;
        order.bind(self, store_id)
    }

    /// Creates an order in a store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for an invalid line item
    /// without sending anything, otherwise see [`RestClient::request`].
    pub async fn create_order(
        &self,
        store_id: &str,
        body: &OrderCreationRequest,
    ) -> Result<Order, ResourceError> {
        body.validate()?;
        let (method, path) =
            Order::endpoint(ResourceOperation::Create, &[("store_id", store_id)])?;
        let order: Order = self.request(method, &path, None, Some(body)).await?;
        order.bind(self, store_id)
    }

    /// Updates an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for an invalid line item
    /// without sending anything, otherwise see [`RestClient::request`].
    pub async fn update_order(
        &self,
        store_id: &str,
        order_id: &str,
        body: &OrderCreationRequest,
    ) -> Result<Order, ResourceError> {
        body.validate()?;
        let (method, path) = Order::endpoint(
            ResourceOperation::Update,
            &[("store_id", store_id), ("order_id", order_id)],
        )?;
        let order: Order = self.request(method, &path, None, Some(body)).await?;
        order.bind(self, store_id)
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request_ok`].
    pub async fn delete_order(&self, store_id: &str, order_id: &str) -> Result<bool, ResourceError> {
        let (method, path) = Order::endpoint(
            ResourceOperation::Delete,
            &[("store_id", store_id), ("order_id", order_id)],
        )?;
        self.request_ok(method, &path).await
    }
}

impl Store {
    /// Lists the orders of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::get_orders`].
    pub async fn get_orders(
        &self,
        params: Option<&OrderQueryParams>,
    ) -> Result<ListOfOrders, ResourceError> {
        self.ready()?.get_orders(&self.id, params).await
    }

    /// Fetches an order of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::get_order`].
    pub async fn get_order(
        &self,
        order_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<Order, ResourceError> {
        self.ready()?.get_order(&self.id, order_id, params).await
    }

    /// Creates an order in this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::create_order`].
    pub async fn create_order(&self, body: &OrderCreationRequest) -> Result<Order, ResourceError> {
        self.ready()?.create_order(&self.id, body).await
    }

    /// Updates an order of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::update_order`].
    pub async fn update_order(
        &self,
        order_id: &str,
        body: &OrderCreationRequest,
    ) -> Result<Order, ResourceError> {
        self.ready()?.update_order(&self.id, order_id, body).await
    }

    /// Deletes an order of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::delete_order`].
    pub async fn delete_order(&self, order_id: &str) -> Result<bool, ResourceError> {
        self.ready()?.delete_order(&self.id, order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_id_in_payload_is_ignored() {
        let order: Order = serde_json::from_str(
            r#"{"id": "order_9", "store_id": "from_payload", "currency_code": "USD", "order_total": 42.5}"#,
        )
        .unwrap();

        assert_eq!(order.store_id(), "");
        assert!((order.order_total - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_decodes_addresses_and_foreign_timestamps() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "order_1",
                "customer": {"id": "cust_1"},
                "financial_status": "paid",
                "currency_code": "EUR",
                "order_total": 99.0,
                "shipping_total": 4.5,
                "processed_at_foreign": "2024-02-01T09:00:00Z",
                "shipping_address": {"name": "Jane Doe", "city": "Berlin", "country_code": "DE"},
                "lines": [{"product_id": "p", "product_variant_id": "v", "quantity": 1, "price": 94.5}]
            }"#,
        )
        .unwrap();

        assert_eq!(order.financial_status.as_deref(), Some("paid"));
        assert_eq!(
            order.processed_at_foreign.as_deref(),
            Some("2024-02-01T09:00:00Z")
        );
        let shipping = order.shipping_address.as_ref().unwrap();
        assert_eq!(shipping.name.as_deref(), Some("Jane Doe"));
        assert_eq!(order.lines.len(), 1);
    }

    #[test]
    fn test_readiness_checks_in_order() {
        assert_eq!(
            Order::default().can_make_request(),
            Err(ValidationError::MissingId { resource: "Order" })
        );

        let order = Order::from(OrderCreationRequest {
            id: "order_1".to_string(),
            ..Default::default()
        });
        assert_eq!(
            order.can_make_request(),
            Err(ValidationError::MissingClient { resource: "Order" })
        );
    }

    #[test]
    fn test_bound_order_without_store_id_is_not_ready() {
        let client = RestClient::with_transport(std::sync::Arc::new(Unreachable));
        let order = Order::from(OrderCreationRequest {
            id: "order_1".to_string(),
            ..Default::default()
        })
        .bind(&client, "")
        .unwrap();

        assert_eq!(
            order.can_make_request(),
            Err(ValidationError::MissingStoreId { resource: "Order" })
        );
    }

    #[test]
    fn test_delete_order_endpoint() {
        let (method, path) = Order::endpoint(
            ResourceOperation::Delete,
            &[("store_id", "s1"), ("order_id", "o1")],
        )
        .unwrap();
        assert_eq!(method, HttpMethod::Delete);
        assert_eq!(path, "/ecommerce/stores/s1/orders/o1");
    }

    #[derive(Debug)]
    struct Unreachable;

    #[async_trait::async_trait]
    impl crate::clients::Transport for Unreachable {
        async fn send(
            &self,
            _request: crate::clients::HttpRequest,
        ) -> Result<crate::clients::HttpResponse, crate::clients::HttpError> {
            panic!("no request expected");
        }
    }
}
