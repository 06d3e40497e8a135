//! Customers of a store.
//!
//! Customers are scoped to a store by path. They are also embedded as a
//! snapshot in carts and orders.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_ecommerce::rest::resources::CustomerCreationRequest;
//!
//! let body = CustomerCreationRequest {
//!     id: "cust_1".to_string(),
//!     email_address: "jane@example.com".to_string(),
//!     opt_in_status: Some(false),
//!     ..Default::default()
//! };
//!
//! let customer = client.create_customer("store_1", &body).await?;
//! let customers = client.get_customers("store_1", None).await?;
//! client.delete_customer("store_1", "cust_1").await?;
//! ```

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::params::as_dyn;
use crate::rest::resource::ensure_identity;
use crate::rest::resources::{Address, Link, Store};
use crate::rest::{
    BasicQueryParams, ExtendedQueryParams, ListEnvelope, ListMeta, Resource, ResourceError,
    ResourceOperation, ResourcePath,
};

/// The writable fields of a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerCreationRequest {
    /// Unique identifier of the customer within the store.
    #[serde(default)]
    pub id: String,

    /// Email address of the customer.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email_address: String,

    /// Whether the customer has opted in to marketing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_in_status: Option<bool>,

    /// Company of the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First name of the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name of the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Address of the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// A customer as returned by the API.
///
/// The writable fields are reachable through `Deref`; server-assigned
/// fields have accessors. Serializing a `Customer` yields only the writable
/// fields, so a fetched customer can be embedded directly in a cart or order
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    #[serde(flatten)]
    details: CustomerCreationRequest,

    #[serde(default, skip_serializing)]
    orders_count: u64,

    #[serde(default, skip_serializing)]
    total_spent: f64,

    #[serde(default, skip_serializing)]
    created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing)]
    updated_at: Option<DateTime<Utc>>,

    #[serde(rename = "_links", default, skip_serializing)]
    links: Vec<Link>,
}

impl Customer {
    /// Returns the writable fields of the customer.
    #[must_use]
    pub const fn details(&self) -> &CustomerCreationRequest {
        &self.details
    }

    /// Number of orders the customer has placed.
    #[must_use]
    pub const fn orders_count(&self) -> u64 {
        self.orders_count
    }

    /// Total amount the customer has spent.
    #[must_use]
    pub const fn total_spent(&self) -> f64 {
        self.total_spent
    }

    /// When the customer was created.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// When the customer was last updated.
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

impl From<CustomerCreationRequest> for Customer {
    fn from(details: CustomerCreationRequest) -> Self {
        Self {
            details,
            ..Default::default()
        }
    }
}

impl Deref for Customer {
    type Target = CustomerCreationRequest;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

impl Resource for Customer {
    const NAME: &'static str = "Customer";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["store_id"],
            "/ecommerce/stores/{store_id}/customers",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["store_id", "customer_id"],
            "/ecommerce/stores/{store_id}/customers/{customer_id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["store_id"],
            "/ecommerce/stores/{store_id}/customers",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["store_id", "customer_id"],
            "/ecommerce/stores/{store_id}/customers/{customer_id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["store_id", "customer_id"],
            "/ecommerce/stores/{store_id}/customers/{customer_id}",
        ),
    ];
}

/// A page of customers of one store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ListOfCustomers {
    /// The customers on this page.
    #[serde(default)]
    pub customers: Vec<Customer>,

    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,

    #[serde(skip)]
    store_id: String,
}

impl ListOfCustomers {
    /// The store the customers belong to.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }
}

impl ListEnvelope for ListOfCustomers {
    type Item = Customer;

    fn items(&self) -> &[Customer] {
        &self.customers
    }

    fn meta(&self) -> &ListMeta {
        &self.meta
    }
}

impl RestClient {
    /// Lists the customers of a store.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get_customers(
        &self,
        store_id: &str,
        params: Option<&ExtendedQueryParams>,
    ) -> Result<ListOfCustomers, ResourceError> {
        let (method, path) = Customer::endpoint(ResourceOperation::List, &[("store_id", store_id)])?;
        let mut list: ListOfCustomers = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;

        for customer in &list.customers {
            ensure_identity(Customer::NAME, &customer.id)?;
        }
        list.store_id = store_id.to_string();
        Ok(list)
    }

    /// Fetches a single customer.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`]. A payload without an `id` is
    /// [`ResourceError::IncompleteResponse`].
    pub async fn get_customer(
        &self,
        store_id: &str,
        customer_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<Customer, ResourceError> {
        let (method, path) = Customer::endpoint(
            ResourceOperation::Get,
            &[("store_id", store_id), ("customer_id", customer_id)],
        )?;
        let customer: Customer = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;
        ensure_identity(Customer::NAME, &customer.id)?;
        Ok(customer)
    }

    /// Creates a customer in a store.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn create_customer(
        &self,
        store_id: &str,
        body: &CustomerCreationRequest,
    ) -> Result<Customer, ResourceError> {
        let (method, path) =
            Customer::endpoint(ResourceOperation::Create, &[("store_id", store_id)])?;
        let customer: Customer = self.request(method, &path, None, Some(body)).await?;
        ensure_identity(Customer::NAME, &customer.id)?;
        Ok(customer)
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn update_customer(
        &self,
        store_id: &str,
        customer_id: &str,
        body: &CustomerCreationRequest,
    ) -> Result<Customer, ResourceError> {
        let (method, path) = Customer::endpoint(
            ResourceOperation::Update,
            &[("store_id", store_id), ("customer_id", customer_id)],
        )?;
        let customer: Customer = self.request(method, &path, None, Some(body)).await?;
        ensure_identity(Customer::NAME, &customer.id)?;
        Ok(customer)
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request_ok`].
    pub async fn delete_customer(
        &self,
        store_id: &str,
        customer_id: &str,
    ) -> Result<bool, ResourceError> {
        let (method, path) = Customer::endpoint(
            ResourceOperation::Delete,
            &[("store_id", store_id), ("customer_id", customer_id)],
        )?;
        self.request_ok(method, &path).await
    }
}

impl Store {
    /// Lists the customers of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::get_customers`].
    pub async fn get_customers(
        &self,
        params: Option<&ExtendedQueryParams>,
    ) -> Result<ListOfCustomers, ResourceError> {
        self.ready()?.get_customers(&self.id, params).await
    }

    /// Fetches a customer of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::get_customer`].
    pub async fn get_customer(
        &self,
        customer_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<Customer, ResourceError> {
        self.ready()?
            .get_customer(&self.id, customer_id, params)
            .await
    }

    /// Creates a customer in this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::create_customer`].
    pub async fn create_customer(
        &self,
        body: &CustomerCreationRequest,
    ) -> Result<Customer, ResourceError> {
        self.ready()?.create_customer(&self.id, body).await
    }

    /// Updates a customer of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::update_customer`].
    pub async fn update_customer(
        &self,
        customer_id: &str,
        body: &CustomerCreationRequest,
    ) -> Result<Customer, ResourceError> {
        self.ready()?
            .update_customer(&self.id, customer_id, body)
            .await
    }

    /// Deletes a customer of this store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the store is not ready,
    /// otherwise see [`RestClient::delete_customer`].
    pub async fn delete_customer(&self, customer_id: &str) -> Result<bool, ResourceError> {
        self.ready()?.delete_customer(&self.id, customer_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_decodes_server_fields() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": "cust_1",
                "email_address": "jane@example.com",
                "opt_in_status": true,
                "first_name": "Jane",
                "orders_count": 4,
                "total_spent": 120.5,
                "created_at": "2024-03-01T10:00:00+00:00",
                "updated_at": "2024-03-02T10:00:00+00:00",
                "_links": []
            }"#,
        )
        .unwrap();

        assert_eq!(customer.id, "cust_1");
        assert_eq!(customer.first_name.as_deref(), Some("Jane"));
        assert_eq!(customer.orders_count(), 4);
        assert!((customer.total_spent() - 120.5).abs() < f64::EPSILON);
        assert!(customer.created_at().is_some());
    }

    #[test]
    fn test_serializing_customer_emits_only_writable_fields() {
        let customer: Customer = serde_json::from_str(
            r#"{"id": "cust_1", "email_address": "a@b.c", "orders_count": 2, "total_spent": 3.0}"#,
        )
        .unwrap();

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], "cust_1");
        assert!(json.get("orders_count").is_none());
        assert!(json.get("total_spent").is_none());
        assert!(json.get("_links").is_none());
    }

    #[test]
    fn test_customer_endpoints() {
        let (method, path) = Customer::endpoint(
            ResourceOperation::Delete,
            &[("store_id", "s1"), ("customer_id", "c1")],
        )
        .unwrap();
        assert_eq!(method, HttpMethod::Delete);
        assert_eq!(path, "/ecommerce/stores/s1/customers/c1");

        let (method, path) =
            Customer::endpoint(ResourceOperation::List, &[("store_id", "s1")]).unwrap();
        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "/ecommerce/stores/s1/customers");
    }

    #[test]
    fn test_list_decodes_many_customers() {
        let list: ListOfCustomers = serde_json::from_str(
            r#"{"customers": [{"id": "a"}, {"id": "b"}], "total_items": 7}"#,
        )
        .unwrap();

        assert_eq!(list.returned_count(), 2);
        assert_eq!(list.total_items(), 7);
        assert_eq!(list.customers[1].id, "b");
    }
}
