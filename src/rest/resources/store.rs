//! Stores, the root of the e-commerce hierarchy.
//!
//! A [`Store`] obtained from the client carries a handle to it, so carts,
//! customers, and orders can be reached without repeating the store id:
//!
//! ```rust,ignore
//! let store = client.get_store("store_1", None).await?;
//! let carts = store.get_carts(None).await?;
//! let order = store.get_order("order_9", None).await?;
//! ```

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::params::as_dyn;
use crate::rest::resource::ensure_identity;
use crate::rest::resources::{Address, Link};
use crate::rest::{
    BasicQueryParams, ExtendedQueryParams, ListEnvelope, ListMeta, Resource, ResourceError,
    ResourceOperation, ResourcePath, ValidationError,
};

/// The writable fields of a store.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::rest::resources::StoreCreationRequest;
///
/// let body = StoreCreationRequest {
///     id: "store_1".to_string(),
///     list_id: "a1b2c3".to_string(),
///     name: "Freddie's Merchandise".to_string(),
///     currency_code: "USD".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreCreationRequest {
    /// Unique identifier of the store.
    #[serde(default)]
    pub id: String,

    /// Identifier of the audience the store is linked to.
    #[serde(default)]
    pub list_id: String,

    /// Name of the store.
    #[serde(default)]
    pub name: String,

    /// E-commerce platform of the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Domain of the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Contact email address of the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Three-letter ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: String,

    /// Currency format (e.g. `$`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_format: Option<String>,

    /// Primary locale of the store (e.g. `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,

    /// Time zone of the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Contact phone number of the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Address of the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// A store as returned by the API.
///
/// The writable fields are reachable through `Deref`. A store decoded by
/// [`RestClient`] is bound to it; a `Store` built any other way is not, and
/// its scoped operations fail [`can_make_request`](Self::can_make_request).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Store {
    #[serde(flatten)]
    details: StoreCreationRequest,

    #[serde(default, skip_serializing)]
    created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing)]
    updated_at: Option<DateTime<Utc>>,

    #[serde(rename = "_links", default, skip_serializing)]
    links: Vec<Link>,

    #[serde(skip)]
    client: Option<RestClient>,
}

impl Store {
    /// Returns the writable fields of the store.
    #[must_use]
    pub const fn details(&self) -> &StoreCreationRequest {
        &self.details
    }

    /// When the store was created.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// When the store was last updated.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Hypermedia links.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Checks that this store can issue scoped requests.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingId`] if the store has no id and
    /// [`ValidationError::MissingClient`] if it is not bound to a client.
    pub fn can_make_request(&self) -> Result<(), ValidationError> {
        self.ready().map(|_| ())
    }

    pub(crate) fn ready(&self) -> Result<&RestClient, ValidationError> {
        if self.details.id.is_empty() {
            return Err(ValidationError::MissingId {
                resource: Self::NAME,
            });
        }
        self.client.as_ref().ok_or(ValidationError::MissingClient {
            resource: Self::NAME,
        })
    }

    fn bind(mut self, client: &RestClient) -> Result<Self, ResourceError> {
        ensure_identity(Self::NAME, &self.details.id)?;
        self.client = Some(client.clone());
        Ok(self)
    }
}

impl From<StoreCreationRequest> for Store {
    fn from(details: StoreCreationRequest) -> Self {
        Self {
            details,
            ..Default::default()
        }
    }
}

impl Deref for Store {
    type Target = StoreCreationRequest;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

impl Resource for Store {
    const NAME: &'static str = "Store";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "/ecommerce/stores",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["store_id"],
            "/ecommerce/stores/{store_id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "/ecommerce/stores",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["store_id"],
            "/ecommerce/stores/{store_id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["store_id"],
            "/ecommerce/stores/{store_id}",
        ),
    ];
}

/// A page of stores.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListOfStores {
    /// The stores on this page, each bound to the client.
    #[serde(default)]
    pub stores: Vec<Store>,

    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,
}

impl ListEnvelope for ListOfStores {
    type Item = Store;

    fn items(&self) -> &[Store] {
        &self.stores
    }

    fn meta(&self) -> &ListMeta {
        &self.meta
    }
}

impl RestClient {
    /// Lists the stores of the account.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get_stores(
        &self,
        params: Option<&ExtendedQueryParams>,
    ) -> Result<ListOfStores, ResourceError> {
        let (method, path) = Store::endpoint(ResourceOperation::List, &[])?;
        let list: ListOfStores = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;

        let stores = list
            .stores
            .into_iter()
            .map(|store| store.bind(self))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListOfStores {
            stores,
            meta: list.meta,
        })
    }

    /// Fetches a single store.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`]. A payload without an `id` is
    /// [`ResourceError::IncompleteResponse`].
    pub async fn get_store(
        &self,
        store_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<Store, ResourceError> {
        let (method, path) = Store::endpoint(ResourceOperation::Get, &[("store_id", store_id)])?;
        let store: Store = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;
        store.bind(self)
    }

    /// Creates a store.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn create_store(&self, body: &StoreCreationRequest) -> Result<Store, ResourceError> {
        let (method, path) = Store::endpoint(ResourceOperation::Create, &[])?;
        let store: Store = self.request(method, &path, None, Some(body)).await?;
        store.bind(self)
    }

    /// Updates a store.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn update_store(
        &self,
        store_id: &str,
        body: &StoreCreationRequest,
    ) -> Result<Store, ResourceError> {
        let (method, path) =
            Store::endpoint(ResourceOperation::Update, &[("store_id", store_id)])?;
        let store: Store = self.request(method, &path, None, Some(body)).await?;
        store.bind(self)
    }

    /// Deletes a store and everything it owns.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request_ok`].
    pub async fn delete_store(&self, store_id: &str) -> Result<bool, ResourceError> {
        let (method, path) =
            Store::endpoint(ResourceOperation::Delete, &[("store_id", store_id)])?;
        self.request_ok(method, &path).await
    }
}
