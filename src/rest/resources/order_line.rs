//! Lines of a persisted order.
//!
//! Lines can be listed and fetched. Creating and updating them is not
//! supported: both operations fail with [`ResourceError::NotImplemented`]
//! and send nothing.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::params::as_dyn;
use crate::rest::resource::ensure_identity;
use crate::rest::resources::{LineItem, Link, Order};
use crate::rest::{
    BasicQueryParams, ExtendedQueryParams, ListEnvelope, ListMeta, Resource, ResourceError,
    ResourceOperation, ResourcePath,
};

/// A single line of an order.
///
/// The product fields are reachable through `Deref<Target = LineItem>`.
/// `store_id` and `order_id` come from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderLine {
    #[serde(default)]
    id: String,

    #[serde(flatten)]
    item: LineItem,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    discount: Option<f64>,

    #[serde(rename = "_links", default, skip_serializing)]
    links: Vec<Link>,

    #[serde(skip)]
    store_id: String,

    #[serde(skip)]
    order_id: String,
}

impl OrderLine {
    /// Unique identifier of the line within its order.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The product fields of the line.
    #[must_use]
    pub const fn item(&self) -> &LineItem {
        &self.item
    }

    /// Discount applied to the line, if any.
    #[must_use]
    pub const fn discount(&self) -> Option<f64> {
        self.discount
    }

    /// Hypermedia links.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The store the line's order belongs to.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// The order the line belongs to.
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    fn scoped(mut self, store_id: &str, order_id: &str) -> Result<Self, ResourceError> {
        ensure_identity(Self::NAME, &self.id)?;
        self.store_id = store_id.to_string();
        self.order_id = order_id.to_string();
        Ok(self)
    }
}

impl Deref for OrderLine {
    type Target = LineItem;

    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl Resource for OrderLine {
    const NAME: &'static str = "OrderLine";
    const PATHS: &'static [ResourcePath] = &[
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
}

/// A page of lines of one order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ListOfOrderLines {
    /// The lines on this page.
    #[serde(default)]
    pub lines: Vec<OrderLine>,

    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,

    #[serde(skip)]
    store_id: String,

    #[serde(skip)]
    order_id: String,
}

impl ListOfOrderLines {
    /// The store the order belongs to.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// The order the lines belong to.
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }
}

impl ListEnvelope for ListOfOrderLines {
    type Item = OrderLine;

    fn items(&self) -> &[OrderLine] {
        &self.lines
    }

    fn meta(&self) -> &ListMeta {
        &self.meta
    }
}

impl RestClient {
    /// Lists the lines of an order.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get_lines(
        &self,
        store_id: &str,
        order_id: &str,
        params: Option<&ExtendedQueryParams>,
    ) -> Result<ListOfOrderLines, ResourceError> {
        let (method, path) = OrderLine::endpoint(
            ResourceOperation::List,
            &[("store_id", store_id), ("order_id", order_id)],
        )?;
        let list: ListOfOrderLines = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;

        let lines = list
            .lines
            .into_iter()
            .map(|line| line.scoped(store_id, order_id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListOfOrderLines {
            lines,
            meta: list.meta,
            store_id: store_id.to_string(),
            order_id: order_id.to_string(),
        })
    }

    /// Fetches a single order line.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get_line(
        &self,
        store_id: &str,
        order_id: &str,
        line_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<OrderLine, ResourceError> {
        let (method, path) = OrderLine::endpoint(
            ResourceOperation::Get,
            &[
                ("store_id", store_id),
                ("order_id", order_id),
                ("line_id", line_id),
            ],
        )?;
        let line: OrderLine = self
            .request::<(), _>(method, &path, as_dyn(params), None)
            .await?;
        line.scoped(store_id, order_id)
    }

    /// Adding lines to an existing order is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`ResourceError::NotImplemented`]; nothing is sent.
    #[allow(clippy::unused_async)]
    pub async fn create_line(
        &self,
        store_id: &str,
        order_id: &str,
        _body: &LineItem,
    ) -> Result<OrderLine, ResourceError> {
        tracing::debug!(store_id, order_id, "order line creation is not supported");
        Err(ResourceError::NotImplemented {
            resource: OrderLine::NAME,
            operation: ResourceOperation::Create.as_str(),
        })
    }

    /// Updating lines of an existing order is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`ResourceError::NotImplemented`]; nothing is sent.
    #[allow(clippy::unused_async)]
    pub async fn update_line(
        &self,
        store_id: &str,
        order_id: &str,
        line_id: &str,
        _body: &LineItem,
    ) -> Result<OrderLine, ResourceError> {
        tracing::debug!(store_id, order_id, line_id, "order line update is not supported");
        Err(ResourceError::NotImplemented {
            resource: OrderLine::NAME,
            operation: ResourceOperation::Update.as_str(),
        })
    }
}

impl Order {
    /// Lists the lines of this order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the order is not ready,
    /// otherwise see [`RestClient::get_lines`].
    pub async fn get_lines(
        &self,
        params: Option<&ExtendedQueryParams>,
    ) -> Result<ListOfOrderLines, ResourceError> {
        self.ready()?
            .get_lines(self.store_id(), &self.id, params)
            .await
    }

    /// Fetches a line of this order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the order is not ready,
    /// otherwise see [`RestClient::get_line`].
    pub async fn get_line(
        &self,
        line_id: &str,
        params: Option<&BasicQueryParams>,
    ) -> Result<OrderLine, ResourceError> {
        self.ready()?
            .get_line(self.store_id(), &self.id, line_id, params)
            .await
    }

    /// Adding lines to an existing order is not supported.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the order is not ready,
    /// otherwise [`ResourceError::NotImplemented`].
    pub async fn create_line(&self, body: &LineItem) -> Result<OrderLine, ResourceError> {
        self.ready()?
            .create_line(self.store_id(), &self.id, body)
            .await
    }

    /// Updating lines of an existing order is not supported.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the order is not ready,
    /// otherwise [`ResourceError::NotImplemented`].
    pub async fn update_line(
        &self,
        line_id: &str,
        body: &LineItem,
    ) -> Result<OrderLine, ResourceError> {
        self.ready()?
            .update_line(self.store_id(), &self.id, line_id, body)
            .await
    }
}
