//! Resource descriptors and query criteria.
//!
//! A [`Resource`] names a remote entity collection (e.g. `subscribers`)
//! together with the criteria used to query it. Resources are plain values:
//! build one per request and hand it to a
//! [`BulkAggregator`](crate::rest::BulkAggregator).
//!
//! # Example
//!
//! ```rust
//! use shop_appstore::rest::Resource;
//! use serde_json::json;
//!
//! let orders = Resource::new("orders", "order_id")
//!     .filters(&json!({"status_id": 1}))
//!     .limit(20)
//!     .unwrap()
//!     .order("-date");
//!
//! assert_eq!(orders.name(), "orders");
//! assert_eq!(orders.criteria()["filters"], json!(r#"{"status_id":1}"#));
//! assert_eq!(orders.criteria()["limit"], json!(20));
//! ```

use serde_json::{Map, Value};

use crate::rest::CriteriaError;

/// Maximum number of rows the API returns per page.
pub const MAX_LIMIT: u64 = 50;

/// Describes one entity collection and how to query it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    name: String,
    external_id_name: String,
    object_name: Option<String>,
    criteria: Map<String, Value>,
}

impl Resource {
    /// Creates a resource with no criteria.
    ///
    /// * `name` - Collection name used in API paths (e.g. `subscribers`)
    /// * `external_id_name` - Identifier field of a single object (e.g. `subscriber_id`)
    #[must_use]
    pub fn new(name: impl Into<String>, external_id_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            external_id_name: external_id_name.into(),
            object_name: None,
            criteria: Map::new(),
        }
    }

    /// Sets the singular object name (e.g. `subscriber`).
    #[must_use]
    pub fn with_object_name(mut self, object_name: impl Into<String>) -> Self {
        self.object_name = Some(object_name.into());
        self
    }

    /// Replaces all criteria.
    #[must_use]
    pub fn with_criteria(mut self, criteria: Map<String, Value>) -> Self {
        self.criteria = criteria;
        self
    }

    /// Sets a single query parameter.
    #[must_use]
    pub fn criterion(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.criteria.insert(key.into(), value.into());
        self
    }

    /// Sets result filters. The API expects them as a JSON-encoded string.
    #[must_use]
    pub fn filters(self, filters: &Value) -> Self {
        self.criterion("filters", filters.to_string())
    }

    /// Selects the result page, numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidPage`] for page 0.
    pub fn page(self, page: u64) -> Result<Self, CriteriaError> {
        if page == 0 {
            return Err(CriteriaError::InvalidPage { page });
        }
        Ok(self.criterion("page", page))
    }

    /// Limits the number of rows per page.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidLimit`] unless `1 <= limit <= 50`.
    pub fn limit(self, limit: u64) -> Result<Self, CriteriaError> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(CriteriaError::InvalidLimit { limit });
        }
        Ok(self.criterion("limit", limit))
    }

    /// Sets the sort expression, e.g. `name` or `-date`.
    #[must_use]
    pub fn order(self, expression: impl Into<String>) -> Self {
        self.criterion("order", expression.into())
    }

    /// Removes all criteria.
    pub fn clear_criteria(&mut self) {
        self.criteria.clear();
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier field name.
    #[must_use]
    pub fn external_id_name(&self) -> &str {
        &self.external_id_name
    }

    /// Returns the singular object name, if the resource has one.
    #[must_use]
    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }

    /// Returns the query criteria.
    #[must_use]
    pub const fn criteria(&self) -> &Map<String, Value> {
        &self.criteria
    }
}
