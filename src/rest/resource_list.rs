//! Paginated result set of a single resource query.
//!
//! [`ResourceList`] implements `Deref<Target = [Value]>`, so it can be used
//! like a slice of items:
//!
//! ```rust
//! use shop_appstore::rest::ResourceList;
//! use serde_json::json;
//!
//! let list = ResourceList::from_body(&json!({
//!     "list": [{"id": 1}, {"id": 2}],
//!     "count": "2",
//!     "pages": 1,
//!     "page": 1
//! }));
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list[0]["id"], 1);
//! assert_eq!(list.count(), Some(2));
//! assert!(list.is_last_page());
//! ```

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Ordered items of one resource query plus pagination metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceList {
    items: Vec<Value>,
    page: Option<u64>,
    count: Option<u64>,
    page_count: Option<u64>,
}

impl ResourceList {
    /// Creates a list without pagination metadata.
    #[must_use]
    pub const fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            page: None,
            count: None,
            page_count: None,
        }
    }

    /// Builds a list from a collection response body.
    ///
    /// Items come from `list` (empty when absent); `page`, `count` and
    /// `pages` fill the pagination metadata when present.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let items = match body.get("list") {
            Some(Value::Array(items)) => items.clone(),
            Some(Value::Object(items)) => items.values().cloned().collect(),
            _ => Vec::new(),
        };

        Self {
            items,
            page: body.get("page").and_then(meta_number),
            count: body.get("count").and_then(meta_number),
            page_count: body.get("pages").and_then(meta_number),
        }
    }

    /// Returns the current page number.
    #[must_use]
    pub const fn page(&self) -> Option<u64> {
        self.page
    }

    /// Returns the total number of rows across all pages.
    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        self.count
    }

    /// Returns the number of pages.
    #[must_use]
    pub const fn page_count(&self) -> Option<u64> {
        self.page_count
    }

    /// Returns `true` when the current page is known to be the last one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        matches!((self.page, self.page_count), (Some(page), Some(pages)) if page >= pages)
    }

    /// Returns the items.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Consumes the list and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Deserializes every item into `T`.
    ///
    /// # Errors
    ///
    /// Returns the first item's deserialization error.
    pub fn deserialize_items<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        self.items
            .iter()
            .map(|item| <T as Deserialize>::deserialize(item))
            .collect()
    }
}

/// The API sends pagination numbers either as integers or numeric strings.
fn meta_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl Deref for ResourceList {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl IntoIterator for ResourceList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
