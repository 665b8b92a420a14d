//! Catalogue of known shop resources.
//!
//! Each function returns a fresh [`Resource`] ready to be refined with
//! criteria and passed to a [`BulkAggregator`](crate::rest::BulkAggregator).
//!
//! ```rust
//! use shop_appstore::rest::resources;
//!
//! let subscribers = resources::subscribers().limit(50).unwrap();
//! assert_eq!(subscribers.name(), "subscribers");
//! ```

mod subscriber;
mod webhook;

pub use subscriber::{subscribers, SUBSCRIBERS};
pub use webhook::{webhooks, WebhookEvent, WebhookFormat, WEBHOOKS};

use crate::rest::Resource;

/// Returns the orders resource.
#[must_use]
pub fn orders() -> Resource {
    Resource::new("orders", "order_id").with_object_name("order")
}

/// Returns the products resource.
#[must_use]
pub fn products() -> Resource {
    Resource::new("products", "product_id").with_object_name("product")
}

/// Returns the users (shop clients) resource.
#[must_use]
pub fn users() -> Resource {
    Resource::new("users", "user_id").with_object_name("user")
}
