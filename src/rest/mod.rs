//! Resource layer: descriptors, result lists and bulk retrieval.
//!
//! # Overview
//!
//! - [`Resource`]: A named entity collection with query criteria
//! - [`ResourceList`]: A paginated result set
//! - [`BulkAggregator`]: Runs many resource queries in one bulk request
//! - [`ResourceError`] / [`BulkError`]: Typed failures
//! - [`resources`]: Constructors for known resources
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_appstore::rest::{resources, BulkAggregator};
//!
//! let aggregator = BulkAggregator::new(client);
//! let lists = aggregator
//!     .get([("orders", resources::orders()), ("users", resources::users())])
//!     .await?;
//! println!("{:?} orders", lists["orders"].count());
//! ```

mod bulk;
mod errors;
mod resource;
mod resource_list;
pub mod resources;

pub use bulk::{build_calls, translate_response, BulkAggregator, FailureLogger, NoopLogger};
pub use errors::{BulkError, CriteriaError, ResourceError, ResourceErrorKind};
pub use resource::{Resource, MAX_LIMIT};
pub use resource_list::ResourceList;
