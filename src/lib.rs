//! # Shop AppStore Rust SDK
//!
//! A Rust SDK for the Shoper (DreamCommerce) shop REST API, focused on
//! fetching several resources in a single bulk request.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShopConfig`] and [`ShopConfigBuilder`]
//! - Validated newtypes for the shop URL and access token
//! - Resource descriptors with query criteria via [`rest::Resource`]
//! - Bulk retrieval with per-resource results via [`rest::BulkAggregator`]
//! - A typed error hierarchy via [`rest::ResourceError`]
//! - An async HTTP transport with retry logic via [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shop_appstore::{AccessToken, ShopConfig, ShopUrl};
//!
//! let config = ShopConfig::builder()
//!     .shop_url(ShopUrl::new("https://example.shoparena.pl").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Bulk Requests
//!
//! ```rust,ignore
//! use shop_appstore::rest::{resources, BulkAggregator, BulkError, ResourceErrorKind};
//! use shop_appstore::HttpClient;
//!
//! let aggregator = BulkAggregator::new(HttpClient::new(&config));
//!
//! match aggregator
//!     .get([
//!         ("subscribers", resources::subscribers()),
//!         ("orders", resources::orders().limit(10)?),
//!     ])
//!     .await
//! {
//!     Ok(lists) => println!("{} subscribers", lists["subscribers"].len()),
//!     Err(BulkError::Resource(e)) if e.kind == ResourceErrorKind::Permissions => {
//!         println!("Token lacks permissions: {}", e.message);
//!     }
//!     Err(e) => println!("Bulk request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and loggers are passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **All-or-nothing batches**: A bulk request either yields every list or an error
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ShopConfig, ShopConfigBuilder, ShopUrl};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{
    BulkCall, BulkResponse, BulkTransport, HttpClient, HttpError, HttpResponseError,
    MaxHttpRetriesExceededError,
};

// Re-export resource types
pub use rest::{
    BulkAggregator, BulkError, Resource, ResourceError, ResourceErrorKind, ResourceList,
};
