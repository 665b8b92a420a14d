//! Configuration types for the Shop AppStore SDK.
//!
//! # Overview
//!
//! - [`ShopConfig`]: The configuration struct holding connection settings
//! - [`ShopConfigBuilder`]: A builder for constructing [`ShopConfig`] instances
//! - [`ShopUrl`]: A validated shop URL
//! - [`AccessToken`]: A validated access token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use shop_appstore::{AccessToken, ShopConfig, ShopUrl};
//!
//! let config = ShopConfig::builder()
//!     .shop_url(ShopUrl::new("https://example.shoparena.pl").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ShopUrl};

use crate::error::ConfigError;

/// Configuration for talking to a single shop.
///
/// # Thread Safety
///
/// `ShopConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ShopConfig {
    shop_url: ShopUrl,
    access_token: AccessToken,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl ShopConfig {
    /// Creates a new builder for constructing a `ShopConfig`.
    #[must_use]
    pub fn builder() -> ShopConfigBuilder {
        ShopConfigBuilder::new()
    }

    /// Returns the shop URL.
    #[must_use]
    pub const fn shop_url(&self) -> &ShopUrl {
        &self.shop_url
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a rate-limited or failed request is attempted.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify ShopConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopConfig>();
};

/// Builder for constructing [`ShopConfig`] instances.
///
/// Required fields are `shop_url` and `access_token`.
///
/// # Defaults
///
/// - `tries`: `1` (no automatic retries)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopConfigBuilder {
    shop_url: Option<ShopUrl>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl ShopConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop URL (required).
    #[must_use]
    pub fn shop_url(mut self, url: ShopUrl) -> Self {
        self.shop_url = Some(url);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of attempts for requests answered with 429 or 500.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`ShopConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_url` or
    /// `access_token` are not set, and [`ConfigError::InvalidTries`] if
    /// `tries` is zero.
    pub fn build(self) -> Result<ShopConfig, ConfigError> {
        let shop_url = self
            .shop_url
            .ok_or(ConfigError::MissingRequiredField { field: "shop_url" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(ShopConfig {
            shop_url,
            access_token,
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}
