//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated shop access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use shop_appstore::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated shop URL.
///
/// Only `http` and `https` URLs with a non-empty host are accepted. Surrounding
/// whitespace and trailing slashes are stripped so API paths can be appended
/// directly.
///
/// # Serialization
///
/// `ShopUrl` serializes to and deserializes from the normalized URL string.
///
/// # Example
///
/// ```rust
/// use shop_appstore::ShopUrl;
///
/// let url = ShopUrl::new("https://example.shoparena.pl/").unwrap();
/// assert_eq!(url.as_ref(), "https://example.shoparena.pl");
/// assert!(ShopUrl::new("ftp://example.shoparena.pl").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopUrl(String);

impl ShopUrl {
    /// Creates a new validated shop URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopUrl`] if the scheme is not `http` or
    /// `https`, or the host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let valid = match url.split_once("://") {
            Some((scheme, rest))
                if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
            {
                // authority ends at the first path, query or fragment delimiter
                let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
                let host = authority.rsplit_once(':').map_or(authority, |(host, _)| host);
                !host.is_empty()
            }
            _ => false,
        };

        if valid {
            Ok(Self(url))
        } else {
            Err(ConfigError::InvalidShopUrl { url })
        }
    }
}

impl AsRef<str> for ShopUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShopUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShopUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_shop_url_validates_format() {
        let url = ShopUrl::new("https://example.shoparena.pl").unwrap();
        assert_eq!(url.as_ref(), "https://example.shoparena.pl");

        let url = ShopUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_shop_url_strips_trailing_slash() {
        let url = ShopUrl::new("  https://shop.example.com/  ").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com");
    }

    #[test]
    fn test_shop_url_rejects_invalid() {
        assert!(ShopUrl::new("shop.example.com").is_err());
        assert!(ShopUrl::new("https://").is_err());
        assert!(ShopUrl::new("://shop.example.com").is_err());
        assert!(ShopUrl::new("https://:8080").is_err());
        assert!(ShopUrl::new("ftp://shop.example.com").is_err());
    }

    #[test]
    fn test_shop_url_deserializes_with_validation() {
        let url: ShopUrl = serde_json::from_str(r#""https://shop.example.com/""#).unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com");

        let result: Result<ShopUrl, _> = serde_json::from_str(r#""no-scheme""#);
        assert!(result.is_err());
    }
}
