//! Webhooks and their configuration values.
//!
//! # Example
//!
//! ```rust
//! use shop_appstore::rest::resources::{WebhookEvent, WebhookFormat};
//!
//! assert_eq!(WebhookEvent::OrderPaid.as_str(), "order.paid");
//! assert_eq!(serde_json::to_string(&WebhookEvent::ParcelDispatch).unwrap(), "\"parcel.dispatch\"");
//! assert_eq!(serde_json::to_string(&WebhookFormat::Xml).unwrap(), "1");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::rest::Resource;

/// Collection name of webhooks.
pub const WEBHOOKS: &str = "webhooks";

/// Returns the webhooks resource.
#[must_use]
pub fn webhooks() -> Resource {
    Resource::new(WEBHOOKS, "webhook_id").with_object_name("webhook")
}

/// Encoding of webhook payloads. Sent over the wire as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WebhookFormat {
    /// Payload encoded as JSON.
    #[default]
    Json,
    /// Payload encoded as XML.
    Xml,
}

impl WebhookFormat {
    /// Returns the numeric code used by the API.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Json => 0,
            Self::Xml => 1,
        }
    }

    /// Parses a numeric API code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Json),
            1 => Some(Self::Xml),
            _ => None,
        }
    }
}

impl Serialize for WebhookFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for WebhookFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("unknown webhook format {code}")))
    }
}

/// Shop event a webhook can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    /// An order was created.
    #[serde(rename = "order.create")]
    OrderCreate,
    /// An order was edited.
    #[serde(rename = "order.edit")]
    OrderEdit,
    /// An order was paid.
    #[serde(rename = "order.paid")]
    OrderPaid,
    /// An order changed status.
    #[serde(rename = "order.status")]
    OrderStatus,
    /// An order was deleted.
    #[serde(rename = "order.delete")]
    OrderDelete,
    /// A client was created.
    #[serde(rename = "client.create")]
    ClientCreate,
    /// A client was edited.
    #[serde(rename = "client.edit")]
    ClientEdit,
    /// A client was deleted.
    #[serde(rename = "client.delete")]
    ClientDelete,
    /// A product was created.
    #[serde(rename = "product.create")]
    ProductCreate,
    /// A product was edited.
    #[serde(rename = "product.edit")]
    ProductEdit,
    /// A product was deleted.
    #[serde(rename = "product.delete")]
    ProductDelete,
    /// A parcel was created.
    #[serde(rename = "parcel.create")]
    ParcelCreate,
    /// A parcel was dispatched.
    #[serde(rename = "parcel.dispatch")]
    ParcelDispatch,
    /// A parcel was deleted.
    #[serde(rename = "parcel.delete")]
    ParcelDelete,
}

impl WebhookEvent {
    /// Returns the event name used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderCreate => "order.create",
            Self::OrderEdit => "order.edit",
            Self::OrderPaid => "order.paid",
            Self::OrderStatus => "order.status",
            Self::OrderDelete => "order.delete",
            Self::ClientCreate => "client.create",
            Self::ClientEdit => "client.edit",
            Self::ClientDelete => "client.delete",
            Self::ProductCreate => "product.create",
            Self::ProductEdit => "product.edit",
            Self::ProductDelete => "product.delete",
            Self::ParcelCreate => "parcel.create",
            Self::ParcelDispatch => "parcel.dispatch",
            Self::ParcelDelete => "parcel.delete",
        }
    }
}

impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_resource_names() {
        let resource = webhooks();
        assert_eq!(resource.name(), "webhooks");
        assert_eq!(resource.external_id_name(), "webhook_id");
    }

    #[test]
    fn test_event_serialization_matches_as_str() {
        for event in [
            WebhookEvent::OrderCreate,
            WebhookEvent::OrderStatus,
            WebhookEvent::ClientDelete,
            WebhookEvent::ProductEdit,
            WebhookEvent::ParcelDelete,
        ] {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{event}\""));
            let parsed: WebhookEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, event);
        }
    }

    #[test]
    fn test_format_codes() {
        assert_eq!(WebhookFormat::default(), WebhookFormat::Json);
        assert_eq!(WebhookFormat::Json.code(), 0);
        assert_eq!(WebhookFormat::from_code(1), Some(WebhookFormat::Xml));
        assert!(WebhookFormat::from_code(2).is_none());

        let parsed: WebhookFormat = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, WebhookFormat::Json);
        assert!(serde_json::from_str::<WebhookFormat>("7").is_err());
    }
}
