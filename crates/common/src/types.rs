use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Unique identifier for an order.
    ///
    /// Wraps the caller-supplied order id string to prevent mixing it up
    /// with other string-based identifiers.
    OrderId
}

string_id! {
    /// Unique identifier for a customer.
    CustomerId
}

string_id! {
    /// Unique identifier for an event, supplied by the event producer.
    EventId
}

string_id! {
    /// Identifier for an order line item (SKU).
    ItemId
}

impl EventId {
    /// Mints a fresh random event id for locally produced events.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_string_conversion() {
        let id = OrderId::new("ORD001");
        assert_eq!(id.as_str(), "ORD001");

        let id2: OrderId = "ORD002".into();
        assert_eq!(id2.as_str(), "ORD002");
    }

    #[test]
    fn event_id_generate_creates_unique_ids() {
        let id1 = EventId::generate();
        let id2 = EventId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn id_serialization_is_transparent() {
        let id = CustomerId::new("CUST001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"CUST001\"");

        let deserialized: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn item_id_display() {
        let id = ItemId::new("P001");
        assert_eq!(id.to_string(), "P001");
    }
}
