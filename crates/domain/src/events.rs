//! Order lifecycle events.

use chrono::{DateTime, Utc};
use common::{CustomerId, EventId, Money, OrderId};
use serde::{Deserialize, Serialize};

use crate::order::OrderItem;

/// An immutable fact about an order.
///
/// Every event carries a caller-supplied unique id and a timestamp alongside
/// its variant-specific payload. Events are never mutated after construction,
/// only cloned into order histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier supplied by the event producer.
    pub event_id: EventId,

    /// When the event occurred.
    pub timestamp: DateTime<Utc>,

    /// The variant-specific payload.
    #[serde(flatten)]
    pub payload: EventPayload,
}

/// The closed set of event variants.
///
/// Dispatch is an exhaustive match, so a new variant cannot be silently
/// ignored anywhere it is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType")]
pub enum EventPayload {
    /// Declares a new order.
    OrderCreated(OrderCreatedData),

    /// A single payment transaction (not cumulative).
    PaymentReceived(PaymentReceivedData),

    /// Shipment was scheduled for the order.
    ShippingScheduled(ShippingScheduledData),

    /// Terminal cancellation of the order.
    OrderCancelled(OrderCancelledData),
}

impl EventPayload {
    /// Returns the event type tag.
    pub fn event_type(&self) -> &'static str {
        match self {
            EventPayload::OrderCreated(_) => "OrderCreated",
            EventPayload::PaymentReceived(_) => "PaymentReceived",
            EventPayload::ShippingScheduled(_) => "ShippingScheduled",
            EventPayload::OrderCancelled(_) => "OrderCancelled",
        }
    }

    /// Returns the order this event refers to.
    pub fn order_id(&self) -> &OrderId {
        match self {
            EventPayload::OrderCreated(data) => &data.order_id,
            EventPayload::PaymentReceived(data) => &data.order_id,
            EventPayload::ShippingScheduled(data) => &data.order_id,
            EventPayload::OrderCancelled(data) => &data.order_id,
        }
    }
}

/// Data for OrderCreated events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedData {
    /// The new order's id.
    pub order_id: OrderId,

    /// The customer who placed the order.
    pub customer_id: CustomerId,

    /// Line items, in the order the customer listed them.
    pub items: Vec<OrderItem>,

    /// Total amount owed for the order.
    pub total_amount: Money,
}

/// Data for PaymentReceived events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceivedData {
    /// The order being paid.
    pub order_id: OrderId,

    /// Amount of this single payment transaction.
    pub amount_paid: Money,
}

/// Data for ShippingScheduled events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingScheduledData {
    /// The order being shipped.
    pub order_id: OrderId,

    /// When the shipment is scheduled to go out.
    pub shipping_date: DateTime<Utc>,
}

/// Data for OrderCancelled events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelledData {
    /// The order being cancelled.
    pub order_id: OrderId,

    /// Free-text reason for the cancellation.
    pub reason: String,
}

impl Event {
    /// Returns the event type tag.
    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }

    /// Returns the order this event refers to.
    pub fn order_id(&self) -> &OrderId {
        self.payload.order_id()
    }

    /// Creates an OrderCreated event.
    pub fn order_created(
        event_id: EventId,
        timestamp: DateTime<Utc>,
        order_id: OrderId,
        customer_id: CustomerId,
        items: Vec<OrderItem>,
        total_amount: Money,
    ) -> Self {
        Self {
            event_id,
            timestamp,
            payload: EventPayload::OrderCreated(OrderCreatedData {
                order_id,
                customer_id,
                items,
                total_amount,
            }),
        }
    }

    /// Creates a PaymentReceived event.
    pub fn payment_received(
        event_id: EventId,
        timestamp: DateTime<Utc>,
        order_id: OrderId,
        amount_paid: Money,
    ) -> Self {
        Self {
            event_id,
            timestamp,
            payload: EventPayload::PaymentReceived(PaymentReceivedData {
                order_id,
                amount_paid,
            }),
        }
    }

    /// Creates a ShippingScheduled event.
    pub fn shipping_scheduled(
        event_id: EventId,
        timestamp: DateTime<Utc>,
        order_id: OrderId,
        shipping_date: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            timestamp,
            payload: EventPayload::ShippingScheduled(ShippingScheduledData {
                order_id,
                shipping_date,
            }),
        }
    }

    /// Creates an OrderCancelled event.
    pub fn order_cancelled(
        event_id: EventId,
        timestamp: DateTime<Utc>,
        order_id: OrderId,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            timestamp,
            payload: EventPayload::OrderCancelled(OrderCancelledData {
                order_id,
                reason: reason.into(),
            }),
        }
    }
}
