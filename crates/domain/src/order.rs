//! The mutable order entity.

use chrono::{DateTime, Utc};
use common::{CustomerId, ItemId, Money, OrderId};
use serde::{Deserialize, Serialize};

use crate::{Event, OrderStatus};

/// A line item in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The item identifier (SKU).
    pub item_id: ItemId,

    /// Quantity ordered, always greater than zero.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

impl std::fmt::Display for OrderItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{}", self.item_id, self.quantity)
    }
}

/// Mutable per-order record, derived purely from the events applied to it.
///
/// The item list is a snapshot captured at creation and never changes
/// afterwards; status and history are mutated in place as events arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    order_id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
    total_amount: Money,
    status: OrderStatus,
    event_history: Vec<Event>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new pending order with an empty event history.
    pub fn new(
        order_id: OrderId,
        customer_id: CustomerId,
        items: Vec<OrderItem>,
        total_amount: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            order_id,
            customer_id,
            items,
            total_amount,
            status: OrderStatus::Pending,
            event_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the order id.
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the customer id.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the line items captured at creation.
    ///
    /// The returned slice is read-only; the internal list cannot be mutated
    /// through it.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the total amount owed.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns every event applied to this order, in application order.
    pub fn event_history(&self) -> &[Event] {
        &self.event_history
    }

    /// Returns when the order record was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the order was last mutated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the status and refreshes the update timestamp.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Appends an event to the history and refreshes the update timestamp.
    pub fn record_event(&mut self, event: Event) {
        self.event_history.push(event);
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {} customer={} status={} total={} items={}",
            self.order_id,
            self.customer_id,
            self.status,
            self.total_amount,
            self.items.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::EventId;

    fn sample_order() -> Order {
        Order::new(
            OrderId::new("ORD001"),
            CustomerId::new("CUST001"),
            vec![OrderItem::new("P001", 2), OrderItem::new("P002", 1)],
            Money::from_dollars(150),
        )
    }

    #[test]
    fn new_order_starts_pending_with_empty_history() {
        let order = sample_order();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.event_history().is_empty());
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total_amount().cents(), 15000);
        assert_eq!(order.created_at(), order.updated_at());
    }

    #[test]
    fn record_event_appends_in_order() {
        let mut order = sample_order();
        let e1 = Event::payment_received(
            EventId::new("e1"),
            Utc::now(),
            order.order_id().clone(),
            Money::from_dollars(60),
        );
        let e2 = Event::payment_received(
            EventId::new("e2"),
            Utc::now(),
            order.order_id().clone(),
            Money::from_dollars(40),
        );

        order.record_event(e1.clone());
        order.record_event(e2.clone());

        assert_eq!(order.event_history(), &[e1, e2]);
    }

    #[test]
    fn set_status_refreshes_updated_at() {
        let mut order = sample_order();
        let before = order.updated_at();
        order.set_status(OrderStatus::Paid);
        assert_eq!(order.status(), OrderStatus::Paid);
        assert!(order.updated_at() >= before);
    }

    #[test]
    fn display_summarizes_the_order() {
        let summary = sample_order().to_string();
        assert!(summary.contains("ORD001"));
        assert!(summary.contains("PENDING"));
        assert!(summary.contains("$150.00"));
        assert!(summary.contains("items=2"));
    }

    #[test]
    fn item_wire_names() {
        let item = OrderItem::new("P001", 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["itemId"], "P001");
        assert_eq!(json["qty"], 2);
    }
}
