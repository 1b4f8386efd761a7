//! Sample event data for demo runs.

use chrono::{Duration, Utc};
use common::{CustomerId, EventId, Money, OrderId};
use domain::{Event, OrderItem};

/// Generates the demo event sequence used when no event file is available.
///
/// Three orders: one fully paid and shipped, one split across two partial
/// payments and then shipped, and one cancelled.
pub fn sample_events() -> Vec<Event> {
    let base = Utc::now();
    let at = |minutes: i64| base + Duration::minutes(minutes);

    vec![
        Event::order_created(
            EventId::new("e1"),
            at(0),
            OrderId::new("ORD001"),
            CustomerId::new("CUST001"),
            vec![OrderItem::new("P001", 2), OrderItem::new("P002", 1)],
            Money::from_dollars(150),
        ),
        Event::payment_received(
            EventId::new("e2"),
            at(5),
            OrderId::new("ORD001"),
            Money::from_dollars(150),
        ),
        Event::shipping_scheduled(
            EventId::new("e3"),
            at(10),
            OrderId::new("ORD001"),
            base + Duration::days(1),
        ),
        Event::order_created(
            EventId::new("e4"),
            at(15),
            OrderId::new("ORD002"),
            CustomerId::new("CUST002"),
            vec![OrderItem::new("P003", 1)],
            Money::from_dollars(75),
        ),
        Event::payment_received(
            EventId::new("e5"),
            at(20),
            OrderId::new("ORD002"),
            Money::from_dollars(50),
        ),
        Event::order_created(
            EventId::new("e6"),
            at(25),
            OrderId::new("ORD003"),
            CustomerId::new("CUST003"),
            vec![OrderItem::new("P004", 3)],
            Money::from_dollars(200),
        ),
        Event::order_cancelled(
            EventId::new("e7"),
            at(30),
            OrderId::new("ORD003"),
            "Customer requested cancellation",
        ),
        Event::payment_received(
            EventId::new("e8"),
            at(35),
            OrderId::new("ORD002"),
            Money::from_dollars(25),
        ),
        Event::shipping_scheduled(
            EventId::new("e9"),
            at(40),
            OrderId::new("ORD002"),
            base + Duration::days(2),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_all_variants() {
        let events = sample_events();
        assert_eq!(events.len(), 9);

        let mut types: Vec<&str> = events.iter().map(|e| e.event_type()).collect();
        types.sort_unstable();
        types.dedup();
        assert_eq!(
            types,
            vec![
                "OrderCancelled",
                "OrderCreated",
                "PaymentReceived",
                "ShippingScheduled"
            ]
        );
    }

    #[test]
    fn sample_event_ids_are_unique() {
        let events = sample_events();
        let mut ids: Vec<&str> = events.iter().map(|e| e.event_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn sample_timestamps_are_monotonic() {
        let events = sample_events();
        for pair in events.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }
}
