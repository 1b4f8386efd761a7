//! Line-delimited JSON event decoding.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use common::{CustomerId, EventId, ItemId, Money, OrderId};
use domain::{Event, OrderItem};
use serde::Deserialize;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::SourceError;

/// Raw wire shape of one event record.
///
/// Amounts arrive as decimal dollars and timestamps as ISO-8601 strings,
/// with or without a zone offset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    event_id: String,
    timestamp: String,
    #[serde(flatten)]
    body: RawBody,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "eventType")]
enum RawBody {
    #[serde(rename_all = "camelCase")]
    OrderCreated {
        order_id: String,
        customer_id: String,
        items: Vec<RawItem>,
        total_amount: f64,
    },
    #[serde(rename_all = "camelCase")]
    PaymentReceived {
        order_id: String,
        amount_paid: f64,
    },
    #[serde(rename_all = "camelCase")]
    ShippingScheduled {
        order_id: String,
        shipping_date: String,
    },
    #[serde(rename_all = "camelCase")]
    OrderCancelled { order_id: String, reason: String },
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(rename = "itemId")]
    item_id: String,
    qty: u32,
}

/// Parses an ISO-8601 timestamp, accepting both zoned and local forms.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SourceError> {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        return Ok(zoned.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| SourceError::Timestamp {
            value: value.to_string(),
        })
}

/// Converts a decimal dollar amount to integer cents.
fn dollars_to_cents(amount: f64) -> Money {
    Money::from_cents((amount * 100.0).round() as i64)
}

/// Decodes a single JSON line into a typed event.
pub fn parse_event(line: &str) -> Result<Event, SourceError> {
    let raw: RawEvent = serde_json::from_str(line)?;
    let event_id = EventId::new(raw.event_id);
    let timestamp = parse_timestamp(&raw.timestamp)?;

    let event = match raw.body {
        RawBody::OrderCreated {
            order_id,
            customer_id,
            items,
            total_amount,
        } => {
            if total_amount < 0.0 {
                return Err(SourceError::Invalid(format!(
                    "negative total amount {total_amount} for order {order_id}"
                )));
            }
            let items = items
                .into_iter()
                .map(|item| {
                    if item.qty == 0 {
                        return Err(SourceError::Invalid(format!(
                            "zero quantity for item {} in order {order_id}",
                            item.item_id
                        )));
                    }
                    Ok(OrderItem::new(ItemId::new(item.item_id), item.qty))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Event::order_created(
                event_id,
                timestamp,
                OrderId::new(order_id),
                CustomerId::new(customer_id),
                items,
                dollars_to_cents(total_amount),
            )
        }
        RawBody::PaymentReceived {
            order_id,
            amount_paid,
        } => {
            if amount_paid < 0.0 {
                return Err(SourceError::Invalid(format!(
                    "negative payment {amount_paid} for order {order_id}"
                )));
            }
            Event::payment_received(
                event_id,
                timestamp,
                OrderId::new(order_id),
                dollars_to_cents(amount_paid),
            )
        }
        RawBody::ShippingScheduled {
            order_id,
            shipping_date,
        } => Event::shipping_scheduled(
            event_id,
            timestamp,
            OrderId::new(order_id),
            parse_timestamp(&shipping_date)?,
        ),
        RawBody::OrderCancelled { order_id, reason } => {
            Event::order_cancelled(event_id, timestamp, OrderId::new(order_id), reason)
        }
    };

    Ok(event)
}

/// Reads events from a line-delimited JSON file.
///
/// Blank lines are skipped. Malformed records are dropped with a warn
/// diagnostic and do not abort the read; only failing to read the file
/// itself is an error.
pub async fn read_events_from_file(path: impl AsRef<Path>) -> Result<Vec<Event>, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut events = Vec::new();
    let mut dropped = 0usize;
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_event(line) {
            Ok(event) => events.push(event),
            Err(err) => {
                dropped += 1;
                tracing::warn!(path = %path.display(), line = line_no, %err, "dropping malformed event record");
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        loaded = events.len(),
        dropped,
        "finished reading event file"
    );

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::EventPayload;

    #[test]
    fn parses_order_created() {
        let line = r#"{"eventId":"e1","timestamp":"2024-03-01T10:00:00","eventType":"OrderCreated","orderId":"ORD001","customerId":"CUST001","items":[{"itemId":"P001","qty":2},{"itemId":"P002","qty":1}],"totalAmount":150.00}"#;
        let event = parse_event(line).unwrap();

        assert_eq!(event.event_id.as_str(), "e1");
        assert_eq!(event.event_type(), "OrderCreated");
        match event.payload {
            EventPayload::OrderCreated(data) => {
                assert_eq!(data.order_id.as_str(), "ORD001");
                assert_eq!(data.customer_id.as_str(), "CUST001");
                assert_eq!(data.items.len(), 2);
                assert_eq!(data.items[0].quantity, 2);
                assert_eq!(data.total_amount.cents(), 15000);
            }
            other => panic!("expected OrderCreated, got {other:?}"),
        }
    }

    #[test]
    fn parses_payment_with_fractional_dollars() {
        let line = r#"{"eventId":"e2","timestamp":"2024-03-01T10:05:00","eventType":"PaymentReceived","orderId":"ORD001","amountPaid":99.99}"#;
        let event = parse_event(line).unwrap();

        match event.payload {
            EventPayload::PaymentReceived(data) => {
                assert_eq!(data.amount_paid.cents(), 9999);
            }
            other => panic!("expected PaymentReceived, got {other:?}"),
        }
    }

    #[test]
    fn parses_shipping_scheduled() {
        let line = r#"{"eventId":"e3","timestamp":"2024-03-01T10:10:00","eventType":"ShippingScheduled","orderId":"ORD001","shippingDate":"2024-03-02T09:00:00"}"#;
        let event = parse_event(line).unwrap();
        assert_eq!(event.event_type(), "ShippingScheduled");
    }

    #[test]
    fn parses_order_cancelled() {
        let line = r#"{"eventId":"e4","timestamp":"2024-03-01T10:15:00","eventType":"OrderCancelled","orderId":"ORD003","reason":"Customer requested cancellation"}"#;
        let event = parse_event(line).unwrap();

        match event.payload {
            EventPayload::OrderCancelled(data) => {
                assert_eq!(data.reason, "Customer requested cancellation");
            }
            other => panic!("expected OrderCancelled, got {other:?}"),
        }
    }

    #[test]
    fn accepts_zoned_timestamps() {
        let line = r#"{"eventId":"e5","timestamp":"2024-03-01T10:00:00Z","eventType":"PaymentReceived","orderId":"ORD001","amountPaid":10.0}"#;
        let event = parse_event(line).unwrap();
        assert_eq!(event.timestamp.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn rejects_unknown_event_type() {
        let line = r#"{"eventId":"e6","timestamp":"2024-03-01T10:00:00","eventType":"OrderRefunded","orderId":"ORD001"}"#;
        assert!(matches!(parse_event(line), Err(SourceError::Json(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_event("not json at all"),
            Err(SourceError::Json(_))
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        let line = r#"{"eventId":"e7","timestamp":"2024-03-01T10:00:00","eventType":"PaymentReceived","orderId":"ORD001"}"#;
        assert!(matches!(parse_event(line), Err(SourceError::Json(_))));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let line = r#"{"eventId":"e8","timestamp":"yesterday","eventType":"OrderCancelled","orderId":"ORD001","reason":"x"}"#;
        assert!(matches!(
            parse_event(line),
            Err(SourceError::Timestamp { .. })
        ));
    }

    #[test]
    fn rejects_zero_quantity_item() {
        let line = r#"{"eventId":"e9","timestamp":"2024-03-01T10:00:00","eventType":"OrderCreated","orderId":"ORD001","customerId":"CUST001","items":[{"itemId":"P001","qty":0}],"totalAmount":10.0}"#;
        assert!(matches!(parse_event(line), Err(SourceError::Invalid(_))));
    }

    #[test]
    fn rejects_negative_amounts() {
        let payment = r#"{"eventId":"e10","timestamp":"2024-03-01T10:00:00","eventType":"PaymentReceived","orderId":"ORD001","amountPaid":-5.0}"#;
        assert!(matches!(parse_event(payment), Err(SourceError::Invalid(_))));

        let created = r#"{"eventId":"e11","timestamp":"2024-03-01T10:00:00","eventType":"OrderCreated","orderId":"ORD001","customerId":"CUST001","items":[],"totalAmount":-1.0}"#;
        assert!(matches!(parse_event(created), Err(SourceError::Invalid(_))));
    }
}
