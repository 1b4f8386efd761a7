//! Order status state machine.

use common::Money;
use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Pending ──(payment ≥ total)──► Paid
/// Pending ──(0 < payment < total)──► PartiallyPaid ──(payment ≥ total)──► Paid
/// any ──(shipping scheduled)──► Shipped
/// any ──(cancelled)──► Cancelled
/// ```
///
/// Shipping and cancellation overwrite the current status unconditionally;
/// a cancelled order that later receives a shipping event becomes Shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order has been created, no payment received yet.
    #[default]
    Pending,

    /// A payment was received that covers part of the total.
    PartiallyPaid,

    /// A single payment covered the full total.
    Paid,

    /// Shipping has been scheduled.
    Shipped,

    /// Order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns the status an order moves to after a single payment.
    ///
    /// Each payment is evaluated individually against the order's fixed
    /// total, never against a running sum of prior payments. A non-positive
    /// payment leaves the status unchanged.
    pub fn after_payment(self, amount_paid: Money, total_amount: Money) -> OrderStatus {
        if amount_paid >= total_amount {
            OrderStatus::Paid
        } else if amount_paid.is_positive() {
            OrderStatus::PartiallyPaid
        } else {
            self
        }
    }

    /// Returns true if no further lifecycle progress is expected.
    ///
    /// Terminal here is descriptive only: later events still overwrite the
    /// status (see the transition diagram).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::PartiallyPaid => "PARTIALLY_PAID",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
