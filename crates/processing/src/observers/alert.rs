use async_trait::async_trait;
use domain::{Event, EventPayload, Order, OrderStatus};

use crate::{ObserverError, OrderObserver};

/// Observer that raises alerts for critical order transitions.
///
/// Alerts fire when an order moves into a terminal status, and for every
/// cancellation event with its reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertObserver;

impl AlertObserver {
    /// Creates a new alert observer.
    pub fn new() -> Self {
        Self
    }

    fn is_critical(status: OrderStatus) -> bool {
        matches!(status, OrderStatus::Shipped | OrderStatus::Cancelled)
    }
}

#[async_trait]
impl OrderObserver for AlertObserver {
    fn name(&self) -> &'static str {
        "alert"
    }

    async fn on_status_changed(
        &self,
        order: &Order,
        _old_status: OrderStatus,
        new_status: OrderStatus,
    ) -> Result<(), ObserverError> {
        if Self::is_critical(new_status) {
            tracing::warn!(
                order_id = %order.order_id(),
                status = %new_status,
                "alert: order entered critical status"
            );
        }
        Ok(())
    }

    async fn on_event_processed(&self, event: &Event, order: &Order) -> Result<(), ObserverError> {
        if let EventPayload::OrderCancelled(data) = &event.payload {
            tracing::warn!(
                order_id = %order.order_id(),
                reason = %data.reason,
                "alert: order was cancelled"
            );
        }
        Ok(())
    }
}
