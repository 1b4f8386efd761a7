use async_trait::async_trait;
use domain::{Event, Order, OrderStatus};

use crate::{ObserverError, OrderObserver};

/// Observer that writes a structured log line for every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerObserver;

impl LoggerObserver {
    /// Creates a new logger observer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderObserver for LoggerObserver {
    fn name(&self) -> &'static str {
        "logger"
    }

    async fn on_status_changed(
        &self,
        order: &Order,
        old_status: OrderStatus,
        new_status: OrderStatus,
    ) -> Result<(), ObserverError> {
        tracing::info!(
            order_id = %order.order_id(),
            %old_status,
            %new_status,
            "order status changed"
        );
        Ok(())
    }

    async fn on_event_processed(&self, event: &Event, order: &Order) -> Result<(), ObserverError> {
        tracing::info!(
            event_id = %event.event_id,
            event_type = event.event_type(),
            order_id = %order.order_id(),
            history_len = order.event_history().len(),
            "event processed"
        );
        Ok(())
    }
}
