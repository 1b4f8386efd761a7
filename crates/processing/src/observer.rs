//! The observer capability trait.

use async_trait::async_trait;
use domain::{Event, Order, OrderStatus};

use crate::ObserverError;

/// A listener notified of order state transitions and processed events.
///
/// Both callbacks fire only for events that reference an order existing at
/// notification time, and only after the mutation has been committed.
/// Observers are invoked synchronously within the `process_event` call, in
/// registration order. A failing observer does not prevent the others from
/// being notified.
#[async_trait]
pub trait OrderObserver: Send + Sync {
    /// Returns the observer's name, used for removal and diagnostics.
    fn name(&self) -> &'static str;

    /// Fired once per event that changes an order's status (old != new).
    async fn on_status_changed(
        &self,
        order: &Order,
        old_status: OrderStatus,
        new_status: OrderStatus,
    ) -> Result<(), ObserverError>;

    /// Fired once per successfully applied event, after the history append,
    /// whether or not the status changed.
    async fn on_event_processed(&self, event: &Event, order: &Order) -> Result<(), ObserverError>;
}
