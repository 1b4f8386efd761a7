//! The event processor: order table, transition rules, and notification.

use std::sync::Arc;

use common::OrderId;
use dashmap::{DashMap, Entry};
use domain::{Event, EventPayload, Order, OrderStatus};
use tokio::sync::RwLock;

use crate::OrderObserver;

/// Applies lifecycle events to orders and notifies registered observers.
///
/// The processor owns the order table and the observer list. Events for
/// distinct orders may be processed concurrently without external
/// synchronization; the table is sharded and each order's mutation (history
/// append plus status set) happens under its entry lock, so two concurrent
/// events for the same order cannot interleave. Observers are notified after
/// the entry lock is released, on a snapshot of the mutated order.
///
/// Events referencing an unknown order are dropped with a diagnostic; an
/// order is never created as a side effect of a non-creation event.
#[derive(Default)]
pub struct EventProcessor {
    orders: DashMap<OrderId, Order>,
    observers: RwLock<Vec<Arc<dyn OrderObserver>>>,
}

impl EventProcessor {
    /// Creates a processor with an empty order table and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer. Notification order is registration order.
    pub async fn add_observer(&self, observer: Arc<dyn OrderObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Removes all observers with the given name.
    ///
    /// Affects only future notifications. Returns true if any observer was
    /// removed.
    pub async fn remove_observer(&self, name: &str) -> bool {
        let mut observers = self.observers.write().await;
        let before = observers.len();
        observers.retain(|o| o.name() != name);
        observers.len() < before
    }

    /// Returns the number of registered observers.
    pub async fn observer_count(&self) -> usize {
        self.observers.read().await.len()
    }

    /// Applies a single event to the order it references.
    #[tracing::instrument(
        skip(self, event),
        fields(
            event_id = %event.event_id,
            event_type = event.event_type(),
            order_id = %event.order_id(),
        )
    )]
    pub async fn process_event(&self, event: Event) {
        match &event.payload {
            EventPayload::OrderCreated(_) => self.handle_order_created(&event).await,
            EventPayload::PaymentReceived(_) => self.handle_payment_received(&event).await,
            EventPayload::ShippingScheduled(_) => {
                self.handle_status_overwrite(&event, OrderStatus::Shipped, "shipping")
                    .await
            }
            EventPayload::OrderCancelled(_) => {
                self.handle_status_overwrite(&event, OrderStatus::Cancelled, "cancellation")
                    .await
            }
        }
    }

    /// Applies a batch of events sequentially, in submission order.
    pub async fn process_events(&self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.process_event(event).await;
        }
    }

    /// Returns a snapshot of the order with the given id, if known.
    pub fn get_order(&self, order_id: &OrderId) -> Option<Order> {
        self.orders.get(order_id).map(|entry| entry.value().clone())
    }

    /// Returns snapshots of all known orders, in unspecified iteration order.
    pub fn get_all_orders(&self) -> Vec<Order> {
        self.orders.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Returns the number of known orders.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    async fn handle_order_created(&self, event: &Event) {
        let EventPayload::OrderCreated(data) = &event.payload else {
            unreachable!("dispatched as OrderCreated");
        };

        // First write wins: a duplicate creation is dropped, never applied.
        let snapshot = match self.orders.entry(data.order_id.clone()) {
            Entry::Occupied(_) => {
                tracing::warn!("duplicate order creation ignored");
                metrics::counter!("orders_events_dropped").increment(1);
                return;
            }
            Entry::Vacant(slot) => {
                let mut order = Order::new(
                    data.order_id.clone(),
                    data.customer_id.clone(),
                    data.items.clone(),
                    data.total_amount,
                );
                order.record_event(event.clone());
                let snapshot = order.clone();
                slot.insert(order);
                snapshot
            }
        };

        metrics::counter!("orders_created").increment(1);
        metrics::counter!("orders_events_processed").increment(1);

        // Pending is the initial status, not a transition: no status-change
        // notification fires here.
        self.notify_event_processed(event, &snapshot).await;
    }

    async fn handle_payment_received(&self, event: &Event) {
        let EventPayload::PaymentReceived(data) = &event.payload else {
            unreachable!("dispatched as PaymentReceived");
        };

        let Some(mut entry) = self.orders.get_mut(&data.order_id) else {
            tracing::warn!("payment for unknown order dropped");
            metrics::counter!("orders_events_dropped").increment(1);
            return;
        };

        let old_status = entry.status();
        entry.record_event(event.clone());

        let new_status = old_status.after_payment(data.amount_paid, entry.total_amount());
        if new_status != old_status {
            entry.set_status(new_status);
        }
        let snapshot = entry.value().clone();
        drop(entry);

        metrics::counter!("orders_events_processed").increment(1);

        if new_status != old_status {
            self.notify_status_changed(&snapshot, old_status, new_status)
                .await;
        }
        self.notify_event_processed(event, &snapshot).await;
    }

    async fn handle_status_overwrite(
        &self,
        event: &Event,
        target: OrderStatus,
        context: &'static str,
    ) {
        let Some(mut entry) = self.orders.get_mut(event.order_id()) else {
            tracing::warn!(context, "event for unknown order dropped");
            metrics::counter!("orders_events_dropped").increment(1);
            return;
        };

        let old_status = entry.status();
        entry.record_event(event.clone());
        // Unconditional overwrite: shipping and cancellation apply from any
        // current status, including each other.
        entry.set_status(target);
        let snapshot = entry.value().clone();
        drop(entry);

        metrics::counter!("orders_events_processed").increment(1);

        if old_status != target {
            self.notify_status_changed(&snapshot, old_status, target)
                .await;
        }
        self.notify_event_processed(event, &snapshot).await;
    }

    async fn notify_status_changed(
        &self,
        order: &Order,
        old_status: OrderStatus,
        new_status: OrderStatus,
    ) {
        metrics::counter!("orders_status_changes").increment(1);
        for observer in self.current_observers().await {
            if let Err(err) = observer
                .on_status_changed(order, old_status, new_status)
                .await
            {
                self.report_observer_failure(observer.name(), &err);
            }
        }
    }

    async fn notify_event_processed(&self, event: &Event, order: &Order) {
        for observer in self.current_observers().await {
            if let Err(err) = observer.on_event_processed(event, order).await {
                self.report_observer_failure(observer.name(), &err);
            }
        }
    }

    /// Snapshots the observer list so removal during a dispatch affects only
    /// future notifications.
    async fn current_observers(&self) -> Vec<Arc<dyn OrderObserver>> {
        self.observers.read().await.clone()
    }

    fn report_observer_failure(&self, name: &str, err: &crate::ObserverError) {
        tracing::error!(observer = name, %err, "observer failed, continuing with remaining observers");
        metrics::counter!("orders_observer_failures").increment(1);
    }
}
