//! Domain layer for the order processing system.
//!
//! This crate provides the core domain types:
//! - The closed set of order lifecycle events
//! - The mutable [`Order`] entity with its append-only event history
//! - The [`OrderStatus`] state machine

mod events;
mod order;
mod status;

pub use events::{
    Event, EventPayload, OrderCancelledData, OrderCreatedData, PaymentReceivedData,
    ShippingScheduledData,
};
pub use order::{Order, OrderItem};
pub use status::OrderStatus;
