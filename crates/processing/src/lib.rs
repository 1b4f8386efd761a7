//! Event processing engine for the order system.
//!
//! This crate provides:
//! - [`EventProcessor`]: applies lifecycle events to orders via the
//!   status-transition rules and notifies registered observers
//! - [`OrderObserver`]: the capability trait external listeners implement
//! - Built-in observers: [`LoggerObserver`] and [`AlertObserver`]

mod error;
mod observer;
mod observers;
mod processor;

pub use error::ObserverError;
pub use observer::OrderObserver;
pub use observers::{AlertObserver, LoggerObserver};
pub use processor::EventProcessor;
