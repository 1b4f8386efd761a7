//! Built-in observers.

mod alert;
mod logger;

pub use alert::AlertObserver;
pub use logger::LoggerObserver;
