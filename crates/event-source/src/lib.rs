//! Event source collaborator for the order processing system.
//!
//! Decodes line-delimited JSON into typed [`domain::Event`] values and
//! provides the sample-data generator used by the demo binary. Malformed
//! records are dropped here with a diagnostic; the processing core only ever
//! sees well-formed events.

mod error;
mod reader;
mod sample;

pub use error::SourceError;
pub use reader::{parse_event, read_events_from_file};
pub use sample::sample_events;
