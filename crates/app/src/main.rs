//! Demo entry point: wires the event source, processor, and observers.

mod config;

use std::sync::Arc;

use processing::{AlertObserver, EventProcessor, LoggerObserver};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::Config;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let processor = EventProcessor::new();
    processor.add_observer(Arc::new(LoggerObserver::new())).await;
    processor.add_observer(Arc::new(AlertObserver::new())).await;

    let events = match event_source::read_events_from_file(&config.events_file).await {
        Ok(events) => {
            tracing::info!(
                file = %config.events_file,
                count = events.len(),
                "processing events from file"
            );
            events
        }
        Err(err) => {
            tracing::warn!(
                file = %config.events_file,
                %err,
                "could not read event file, using sample events"
            );
            event_source::sample_events()
        }
    };

    processor.process_events(events).await;

    tracing::info!(orders = processor.order_count(), "final system state");
    for order in processor.get_all_orders() {
        tracing::info!(
            %order,
            history_len = order.event_history().len(),
            "order summary"
        );
    }
}
