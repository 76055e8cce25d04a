//! Shared helpers for emitter specs

#![allow(dead_code, unused_imports)]

pub use stream_emitter::{Consumer, ConsumerId, ConsumerStats, Selector, StreamEmitter};

use std::time::Duration;
use tokio::task::JoinHandle;

/// Interval between emits in the timed scenarios
pub const TICK: Duration = Duration::from_millis(20);

/// Route emitter logs to the test output. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Drive `consumer` to completion on its own task, collecting every value.
pub fn collect<T: Send + 'static>(mut consumer: Consumer<T>) -> JoinHandle<Vec<T>> {
    tokio::spawn(async move {
        let mut values = Vec::new();
        while let Some(value) = consumer.next().await {
            values.push(value);
        }
        values
    })
}

/// Give spawned listener tasks a chance to run up to their next await.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

pub async fn tick() {
    tokio::time::sleep(TICK).await;
}

pub fn streams_of(stats: &[ConsumerStats]) -> Vec<&str> {
    stats.iter().map(|s| s.stream.as_str()).collect()
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
