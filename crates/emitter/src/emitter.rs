// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named-event emitter over a stream demultiplexer

use std::future::Future;
use stream_demux::{
    Consumer, ConsumerId, ConsumerStats, Demux, DemuxConfig, DemuxedStream, Selector,
};

/// Emits values under event names to any number of listeners
///
/// Every listener on an event receives every value emitted after it started
/// listening, at its own pace. Listener backlogs are visible through
/// [`listener_backpressure`](Self::listener_backpressure) so a producer can
/// slow down for its slowest listener.
///
/// Close and kill operations exist in two spellings: selector-based
/// (`close_listeners`, `kill_listeners`) and one method per target
/// (`close_listener`, `kill_all_listeners`, `kill_listener_consumer`, ...).
/// Both reach the same demux operation.
pub struct StreamEmitter<T> {
    listener_demux: Demux<T>,
}

impl<T> StreamEmitter<T> {
    pub fn new() -> Self {
        Self::with_config(DemuxConfig::default())
    }

    pub fn with_config(config: DemuxConfig) -> Self {
        Self {
            listener_demux: Demux::with_config(config),
        }
    }

    /// Start listening for `event_name`
    pub fn listen(&self, event_name: &str) -> Consumer<T> {
        self.listener_demux.stream(event_name)
    }

    /// Named handle that attaches listeners on demand
    pub fn listen_stream(&self, event_name: &str) -> DemuxedStream<T> {
        self.listener_demux.named(event_name)
    }

    /// Wait for the next value emitted under `event_name`.
    ///
    /// The listener attaches when `once` is called, so values emitted before
    /// the returned future is first polled are still seen.
    pub fn once(&self, event_name: &str) -> impl Future<Output = Option<T>> {
        self.listen(event_name).once()
    }

    /// Gracefully end the selected listeners once their backlog is consumed
    pub fn close_listeners(&self, selector: impl Into<Selector>) {
        self.listener_demux.close(selector);
    }

    pub fn close_listener(&self, event_name: &str) {
        self.listener_demux.close(event_name);
    }

    pub fn close_all_listeners(&self) {
        self.listener_demux.close_all();
    }

    /// Same as [`close_listener`](Self::close_listener)
    pub fn remove_listener(&self, event_name: &str) {
        self.close_listener(event_name);
    }

    /// End the selected listeners immediately, dropping their backlog
    pub fn kill_listeners(&self, selector: impl Into<Selector>) {
        self.listener_demux.kill(selector);
    }

    pub fn kill_listener(&self, event_name: &str) {
        self.listener_demux.kill(event_name);
    }

    pub fn kill_all_listeners(&self) {
        self.listener_demux.kill_all();
    }

    pub fn kill_listener_consumer(&self, consumer_id: ConsumerId) {
        self.listener_demux.kill(consumer_id);
    }

    pub fn listener_consumer_stats(&self, selector: impl Into<Selector>) -> Vec<ConsumerStats> {
        self.listener_demux.consumer_stats(selector)
    }

    pub fn listener_consumer_stat(&self, consumer_id: ConsumerId) -> Option<ConsumerStats> {
        self.listener_demux.consumer_stat(consumer_id)
    }

    pub fn listener_consumer_count(&self, event_name: Option<&str>) -> usize {
        self.listener_demux.consumer_count(event_name)
    }

    /// Largest backlog among the selected listeners
    pub fn listener_backpressure(&self, selector: impl Into<Selector>) -> usize {
        self.listener_demux.backpressure(selector)
    }

    pub fn has_listener_consumer(&self, consumer_id: ConsumerId) -> bool {
        self.listener_demux.has_consumer(consumer_id)
    }

    pub fn has_listener_consumer_on(&self, event_name: &str, consumer_id: ConsumerId) -> bool {
        self.listener_demux.has_stream_consumer(event_name, consumer_id)
    }
}

impl<T: Clone> StreamEmitter<T> {
    /// Deliver `value` to every current listener of `event_name`.
    /// Dropped if nobody is listening.
    pub fn emit(&self, event_name: &str, value: T) {
        let delivered = self.listener_demux.write(event_name, value);
        if delivered == 0 {
            tracing::trace!(event = event_name, "emitted with no listeners");
        }
    }
}

impl<T> Default for StreamEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StreamEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            listener_demux: self.listener_demux.clone(),
        }
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
