// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stream demultiplexer

use crate::config::DemuxConfig;
use crate::consumer::{Consumer, ConsumerStats};
use crate::id::ConsumerId;
use crate::registry::Registry;
use crate::selector::Selector;
use crate::stream::DemuxedStream;
use crate::SharedRegistry;
use std::sync::{Arc, Mutex};

/// Fans values written under a stream name out to every consumer attached
/// to that name.
///
/// Each consumer has its own queue, so a slow consumer never holds back a
/// fast one; its backlog shows up as backpressure instead. Values written to
/// a stream nobody listens to are dropped.
///
/// Cloning a `Demux` yields another handle onto the same streams.
pub struct Demux<T> {
    registry: SharedRegistry<T>,
}

impl<T> Demux<T> {
    pub fn new() -> Self {
        Self::with_config(DemuxConfig::default())
    }

    pub fn with_config(config: DemuxConfig) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new(config))),
        }
    }

    /// Attach a new consumer to `name`. It sees every value written after
    /// this call and nothing written before it.
    pub fn stream(&self, name: &str) -> Consumer<T> {
        Consumer::attach(Arc::clone(&self.registry), name)
    }

    /// Lazy handle on `name`; no consumer exists until one is created from it
    pub fn named(&self, name: impl Into<String>) -> DemuxedStream<T> {
        DemuxedStream::new(self.clone(), name.into())
    }

    /// Let the selected consumers drain what is already queued, then end
    pub fn close(&self, selector: impl Into<Selector>) {
        crate::lock(&self.registry).close(&selector.into());
    }

    pub fn close_all(&self) {
        self.close(Selector::All);
    }

    /// End the selected consumers now, discarding their backlog
    pub fn kill(&self, selector: impl Into<Selector>) {
        crate::lock(&self.registry).kill(&selector.into());
    }

    pub fn kill_all(&self) {
        self.kill(Selector::All);
    }

    /// Stats for the selected active consumers, ordered by id
    pub fn consumer_stats(&self, selector: impl Into<Selector>) -> Vec<ConsumerStats> {
        crate::lock(&self.registry).stats(&selector.into())
    }

    /// Stats for one consumer, `None` if it is not active
    pub fn consumer_stat(&self, id: ConsumerId) -> Option<ConsumerStats> {
        crate::lock(&self.registry).stat(id)
    }

    /// Active consumers, on one stream or overall
    pub fn consumer_count(&self, stream: Option<&str>) -> usize {
        crate::lock(&self.registry).count(stream)
    }

    /// Backlog of the slowest selected consumer
    pub fn backpressure(&self, selector: impl Into<Selector>) -> usize {
        crate::lock(&self.registry).backpressure(&selector.into())
    }

    pub fn has_consumer(&self, id: ConsumerId) -> bool {
        crate::lock(&self.registry).has_consumer(id)
    }

    pub fn has_stream_consumer(&self, stream: &str, id: ConsumerId) -> bool {
        crate::lock(&self.registry).has_stream_consumer(stream, id)
    }
}

impl<T: Clone> Demux<T> {
    /// Deliver `value` to every consumer attached to `name`, in attachment
    /// order. Returns the number of consumers it was queued for.
    pub fn write(&self, name: &str, value: T) -> usize {
        crate::lock(&self.registry).write(name, value)
    }
}

impl<T> Default for Demux<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Demux<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

#[cfg(test)]
#[path = "demux_tests.rs"]
mod tests;
