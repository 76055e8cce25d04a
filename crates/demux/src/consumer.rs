// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Consumer handles
//!
//! A [`Consumer`] is one subscriber's cursor over a stream. Pulling from it
//! suspends until a value is written, the stream is closed and drained, or
//! the consumer is killed. Dropping the handle detaches it.

use crate::error::TryNextError;
use crate::id::ConsumerId;
use crate::registry::{EndReason, Pull, Registry};
use crate::SharedRegistry;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Notify;

/// Point-in-time view of one active consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerStats {
    pub id: ConsumerId,
    pub stream: String,
    /// Values enqueued for this consumer that it has not pulled yet
    pub backpressure: usize,
}

/// Receiving end of one stream subscription
pub struct Consumer<T> {
    id: ConsumerId,
    stream: String,
    registry: SharedRegistry<T>,
    notify: Arc<Notify>,
}

impl<T> Consumer<T> {
    pub(crate) fn attach(registry: SharedRegistry<T>, stream: &str) -> Self {
        let (id, notify) = crate::lock(&registry).attach(stream);
        Self {
            id,
            stream: stream.to_string(),
            registry,
            notify,
        }
    }

    pub fn id(&self) -> ConsumerId {
        self.id
    }

    /// Name of the stream this consumer is bound to
    pub fn stream_name(&self) -> &str {
        &self.stream
    }

    /// Wait for the next value.
    ///
    /// Returns `None` once the consumer has ended: its stream was closed and
    /// the backlog is drained, or it was killed (backlog discarded).
    pub async fn next(&mut self) -> Option<T> {
        loop {
            let pulled = self.registry().pull(self.id);
            match pulled {
                Pull::Value(value) => return Some(value),
                Pull::Ended => return None,
                Pull::Empty => self.notify.notified().await,
            }
        }
    }

    /// Take a queued value without waiting
    pub fn try_next(&mut self) -> Result<T, TryNextError> {
        let pulled = self.registry().pull(self.id);
        match pulled {
            Pull::Value(value) => Ok(value),
            Pull::Empty => Err(TryNextError::Empty),
            Pull::Ended => Err(TryNextError::Ended),
        }
    }

    /// Wait for exactly one value, then detach.
    pub async fn once(mut self) -> Option<T> {
        self.next().await
    }

    /// Values waiting for this consumer; 0 once it has ended
    pub fn backpressure(&self) -> usize {
        self.stats().map_or(0, |stats| stats.backpressure)
    }

    /// `None` once the consumer has ended
    pub fn stats(&self) -> Option<ConsumerStats> {
        self.registry().stat(self.id)
    }

    pub fn is_ended(&self) -> bool {
        !self.registry().has_consumer(self.id)
    }

    fn registry(&self) -> std::sync::MutexGuard<'_, Registry<T>> {
        crate::lock(&self.registry)
    }
}

impl<T> Drop for Consumer<T> {
    fn drop(&mut self) {
        crate::lock(&self.registry).detach(self.id, EndReason::Dropped);
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("id", &self.id)
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "consumer_tests.rs"]
mod tests;
