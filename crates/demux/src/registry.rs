// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue and cursor bookkeeping behind a [`Demux`](crate::Demux)
//!
//! The registry is the only place queue state changes. Every public
//! operation on the demux and on consumers takes the lock, calls exactly one
//! method here, and releases the lock before awaiting anything.

use crate::config::DemuxConfig;
use crate::consumer::ConsumerStats;
use crate::id::ConsumerId;
use crate::selector::Selector;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Notify;

/// Outcome of one pull attempt
#[derive(Debug)]
pub(crate) enum Pull<T> {
    Value(T),
    Empty,
    Ended,
}

/// Why a consumer left the registry
#[derive(Debug, Clone, Copy)]
pub(crate) enum EndReason {
    Closed,
    Drained,
    Killed,
    Dropped,
}

/// Per-consumer queue
struct Slot<T> {
    stream: String,
    queue: VecDeque<T>,
    /// Set by close: nothing more is enqueued and the slot ends once empty
    sealed: bool,
    /// Backlog is above the warn threshold and has been reported
    lagging: bool,
    notify: Arc<Notify>,
}

pub(crate) struct Registry<T> {
    config: DemuxConfig,
    /// Attached consumers per stream, in attachment order
    channels: HashMap<String, Vec<ConsumerId>>,
    slots: BTreeMap<ConsumerId, Slot<T>>,
}

impl<T> Registry<T> {
    pub(crate) fn new(config: DemuxConfig) -> Self {
        Self {
            config,
            channels: HashMap::new(),
            slots: BTreeMap::new(),
        }
    }

    pub(crate) fn attach(&mut self, stream: &str) -> (ConsumerId, Arc<Notify>) {
        let id = ConsumerId::allocate();
        let notify = Arc::new(Notify::new());

        self.slots.insert(
            id,
            Slot {
                stream: stream.to_string(),
                queue: VecDeque::new(),
                sealed: false,
                lagging: false,
                notify: Arc::clone(&notify),
            },
        );
        self.channels.entry(stream.to_string()).or_default().push(id);

        tracing::debug!(consumer_id = %id, stream, "consumer attached");
        (id, notify)
    }

    /// Enqueue `value` for every open consumer on `stream`. Returns how many
    /// consumers received it.
    pub(crate) fn write(&mut self, stream: &str, value: T) -> usize
    where
        T: Clone,
    {
        let Some(ids) = self.channels.get(stream) else {
            tracing::trace!(stream, "write dropped, no consumers");
            return 0;
        };

        let threshold = self.config.backpressure_warn_threshold;
        let mut delivered = 0;
        for id in ids {
            let Some(slot) = self.slots.get_mut(id) else {
                continue;
            };
            if slot.sealed {
                continue;
            }

            slot.queue.push_back(value.clone());
            delivered += 1;

            if let Some(threshold) = threshold {
                if !slot.lagging && slot.queue.len() > threshold {
                    slot.lagging = true;
                    tracing::warn!(
                        consumer_id = %id,
                        stream,
                        backpressure = slot.queue.len(),
                        threshold,
                        "consumer is falling behind"
                    );
                }
            }

            slot.notify.notify_one();
        }

        tracing::trace!(stream, delivered, "write");
        delivered
    }

    pub(crate) fn pull(&mut self, id: ConsumerId) -> Pull<T> {
        let threshold = self.config.backpressure_warn_threshold;
        let Some(slot) = self.slots.get_mut(&id) else {
            return Pull::Ended;
        };

        match slot.queue.pop_front() {
            Some(value) => {
                if slot.lagging && threshold.is_some_and(|t| slot.queue.len() <= t) {
                    slot.lagging = false;
                }
                if slot.sealed && slot.queue.is_empty() {
                    self.detach(id, EndReason::Drained);
                }
                Pull::Value(value)
            }
            None if slot.sealed => {
                self.detach(id, EndReason::Drained);
                Pull::Ended
            }
            None => Pull::Empty,
        }
    }

    /// Graceful end: idle consumers end now, the rest after draining
    pub(crate) fn close(&mut self, selector: &Selector) {
        for id in self.select(selector) {
            let Some(slot) = self.slots.get_mut(&id) else {
                continue;
            };
            if slot.queue.is_empty() {
                self.detach(id, EndReason::Closed);
            } else {
                tracing::debug!(
                    consumer_id = %id,
                    stream = %slot.stream,
                    backlog = slot.queue.len(),
                    "consumer closing, draining backlog"
                );
                slot.sealed = true;
            }
        }
    }

    /// Immediate end, backlog discarded
    pub(crate) fn kill(&mut self, selector: &Selector) {
        for id in self.select(selector) {
            self.detach(id, EndReason::Killed);
        }
    }

    /// Remove a consumer and wake it so a pending pull observes the end.
    /// Returns false if it had already ended.
    pub(crate) fn detach(&mut self, id: ConsumerId, reason: EndReason) -> bool {
        let Some(slot) = self.slots.remove(&id) else {
            return false;
        };

        if let Some(ids) = self.channels.get_mut(&slot.stream) {
            ids.retain(|attached| *attached != id);
            if ids.is_empty() {
                self.channels.remove(&slot.stream);
                tracing::debug!(stream = %slot.stream, "stream has no consumers left");
            }
        }

        tracing::debug!(
            consumer_id = %id,
            stream = %slot.stream,
            ?reason,
            discarded = slot.queue.len(),
            "consumer ended"
        );
        slot.notify.notify_one();
        true
    }

    pub(crate) fn stats(&self, selector: &Selector) -> Vec<ConsumerStats> {
        self.select(selector)
            .into_iter()
            .filter_map(|id| self.stat(id))
            .collect()
    }

    pub(crate) fn stat(&self, id: ConsumerId) -> Option<ConsumerStats> {
        self.slots.get(&id).map(|slot| ConsumerStats {
            id,
            stream: slot.stream.clone(),
            backpressure: slot.queue.len(),
        })
    }

    pub(crate) fn count(&self, stream: Option<&str>) -> usize {
        match stream {
            None => self.slots.len(),
            Some(name) => self.channels.get(name).map_or(0, Vec::len),
        }
    }

    /// Largest backlog among the selected consumers, 0 if none match
    pub(crate) fn backpressure(&self, selector: &Selector) -> usize {
        self.select(selector)
            .into_iter()
            .filter_map(|id| self.slots.get(&id))
            .map(|slot| slot.queue.len())
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn has_consumer(&self, id: ConsumerId) -> bool {
        self.slots.contains_key(&id)
    }

    pub(crate) fn has_stream_consumer(&self, stream: &str, id: ConsumerId) -> bool {
        self.channels
            .get(stream)
            .is_some_and(|ids| ids.contains(&id))
    }

    fn select(&self, selector: &Selector) -> Vec<ConsumerId> {
        match selector {
            Selector::All => self.slots.keys().copied().collect(),
            Selector::Stream(name) => self.channels.get(name).cloned().unwrap_or_default(),
            Selector::Consumer(id) if self.slots.contains_key(id) => vec![*id],
            Selector::Consumer(_) => Vec::new(),
        }
    }
}
