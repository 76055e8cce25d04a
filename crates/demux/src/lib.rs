// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stream-demux: multicast stream demultiplexer
//!
//! This crate provides:
//! - `Demux` - per-stream fan-out to independent consumers
//! - `Consumer` - async pull handle with its own queue and backpressure count
//! - `Selector` - target all consumers, one stream, or one consumer id
//! - `DemuxConfig` - TOML-loadable tunables

mod config;
mod consumer;
mod demux;
mod error;
mod id;
mod registry;
mod selector;
mod stream;

pub use config::DemuxConfig;
pub use consumer::{Consumer, ConsumerStats};
pub use demux::Demux;
pub use error::{ConfigError, ParseConsumerIdError, TryNextError};
pub use id::ConsumerId;
pub use selector::Selector;
pub use stream::DemuxedStream;

use registry::Registry;
use std::sync::{Arc, Mutex, MutexGuard};

pub(crate) type SharedRegistry<T> = Arc<Mutex<Registry<T>>>;

/// Lock the registry, recovering from poisoning. Registry methods never
/// panic mid-update, so the state behind a poisoned lock is still coherent.
pub(crate) fn lock<T>(registry: &Mutex<Registry<T>>) -> MutexGuard<'_, Registry<T>> {
    registry.lock().unwrap_or_else(|e| e.into_inner())
}
