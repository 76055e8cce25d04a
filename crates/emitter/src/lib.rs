// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stream-emitter: named-event broadcast emitter
//!
//! Producers `emit` values under an event name; each `listen` call returns an
//! independent consumer that receives every later value for that name.
//!
//! ```no_run
//! use stream_emitter::{Selector, StreamEmitter};
//!
//! # async fn run() {
//! let emitter = StreamEmitter::new();
//! let mut consumer = emitter.listen("foo");
//!
//! emitter.emit("foo", "hello");
//! emitter.close_listeners("foo");
//!
//! while let Some(value) = consumer.next().await {
//!     println!("{value}");
//! }
//! assert_eq!(emitter.listener_backpressure(Selector::All), 0);
//! # }
//! ```

mod emitter;

pub use emitter::StreamEmitter;

// Re-export the demux types that appear in the emitter's signatures
pub use stream_demux::{
    ConfigError, Consumer, ConsumerId, ConsumerStats, DemuxConfig, DemuxedStream, Selector,
    TryNextError,
};
