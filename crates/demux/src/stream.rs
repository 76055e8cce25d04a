// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named stream handles

use crate::consumer::Consumer;
use crate::demux::Demux;
use std::future::Future;

/// A stream name bound to a demux, with no consumer behind it yet
///
/// Creating the handle attaches nothing, so values written before
/// [`create_consumer`](Self::create_consumer) or [`once`](Self::once) are
/// not seen.
pub struct DemuxedStream<T> {
    demux: Demux<T>,
    name: String,
}

impl<T> DemuxedStream<T> {
    pub(crate) fn new(demux: Demux<T>, name: String) -> Self {
        Self { demux, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a fresh consumer to this stream
    pub fn create_consumer(&self) -> Consumer<T> {
        self.demux.stream(&self.name)
    }

    /// Wait for the next value written to this stream.
    ///
    /// The consumer attaches here, not on first poll. Resolves to `None` if
    /// the stream is closed or killed first.
    pub fn once(&self) -> impl Future<Output = Option<T>> {
        self.create_consumer().once()
    }
}

impl<T> Clone for DemuxedStream<T> {
    fn clone(&self) -> Self {
        Self {
            demux: self.demux.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> std::fmt::Debug for DemuxedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemuxedStream")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
