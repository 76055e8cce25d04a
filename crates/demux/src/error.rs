// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the demultiplexer

use std::path::PathBuf;
use thiserror::Error;

/// Text that does not name a consumer id
#[derive(Debug, Error)]
#[error("invalid consumer id {input:?}: {source}")]
pub struct ParseConsumerIdError {
    pub input: String,
    #[source]
    pub source: std::num::ParseIntError,
}

/// Errors loading a [`DemuxConfig`](crate::DemuxConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("backpressure_warn_threshold must be greater than zero")]
    ZeroThreshold,
}

/// Why a non-blocking pull returned no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryNextError {
    /// Nothing queued yet; the consumer is still active
    #[error("no value queued")]
    Empty,
    /// The consumer was closed, killed, or drained after close
    #[error("consumer has ended")]
    Ended,
}
