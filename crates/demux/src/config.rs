// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demultiplexer configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! backpressure_warn_threshold = 1000
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Tunables for a [`Demux`](crate::Demux)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemuxConfig {
    /// Backlog size above which a consumer is reported as lagging.
    /// Reported once per excursion; `None` disables the report.
    pub backpressure_warn_threshold: Option<usize>,
}

impl DemuxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lag warning threshold
    pub fn with_backpressure_warn_threshold(mut self, threshold: usize) -> Self {
        self.backpressure_warn_threshold = Some(threshold);
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backpressure_warn_threshold == Some(0) {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
