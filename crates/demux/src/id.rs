// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Consumer identifiers

use crate::error::ParseConsumerIdError;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next id handed out. Shared by every demux in the process so ids never
/// collide across emitters.
static NEXT_CONSUMER_ID: AtomicU64 = AtomicU64::new(1);

const DISPLAY_PREFIX: &str = "consumer-";

/// Process-unique consumer identifier, assigned in creation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConsumerId(pub u64);

impl ConsumerId {
    /// Allocate a fresh id. Ids are never reused.
    pub fn allocate() -> Self {
        Self(NEXT_CONSUMER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConsumerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

/// Accepts both the bare number (`"42"`) and the display form (`"consumer-42"`)
impl FromStr for ConsumerId {
    type Err = ParseConsumerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix(DISPLAY_PREFIX).unwrap_or(digits);
        digits
            .parse::<u64>()
            .map(ConsumerId)
            .map_err(|source| ParseConsumerIdError {
                input: s.to_string(),
                source,
            })
    }
}

impl From<u64> for ConsumerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
