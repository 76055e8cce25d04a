// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Consumer selection for close, kill, and stats operations

use crate::id::ConsumerId;

/// Which consumers an operation applies to
///
/// Built with `From` so call sites read naturally:
/// `demux.kill("bar")`, `demux.kill(id)`, `demux.kill(Selector::All)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Every active consumer on every stream
    #[default]
    All,
    /// Every active consumer attached to the named stream
    Stream(String),
    /// Exactly one consumer, wherever it is attached
    Consumer(ConsumerId),
}

impl Selector {
    pub fn stream(name: impl Into<String>) -> Self {
        Self::Stream(name.into())
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Self::Stream(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Self::Stream(name)
    }
}

impl From<&String> for Selector {
    fn from(name: &String) -> Self {
        Self::Stream(name.clone())
    }
}

impl From<ConsumerId> for Selector {
    fn from(id: ConsumerId) -> Self {
        Self::Consumer(id)
    }
}

/// `None` selects everything
impl From<Option<&str>> for Selector {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Self::All, Self::from)
    }
}
