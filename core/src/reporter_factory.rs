// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::RunListener;

/// Correlation identifier for one reporting channel.
///
/// Ids are allocated strictly increasing from 1, one per created listener,
/// so output from concurrently running workers can be demultiplexed
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(u32);

impl ChannelId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-run counts returned when a reporter factory is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: u32,
    pub errors: u32,
    pub failures: u32,
    pub skipped: u32,
}

impl RunSummary {
    pub fn new(completed: u32, errors: u32, failures: u32, skipped: u32) -> Self {
        Self {
            completed,
            errors,
            failures,
            skipped,
        }
    }
}

/// Allocates one reporting listener per concurrent worker.
///
/// Typically one listener is created per test set or thread; each carries
/// its own [`ChannelId`].
pub trait ReporterFactory {
    fn create_reporter(&self) -> Box<dyn RunListener>;

    /// Finishes the factory's session. The counts carried by the returned
    /// summary are a fixed sentinel; real aggregation of the per-channel
    /// results happens on the dispatcher side.
    fn close(&self) -> RunSummary;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_ids_order_by_value() {
        assert!(ChannelId::new(1) < ChannelId::new(2));
        assert_eq!(ChannelId::new(7).value(), 7);
        assert_eq!(ChannelId::new(7).to_string(), "7");
    }
}
