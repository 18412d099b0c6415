// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;

/// Raised when cancellation is observed during a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl std::fmt::Display for Interrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pause interrupted by cancellation")
    }
}

impl std::error::Error for Interrupted {}

/// Delay strategy used between retries and for wait-token backoff.
///
/// Production code pauses the calling thread; tests substitute a recording
/// zero-delay implementation so the retry and backoff paths run instantly.
pub trait Timer: Send + Sync {
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted>;
}

impl<T: Timer + ?Sized> Timer for Arc<T> {
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        (**self).sleep(duration)
    }
}
