// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::{Interrupted, Timer};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// [`Timer`] that pauses the calling thread.
///
/// Cancellation is coarse: the token is checked before and after the pause,
/// not during it, so a cancelled worker wakes at the end of the current
/// interval at the latest.
#[derive(Debug, Clone)]
pub struct ThreadTimer {
    token: CancellationToken,
}

impl ThreadTimer {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Default for ThreadTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for ThreadTimer {
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        if self.token.is_cancelled() {
            return Err(Interrupted);
        }
        std::thread::sleep(duration);
        if self.token.is_cancelled() {
            return Err(Interrupted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleeps_for_roughly_the_requested_duration() {
        let timer = ThreadTimer::new();
        let start = std::time::Instant::now();
        timer.sleep(Duration::from_millis(20)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn cancelled_token_interrupts_before_sleeping() {
        let timer = ThreadTimer::new();
        timer.cancellation_token().cancel();
        let start = std::time::Instant::now();
        assert_eq!(timer.sleep(Duration::from_secs(30)), Err(Interrupted));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
