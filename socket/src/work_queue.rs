// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::engine::SocketCommunicationEngine;
use crate::request::RequestType;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_dispatch_core::{DispatchError, ThreadTimer, Timer, WorkResolver};
use tracing::debug;

const JUST_WAIT: &str = "WAIT";

struct QueueState<I> {
    items: Vec<I>,
    finished: bool,
}

/// Lazy, append-only, thread-safe sequence of work items pulled from the
/// dispatcher one `GetNext` at a time.
///
/// The queue grows monotonically until the dispatcher's termination token
/// is observed, after which it never grows again. All mutation happens
/// under one mutex, so per consumer there is never more than one `GetNext`
/// in flight and the dispatcher sees a strictly sequential pull order.
pub struct LazySocketWorkQueue<R: WorkResolver, T: Timer = ThreadTimer> {
    engine: Arc<SocketCommunicationEngine<T>>,
    resolver: R,
    wait_step: Duration,
    state: Mutex<QueueState<R::Item>>,
}

impl<R: WorkResolver, T: Timer> LazySocketWorkQueue<R, T> {
    pub fn new(
        engine: Arc<SocketCommunicationEngine<T>>,
        resolver: R,
        wait_step: Duration,
    ) -> Self {
        Self {
            engine,
            resolver,
            wait_step,
            state: Mutex::new(QueueState {
                items: Vec::new(),
                finished: false,
            }),
        }
    }

    /// Whether an item exists at `index`, pulling at most one more response
    /// from the dispatcher to find out.
    ///
    /// Blocks for the full request round trip, plus the wait-step backoff
    /// when the dispatcher answers with the wait token. A `false` return
    /// only means "not yet" unless [`is_finished`](Self::is_finished) also
    /// reports true.
    pub fn has_next(&self, index: usize) -> Result<bool, DispatchError> {
        let mut state = self.state.lock().unwrap();

        // Indices already resolved never trigger another dispatcher pull,
        // no matter how many cursors re-visit them.
        if state.items.len() > index {
            return Ok(true);
        }
        if state.finished {
            return Ok(false);
        }

        let response = self.engine.send_request(RequestType::GetNext)?;
        let token = response.trim();
        if is_termination(token) {
            debug!("dispatcher has nothing more to process");
            state.finished = true;
        } else if token == JUST_WAIT {
            debug!(wait_step = ?self.wait_step, "dispatcher asked to wait, backing off");
            self.engine
                .timer()
                .sleep(self.wait_step)
                .map_err(|_| DispatchError::Interrupted)?;
        } else {
            state.items.push(self.resolver.resolve(token));
        }

        Ok(state.items.len() > index)
    }

    /// The item at `index`. Callers must have established its presence via
    /// [`has_next`](Self::has_next); reading an unresolved index is a
    /// contract violation and panics.
    pub fn item(&self, index: usize) -> R::Item {
        let state = self.state.lock().unwrap();
        state.items[index].clone()
    }

    /// True once the dispatcher's termination token has been observed.
    pub fn is_finished(&self) -> bool {
        self.state.lock().unwrap().finished
    }

    /// The sequence terminates only when the dispatcher says so; callers
    /// must not try to materialize it ahead of consumption.
    pub fn allows_eager_reading(&self) -> bool {
        false
    }

    /// A pull cursor over the shared log, starting at the first item.
    /// Cursors on one queue share the underlying items and lock.
    pub fn cursor(&self) -> WorkCursor<'_, R, T> {
        WorkCursor { queue: self, pos: 0 }
    }
}

fn is_termination(token: &str) -> bool {
    token.is_empty() || token.eq_ignore_ascii_case("null")
}

/// Explicit pull cursor over a [`LazySocketWorkQueue`].
///
/// Advancing may block (dispatcher round trip, wait backoff) and may fail
/// with the engine's fatal errors; `Ok(None)` means the dispatcher will
/// never issue further work.
pub struct WorkCursor<'a, R: WorkResolver, T: Timer> {
    queue: &'a LazySocketWorkQueue<R, T>,
    pos: usize,
}

impl<R: WorkResolver, T: Timer> WorkCursor<'_, R, T> {
    pub fn advance(&mut self) -> Result<Option<R::Item>, DispatchError> {
        loop {
            if self.queue.has_next(self.pos)? {
                let item = self.queue.item(self.pos);
                self.pos += 1;
                return Ok(Some(item));
            }
            if self.queue.is_finished() {
                return Ok(None);
            }
            // Wait token round: the backoff already happened inside
            // has_next, poll again.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_termination_tokens() {
        assert!(is_termination(""));
        assert!(is_termination("null"));
        assert!(is_termination("NULL"));
        assert!(is_termination("Null"));
        assert!(!is_termination("WAIT"));
        assert!(!is_termination("com.example.MyTest"));
    }
}
