// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::engine::SocketCommunicationEngine;
use crate::request::{Payload, RequestType};
use std::sync::Arc;
use test_dispatch_core::{DispatchError, ReportEntry, RunListener, ThreadTimer, Timer};

/// Decorator that pushes a `TestResult` notification to the dispatcher for
/// every terminal per-test event.
///
/// Each event is forwarded to the wrapped listener first; the notification
/// itself is fire-and-forget (the response body is ignored) but a transport
/// failure still propagates, since a silently dropped outcome would corrupt
/// the dispatcher's view of progress. Starting events and set-level events
/// produce no notification here.
pub struct TestResultSocketDecorator<L: RunListener, T: Timer = ThreadTimer> {
    engine: Arc<SocketCommunicationEngine<T>>,
    inner: L,
}

impl<L: RunListener, T: Timer> TestResultSocketDecorator<L, T> {
    pub fn new(engine: Arc<SocketCommunicationEngine<T>>, inner: L) -> Self {
        Self { engine, inner }
    }

    fn notify(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.engine
            .send_request_with(RequestType::TestResult, Payload::from_fields(report))?;
        Ok(())
    }
}

impl<L: RunListener, T: Timer> RunListener for TestResultSocketDecorator<L, T> {
    fn test_set_starting(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_set_starting(report)
    }

    fn test_set_completed(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_set_completed(report)
    }

    fn test_starting(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_starting(report)
    }

    fn test_succeeded(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_succeeded(report)?;
        self.notify(report)
    }

    fn test_assumption_failure(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_assumption_failure(report)?;
        self.notify(report)
    }

    fn test_error(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_error(report)?;
        self.notify(report)
    }

    fn test_failed(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_failed(report)?;
        self.notify(report)
    }

    fn test_skipped(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_skipped(report)?;
        self.notify(report)
    }
}
