// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::engine::SocketCommunicationEngine;
use crate::request::{Payload, RequestType};
use std::sync::Arc;
use test_dispatch_core::{DispatchError, ReportEntry, RunListener, ThreadTimer, Timer};

/// Decorator that pushes one `TestSetResults` notification to the
/// dispatcher when a test set completes. All other events are forwarded to
/// the wrapped listener untouched.
pub struct TestSetResultSocketDecorator<L: RunListener, T: Timer = ThreadTimer> {
    engine: Arc<SocketCommunicationEngine<T>>,
    inner: L,
}

impl<L: RunListener, T: Timer> TestSetResultSocketDecorator<L, T> {
    pub fn new(engine: Arc<SocketCommunicationEngine<T>>, inner: L) -> Self {
        Self { engine, inner }
    }
}

impl<L: RunListener, T: Timer> RunListener for TestSetResultSocketDecorator<L, T> {
    fn test_set_starting(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_set_starting(report)
    }

    fn test_set_completed(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_set_completed(report)?;
        self.engine
            .send_request_with(RequestType::TestSetResults, Payload::from_fields(report))?;
        Ok(())
    }

    fn test_starting(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_starting(report)
    }

    fn test_succeeded(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_succeeded(report)
    }

    fn test_assumption_failure(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_assumption_failure(report)
    }

    fn test_error(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_error(report)
    }

    fn test_failed(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_failed(report)
    }

    fn test_skipped(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        self.inner.test_skipped(report)
    }
}
