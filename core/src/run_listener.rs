// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchError, ReportEntry};

/// Receiver of test lifecycle events for one reporting channel.
///
/// Implementations that forward events over the network return the
/// transport failure instead of swallowing it; a silently dropped outcome
/// would leave the dispatcher with a stale view of the run.
pub trait RunListener: Send + Sync {
    fn test_set_starting(&self, report: &ReportEntry) -> Result<(), DispatchError>;

    fn test_set_completed(&self, report: &ReportEntry) -> Result<(), DispatchError>;

    fn test_starting(&self, report: &ReportEntry) -> Result<(), DispatchError>;

    fn test_succeeded(&self, report: &ReportEntry) -> Result<(), DispatchError>;

    fn test_assumption_failure(&self, report: &ReportEntry) -> Result<(), DispatchError>;

    fn test_error(&self, report: &ReportEntry) -> Result<(), DispatchError>;

    fn test_failed(&self, report: &ReportEntry) -> Result<(), DispatchError>;

    fn test_skipped(&self, report: &ReportEntry) -> Result<(), DispatchError>;
}

impl<L: RunListener + ?Sized> RunListener for Box<L> {
    fn test_set_starting(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_set_starting(report)
    }

    fn test_set_completed(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_set_completed(report)
    }

    fn test_starting(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_starting(report)
    }

    fn test_succeeded(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_succeeded(report)
    }

    fn test_assumption_failure(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_assumption_failure(report)
    }

    fn test_error(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_error(report)
    }

    fn test_failed(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_failed(report)
    }

    fn test_skipped(&self, report: &ReportEntry) -> Result<(), DispatchError> {
        (**self).test_skipped(report)
    }
}
