// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{DispatchError, ReportEntry, RunListener};

/// Listener that discards every event. Useful as the innermost element of a
/// decorator chain when only the forwarded notifications matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRunListener;

impl RunListener for NullRunListener {
    fn test_set_starting(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }

    fn test_set_completed(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }

    fn test_starting(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }

    fn test_succeeded(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }

    fn test_assumption_failure(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }

    fn test_error(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }

    fn test_failed(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }

    fn test_skipped(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        Ok(())
    }
}
