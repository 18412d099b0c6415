// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::RequestFields;

/// One test outcome as seen by a run listener.
///
/// Owned by the caller; the reporting decorators only read it. Which
/// lifecycle event the entry belongs to is conveyed by the listener method
/// it is passed to, not by the entry itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Name of the test set (e.g. the containing suite) the entry came from.
    pub source_name: String,
    /// Name of the individual test, or of the set for set-level events.
    pub name: String,
    /// Optional group the test belongs to.
    pub group: Option<String>,
    /// Optional human-readable detail (failure message, skip reason).
    pub message: Option<String>,
    /// Wall-clock duration of the test, when known.
    pub elapsed_millis: Option<u64>,
}

impl ReportEntry {
    pub fn new(source_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            name: name.into(),
            group: None,
            message: None,
            elapsed_millis: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_elapsed_millis(mut self, elapsed_millis: u64) -> Self {
        self.elapsed_millis = Some(elapsed_millis);
        self
    }
}

impl RequestFields for ReportEntry {
    fn request_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("sourceName", self.source_name.clone()),
            ("name", self.name.clone()),
        ];
        if let Some(group) = &self.group {
            fields.push(("group", group.clone()));
        }
        if let Some(message) = &self.message {
            fields.push(("message", message.clone()));
        }
        if let Some(elapsed) = self.elapsed_millis {
            fields.push(("elapsed", elapsed.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_mandatory_fields_in_order() {
        let entry = ReportEntry::new("MySuite", "my_test");
        let fields = entry.request_fields();
        assert_eq!(
            fields,
            vec![
                ("sourceName", "MySuite".to_string()),
                ("name", "my_test".to_string()),
            ]
        );
    }

    #[test]
    fn renders_optional_fields_when_present() {
        let entry = ReportEntry::new("MySuite", "my_test")
            .with_group("integration")
            .with_message("assertion failed")
            .with_elapsed_millis(42);
        let fields = entry.request_fields();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[2], ("group", "integration".to_string()));
        assert_eq!(fields[3], ("message", "assertion failed".to_string()));
        assert_eq!(fields[4], ("elapsed", "42".to_string()));
    }
}
