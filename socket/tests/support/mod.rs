// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(dead_code)]

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use test_dispatch_core::{
    timer::{Interrupted, Timer},
    DispatchError, ReportEntry, RunListener,
};

/// Loopback dispatcher that serves a fixed script of response lines, one
/// connection per response, and records every request line it receives.
pub struct ScriptedDispatcher {
    endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl ScriptedDispatcher {
    pub fn start(responses: &[&str]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind scripted dispatcher");
        let endpoint = format!(
            "socket://127.0.0.1:{}",
            listener.local_addr().expect("local addr").port()
        );
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        let script: Vec<String> = responses.iter().map(|r| r.to_string()).collect();

        let handle = std::thread::spawn(move || {
            for response in script {
                let (stream, _) = listener.accept().expect("accept");
                let mut line = String::new();
                BufReader::new(&stream)
                    .read_line(&mut line)
                    .expect("read request line");
                log.lock().unwrap().push(line.trim_end().to_string());

                let mut writer = BufWriter::new(&stream);
                writer.write_all(response.as_bytes()).expect("write response");
                writer.write_all(b"\n").expect("write newline");
                writer.flush().expect("flush response");
            }
        });

        Self {
            endpoint,
            requests,
            handle,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Waits for the whole script to be consumed and returns the recorded
    /// request lines in arrival order.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("dispatcher thread panicked");
        let requests = self.requests.lock().unwrap();
        requests.clone()
    }
}

/// Zero-delay [`Timer`] that records each requested pause and can run a
/// hook keyed by the pause ordinal (1-based).
pub struct RecordingTimer {
    sleeps: Mutex<Vec<Duration>>,
    on_sleep: Option<Box<dyn Fn(usize) + Send + Sync>>,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self {
            sleeps: Mutex::new(Vec::new()),
            on_sleep: None,
        }
    }

    pub fn with_hook(hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        Self {
            sleeps: Mutex::new(Vec::new()),
            on_sleep: Some(Box::new(hook)),
        }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Timer for RecordingTimer {
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        let ordinal = {
            let mut sleeps = self.sleeps.lock().unwrap();
            sleeps.push(duration);
            sleeps.len()
        };
        if let Some(hook) = &self.on_sleep {
            hook(ordinal);
        }
        Ok(())
    }
}

/// Listener that records which lifecycle method was called, in order.
#[derive(Clone)]
pub struct RecordingListener {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), DispatchError> {
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl RunListener for RecordingListener {
    fn test_set_starting(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_set_starting")
    }

    fn test_set_completed(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_set_completed")
    }

    fn test_starting(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_starting")
    }

    fn test_succeeded(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_succeeded")
    }

    fn test_assumption_failure(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_assumption_failure")
    }

    fn test_error(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_error")
    }

    fn test_failed(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_failed")
    }

    fn test_skipped(&self, _report: &ReportEntry) -> Result<(), DispatchError> {
        self.record("test_skipped")
    }
}

/// Resolver that keeps the dispatcher-issued name as the work item.
pub struct NameResolver;

impl test_dispatch_core::WorkResolver for NameResolver {
    type Item = String;

    fn resolve(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Parses a recorded request line back into JSON for assertions.
pub fn parse_request(line: &str) -> serde_json::Value {
    serde_json::from_str(line).expect("request line is valid JSON")
}
