// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::endpoint::DispatcherEndpoint;
use crate::hostname;
use crate::request::{self, Payload, RequestType};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::OnceLock;
use test_dispatch_core::{DispatchError, ThreadTimer, Timer};
use tracing::{debug, warn};

/// Retry behaviour for one engine: how many extra connection attempts a
/// single request gets and how long to pause between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub pause_between_retries: std::time::Duration,
    pub debug: bool,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, pause_between_retries: std::time::Duration) -> Self {
        Self {
            max_retries,
            pause_between_retries,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Synchronous request/response engine for one dispatcher endpoint.
///
/// Every call opens a fresh connection, writes one JSON line, reads one
/// response line and closes the socket; there is no connection reuse.
/// Transient I/O failures are retried per the [`RetryPolicy`]; exhausting
/// the budget is fatal for the calling worker.
pub struct SocketCommunicationEngine<T: Timer = ThreadTimer> {
    endpoint: DispatcherEndpoint,
    policy: RetryPolicy,
    timer: T,
    hostname: OnceLock<Result<String, (String, String)>>,
}

impl<T: Timer> SocketCommunicationEngine<T> {
    /// Validates the endpoint eagerly; a bad scheme or malformed address is
    /// a configuration error raised here, never deferred to the first call.
    pub fn new(uri: &str, policy: RetryPolicy, timer: T) -> Result<Self, DispatchError> {
        Ok(Self {
            endpoint: DispatcherEndpoint::parse(uri)?,
            policy,
            timer,
            hostname: OnceLock::new(),
        })
    }

    pub fn endpoint(&self) -> &DispatcherEndpoint {
        &self.endpoint
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Payload-free exchange; used for `GetNext` pulls.
    pub fn send_request(&self, request_type: RequestType) -> Result<String, DispatchError> {
        self.exchange(request_type, None)
    }

    /// Exchange carrying a payload; used for outcome notifications. The
    /// dispatcher's response line is returned but notification callers
    /// ignore it.
    pub fn send_request_with(
        &self,
        request_type: RequestType,
        payload: Payload,
    ) -> Result<String, DispatchError> {
        self.exchange(request_type, Some(payload))
    }

    fn exchange(
        &self,
        request_type: RequestType,
        payload: Option<Payload>,
    ) -> Result<String, DispatchError> {
        let line = request::encode_line(self.local_hostname()?, request_type, payload.as_ref());

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            if self.policy.debug {
                debug!(attempt = attempts, request = %request_type, "sending dispatcher request");
            }
            match self.try_request(&line) {
                Ok(response) => {
                    if self.policy.debug {
                        debug!(
                            attempt = attempts,
                            request = %request_type,
                            response = %response,
                            "dispatcher responded"
                        );
                    }
                    return Ok(response);
                }
                Err(source) => {
                    if attempts > self.policy.max_retries {
                        return Err(DispatchError::BrokenCommunication { attempts, source });
                    }
                    warn!(
                        attempt = attempts,
                        request = %request_type,
                        error = %source,
                        "error reaching dispatcher, retrying after pause"
                    );
                    self.timer
                        .sleep(self.policy.pause_between_retries)
                        .map_err(|_| DispatchError::Interrupted)?;
                }
            }
        }
    }

    /// One scoped socket acquisition: connect, write, flush, read one line,
    /// half-close the read side. The socket itself closes on every exit
    /// path when the stream drops.
    fn try_request(&self, line: &str) -> std::io::Result<String> {
        let stream = TcpStream::connect((self.endpoint.host(), self.endpoint.port()))?;

        let mut writer = BufWriter::new(&stream);
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        drop(writer);

        let mut response = String::new();
        let mut reader = BufReader::new(&stream);
        reader.read_line(&mut response)?;

        // The response is already in hand; a failed half-close must not be
        // reported as a transport error, or the request would be retried
        // and the dispatcher would hand out duplicate work.
        let _ = stream.shutdown(Shutdown::Read);

        Ok(response.trim_end_matches(['\r', '\n']).to_string())
    }

    fn local_hostname(&self) -> Result<&str, DispatchError> {
        match self.hostname.get_or_init(hostname::resolve) {
            Ok(name) => Ok(name.as_str()),
            Err((primary, fallback)) => Err(DispatchError::HostnameResolution {
                primary: primary.clone(),
                fallback: fallback.clone(),
            }),
        }
    }
}
