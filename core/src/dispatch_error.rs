// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors surfaced by the dispatcher communication core.
///
/// All variants are fatal for the worker that observes them: once
/// communication with the dispatcher is broken or interrupted, its view of
/// the work distribution can no longer be trusted, so callers must stop
/// pulling work and reporting results instead of resuming.
#[derive(Debug)]
pub enum DispatchError {
    /// The dispatcher endpoint used a scheme other than `socket://`.
    UnsupportedScheme(String),

    /// The dispatcher endpoint was structurally invalid (missing host,
    /// missing or unparsable port).
    MalformedEndpoint { uri: String, detail: String },

    /// The retry budget was exhausted without a single full exchange.
    BrokenCommunication {
        attempts: u32,
        source: std::io::Error,
    },

    /// Cancellation was observed while pausing between retries or while
    /// backing off on a wait token.
    Interrupted,

    /// Neither the primary lookup nor the OS command produced a hostname.
    HostnameResolution { primary: String, fallback: String },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::UnsupportedScheme(uri) => {
                write!(f, "No support for dispatcher endpoint '{}': expected a socket:// address", uri)
            }
            DispatchError::MalformedEndpoint { uri, detail } => {
                write!(f, "Malformed dispatcher endpoint '{}': {}", uri, detail)
            }
            DispatchError::BrokenCommunication { attempts, source } => {
                write!(
                    f,
                    "Broken communication with dispatcher after {} attempts: {}",
                    attempts, source
                )
            }
            DispatchError::Interrupted => {
                write!(f, "Interrupted while waiting to contact the dispatcher")
            }
            DispatchError::HostnameResolution { primary, fallback } => {
                write!(
                    f,
                    "Cannot resolve local hostname: primary lookup failed ({}), 'hostname' command failed ({})",
                    primary, fallback
                )
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::BrokenCommunication { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_communication_reports_attempts_and_cause() {
        let err = DispatchError::BrokenCommunication {
            attempts: 3,
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };
        let text = err.to_string();
        assert!(text.contains("3 attempts"));
        assert!(text.contains("refused"));
    }

    #[test]
    fn hostname_resolution_carries_both_causes() {
        let err = DispatchError::HostnameResolution {
            primary: "HOSTNAME not set".to_string(),
            fallback: "command not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("HOSTNAME not set"));
        assert!(text.contains("command not found"));
    }
}
