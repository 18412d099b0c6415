// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use test_dispatch_core::DispatchError;

const SOCKET_SCHEME: &str = "socket";

/// Validated address of the socket dispatcher.
///
/// Parsed once from a `socket://<host>:<port>` URI; any other scheme or a
/// structurally broken address fails here, before any network I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherEndpoint {
    host: String,
    port: u16,
}

impl DispatcherEndpoint {
    pub fn parse(uri: &str) -> Result<Self, DispatchError> {
        let (scheme, rest) = uri.split_once("://").ok_or_else(|| {
            DispatchError::MalformedEndpoint {
                uri: uri.to_string(),
                detail: "missing '://' scheme separator".to_string(),
            }
        })?;

        if scheme != SOCKET_SCHEME {
            return Err(DispatchError::UnsupportedScheme(uri.to_string()));
        }

        // Bracketed IPv6 literals lose their brackets here so the host is
        // connectable as-is; a broken literal fails now, not at the first
        // request.
        let (host, port) = if let Some(bracketed) = rest.strip_prefix('[') {
            let (host, after) =
                bracketed
                    .split_once(']')
                    .ok_or_else(|| DispatchError::MalformedEndpoint {
                        uri: uri.to_string(),
                        detail: "unclosed '[' in host".to_string(),
                    })?;
            host.parse::<std::net::Ipv6Addr>().map_err(|e| {
                DispatchError::MalformedEndpoint {
                    uri: uri.to_string(),
                    detail: format!("invalid IPv6 literal '{}': {}", host, e),
                }
            })?;
            let port = after
                .strip_prefix(':')
                .ok_or_else(|| DispatchError::MalformedEndpoint {
                    uri: uri.to_string(),
                    detail: "missing ':<port>'".to_string(),
                })?;
            (host, port)
        } else {
            rest.rsplit_once(':')
                .ok_or_else(|| DispatchError::MalformedEndpoint {
                    uri: uri.to_string(),
                    detail: "missing ':<port>'".to_string(),
                })?
        };

        if host.is_empty() {
            return Err(DispatchError::MalformedEndpoint {
                uri: uri.to_string(),
                detail: "empty host".to_string(),
            });
        }

        let port = port
            .parse::<u16>()
            .map_err(|e| DispatchError::MalformedEndpoint {
                uri: uri.to_string(),
                detail: format!("invalid port '{}': {}", port, e),
            })?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl std::fmt::Display for DispatcherEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.host.contains(':') {
            write!(f, "socket://[{}]:{}", self.host, self.port)
        } else {
            write!(f, "socket://{}:{}", self.host, self.port)
        }
    }
}
