// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::process::Command;
use test_dispatch_core::DispatchError;

/// Best-effort resolution of the local machine name used to tag requests.
///
/// The `gethostname` syscall first (environment lookup on non-Unix
/// targets), then the OS `hostname` command. Both failing is fatal and
/// carries both causes for diagnosis.
pub fn resolve_hostname() -> Result<String, DispatchError> {
    resolve().map_err(|(primary, fallback)| DispatchError::HostnameResolution { primary, fallback })
}

/// As [`resolve_hostname`], but keeps the two causes separate so the engine
/// can cache the failed outcome and re-raise it on every use.
pub(crate) fn resolve() -> Result<String, (String, String)> {
    let primary_cause = match hostname_primary() {
        Ok(name) => return Ok(name),
        Err(cause) => cause,
    };

    match hostname_from_command() {
        Ok(name) => Ok(name),
        Err(fallback_cause) => Err((primary_cause, fallback_cause)),
    }
}

#[cfg(unix)]
fn hostname_primary() -> Result<String, String> {
    let mut buf = vec![0u8; 256];
    let ret = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if ret != 0 {
        return Err(format!(
            "gethostname failed: {}",
            std::io::Error::last_os_error()
        ));
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let name = String::from_utf8_lossy(&buf[..len]).trim().to_string();
    if name.is_empty() {
        return Err("gethostname returned an empty name".to_string());
    }
    Ok(name)
}

#[cfg(not(unix))]
fn hostname_primary() -> Result<String, String> {
    match std::env::var("COMPUTERNAME") {
        Ok(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        _ => Err("COMPUTERNAME is not set".to_string()),
    }
}

fn hostname_from_command() -> Result<String, String> {
    let output = Command::new("hostname")
        .output()
        .map_err(|e| format!("failed to run 'hostname': {}", e))?;

    if !output.status.success() {
        return Err(format!("'hostname' exited with {}", output.status));
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if name.is_empty() {
        return Err("'hostname' produced empty output".to_string());
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn primary_syscall_resolves_without_subprocess_or_environment() {
        let name = hostname_primary().unwrap();
        assert!(!name.is_empty());
        assert_eq!(name, name.trim());
    }

    #[test]
    fn resolves_a_non_empty_hostname() {
        let name = resolve_hostname().unwrap();
        assert!(!name.is_empty());
        assert_eq!(name, name.trim());
    }
}
