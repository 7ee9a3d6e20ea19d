//! Opening card links outside the terminal.
//!
//! The browser is started as a separate, detached process with no stdio
//! attached. It receives only the URL, so the target page gets no opener
//! handle and no referrer from this session.

use std::io;
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, info, warn};
use reqwest::Url;
use thiserror::Error;

use crate::core::view::OutboundLink;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("invalid link {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("refusing to open {scheme}: link")]
    UnsupportedScheme { scheme: String },
    #[error("could not start browser: {0}")]
    Spawn(#[from] io::Error),
}

/// Only absolute `http`/`https` links are launched.
pub fn validate_link(href: &str) -> Result<Url, LaunchError> {
    let url = Url::parse(href).map_err(|e| LaunchError::InvalidUrl {
        url: href.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(LaunchError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

pub fn open_in_browser(link: &OutboundLink) -> Result<(), LaunchError> {
    let url = validate_link(link.href())?;

    let mut command = browser_command(url.as_str());
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    spawn_reaped(&mut command)?;

    info!("Opened {} in browser", url);
    Ok(())
}

/// Starts `command` and waits for it on a background thread, which reaps
/// the child when it exits.
fn spawn_reaped(command: &mut Command) -> io::Result<thread::JoinHandle<()>> {
    let mut child = command.spawn()?;
    let pid = child.id();
    debug!("Started {:?} (pid {})", command.get_program(), pid);

    thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => debug!("Launcher pid {} exited with {}", pid, status),
            Err(e) => warn!("Failed to wait for launcher pid {}: {}", pid, e),
        })
}

#[cfg(target_os = "macos")]
fn browser_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn browser_command(url: &str) -> Command {
    let mut command = Command::new("explorer");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn browser_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
