//! Hands a finished order summary off to the host environment.
//!
//! The desktop analog of a share intent: compose a `mailto:` URL and let the
//! platform opener pick whatever handles it. Fire-and-forget; the flow never
//! waits on the chooser.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

pub async fn share_order(subject: String, body: String) -> Result<()> {
    let url = mailto_url(&subject, &body);
    debug!("handing order summary to the platform opener");

    // The opener call is blocking process spawning, keep it off the UI thread.
    tokio::task::spawn_blocking(move || open_url(&url))
        .await
        .context("share task panicked")?
}

fn open_url(url: &str) -> Result<()> {
    opener_command(url)
        .spawn()
        .context("failed to launch the platform opener")?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(windows)]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

pub fn mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

// RFC 3986 unreserved characters pass through, everything else is
// percent-encoded byte-wise.
fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
