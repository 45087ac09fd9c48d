use std::process::Command;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::data::{GitHubEvent, Notification};

#[derive(Debug, thiserror::Error)]
pub enum GhError {
    #[error(
        "GitHub CLI (gh) not found. Please install it from https://cli.github.com/ and make sure it's in your PATH."
    )]
    NotFound,

    #[error("Failed to execute gh command: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("gh command failed: {0}")]
    Failed(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute a GitHub CLI command and return the output
pub fn run_gh_command(args: &[&str]) -> Result<String, GhError> {
    debug!(?args, "running gh");

    let output = Command::new("gh").args(args).output().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            GhError::NotFound
        } else {
            GhError::Spawn(err)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        warn!(?args, %stderr, "gh command failed");
        return Err(GhError::Failed(stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

fn gh_api<T: DeserializeOwned>(endpoint: &str) -> Result<T, GhError> {
    let output = run_gh_command(&["api", endpoint])?;
    Ok(serde_json::from_str(&output)?)
}

/// Get the current GitHub user
pub fn get_current_user() -> Result<String, GhError> {
    let output = run_gh_command(&["api", "user", "--jq", ".login"])?;
    Ok(output.trim().to_owned())
}

/// Notifications updated at or after `since` (an RFC 3339 timestamp)
pub fn get_notifications(since: &str, all: bool) -> Result<Vec<Notification>, GhError> {
    gh_api(&format!("notifications?since={since}&all={all}&per_page=50"))
}

/// Events from the repositories and people `username` follows
pub fn get_received_events(username: &str) -> Result<Vec<GitHubEvent>, GhError> {
    gh_api(&format!("users/{username}/received_events?per_page=50"))
}
