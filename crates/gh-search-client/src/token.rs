//! GitHub token resolution
//!
//! Tries multiple sources in order:
//! 1. `GITHUB_TOKEN` env var
//! 2. `GH_TOKEN` env var
//! 3. `gh auth token` command
//!
//! A missing token is not an error: unauthenticated search works, with a
//! tighter rate limit.

use log::debug;
use std::process::Command;

/// Resolve a GitHub token, or `None` for unauthenticated access
pub fn resolve_token() -> Option<String> {
    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        if !token.trim().is_empty() {
            debug!("Using token from GITHUB_TOKEN");
            return Some(token);
        }
    }

    if let Ok(token) = std::env::var("GH_TOKEN") {
        if !token.trim().is_empty() {
            debug!("Using token from GH_TOKEN");
            return Some(token);
        }
    }

    // Fall back to the gh CLI's stored credentials
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        debug!("gh auth token exited with {}", output.status);
        return None;
    }

    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if token.is_empty() {
        None
    } else {
        debug!("Using token from gh CLI");
        Some(token)
    }
}
