//! Unlimited-token handling.
//!
//! A `.unlimited` file in the working directory holds a single opaque token
//! that lifts the ClipX rate limits. It is sent as the `X-ClipX-Unlimited`
//! header when present.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// File the token is kept in.
pub const TOKEN_FILE: &str = ".unlimited";

/// Outcome of looking for the token file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// No token file present.
    NotSet,
    /// A single well-formed token.
    Set(String),
    /// The file exists but holds nothing usable.
    Invalid(&'static str),
}

impl TokenStatus {
    /// Short human label for the home-menu status line.
    pub fn label(&self) -> &'static str {
        match self {
            TokenStatus::NotSet => "Not set",
            TokenStatus::Set(_) => "Set",
            TokenStatus::Invalid(_) => "Invalid",
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            TokenStatus::Set(token) => Some(token),
            _ => None,
        }
    }
}

fn token_path(dir: &Path) -> PathBuf {
    dir.join(TOKEN_FILE)
}

/// Reads the token from `dir`, classifying malformed files instead of
/// erroring: the tool keeps working without a token.
pub fn read_in(dir: &Path) -> TokenStatus {
    let path = token_path(dir);
    if !path.is_file() {
        return TokenStatus::NotSet;
    }
    let Ok(raw) = fs::read_to_string(&path) else {
        return TokenStatus::Invalid("unreadable");
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return TokenStatus::Invalid("empty");
    }
    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(token), None) => TokenStatus::Set(token.to_string()),
        _ => TokenStatus::Invalid("multiple fields"),
    }
}

/// Reads the token from the current directory.
pub fn read() -> TokenStatus {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    read_in(&cwd)
}

/// Validates and writes a token into `dir`.
pub fn write_in(dir: &Path, token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() || token.split_whitespace().count() != 1 {
        bail!("Token is invalid. Please paste a single token.");
    }
    fs::write(token_path(dir), token).context("Could not write .unlimited file")
}

/// Removes the token file from `dir`. Missing file is an error so the CLI
/// can say there was nothing to remove.
pub fn remove_in(dir: &Path) -> Result<()> {
    let path = token_path(dir);
    if !path.is_file() {
        bail!("No .unlimited file found to remove.");
    }
    fs::remove_file(&path).context("Could not remove .unlimited file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_not_set() {
        let dir = tempdir().unwrap();
        assert_eq!(read_in(dir.path()), TokenStatus::NotSet);
    }

    #[test]
    fn roundtrip_and_remove() {
        let dir = tempdir().unwrap();
        write_in(dir.path(), "abc123").unwrap();
        assert_eq!(read_in(dir.path()), TokenStatus::Set("abc123".to_string()));

        remove_in(dir.path()).unwrap();
        assert_eq!(read_in(dir.path()), TokenStatus::NotSet);
        assert!(remove_in(dir.path()).is_err());
    }

    #[test]
    fn empty_and_multi_field_files_are_invalid() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(TOKEN_FILE), "   \n").unwrap();
        assert!(matches!(read_in(dir.path()), TokenStatus::Invalid("empty")));

        std::fs::write(dir.path().join(TOKEN_FILE), "one two\n").unwrap();
        assert!(matches!(read_in(dir.path()), TokenStatus::Invalid(_)));
    }

    #[test]
    fn write_rejects_multi_field_tokens() {
        let dir = tempdir().unwrap();
        assert!(write_in(dir.path(), "two words").is_err());
        assert!(write_in(dir.path(), "").is_err());
    }
}
