//! Error types for logseq-meetings

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the meeting-notes pipeline
#[derive(Debug, Error)]
pub enum MeetingsError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Malformed event '{title}': {reason}")]
    MalformedEvent { title: String, reason: String },

    #[error("Storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Calendar error: {0}")]
    Calendar(String),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MeetingsError {
    /// Build a storage error for the given path
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MeetingsError::Storage {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MeetingsError::Config(_)
            | MeetingsError::TomlDeserialize(_)
            | MeetingsError::TomlSerialize(_) => 2,
            MeetingsError::InvalidTimeReference(_) => 3,
            MeetingsError::Authentication(_) => 4,
            MeetingsError::MalformedEvent { .. } => 5,
            MeetingsError::Storage { .. } => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MeetingsError::Authentication(msg) => {
                format!(
                    "Authentication error: {}\n\n\
                    Suggestions:\n\
                    • Run 'logseq-meetings auth' to authorize calendar access\n\
                    • Check that credentials.json is the OAuth client file for a desktop app\n\
                    • Delete token.json and authorize again if the refresh token was revoked",
                    msg
                )
            }
            MeetingsError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-03-01)\n\n\
                    Examples:\n\
                    logseq-meetings today\n\
                    logseq-meetings last monday\n\
                    logseq-meetings 2024-03-01",
                    ref_str
                )
            }
            MeetingsError::Storage { path, source } => {
                format!(
                    "Could not write journal file {}: {}\n\n\
                    Suggestions:\n\
                    • Check that journal_dir points to a writable directory\n\
                    • Configure the directory: logseq-meetings config journal_dir <path>\n\
                    • Set LOGSEQ_JOURNAL_DIR to override it for one run",
                    path.display(),
                    source
                )
            }
            MeetingsError::Config(msg) if msg.contains("Unknown config key") => {
                format!(
                    "{}\n\n\
                    Example: logseq-meetings config journal_dir ~/Documents/journals",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MeetingsError
pub type Result<T> = std::result::Result<T, MeetingsError>;
