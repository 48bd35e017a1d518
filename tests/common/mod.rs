#![allow(dead_code)]

use assert_cmd::Command;
use logseq_meetings::infrastructure::{Config, StoredToken};
use std::path::Path;

pub fn meetings_cmd() -> Command {
    let mut cmd = Command::cargo_bin("logseq-meetings").unwrap();
    cmd.env_remove("LOGSEQ_MEETINGS_HOME");
    cmd.env_remove("LOGSEQ_JOURNAL_DIR");
    cmd.env_remove("LOGSEQ_MEETINGS_LOG");
    cmd
}

/// Write a config.toml pointing the journal at `journal_dir` and the API at `api_base_url`
pub fn write_config(home: &Path, journal_dir: &Path, api_base_url: &str) {
    let config = Config {
        journal_dir: journal_dir.to_path_buf(),
        api_base_url: api_base_url.to_string(),
        ..Config::default()
    };
    config.save_to_dir(home).unwrap();
}

/// Write a token.json whose access token expires at `expiry_offset_secs` from now
pub fn write_token(home: &Path, access_token: &str, token_uri: &str, expiry_offset_secs: i64) {
    let token = StoredToken {
        token: Some(access_token.to_string()),
        refresh_token: Some("1//refresh".to_string()),
        token_uri: token_uri.to_string(),
        client_id: Some("client.apps.googleusercontent.com".to_string()),
        client_secret: Some("secret".to_string()),
        scopes: vec!["https://www.googleapis.com/auth/calendar.readonly".to_string()],
        expiry: Some(chrono::Utc::now() + chrono::Duration::seconds(expiry_offset_secs)),
    };
    token.save(&home.join("token.json")).unwrap();
}

pub const SPRINT_PLANNING_ENTRY: &str = "\n\
- ## Meeting: Sprint Planning #meeting\n  \
- **Time:** 09:30\n  \
- **Topics Discussed**\n  \
- **Action Items**\n  \
- [ ] Task 1\n  \
- [ ] Task 2\n  \
- **Notes**\n\n";
