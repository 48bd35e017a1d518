//! Configuration management

use crate::error::{MeetingsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file inside the home directory
pub const CONFIG_FILE: &str = "config.toml";

/// Overrides `journal_dir` for a single run
pub const JOURNAL_DIR_ENV: &str = "LOGSEQ_JOURNAL_DIR";

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Keys accepted by `config get/set`
pub const CONFIG_KEYS: &[&str] = &[
    "journal_dir",
    "calendar_id",
    "excluded_titles",
    "credentials_file",
    "token_file",
    "api_base_url",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logseq journals directory; relative paths resolve against the home directory
    pub journal_dir: PathBuf,
    pub calendar_id: String,
    /// Events whose title equals one of these exactly are skipped
    pub excluded_titles: Vec<String>,
    /// OAuth client secrets downloaded from the Google Cloud console
    pub credentials_file: PathBuf,
    /// Authorized-user token written by `auth` and refreshed on each run
    pub token_file: PathBuf,
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: PathBuf::from("journals"),
            calendar_id: "primary".to_string(),
            excluded_titles: vec!["Home".to_string(), "Concierge Blockout".to_string()],
            credentials_file: PathBuf::from("credentials.json"),
            token_file: PathBuf::from("token.json"),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config.toml from `dir`, falling back to defaults when the file is absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        let mut config = match fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| {
                MeetingsError::Config(format!(
                    "Failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(MeetingsError::Io(e)),
        };

        if let Ok(dir) = std::env::var(JOURNAL_DIR_ENV) {
            if !dir.trim().is_empty() {
                config.journal_dir = PathBuf::from(dir);
            }
        }

        Ok(config)
    }

    /// Save config.toml into `dir`, creating the directory if needed
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Whether an event with this title should be left out of the journal
    pub fn is_excluded(&self, title: Option<&str>) -> bool {
        match title {
            Some(title) => self.excluded_titles.iter().any(|t| t == title),
            None => false,
        }
    }

    /// Read a single key as a display string
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "journal_dir" => Ok(self.journal_dir.display().to_string()),
            "calendar_id" => Ok(self.calendar_id.clone()),
            "excluded_titles" => Ok(self.excluded_titles.join(", ")),
            "credentials_file" => Ok(self.credentials_file.display().to_string()),
            "token_file" => Ok(self.token_file.display().to_string()),
            "api_base_url" => Ok(self.api_base_url.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from its string form.
    /// `excluded_titles` takes a comma-separated list; an empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "journal_dir" => self.journal_dir = non_empty_path(key, value)?,
            "calendar_id" => {
                if value.trim().is_empty() {
                    return Err(MeetingsError::Config(
                        "calendar_id cannot be empty".to_string(),
                    ));
                }
                self.calendar_id = value.trim().to_string();
            }
            "excluded_titles" => {
                self.excluded_titles = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "credentials_file" => self.credentials_file = non_empty_path(key, value)?,
            "token_file" => self.token_file = non_empty_path(key, value)?,
            "api_base_url" => {
                let url = value.trim().trim_end_matches('/');
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(MeetingsError::Config(format!(
                        "api_base_url must be an http(s) URL, got '{}'",
                        value
                    )));
                }
                self.api_base_url = url.to_string();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn non_empty_path(key: &str, value: &str) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(MeetingsError::Config(format!("{} cannot be empty", key)));
    }
    Ok(PathBuf::from(value.trim()))
}

fn unknown_key(key: &str) -> MeetingsError {
    MeetingsError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.calendar_id, "primary");
        assert_eq!(config.excluded_titles, vec!["Home", "Concierge Blockout"]);
        assert_eq!(config.token_file, PathBuf::from("token.json"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.calendar_id, Config::default().calendar_id);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.calendar_id = "work@example.com".to_string();
        config.excluded_titles = vec!["Lunch".to_string()];
        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(CONFIG_FILE).exists());
        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.calendar_id, "work@example.com");
        assert_eq!(loaded.excluded_titles, vec!["Lunch"]);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "calendar_id = \"team\"\n").unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.calendar_id, "team");
        assert_eq!(config.token_file, PathBuf::from("token.json"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "calendar_id = [").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            MeetingsError::Config(msg) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_exclusion_is_exact_match() {
        let config = Config::default();
        assert!(config.is_excluded(Some("Home")));
        assert!(config.is_excluded(Some("Concierge Blockout")));
        assert!(!config.is_excluded(Some("home")));
        assert!(!config.is_excluded(Some("Home office")));
        assert!(!config.is_excluded(None));
    }

    #[test]
    fn test_set_and_get_keys() {
        let mut config = Config::default();
        config.set("excluded_titles", "Lunch, Focus time ,").unwrap();
        assert_eq!(config.excluded_titles, vec!["Lunch", "Focus time"]);
        assert_eq!(config.get("excluded_titles").unwrap(), "Lunch, Focus time");

        config.set("journal_dir", "/tmp/journals").unwrap();
        assert_eq!(config.get("journal_dir").unwrap(), "/tmp/journals");

        config.set("api_base_url", "http://127.0.0.1:9000/").unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("calendar_id", "  ").is_err());
        assert!(config.set("api_base_url", "ftp://example.com").is_err());
        assert!(config.set("journal_dir", "").is_err());
        let err = config.set("editor", "vim").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'editor'"));
    }
}
