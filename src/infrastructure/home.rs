//! Home directory holding config, client secrets and the OAuth token

use crate::error::{MeetingsError, Result};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Environment variable pointing at the home directory
pub const HOME_ENV: &str = "LOGSEQ_MEETINGS_HOME";

/// Directory that anchors every relative path in the config
#[derive(Debug, Clone)]
pub struct MeetingsHome {
    pub root: PathBuf,
}

impl MeetingsHome {
    pub fn new(root: PathBuf) -> Self {
        MeetingsHome { root }
    }

    /// Pick the home directory: explicit flag first, then LOGSEQ_MEETINGS_HOME,
    /// then the current directory.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(MeetingsHome::new(path));
        }

        if let Some(path) = env_home() {
            if !path.is_dir() {
                return Err(MeetingsError::Config(format!(
                    "{} is set to '{}' but that directory does not exist",
                    HOME_ENV,
                    path.display()
                )));
            }
            return Ok(MeetingsHome::new(path));
        }

        Ok(MeetingsHome::new(std::env::current_dir()?))
    }

    /// Same precedence as `discover`, but the directory may not exist yet.
    pub fn init_target(explicit: Option<PathBuf>) -> Result<PathBuf> {
        match explicit.or_else(env_home) {
            Some(path) => Ok(path),
            None => Ok(std::env::current_dir()?),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Whether a config.toml has been written here
    pub fn is_initialized(&self) -> bool {
        self.config_path().is_file()
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Resolve a configured path against the home directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn journal_dir(&self, config: &Config) -> PathBuf {
        self.resolve(&config.journal_dir)
    }

    pub fn token_path(&self, config: &Config) -> PathBuf {
        self.resolve(&config.token_file)
    }

    pub fn credentials_path(&self, config: &Config) -> PathBuf {
        self.resolve(&config.credentials_file)
    }
}

fn env_home() -> Option<PathBuf> {
    std::env::var(HOME_ENV)
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}
