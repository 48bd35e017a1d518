//! Config management use case

use crate::error::Result;
use crate::infrastructure::{Config, MeetingsHome};

/// Service for reading and editing config.toml
pub struct ConfigService {
    home: MeetingsHome,
}

impl ConfigService {
    pub fn new(home: MeetingsHome) -> Self {
        ConfigService { home }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.home.load_config()?.get(key)
    }

    /// Set a config value and persist it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.home.load_config()?;
        config.set(key, value)?;
        self.home.save_config(&config)
    }

    /// Effective config, defaults included
    pub fn list(&self) -> Result<Config> {
        self.home.load_config()
    }
}
