//! Initialize home directory use case

use crate::error::{MeetingsError, Result};
use crate::infrastructure::{Config, MeetingsHome};
use std::fs;
use std::path::Path;

/// Write a default config.toml into `path`, creating the directory if needed.
/// Fails when a config already exists there.
pub fn init(path: &Path) -> Result<MeetingsHome> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let home = MeetingsHome::new(path.to_path_buf());
    if home.is_initialized() {
        return Err(MeetingsError::Config(format!(
            "Already initialized: {}",
            home.config_path().display()
        )));
    }

    home.save_config(&Config::default())?;
    Ok(home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("meetings");

        let home = init(&target).unwrap();

        assert!(home.config_path().is_file());
        let content = fs::read_to_string(home.config_path()).unwrap();
        assert!(content.contains("calendar_id = \"primary\""));
        assert!(content.contains("Concierge Blockout"));
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();

        let err = init(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Already initialized"));
    }
}
