//! Write GalaxyConfig to TOML on disk.
//!
//! Uses atomic writes (write to `.tmp`, then rename) so a running
//! watcher never observes a half-written file.

use std::path::Path;

use galaxy_common::ConfigError;

use crate::schema::GalaxyConfig;

/// Write config to a specific path, creating parent directories as needed.
pub fn save_config_to_path(config: &GalaxyConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Windows refuses to rename over an open file
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::ParseError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_common::{Color, RandomnessMode};
    use tempfile::TempDir;

    #[test]
    fn save_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = GalaxyConfig::default();
        config.galaxy.count = 1234;
        config.galaxy.inner_color = Color::from_rgb(1, 2, 3);
        config.galaxy.randomness_mode = RandomnessMode::Scaled;
        config.generator.seed = Some(99);
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: GalaxyConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
        assert!(contents.contains("\"#010203\""));
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");

        save_config_to_path(&GalaxyConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_config_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&GalaxyConfig::default(), &path).unwrap();

        let tmp_path = path.with_extension("toml.tmp");
        assert!(!tmp_path.exists(), "tmp file should be gone after rename");
    }
}
