use std::path::Path;

use anyhow::{bail, Context, Result};

use folio_core::AppConfig;

pub fn run(config: &AppConfig, config_path: &Path, init: bool, path: bool) -> Result<()> {
    if path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        init_config(config_path)?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    print!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);
    Ok(())
}

fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }
    AppConfig::default()
        .save_to(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.ui.tick_rate_ms, AppConfig::default().ui.tick_rate_ms);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntick_rate_ms = 50\n").unwrap();

        assert!(init_config(&path).is_err());
        assert_eq!(AppConfig::load_from(&path).unwrap().ui.tick_rate_ms, 50);
    }
}
