use anyhow::{Context, Result};
use tracing::info;

use folio_core::{AppConfig, Preferences, ThemeMode};

use crate::ThemeChoice;

pub fn run(config: &AppConfig, choice: ThemeChoice) -> Result<()> {
    let path = config.preferences_path();
    let mut preferences = Preferences::load(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mode = resolve(choice, preferences.theme_or(config.ui.theme.mode));
    preferences.set_theme(mode).context("Failed to save theme")?;

    info!(theme = %mode, "Theme saved");
    println!("Theme set to {}", mode);
    Ok(())
}

fn resolve(choice: ThemeChoice, current: ThemeMode) -> ThemeMode {
    match choice {
        ThemeChoice::Light => ThemeMode::Light,
        ThemeChoice::Dark => ThemeMode::Dark,
        ThemeChoice::Toggle => current.toggled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(ThemeChoice::Light, ThemeMode::Dark), ThemeMode::Light);
        assert_eq!(resolve(ThemeChoice::Dark, ThemeMode::Dark), ThemeMode::Dark);
        assert_eq!(resolve(ThemeChoice::Toggle, ThemeMode::Dark), ThemeMode::Light);
        assert_eq!(resolve(ThemeChoice::Toggle, ThemeMode::Light), ThemeMode::Dark);
    }
}
