//! Light and dark palettes with user overrides

mod dark;
mod light;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use folio_core::ThemeMode;
use ratatui::style::Color;

use crate::theme::Theme;

/// Parse "#RRGGBB", "RRGGBB", "#RGB" or "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Content accent color, falling back to the theme's primary
pub fn accent(hex: &str, theme: &Theme) -> Color {
    parse_hex_color(hex).unwrap_or(theme.primary)
}

/// Build the palette for `mode`. Overrides apply to the configured mode only.
pub fn load_palette(mode: ThemeMode, config: &ThemeConfig) -> Theme {
    let base = match mode {
        ThemeMode::Light => light::palette(),
        ThemeMode::Dark => dark::palette(),
    };
    if mode == config.mode {
        apply_overrides(base, &config.colors)
    } else {
        base
    }
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 9] = [
        (&overrides.background, &mut theme.background),
        (&overrides.surface, &mut theme.surface),
        (&overrides.foreground, &mut theme.foreground),
        (&overrides.muted, &mut theme.muted),
        (&overrides.primary, &mut theme.primary),
        (&overrides.primary_foreground, &mut theme.primary_foreground),
        (&overrides.border, &mut theme.border),
        (&overrides.success, &mut theme.success),
        (&overrides.error, &mut theme.error),
    ];
    for (hex, slot) in slots {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff5500"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color("f50"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color(" #3b82f6 "), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_content_colors_parse() {
        let portfolio = &folio_core::content::PORTFOLIO;
        for project in portfolio.projects {
            assert!(parse_hex_color(project.color).is_some());
        }
        for entry in portfolio.experience {
            assert!(parse_hex_color(entry.color).is_some());
        }
    }

    #[test]
    fn test_override_applies_to_configured_mode() {
        let config = ThemeConfig {
            mode: ThemeMode::Dark,
            colors: ThemeColorOverrides {
                primary: Some("#ff0000".to_string()),
                surface: Some("not a color".to_string()),
                ..Default::default()
            },
        };
        let dark = load_palette(ThemeMode::Dark, &config);
        let light = load_palette(ThemeMode::Light, &config);
        assert_eq!(dark.primary, Color::Rgb(255, 0, 0));
        assert_eq!(dark.surface, dark::palette().surface);
        assert_eq!(light, light::palette());
    }
}
