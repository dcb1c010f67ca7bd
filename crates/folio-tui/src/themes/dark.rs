use ratatui::style::Color;

use crate::theme::Theme;

pub fn palette() -> Theme {
    Theme {
        background: Color::Rgb(0x09, 0x09, 0x0b),
        surface: Color::Rgb(0x18, 0x18, 0x1b),
        foreground: Color::Rgb(0xfa, 0xfa, 0xfa),
        muted: Color::Rgb(0xa1, 0xa1, 0xaa),
        primary: Color::Rgb(0x3b, 0x82, 0xf6),
        primary_foreground: Color::Rgb(0xf8, 0xfa, 0xfc),
        secondary: Color::Rgb(0x93, 0x33, 0xea),
        border: Color::Rgb(0x27, 0x27, 0x2a),
        success: Color::Rgb(0x22, 0xc5, 0x5e),
        error: Color::Rgb(0xef, 0x44, 0x44),
    }
}
