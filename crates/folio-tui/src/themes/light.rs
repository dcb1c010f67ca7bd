use ratatui::style::Color;

use crate::theme::Theme;

pub fn palette() -> Theme {
    Theme {
        background: Color::Rgb(0xff, 0xff, 0xff),
        surface: Color::Rgb(0xf4, 0xf4, 0xf5),
        foreground: Color::Rgb(0x09, 0x09, 0x0b),
        muted: Color::Rgb(0x71, 0x71, 0x7a),
        primary: Color::Rgb(0x25, 0x63, 0xeb),
        primary_foreground: Color::Rgb(0xf8, 0xfa, 0xfc),
        secondary: Color::Rgb(0x7e, 0x22, 0xce),
        border: Color::Rgb(0xe4, 0xe4, 0xe7),
        success: Color::Rgb(0x16, 0xa3, 0x4a),
        error: Color::Rgb(0xdc, 0x26, 0x26),
    }
}
