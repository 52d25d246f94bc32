use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Selected filter, add button, focused border
    pub accent: Color,
    /// Title
    pub accent_alt: Color,
    /// Completed checkbox
    pub green: Color,
    /// Delete marker and "Clear completed"
    pub red: Color,
    pub selection_bg: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x14, 0x33),
            text: Color::Rgb(0xE0, 0xE0, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x99, 0x99, 0x99),
            accent: Color::Rgb(0x66, 0x7E, 0xEA),
            accent_alt: Color::Rgb(0x76, 0x4B, 0xA2),
            green: Color::Rgb(0x4C, 0xAF, 0x50),
            red: Color::Rgb(0xF4, 0x43, 0x36),
            selection_bg: Color::Rgb(0x2E, 0x2A, 0x5A),
            border: Color::Rgb(0x66, 0x66, 0x66),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults.
    /// Unknown keys and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "accent_alt" => theme.accent_alt = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    "border" => theme.border = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
