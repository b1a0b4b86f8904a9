//! Theme configuration for the player and CLI output
//!
//! Centralizes all color and style definitions. The accent color is the one
//! user-customizable value: it is held in process-wide UI state, set
//! explicitly with [`set_active_accent`], and read back through
//! [`current_theme`]. Persisting it is the caller's business.

use std::str::FromStr;
use std::sync::RwLock;

use ratatui::style::{Color, Modifier, Style};

use crate::config::DEFAULT_ACCENT;

/// Active accent color for this process. `None` means the built-in default.
static ACTIVE_ACCENT: RwLock<Option<Color>> = RwLock::new(None);

/// A user-supplied CSS-style color, kept alongside its parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColor {
    css: String,
    color: Color,
}

impl ThemeColor {
    /// Parse `#rgb`, `#rrggbb` or a named color (`red`, `lightblue`, ...).
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let color = match trimmed.strip_prefix('#') {
            Some(hex) => parse_hex(hex)?,
            None => parse_named(trimmed)?,
        };
        Some(Self {
            css: trimmed.to_ascii_lowercase(),
            color,
        })
    }

    /// The normalized CSS text (lowercase), as persisted.
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
            Some(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn parse_named(name: &str) -> Option<Color> {
    // ratatui also accepts palette indices like "42"; those are not CSS colors
    if name.is_empty() || name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Color::from_str(&name.to_ascii_lowercase()).ok()
}

/// Theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (subtitle text)
    pub text_primary: Color,
    /// Secondary/dimmed text color (timestamps, hints)
    pub text_secondary: Color,
    /// Accent color for controls, scrubber and highlights
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_accent(default_accent())
    }
}

impl Theme {
    /// White subtitle text on the terminal background, tinted by `accent`.
    pub fn with_accent(accent: Color) -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent,
            error: Color::Red,
            success: Color::Green,
        }
    }

    // Style helpers

    /// Style for subtitle text.
    pub fn text_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented elements.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, active marker).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        Color::Rgb(r, g, b) => return format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => return format!("\x1b[38;5;{}m", i),
    };
    code.to_string()
}

fn default_accent() -> Color {
    ThemeColor::parse(DEFAULT_ACCENT)
        .map(|c| c.color())
        .unwrap_or(Color::Magenta)
}

/// Set the process-wide accent color.
pub fn set_active_accent(color: Color) {
    if let Ok(mut active) = ACTIVE_ACCENT.write() {
        *active = Some(color);
    }
}

/// Theme built from the active accent color.
pub fn current_theme() -> Theme {
    let accent = ACTIVE_ACCENT
        .read()
        .ok()
        .and_then(|active| *active)
        .unwrap_or_else(default_accent);
    Theme::with_accent(accent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_purple_accent() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(0x89, 0x36, 0xff));
        assert_eq!(theme.text_primary, Color::White);
    }

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(
            ThemeColor::parse("#FF8800").unwrap().color(),
            Color::Rgb(255, 136, 0)
        );
        assert_eq!(
            ThemeColor::parse("#f80").unwrap().color(),
            Color::Rgb(255, 136, 0)
        );
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(ThemeColor::parse("red").unwrap().color(), Color::Red);
        assert_eq!(ThemeColor::parse(" Cyan ").unwrap().css(), "cyan");
    }

    #[test]
    fn rejects_invalid_colors() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "notacolor", "42"] {
            assert!(ThemeColor::parse(bad).is_none(), "{:?}", bad);
        }
    }

    #[test]
    fn css_is_normalized_lowercase() {
        assert_eq!(ThemeColor::parse("#ABCDEF").unwrap().css(), "#abcdef");
    }

    #[test]
    fn style_helpers_use_theme_colors() {
        let theme = Theme::with_accent(Color::Yellow);
        assert_eq!(theme.accent_style().fg, Some(Color::Yellow));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert!(theme.text_style().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn color_to_ansi_maps_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "\x1b[38;2;1;2;3m");
        assert_eq!(color_to_ansi(Color::Indexed(200)), "\x1b[38;5;200m");
    }

    #[test]
    fn active_accent_drives_current_theme() {
        set_active_accent(Color::Rgb(10, 20, 30));
        assert_eq!(current_theme().accent, Color::Rgb(10, 20, 30));
    }
}
