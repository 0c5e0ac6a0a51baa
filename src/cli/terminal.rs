//! Terminal styling for command output

use owo_colors::{colors::css, OwoColorize};
use principles::Color;

/// Whether stdout should receive ANSI colours.
fn color_enabled() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// True when stdout is a terminal narrower than 40 columns.
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(width, _)| width.0 < 40)
}

/// Paint `text` in the given product colour.
///
/// Pad `text` before calling this; escape codes do not count towards width.
pub fn swatch(color: Color, text: &str) -> String {
    if !color_enabled() {
        return text.to_string();
    }
    match color {
        Color::Red => text.red().to_string(),
        Color::Green => text.green().to_string(),
        Color::Blue => text.blue().to_string(),
    }
}

/// Status styling for plain messages.
pub trait Style {
    /// Green, for completed actions.
    fn success(&self) -> String;
    /// Amber, for empty results and refusals.
    fn warning(&self) -> String;
    /// Dimmed, for table furniture.
    fn dim(&self) -> String;
}

impl Style for str {
    fn success(&self) -> String {
        if color_enabled() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if color_enabled() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if color_enabled() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}
