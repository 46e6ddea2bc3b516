use crate::domain::Tone;
use crossterm::style::{Color, Stylize};

/// Applies terminal styling to rendered text
///
/// The renderer never writes escape codes itself; it asks a styler, so a
/// plain styler gives byte-exact output for tests and pipes.
pub trait Styler {
    /// Paint text in the color of `tone`, bold
    fn paint(&self, text: &str, tone: Tone) -> String;

    /// Render text bold without changing its color
    fn bold(&self, text: &str) -> String;
}

/// ANSI styling through crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

/// No styling at all
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

/// Foreground color for a tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Alert => Color::Red,
        Tone::Warning => Color::Yellow,
        Tone::Notice => Color::Blue,
        Tone::Calm => Color::Green,
    }
}

impl Styler for AnsiStyler {
    fn paint(&self, text: &str, tone: Tone) -> String {
        text.with(tone_color(tone)).bold().to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.bold().to_string()
    }
}

impl Styler for PlainStyler {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }
}
