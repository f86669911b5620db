//! Terminal console utilities for rich output

use std::env;
use std::io::{self, IsTerminal};

use crate::text::Style;

/// Console output handler with color support and terminal width detection
pub struct Console {
    color_enabled: bool,
    max_width: usize,
}

impl Console {
    /// Create a new console with automatic color and terminal detection
    pub fn new() -> Self {
        Self {
            color_enabled: io::stdout().is_terminal() && env::var("NO_COLOR").is_err(),
            max_width: Self::detect_terminal_width(),
        }
    }

    /// Create a console with colors disabled
    pub fn no_colors() -> Self {
        Self {
            color_enabled: false,
            max_width: Self::detect_terminal_width(),
        }
    }

    /// Create a console with colors forced on, regardless of the destination.
    ///
    /// Intended for tests and for callers piping styled output somewhere that
    /// understands ANSI escapes anyway (e.g. a pager invoked with `-R`).
    pub fn force_colors() -> Self {
        Self {
            color_enabled: true,
            max_width: Self::detect_terminal_width(),
        }
    }

    /// Detect terminal width, defaulting to 100 if unavailable
    fn detect_terminal_width() -> usize {
        term_size::dimensions().map(|(w, _)| w).unwrap_or(100)
    }

    /// Check if color output is enabled
    pub fn is_color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// Get maximum width for terminal output
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Create a console with a specific max width
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Colorize text with a single color
    pub fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        format!("\x1b[{}m{text}\x1b[0m", color.sgr())
    }

    /// Apply a composite [`Style`] (color and/or bold) to text.
    ///
    /// Returns the text unchanged when colors are disabled, the style is
    /// empty, or the text itself is empty.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.color_enabled || style.is_plain() || text.is_empty() {
            return text.to_string();
        }

        let mut codes = String::new();
        if style.is_bold() {
            codes.push('1');
        }
        if let Some(color) = style.color() {
            if !codes.is_empty() {
                codes.push(';');
            }
            codes.push_str(color.sgr());
        }
        format!("\x1b[{codes}m{text}\x1b[0m")
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// ANSI color codes for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Cyan,
    Magenta,
    Dim,
}

impl Color {
    /// The SGR parameter selecting this color's foreground
    pub(crate) fn sgr(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Green => "32",
            Color::Cyan => "36",
            Color::Magenta => "35",
            Color::Dim => "2",
        }
    }
}
