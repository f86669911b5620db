//! Text values that may carry inline styling.
//!
//! The render engine accepts either bare strings or span-annotated text
//! everywhere a human-readable message appears, and must treat both
//! uniformly: line-splitting, concatenation, and prefixing may never corrupt
//! an embedded style boundary. [`StyledText`] is the tagged union that makes
//! that contract explicit.

use std::fmt;

use crate::console::{Color, Console};

/// Inline styling for a run of characters: an optional foreground color and
/// a bold flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    color: Option<Color>,
    bold: bool,
}

impl Style {
    /// An empty style (renders as bare text).
    pub const fn new() -> Self {
        Self {
            color: None,
            bold: false,
        }
    }

    /// Set the foreground color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the bold flag.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    /// True when the style carries no attributes at all.
    pub const fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold
    }
}

/// A contiguous run of characters sharing one [`Style`].
#[derive(Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)
    }
}

/// Text that may carry inline style spans.
///
/// `Plain` holds a bare string; `Spanned` holds an ordered run of styled
/// spans. Construction from a string literal is equivalent to a value with
/// zero style spans, and every operation preserves which variant (and which
/// span boundaries) it was given.
#[derive(Clone, PartialEq, Eq)]
pub enum StyledText {
    Plain(String),
    Spanned(Vec<Span>),
}

impl StyledText {
    /// A single styled run.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::Spanned(vec![Span::new(text, style)])
    }

    /// The literal characters with all style information stripped.
    pub fn plain(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Spanned(spans) => spans.iter().map(|span| span.text.as_str()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(s) => s.is_empty(),
            Self::Spanned(spans) => spans.iter().all(|span| span.text.is_empty()),
        }
    }

    /// Split on line-break boundaries, preserving span boundaries.
    ///
    /// With `allow_blank` set, empty embedded and trailing segments survive
    /// as zero-length lines (required so a blank line inside a multi-line
    /// message still occupies a line in the rendered tree). Without it, a
    /// single trailing empty segment produced by a terminating `\n` is
    /// dropped.
    pub fn split_lines(&self, allow_blank: bool) -> Vec<StyledText> {
        let mut lines = match self {
            Self::Plain(s) => s.split('\n').map(|line| Self::Plain(line.to_string())).collect(),
            Self::Spanned(spans) => split_spans(spans),
        };
        if !allow_blank && lines.len() > 1 && lines.last().is_some_and(StyledText::is_empty) {
            lines.pop();
        }
        lines
    }

    /// Concatenate two values, preserving each side's styling.
    ///
    /// Concatenating two `Plain` values stays `Plain`; anything else
    /// produces a `Spanned` value.
    pub fn concat(&self, other: &StyledText) -> StyledText {
        match (self, other) {
            (Self::Plain(a), Self::Plain(b)) => {
                let mut joined = a.clone();
                joined.push_str(b);
                Self::Plain(joined)
            }
            _ => {
                let mut spans = self.to_spans();
                spans.extend(other.to_spans());
                Self::Spanned(spans)
            }
        }
    }

    /// Join parts with a separator, preserving each part's styling.
    pub fn join(separator: &StyledText, parts: &[StyledText]) -> StyledText {
        let mut iter = parts.iter();
        let Some(first) = iter.next() else {
            return Self::Plain(String::new());
        };
        let mut joined = first.clone();
        for part in iter {
            joined = joined.concat(separator).concat(part);
        }
        joined
    }

    /// Render to a string, emitting ANSI escapes around styled spans when
    /// the console has color enabled.
    pub fn render(&self, console: &Console) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Spanned(spans) => spans
                .iter()
                .map(|span| console.paint(&span.text, span.style))
                .collect(),
        }
    }

    fn to_spans(&self) -> Vec<Span> {
        match self {
            Self::Plain(s) => {
                if s.is_empty() {
                    Vec::new()
                } else {
                    vec![Span::new(s.clone(), Style::new())]
                }
            }
            Self::Spanned(spans) => spans
                .iter()
                .filter(|span| !span.text.is_empty())
                .cloned()
                .collect(),
        }
    }
}

impl From<&str> for StyledText {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for StyledText {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl fmt::Debug for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.plain())
    }
}

/// Split a span run into lines, carrying each span's style across the cut.
fn split_spans(spans: &[Span]) -> Vec<StyledText> {
    let mut lines: Vec<Vec<Span>> = vec![Vec::new()];
    for span in spans {
        let mut fragments = span.text.split('\n');
        if let Some(first) = fragments.next() {
            if !first.is_empty() {
                lines
                    .last_mut()
                    .expect("at least one line")
                    .push(Span::new(first, span.style));
            }
        }
        for fragment in fragments {
            let mut line = Vec::new();
            if !fragment.is_empty() {
                line.push(Span::new(fragment, span.style));
            }
            lines.push(line);
        }
    }
    lines.into_iter().map(StyledText::Spanned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Style {
        Style::new().fg(Color::Red)
    }

    #[test]
    fn literal_construction_has_no_spans() {
        let text = StyledText::from("hello");
        assert_eq!(text, StyledText::Plain("hello".to_string()));
        assert_eq!(text.plain(), "hello");
    }

    #[test]
    fn plain_strips_styling() {
        let text = StyledText::Spanned(vec![
            Span::new("a ", Style::new()),
            Span::new("red", red()),
            Span::new(" word", Style::new()),
        ]);
        assert_eq!(text.plain(), "a red word");
    }

    #[test]
    fn split_preserves_blank_lines_when_allowed() {
        let text = StyledText::from("first\n\nthird\n");
        let lines = text.split_lines(true);
        let plains: Vec<String> = lines.iter().map(StyledText::plain).collect();
        assert_eq!(plains, ["first", "", "third", ""]);
    }

    #[test]
    fn split_drops_single_trailing_blank_otherwise() {
        let text = StyledText::from("first\nsecond\n");
        let lines = text.split_lines(false);
        let plains: Vec<String> = lines.iter().map(StyledText::plain).collect();
        assert_eq!(plains, ["first", "second"]);
    }

    #[test]
    fn split_of_empty_text_is_one_blank_line() {
        let lines = StyledText::from("").split_lines(false);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn split_carries_style_across_line_breaks() {
        let text = StyledText::styled("one\ntwo", red());
        let lines = text.split_lines(true);
        assert_eq!(lines.len(), 2);
        for (line, expected) in lines.iter().zip(["one", "two"]) {
            let StyledText::Spanned(spans) = line else {
                panic!("expected spanned line");
            };
            assert_eq!(spans.len(), 1);
            assert_eq!(spans[0].text(), expected);
            assert_eq!(spans[0].style(), red());
        }
    }

    #[test]
    fn concat_of_plain_stays_plain() {
        let joined = StyledText::from("a").concat(&StyledText::from("b"));
        assert_eq!(joined, StyledText::Plain("ab".to_string()));
    }

    #[test]
    fn concat_keeps_span_boundaries() {
        let joined = StyledText::styled("x", red()).concat(&StyledText::from("y"));
        let StyledText::Spanned(spans) = joined else {
            panic!("expected spanned result");
        };
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].style(), red());
        assert!(spans[1].style().is_plain());
    }

    #[test]
    fn join_is_associative_over_plain_content() {
        let parts = [
            StyledText::from("a"),
            StyledText::from("b"),
            StyledText::from("c"),
        ];
        let sep = StyledText::from(", ");
        assert_eq!(StyledText::join(&sep, &parts).plain(), "a, b, c");
        assert_eq!(StyledText::join(&sep, &[]).plain(), "");
    }

    #[test]
    fn render_emits_ansi_only_when_enabled() {
        let text = StyledText::styled("danger", red());
        assert_eq!(text.render(&Console::no_colors()), "danger");
        assert_eq!(
            text.render(&Console::force_colors()),
            "\x1b[31mdanger\x1b[0m"
        );
    }

    #[test]
    fn debug_is_the_plain_projection() {
        let text = StyledText::styled("hi", red());
        assert_eq!(format!("{text:?}"), "\"hi\"");
    }
}
