//! Rendering diagnostics into their two textual forms.
//!
//! The plain form is a linear, connector-free transcript for logs and
//! non-interactive output. The tree form draws the message and its causes
//! as a connector tree, negotiated at render time between two capability
//! levels: full Unicode+color, or an ASCII-only fallback where the tree
//! collapses to paragraphs. Both forms are pure functions of an immutable
//! [`Diagnostic`]; rendering never fails and never re-validates.

use std::fmt;

use crate::console::{Color, Console};
use crate::diagnostic::Diagnostic;
use crate::prefix::{prefix_plain, prefix_spanned};
use crate::text::{Style, StyledText};

const CAUSE_PREFIX: &str = "--> ";
const CAUSE_INDENT: &str = "    ";
const STMT_INDENT: &str = "      ";

/// Render the plain form: ordered lines joined with line breaks, terminated
/// by a single trailing break.
pub fn render_plain(diagnostic: &Diagnostic) -> String {
    let mut parts: Vec<String> = vec![
        diagnostic.code().to_string(),
        String::new(),
        diagnostic.message().plain(),
    ];

    if !diagnostic.causes().is_empty() {
        parts.push(String::new());
        parts.push("Caused by:".to_string());
        for cause in diagnostic.causes() {
            parts.push(prefix_plain(cause, CAUSE_PREFIX, CAUSE_INDENT));
        }
    }

    if diagnostic.note_stmt().is_some() || diagnostic.hint_stmt().is_some() {
        parts.push(String::new());
    }
    if let Some(note) = diagnostic.note_stmt() {
        parts.push(prefix_plain(note, "note: ", STMT_INDENT));
    }
    if let Some(hint) = diagnostic.hint_stmt() {
        parts.push(prefix_plain(hint, "hint: ", STMT_INDENT));
    }

    if let Some(link) = diagnostic.details_link() {
        parts.push(String::new());
        parts.push(format!("For more details, see {link}"));
    }

    let mut output = parts.join("\n");
    output.push('\n');
    output
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_plain(self))
    }
}

/// Tree-form renderer, parameterized by the destination's capabilities.
///
/// The console decides whether styling becomes ANSI escapes; `ascii_only`
/// is supplied by the caller's output sink and decides whether box-drawing
/// connectors may be used at all.
pub struct DiagnosticRenderer {
    console: Console,
    ascii_only: bool,
}

impl DiagnosticRenderer {
    /// Create a renderer with automatic terminal detection and full Unicode
    /// output.
    pub fn new() -> Self {
        Self {
            console: Console::new(),
            ascii_only: false,
        }
    }

    /// Create a renderer with colors disabled
    pub fn no_colors() -> Self {
        Self {
            console: Console::no_colors(),
            ascii_only: false,
        }
    }

    /// Create a renderer writing through a specific console
    pub fn with_console(console: Console) -> Self {
        Self {
            console,
            ascii_only: false,
        }
    }

    /// Restrict output to ASCII: no box-drawing connectors, no glyphs.
    pub fn ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    /// Render the tree form as a sequence of output blocks, one per visual
    /// paragraph; blocks may themselves span multiple lines.
    pub fn render_lines(&self, diagnostic: &Diagnostic) -> Vec<String> {
        let style = diagnostic.style();
        let colored = Style::new().fg(style.color);
        let mut lines = Vec::new();

        let header = StyledText::styled(style.name, colored.bold())
            .concat(&StyledText::from(": "))
            .concat(&StyledText::styled(diagnostic.code(), Style::new().bold()));
        lines.push(header.render(&self.console));
        lines.push(String::new());

        if !self.ascii_only {
            self.render_unicode_body(diagnostic, colored, &mut lines);
        } else {
            lines.push(diagnostic.message().render(&self.console));
            if !diagnostic.causes().is_empty() {
                lines.push(String::new());
                for cause in diagnostic.causes() {
                    lines.push(cause.render(&self.console));
                }
            }
        }

        if diagnostic.note_stmt().is_some() || diagnostic.hint_stmt().is_some() {
            lines.push(String::new());
        }
        if let Some(note) = diagnostic.note_stmt() {
            lines.push(self.render_statement(note, "note", Color::Magenta));
        }
        if let Some(hint) = diagnostic.hint_stmt() {
            lines.push(self.render_statement(hint, "hint", Color::Cyan));
        }

        if let Some(link) = diagnostic.details_link() {
            lines.push(String::new());
            lines.push(format!("For more details, see {link}"));
        }

        lines
    }

    /// Render the tree form as a single string with a trailing line break.
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = self.render_lines(diagnostic).join("\n");
        output.push('\n');
        output
    }

    /// The message and cause tree, with connector glyphs.
    fn render_unicode_body(
        &self,
        diagnostic: &Diagnostic,
        colored: Style,
        lines: &mut Vec<String>,
    ) {
        let style = diagnostic.style();
        let space = StyledText::from(" ");
        let glyph = StyledText::styled(style.unicode_symbol.to_string(), colored).concat(&space);

        if let Some((last, interior)) = diagnostic.causes().split_last() {
            let bar_indent = StyledText::styled("│", colored).concat(&space);
            lines.push(
                prefix_spanned(diagnostic.message(), &glyph, &bar_indent)
                    .render(&self.console),
            );

            let branch = StyledText::styled("├─>", colored).concat(&space);
            let branch_indent = StyledText::styled("│  ", colored).concat(&space);
            for cause in interior {
                lines.push(
                    prefix_spanned(cause, &branch, &branch_indent).render(&self.console),
                );
            }

            let corner = StyledText::styled("╰─>", colored).concat(&space);
            let corner_indent = StyledText::styled("   ", colored).concat(&space);
            lines.push(prefix_spanned(last, &corner, &corner_indent).render(&self.console));
        } else {
            lines.push(
                prefix_spanned(diagnostic.message(), &glyph, &StyledText::from("  "))
                    .render(&self.console),
            );
        }
    }

    /// A note/hint block: bold-colored label, six-space continuation indent.
    fn render_statement(&self, stmt: &StyledText, label: &str, color: Color) -> String {
        let prefix = StyledText::styled(label, Style::new().fg(color).bold())
            .concat(&StyledText::from(": "));
        prefix_spanned(stmt, &prefix, &StyledText::from(STMT_INDENT)).render(&self.console)
    }
}

impl Default for DiagnosticRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticParams;
    use crate::style::ERROR;

    fn diagnostic(causes: Vec<&str>) -> Diagnostic {
        ERROR
            .diagnostic(DiagnosticParams {
                code: Some("missing-argument".to_string()),
                message: StyledText::from("Bad missing-argument!"),
                causes: causes.into_iter().map(StyledText::from).collect(),
                hint_stmt: None,
                note_stmt: None,
            })
            .unwrap()
    }

    #[test]
    fn plain_minimal_scenario() {
        let rendered = render_plain(&diagnostic(vec![]));
        assert_eq!(rendered, "missing-argument\n\nBad missing-argument!\n");
    }

    #[test]
    fn display_matches_plain_form() {
        let diagnostic = diagnostic(vec!["why"]);
        assert_eq!(diagnostic.to_string(), render_plain(&diagnostic));
    }

    #[test]
    fn plain_causes_section() {
        let rendered = render_plain(&diagnostic(vec!["first", "second"]));
        assert_eq!(
            rendered,
            "missing-argument\n\nBad missing-argument!\n\nCaused by:\n--> first\n--> second\n"
        );
    }

    #[test]
    fn tree_without_causes_has_no_connectors() {
        let rendered = DiagnosticRenderer::no_colors().render(&diagnostic(vec![]));
        assert_eq!(
            rendered,
            "error: missing-argument\n\n× Bad missing-argument!\n"
        );
        assert!(!rendered.contains('├'));
        assert!(!rendered.contains('╰'));
    }

    #[test]
    fn tree_marks_only_the_last_cause_with_the_corner() {
        let rendered = DiagnosticRenderer::no_colors().render(&diagnostic(vec!["first", "second"]));
        assert_eq!(
            rendered,
            "error: missing-argument\n\
             \n\
             × Bad missing-argument!\n\
             ├─> first\n\
             ╰─> second\n"
        );
        assert_eq!(rendered.matches("╰─>").count(), 1);
        assert_eq!(rendered.matches("├─>").count(), 1);
        assert!(rendered.find("├─> first").unwrap() < rendered.find("╰─> second").unwrap());
    }

    #[test]
    fn tree_single_cause_uses_only_the_corner() {
        let rendered = DiagnosticRenderer::no_colors().render(&diagnostic(vec!["only"]));
        assert!(rendered.contains("╰─> only"));
        assert!(!rendered.contains("├─>"));
    }

    #[test]
    fn ascii_collapses_the_tree_to_paragraphs() {
        let renderer = DiagnosticRenderer::no_colors().ascii_only(true);
        let rendered = renderer.render(&diagnostic(vec!["first", "second"]));
        assert_eq!(
            rendered,
            "error: missing-argument\n\
             \n\
             Bad missing-argument!\n\
             \n\
             first\n\
             second\n"
        );
        for glyph in ['×', '│', '├', '╰', '─'] {
            assert!(!rendered.contains(glyph), "unexpected {glyph:?}");
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let diagnostic = diagnostic(vec!["first", "second"]);
        let renderer = DiagnosticRenderer::no_colors();
        assert_eq!(renderer.render(&diagnostic), renderer.render(&diagnostic));
        assert_eq!(render_plain(&diagnostic), render_plain(&diagnostic));
    }

    #[test]
    fn colored_header_carries_sgr_codes() {
        let renderer = DiagnosticRenderer::with_console(Console::force_colors());
        let lines = renderer.render_lines(&diagnostic(vec![]));
        assert_eq!(
            lines[0],
            "\x1b[1;31merror\x1b[0m: \x1b[1mmissing-argument\x1b[0m"
        );
    }

    #[test]
    fn multi_line_message_wraps_under_the_bar() {
        let diagnostic = ERROR
            .diagnostic(DiagnosticParams {
                code: Some("wrapped".to_string()),
                message: StyledText::from("first line\nsecond line"),
                causes: vec![StyledText::from("why")],
                hint_stmt: None,
                note_stmt: None,
            })
            .unwrap();
        let rendered = DiagnosticRenderer::no_colors().render(&diagnostic);
        assert!(rendered.contains("× first line\n│ second line\n"));
    }
}
