//! The line-prefix/indent engine.
//!
//! Both renderers present multi-line blocks where the first line begins with
//! a connector or label (`"--> "`, `"note: "`, `"├─> "`) and every following
//! line begins with a continuation indent. The two variants here differ in
//! what they preserve: [`prefix_plain`] produces bare text for the
//! non-interactive render, while [`prefix_spanned`] keeps every style span
//! intact and lets the prefix and indent carry styling of their own.

use crate::text::StyledText;

/// Prefix the first line of `text` and indent the remainder, as plain text.
///
/// The remainder is split off at the first line break and indented line by
/// line; blank remainder lines stay blank rather than gaining trailing
/// whitespace, and an empty segment is skipped entirely so an item with no
/// remainder does not produce a dangling indented empty line.
pub fn prefix_plain(text: &StyledText, prefix: &str, indent: &str) -> String {
    let plain = text.plain();
    let (first, rest) = match plain.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (plain.as_str(), ""),
    };

    let head = format!("{prefix}{first}");
    let body = indent_non_blank(rest, indent);

    [head, body]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent every line of `text` that contains non-whitespace characters.
fn indent_non_blank(text: &str, indent: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix the first line of `text` and indent the remainder, preserving
/// styling.
///
/// `prefix` and `indent` are styled literals in their own right, so connector
/// glyphs can carry color. Blank lines inside `text` survive as zero-length
/// segments, each still receiving the indent, and every original line keeps
/// its span boundaries untouched.
pub fn prefix_spanned(
    text: &StyledText,
    prefix: &StyledText,
    indent: &StyledText,
) -> StyledText {
    let lines = text.split_lines(true);
    let separator = StyledText::from("\n").concat(indent);
    let body = StyledText::join(&separator, &lines);
    prefix.concat(&body)
}
