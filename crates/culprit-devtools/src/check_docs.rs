//! Check that every diagnostic code in the source has a documentation entry.
//!
//! Mismatches are reported the only honest way a diagnostics toolkit can:
//! as a diagnostic, with one cause per kind of mismatch, propagated through
//! [`DiagnosticError`].

use std::path::Path;

use anyhow::Result;
use culprit_core::{
    Color, Console, Diagnostic, DiagnosticError, DiagnosticParams, ERROR, Style, StyledText,
};

use crate::scan::{CodeLocations, find_code_headings_in_docs, find_codes_in_sources};

/// Scan `source` and `docs_index`, diff the code sets, and fail with a
/// rendered-ready diagnostic when they disagree.
///
/// `fail_on_extra` controls whether documentation headings with no matching
/// code in the source are themselves an error; undocumented codes always
/// are.
pub fn check(
    source: &Path,
    docs_index: &Path,
    verbose: bool,
    fail_on_extra: bool,
    console: &Console,
) -> Result<()> {
    let code_codes = find_codes_in_sources(source)?;
    let doc_codes = find_code_headings_in_docs(docs_index)?;

    println!("Found {} codes in the source code.", code_codes.len());
    println!("Found {} codes in the documentation.", doc_codes.len());
    if verbose {
        print_listing(console, "codes in the source code", &code_codes);
        print_listing(
            console,
            &format!("headings in {}", docs_index.display()),
            &doc_codes,
        );
    }

    if let Some(diagnostic) = classify(&code_codes, &doc_codes, fail_on_extra) {
        return Err(DiagnosticError(diagnostic).into());
    }

    println!(
        "{}",
        console.colorize("All error codes in code are documented!", Color::Green)
    );
    if fail_on_extra {
        println!(
            "{}",
            console.colorize("All error codes in documentation exist in code!", Color::Green)
        );
    }
    Ok(())
}

/// Diff the two code sets and build the failure diagnostic, if any.
pub fn classify(
    code_codes: &CodeLocations,
    doc_codes: &CodeLocations,
    fail_on_extra: bool,
) -> Option<Diagnostic> {
    let undocumented: Vec<&String> = code_codes
        .keys()
        .filter(|code| !doc_codes.contains_key(*code))
        .collect();
    let extra: Vec<&String> = if fail_on_extra {
        doc_codes
            .keys()
            .filter(|code| !code_codes.contains_key(*code))
            .collect()
    } else {
        Vec::new()
    };

    if undocumented.is_empty() && extra.is_empty() {
        return None;
    }

    let mut causes = Vec::new();
    if !undocumented.is_empty() {
        causes.push(format_listing(&undocumented, code_codes, "undocumented"));
    }
    if !extra.is_empty() {
        causes.push(format_listing(&extra, doc_codes, "extra"));
    }

    let (code, message) = match (!undocumented.is_empty(), !extra.is_empty()) {
        (true, true) => (
            "undocumented-and-extra-codes",
            "Found undocumented and extra codes!",
        ),
        (true, false) => ("undocumented-codes", "Found undocumented codes!"),
        (false, true) => ("extra-codes", "Found extra codes!"),
        (false, false) => unreachable!("at least one mismatch kind is non-empty"),
    };

    let diagnostic = ERROR
        .diagnostic(DiagnosticParams {
            code: Some(code.to_string()),
            message: StyledText::from(message),
            causes,
            hint_stmt: None,
            note_stmt: None,
        })
        .expect("report codes are valid");
    Some(diagnostic)
}

/// One cause block: a count headline, then each code with its locations.
fn format_listing(names: &[&String], codes: &CodeLocations, kind: &str) -> StyledText {
    let mut listing = StyledText::styled(
        format!("{} {kind}:", names.len()),
        Style::new().fg(Color::Red),
    );
    for name in names {
        listing = listing
            .concat(&StyledText::from("\n"))
            .concat(&StyledText::styled(
                format!("  {name}"),
                Style::new().fg(Color::Magenta),
            ));
        for (file, line) in &codes[*name] {
            listing = listing
                .concat(&StyledText::from("\n    from "))
                .concat(&StyledText::styled(
                    file.display().to_string(),
                    Style::new().fg(Color::Blue),
                ))
                .concat(&StyledText::from(":"))
                .concat(&StyledText::styled(
                    line.to_string(),
                    Style::new().fg(Color::Cyan),
                ));
        }
    }
    listing
}

fn print_listing(console: &Console, title: &str, codes: &CodeLocations) {
    let rule = "─".repeat(console.max_width().min(80));
    println!("{}", console.colorize(&rule, Color::Dim));
    println!("{title}");
    for (code, locations) in codes {
        println!("  {}", console.colorize(code, Color::Green));
        for (file, line) in locations {
            println!(
                "    {}:{}",
                console.colorize(&file.display().to_string(), Color::Blue),
                console.colorize(&line.to_string(), Color::Cyan)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn locations(entries: &[(&str, &[(&str, usize)])]) -> CodeLocations {
        entries
            .iter()
            .map(|(code, locs)| {
                (
                    code.to_string(),
                    locs.iter()
                        .map(|(file, line)| (PathBuf::from(file), *line))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn consistent_sets_produce_no_diagnostic() {
        let codes = locations(&[("shared-code", &[("src/lib.rs", 3)])]);
        let docs = locations(&[("shared-code", &[("docs/index.md", 10)])]);
        assert!(classify(&codes, &docs, true).is_none());
    }

    #[test]
    fn undocumented_codes_are_reported() {
        let codes = locations(&[("lonely-code", &[("src/lib.rs", 3)])]);
        let docs = CodeLocations::new();

        let diagnostic = classify(&codes, &docs, true).unwrap();
        assert_eq!(diagnostic.code(), "undocumented-codes");
        assert_eq!(diagnostic.causes().len(), 1);
        let cause = diagnostic.causes()[0].plain();
        assert!(cause.starts_with("1 undocumented:"));
        assert!(cause.contains("  lonely-code"));
        assert!(cause.contains("    from src/lib.rs:3"));
    }

    #[test]
    fn extra_headings_are_reported_when_enabled() {
        let codes = CodeLocations::new();
        let docs = locations(&[("stale-code", &[("docs/index.md", 7)])]);

        let diagnostic = classify(&codes, &docs, true).unwrap();
        assert_eq!(diagnostic.code(), "extra-codes");
        assert!(diagnostic.causes()[0].plain().contains("stale-code"));
    }

    #[test]
    fn extra_headings_are_ignored_when_disabled() {
        let codes = CodeLocations::new();
        let docs = locations(&[("stale-code", &[("docs/index.md", 7)])]);
        assert!(classify(&codes, &docs, false).is_none());
    }

    #[test]
    fn both_kinds_combine_into_one_diagnostic() {
        let codes = locations(&[("lonely-code", &[("src/lib.rs", 3)])]);
        let docs = locations(&[("stale-code", &[("docs/index.md", 7)])]);

        let diagnostic = classify(&codes, &docs, true).unwrap();
        assert_eq!(diagnostic.code(), "undocumented-and-extra-codes");
        assert_eq!(diagnostic.causes().len(), 2);
        assert!(diagnostic.causes()[0].plain().contains("undocumented"));
        assert!(diagnostic.causes()[1].plain().contains("extra"));
    }
}
