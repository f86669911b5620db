//! Scanners that enumerate diagnostic codes and where they appear.
//!
//! Two sides feed the consistency check: codes declared or passed in Rust
//! sources (`default_code: Some("…")` on a variant descriptor, or
//! `code: Some("…")` in construction params), and codes used as headings in
//! Markdown documentation. Both scanners return the same shape — code to
//! ordered `(file, line)` occurrences — so the caller can diff the sets.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use culprit_core::is_valid_code;
use regex::Regex;
use walkdir::WalkDir;

/// Code to the locations where it appears, in deterministic order.
pub type CodeLocations = BTreeMap<String, Vec<(PathBuf, usize)>>;

/// `default_code: Some("…")` on a variant descriptor.
static DEFAULT_CODE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"default_code\s*:\s*Some\(\s*"([^"]+)""#).expect("declaration pattern compiles")
});

/// `code: Some("…")` in construction params. The leading word boundary
/// keeps this from also matching `default_code`.
static CODE_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bcode\s*:\s*Some\(\s*"([^"]+)""#).expect("argument pattern compiles")
});

/// An ATX heading; codes are headings whose entire text is a valid code.
static MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(.+?)\s*$").expect("heading pattern compiles"));

/// Find all diagnostic codes referenced in Rust source under `path`.
///
/// `path` may be a single `.rs` file or a directory to walk. Candidates
/// that do not pass the code pattern are logged and skipped.
pub fn find_codes_in_sources(path: &Path) -> Result<CodeLocations> {
    walk_files(path, &["rs"], find_codes_in_source_file)
}

/// Find all code-shaped headings in Markdown documentation under `path`.
pub fn find_code_headings_in_docs(path: &Path) -> Result<CodeLocations> {
    walk_files(path, &["md"], find_headings_in_doc_file)
}

/// Apply `scan_file` to `path` itself, or to every file under it with one
/// of the given extensions, merging the results.
fn walk_files(
    path: &Path,
    extensions: &[&str],
    scan_file: fn(&Path) -> Result<CodeLocations>,
) -> Result<CodeLocations> {
    if path.is_file() {
        return scan_file(path);
    }

    let mut codes = CodeLocations::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches_extension = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if !matches_extension {
            continue;
        }
        for (code, locations) in scan_file(entry.path())? {
            codes.entry(code).or_default().extend(locations);
        }
    }
    Ok(codes)
}

fn find_codes_in_source_file(file: &Path) -> Result<CodeLocations> {
    let source =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    let mut codes = CodeLocations::new();
    for (index, line) in source.lines().enumerate() {
        for (pattern, context) in [
            (&*DEFAULT_CODE_DECL, "variant declaration"),
            (&*CODE_ARGUMENT, "constructor argument"),
        ] {
            for capture in pattern.captures_iter(line) {
                let candidate = &capture[1];
                if !is_valid_code(candidate) {
                    tracing::warn!(
                        code = candidate,
                        context,
                        file = %file.display(),
                        line = index + 1,
                        "ignoring invalid code candidate"
                    );
                    continue;
                }
                codes
                    .entry(candidate.to_string())
                    .or_default()
                    .push((file.to_path_buf(), index + 1));
            }
        }
    }
    Ok(codes)
}

fn find_headings_in_doc_file(file: &Path) -> Result<CodeLocations> {
    let document =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    let mut codes = CodeLocations::new();
    let mut in_fence = false;
    for (index, line) in document.lines().enumerate() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let Some(capture) = MD_HEADING.captures(line) else {
            continue;
        };
        let heading = &capture[1];
        if is_valid_code(heading) {
            codes
                .entry(heading.to_string())
                .or_default()
                .push((file.to_path_buf(), index + 1));
        }
    }
    Ok(codes)
}
