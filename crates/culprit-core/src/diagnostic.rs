//! The diagnostic entity: a validated, immutable report of one problem.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CulpritError;
use crate::result::Result;
use crate::style::{DiagnosticStyle, DiagnosticVariant};
use crate::text::StyledText;

/// Codes are kebab-case and start with a letter: a "name" segment of letters
/// and numbers, then any number of dash-separated "name-or-number" segments.
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*(-[A-Za-z0-9]+)*$").expect("code pattern compiles")
});

/// Whether `code` is a valid diagnostic code.
///
/// Exposed for tooling that scans for codes elsewhere (documentation
/// indexes, source scanners) and needs to agree with the constructor.
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Construction input for a [`Diagnostic`].
///
/// A plain struct with no `Default`, so a caller must state every field —
/// in particular an absent hint is an explicit `hint_stmt: None`, not an
/// omission.
#[derive(Debug, Clone)]
pub struct DiagnosticParams {
    /// Explicit code; falls back to the variant's default when `None`.
    pub code: Option<String>,
    /// The headline description.
    pub message: StyledText,
    /// Underlying reasons, innermost first; rendered in list order.
    pub causes: Vec<StyledText>,
    /// An actionable suggestion for what the reader might do next.
    pub hint_stmt: Option<StyledText>,
    /// Supplementary context that is not itself a cause.
    pub note_stmt: Option<StyledText>,
}

/// One structured report of a problem.
///
/// Constructed through [`DiagnosticVariant::diagnostic`], which validates
/// everything up front; a value of this type is immutable and always
/// renderable.
#[derive(Clone)]
pub struct Diagnostic {
    variant: &'static str,
    code: String,
    message: StyledText,
    causes: Vec<StyledText>,
    hint_stmt: Option<StyledText>,
    note_stmt: Option<StyledText>,
    style: DiagnosticStyle,
    details_link: Option<String>,
}

impl DiagnosticVariant {
    /// Build a diagnostic of this variant, validating as we go.
    ///
    /// Resolution and validation order: the explicit code wins over the
    /// variant default and one of the two must exist; the code must be
    /// kebab-case; the variant must declare a style; a declared docs-index
    /// template must contain the `{code}` placeholder, which is substituted
    /// once here to produce the details link.
    pub fn diagnostic(&self, params: DiagnosticParams) -> Result<Diagnostic> {
        let code = match params.code {
            Some(code) => code,
            None => self
                .default_code
                .map(str::to_string)
                .ok_or(CulpritError::MissingCode { variant: self.name })?,
        };
        if !is_valid_code(&code) {
            return Err(CulpritError::InvalidCode {
                variant: self.name,
                code,
            });
        }

        let style = self.style.ok_or(CulpritError::MissingStyle {
            variant: self.name,
        })?;

        let details_link = match self.docs_index {
            Some(template) => {
                if !template.contains("{code}") {
                    return Err(CulpritError::InvalidDocsIndex {
                        variant: self.name,
                        template: template.to_string(),
                    });
                }
                Some(template.replace("{code}", &code))
            }
            None => None,
        };

        tracing::debug!(variant = self.name, code = %code, "constructed diagnostic");

        Ok(Diagnostic {
            variant: self.name,
            code,
            message: params.message,
            causes: params.causes,
            hint_stmt: params.hint_stmt,
            note_stmt: params.note_stmt,
            style,
            details_link,
        })
    }
}

impl Diagnostic {
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &StyledText {
        &self.message
    }

    pub fn causes(&self) -> &[StyledText] {
        &self.causes
    }

    pub fn hint_stmt(&self) -> Option<&StyledText> {
        self.hint_stmt.as_ref()
    }

    pub fn note_stmt(&self) -> Option<&StyledText> {
        self.note_stmt.as_ref()
    }

    pub fn style(&self) -> DiagnosticStyle {
        self.style
    }

    pub fn details_link(&self) -> Option<&str> {
        self.details_link.as_deref()
    }

    /// A stable, exhaustive field-by-field representation.
    ///
    /// Every field appears in a fixed order even when absent (absent is a
    /// literal `None`), making this suitable for equality assertions.
    pub fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Debug for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}: code={:?}, message={:?}, causes={:?}, note_stmt={}, hint_stmt={}, details_link={}>",
            self.variant,
            self.code,
            self.message,
            self.causes,
            debug_optional(self.note_stmt.as_ref()),
            debug_optional(self.hint_stmt.as_ref()),
            debug_optional(self.details_link.as_ref()),
        )
    }
}

fn debug_optional<T: fmt::Debug>(value: Option<&T>) -> String {
    match value {
        Some(value) => format!("{value:?}"),
        None => "None".to_string(),
    }
}
