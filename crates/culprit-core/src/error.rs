//! Error types for diagnostic construction.
//!
//! Everything here is raised synchronously at construction time, never while
//! rendering: a malformed diagnostic can never exist to be rendered.

use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// Validation failures from [`DiagnosticVariant::diagnostic`].
///
/// [`DiagnosticVariant::diagnostic`]: crate::style::DiagnosticVariant::diagnostic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CulpritError {
    /// No explicit code was given and the variant declares no default.
    #[error("cannot create {variant} diagnostic: `code` must be provided")]
    MissingCode { variant: &'static str },

    /// The resolved code fails the kebab-case pattern.
    #[error(
        "cannot create {variant} diagnostic: error code {code:?} must be \
         kebab-case and start with a letter"
    )]
    InvalidCode {
        variant: &'static str,
        code: String,
    },

    /// The constructing variant declares no style descriptor.
    #[error("cannot create {variant} diagnostic: the variant must declare a `style`")]
    MissingStyle { variant: &'static str },

    /// The variant's docs-index template lacks the `{code}` placeholder.
    #[error(
        "cannot create {variant} diagnostic: `docs_index` must contain a \
         {{code}} placeholder, got {template:?}"
    )]
    InvalidDocsIndex {
        variant: &'static str,
        template: String,
    },
}

/// Error kind enumeration for categorizing construction failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCode,
    InvalidCode,
    MissingStyle,
    InvalidDocsIndex,
}

impl CulpritError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CulpritError::MissingCode { .. } => ErrorKind::MissingCode,
            CulpritError::InvalidCode { .. } => ErrorKind::InvalidCode,
            CulpritError::MissingStyle { .. } => ErrorKind::MissingStyle,
            CulpritError::InvalidDocsIndex { .. } => ErrorKind::InvalidDocsIndex,
        }
    }
}

/// A diagnostic propagating as a failure.
///
/// The diagnostic itself is plain data; when a caller wants to return one
/// through an error channel, this thin wrapper carries it as the payload.
/// `Display` is the diagnostic's plain rendering.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DiagnosticError(pub Diagnostic);

impl DiagnosticError {
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.0
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        self.0
    }
}

impl From<Diagnostic> for DiagnosticError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(diagnostic)
    }
}
