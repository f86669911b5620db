//! Presentation descriptors for diagnostic variants.

use crate::console::Color;

/// How one kind of diagnostic is presented: its label word, its color, and
/// the bullet glyphs used when there are no causes.
///
/// One descriptor exists per variant, is constructed at program start, and
/// is shared read-only by every diagnostic of that variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticStyle {
    pub name: &'static str,
    pub color: Color,
    pub ascii_symbol: char,
    pub unicode_symbol: char,
}

/// A variant descriptor: everything a kind of diagnostic fixes for all of
/// its instances.
///
/// Concrete variants declare their style, an optional default code, and an
/// optional documentation index template here, and every instance is built
/// through [`DiagnosticVariant::diagnostic`]. Instance-level arguments may
/// override the default code; nothing else is caller-settable.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticVariant {
    /// Short identifier used in construction-failure messages.
    pub name: &'static str,
    /// Code used when the caller does not supply one.
    pub default_code: Option<&'static str>,
    /// Presentation data. A variant without a style cannot construct
    /// diagnostics.
    pub style: Option<DiagnosticStyle>,
    /// URL template for the documentation index. Must contain a `{code}`
    /// placeholder, which is replaced with the instance's code.
    pub docs_index: Option<&'static str>,
}

/// The standard error variant.
pub const ERROR: DiagnosticVariant = DiagnosticVariant {
    name: "error",
    default_code: None,
    style: Some(DiagnosticStyle {
        name: "error",
        color: Color::Red,
        ascii_symbol: 'x',
        unicode_symbol: '×',
    }),
    docs_index: None,
};

/// The standard warning variant.
pub const WARNING: DiagnosticVariant = DiagnosticVariant {
    name: "warning",
    default_code: None,
    style: Some(DiagnosticStyle {
        name: "warning",
        color: Color::Yellow,
        ascii_symbol: '!',
        unicode_symbol: '!',
    }),
    docs_index: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_variants_declare_styles() {
        let error = ERROR.style.expect("error style");
        assert_eq!(error.name, "error");
        assert_eq!(error.color, Color::Red);
        assert_eq!(error.unicode_symbol, '×');

        let warning = WARNING.style.expect("warning style");
        assert_eq!(warning.name, "warning");
        assert_eq!(warning.color, Color::Yellow);
        assert_eq!(warning.ascii_symbol, '!');
    }
}
