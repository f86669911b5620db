//! Culprit Core
//!
//! Core engine for building and rendering structured diagnostics: an error
//! or warning with a short message, an ordered chain of causes, an optional
//! hint and note, and an optional link to documentation. Diagnostics are
//! validated and frozen at construction, then rendered — as a plain linear
//! transcript or as a styled connector tree — without ever being mutated.

pub mod console;
pub mod diagnostic;
pub mod error;
pub mod prefix;
pub mod render;
pub mod result;
pub mod style;
pub mod text;

// Re-export commonly used types
pub use console::{Color, Console};
pub use diagnostic::{Diagnostic, DiagnosticParams, is_valid_code};
pub use error::{CulpritError, DiagnosticError, ErrorKind};
pub use render::{DiagnosticRenderer, render_plain};
pub use result::Result;
pub use style::{DiagnosticStyle, DiagnosticVariant, ERROR, WARNING};
pub use text::{Span, Style, StyledText};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("culprit=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
