//! Result type alias for diagnostic construction.

use crate::error::CulpritError;

/// Standard Result type for diagnostic construction
pub type Result<T> = std::result::Result<T, CulpritError>;
