//! Error and diagnostic types for the Trellis engine.

use crate::values::RawValue;
use thiserror::Error;

/// Failures of the embedding host integration.
///
/// Malformed declarative input never produces one of these; they mean the
/// host handed the engine something it structurally cannot work with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Host cannot produce an attribute name from key {key}")]
    UnnameableKey { key: String },
}

/// A non-fatal finding recorded while composing constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Both an anchor and a vertical alignment were given; neither was applied.
    ConflictingAlignment { anchor: RawValue, vertical_align: RawValue },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::ConflictingAlignment { anchor, vertical_align } => write!(
                f,
                "anchor {:?} combined with vertical alignment {:?} is not supported; anchor left unchanged",
                anchor, vertical_align
            ),
        }
    }
}
