//! Error types for chord label parsing and resolution.
//!
//! All failures are synchronous return-time errors; nothing is retried or
//! deferred. `InvalidLabel` is the everyday case (a label that matches no
//! grammar alternative); the two table errors are only reachable for tokens
//! constructed outside the grammar.

use thiserror::Error;

/// Errors surfaced by the chord label parser and the pitch-class resolver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// Input matches none of the four grammar alternatives
    #[error("not a valid chord label: '{0}'")]
    InvalidLabel(String),

    /// Degree token whose interval number falls outside the supported table (1-13)
    #[error("unknown interval in degree '{0}'")]
    UnknownInterval(String),

    /// Note token whose natural letter falls outside A-G
    #[error("unknown natural note in '{0}'")]
    UnknownNote(String),
}
