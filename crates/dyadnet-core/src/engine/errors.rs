//! Error types for dyadnet model operations.

use thiserror::Error;

/// Errors surfaced by graph, attribute, neighborhood, and registry operations.
///
/// Structural violations (out-of-range actors, malformed bulk loads, unknown
/// effect names) propagate immediately to the caller. Configuration issues
/// (an unrecognized attribute kind, a duplicate effect registration) are
/// handled locally with a diagnostic and never reach this type.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ModelError {
    /// An actor id outside `[1, N]` was passed to a structural operation.
    #[error("actor {actor} is out of range for a model over {n} actors")]
    ActorOutOfRange { actor: u32, n: u32 },

    /// A bulk load was given data of the wrong dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// An effect name was looked up that no registration ever claimed.
    #[error("no effect named '{0}' is registered")]
    UnknownEffect(String),
}
