//! Common error infrastructure for hoard-core.
//!
//! Every failure in this crate is an [`InvalidInput`]: a caller-supplied
//! value rejected during validation, before any hoard state is touched.
//! There are no retryable or transient failure modes — either a resolution
//! applies fully, or it fails and the hoard is untouched. Errors are
//! surfaced to the collaborator synchronously, never logged or swallowed
//! internally.

/// A caller input-validation defect.
///
/// The string-carrying variants ([`UnknownShape`](Self::UnknownShape),
/// [`MalformedNumber`](Self::MalformedNumber)) are constructed by the
/// marshalling boundary that turns user text into typed inputs; the
/// resolution path itself never parses strings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidInput {
    /// Creature count at hoard creation must be at least 1.
    #[error("creature count must be positive")]
    NonPositiveCount,

    /// Per-creature hit points at hoard creation must be at least 1.
    #[error("hit points per creature must be positive")]
    NonPositiveHitPoints,

    /// Area-of-effect linear dimension must be at least 1 foot.
    #[error("spell size must be positive")]
    NonPositiveSpellSize,

    /// Text did not name any known area-of-effect shape.
    ///
    /// Unlike creature size, an unknown shape is a hard error: defaulting
    /// an AoE shape has no grounded tabletop meaning.
    #[error("unknown area-of-effect shape: {0:?}")]
    UnknownShape(String),

    /// Neither or both save behaviors were selected.
    #[error("exactly one save behavior must be selected")]
    AmbiguousSaveMode,

    /// A numeric field could not be parsed.
    #[error("{field} must be a number")]
    MalformedNumber {
        /// Display label of the offending field.
        field: &'static str,
    },
}
