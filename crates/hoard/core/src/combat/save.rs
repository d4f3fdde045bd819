//! Group saving-throw reduction.
//!
//! A hoard saves as up to four notional "sections" rather than as
//! individuals. The caller reports how many sections (0-3) succeeded; the
//! tables here turn that count into a damage multiplier. Deriving the
//! section count from a d20 roll against ±5 bands around a DC is the
//! caller's business and is not implemented in this crate.

// ============================================================================
// Save Mode
// ============================================================================

/// What a successful saving throw does to incoming damage.
///
/// Exactly one mode applies to a given spell; marshalling layers reject
/// input that selects neither or both
/// ([`InvalidInput::AmbiguousSaveMode`](crate::InvalidInput::AmbiguousSaveMode)).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SaveMode {
    /// A successful save halves the damage.
    HalfOnSave,
    /// A successful save negates the damage entirely.
    NoneOnSave,
}

// ============================================================================
// Group Save
// ============================================================================

/// Reported outcome of a hoard's group saving throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSave {
    /// Save behavior of the spell being resolved.
    pub mode: SaveMode,
    /// Number of hoard sections that succeeded their save. Meaningful
    /// values are 0-3; anything else takes no reduction.
    pub sections_saved: u8,
}

impl GroupSave {
    /// Creates a group save outcome.
    pub const fn new(mode: SaveMode, sections_saved: u8) -> Self {
        Self {
            mode,
            sections_saved,
        }
    }

    /// Damage multiplier for this save outcome.
    ///
    /// | sections | HalfOnSave | NoneOnSave |
    /// |---|---|---|
    /// | 0 | 1.0 | 1.0 |
    /// | 1 | 5/6 | 2/3 |
    /// | 2 | 2/3 | 1/3 |
    /// | 3 | 0.5 | 0.0 |
    ///
    /// Section counts outside 0-3 fall back to 1.0 (no reduction).
    pub fn reduction(&self) -> f64 {
        match (self.mode, self.sections_saved) {
            (_, 0) => 1.0,
            (SaveMode::HalfOnSave, 1) => 5.0 / 6.0,
            (SaveMode::HalfOnSave, 2) => 2.0 / 3.0,
            (SaveMode::HalfOnSave, 3) => 0.5,
            (SaveMode::NoneOnSave, 1) => 2.0 / 3.0,
            (SaveMode::NoneOnSave, 2) => 1.0 / 3.0,
            (SaveMode::NoneOnSave, 3) => 0.0,
            _ => 1.0,
        }
    }
}
