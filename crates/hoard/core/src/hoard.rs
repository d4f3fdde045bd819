//! Hoard model: a named group of identical creatures tracked as
//! independent hit-point pools under one label.
//!
//! Each member of a hoard carries its own remaining HP, which lets area
//! damage kill some individuals outright while leaving one survivor
//! partially wounded. Zero-HP members are pruned before the pool is ever
//! observed externally: no live creature is reported with 0 HP.

use core::fmt;

use crate::error::InvalidInput;

// ============================================================================
// Size Category
// ============================================================================

/// Creature size category, smallest to largest.
///
/// Size determines the per-creature damage multiplier for area effects:
/// the smaller the creature, the more of them fit inside the same area,
/// so the group as a whole takes proportionally more damage.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SizeCategory {
    /// Tiny - rats, imps. Double damage from area effects.
    Tiny,
    /// Small - goblins, kobolds.
    Small,
    /// Medium - humans, orcs. Boundary layers fall back to this variant
    /// for unrecognized size text (multiplier 1, the reference default).
    #[default]
    Medium,
    /// Large - ogres, horses.
    Large,
    /// Huge - giants, young dragons.
    Huge,
    /// Gargantuan - ancient dragons, krakens.
    Gargantuan,
}

impl SizeCategory {
    /// Damage multiplier applied to area damage against a hoard of this
    /// size.
    ///
    /// | Size | Multiplier |
    /// |---|---|
    /// | Tiny | 2 |
    /// | Small | 1 |
    /// | Medium | 1 |
    /// | Large | 0.5 |
    /// | Huge | 1/3 |
    /// | Gargantuan | 0.25 |
    pub const fn damage_multiplier(self) -> f64 {
        match self {
            Self::Tiny => 2.0,
            Self::Small | Self::Medium => 1.0,
            Self::Large => 0.5,
            Self::Huge => 1.0 / 3.0,
            Self::Gargantuan => 0.25,
        }
    }
}

// ============================================================================
// Hoard
// ============================================================================

/// A named collection of identical creatures with independent remaining
/// hit points.
///
/// # Invariants
///
/// - Every stored member value is > 0; dead members are pruned by the
///   damage resolver before the pool is observed again.
/// - A hoard is mutated only through damage resolution
///   ([`resolve_area_damage`](crate::combat::resolve_area_damage)), and by
///   exactly one resolution at a time. Once [`is_destroyed`](Self::is_destroyed)
///   returns true the caller is expected to discard the hoard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hoard {
    name: String,
    size: SizeCategory,
    hp_per: u32,
    pub(crate) members: Vec<u32>,
}

impl Hoard {
    /// Creates a hoard of `count` creatures, each starting at `hp_per`
    /// hit points.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `count` or `hp_per` is zero. Validation
    /// happens before any allocation; a failed creation has no effect.
    pub fn new(
        name: impl Into<String>,
        count: u32,
        size: SizeCategory,
        hp_per: u32,
    ) -> Result<Self, InvalidInput> {
        if count == 0 {
            return Err(InvalidInput::NonPositiveCount);
        }
        if hp_per == 0 {
            return Err(InvalidInput::NonPositiveHitPoints);
        }

        Ok(Self {
            name: name.into(),
            size,
            hp_per,
            members: vec![hp_per; count as usize],
        })
    }

    /// Display label shared by all members.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size category of every creature in the hoard.
    pub fn size(&self) -> SizeCategory {
        self.size
    }

    /// Starting hit points per creature.
    pub fn hp_per(&self) -> u32 {
        self.hp_per
    }

    /// Remaining HP values, one per living creature.
    pub fn members(&self) -> &[u32] {
        &self.members
    }

    /// Number of currently-alive members.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Sum of remaining HP across all living members. O(count).
    pub fn total_hp(&self) -> u64 {
        self.members.iter().map(|&hp| u64::from(hp)).sum()
    }

    /// True once every member has been killed; the whole hoard should then
    /// be discarded.
    pub fn is_destroyed(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for Hoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (x{}, {}, {} HP each, {} HP total)",
            self.name,
            self.count(),
            self.size,
            self.hp_per,
            self.total_hp()
        )
    }
}
