//! Area-of-effect geometry.

// ============================================================================
// Shape
// ============================================================================

/// Area-of-effect shape of a spell.
///
/// Parsing via [`FromStr`](core::str::FromStr) is case-insensitive. There
/// is deliberately no fallback variant: text that matches none of these is
/// rejected at the marshalling boundary as
/// [`InvalidInput::UnknownShape`](crate::InvalidInput::UnknownShape).
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
pub enum Shape {
    /// Cone spreading from the caster.
    Cone,
    /// Cube with the given edge length.
    Cube,
    /// Cylinder with the given radius.
    Cylinder,
    /// Line with the given length.
    Line,
    /// Sphere with the given radius.
    Sphere,
}

impl Shape {
    /// Feet of linear dimension per unit of coverage multiplier.
    ///
    /// A 30 ft cone covers as much of a hoard as a 15 ft cube: the cone's
    /// dimension is divided by 10 where the cube's is divided by 5.
    pub const fn footprint_divisor(self) -> u32 {
        match self {
            Self::Cone => 10,
            Self::Cube | Self::Cylinder | Self::Sphere => 5,
            Self::Line => 30,
        }
    }
}

// ============================================================================
// Area Effect
// ============================================================================

/// An area of effect: a shape plus its linear dimension in feet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaEffect {
    /// Geometric shape of the effect.
    pub shape: Shape,
    /// Linear dimension in feet (cone length, cube edge, sphere radius, ...).
    /// Must be positive; validated by the resolver before any mutation.
    pub size_ft: u32,
}

impl AreaEffect {
    /// Creates an area effect of the given shape and dimension.
    pub const fn new(shape: Shape, size_ft: u32) -> Self {
        Self { shape, size_ft }
    }

    /// Coverage multiplier approximating how much of a hoard this effect
    /// blankets.
    ///
    /// # Formula
    ///
    /// ```text
    /// multiplier = size_ft / footprint_divisor(shape)
    /// ```
    pub fn coverage_multiplier(&self) -> f64 {
        f64::from(self.size_ft) / f64::from(self.shape.footprint_divisor())
    }
}
