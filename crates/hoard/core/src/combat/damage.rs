//! Damage calculation and allocation.

use crate::hoard::SizeCategory;

use super::aoe::AreaEffect;
use super::save::GroupSave;

// ============================================================================
// Damage Request
// ============================================================================

/// A single area-damage event to resolve against a hoard.
///
/// Ephemeral input: built by the caller for one resolution and discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaDamage {
    /// Nominal damage of the spell before any group-scale adjustment.
    pub base_damage: u32,
    /// Shape and dimension of the effect.
    pub area: AreaEffect,
    /// Reported group saving-throw outcome.
    pub save: GroupSave,
}

impl AreaDamage {
    /// Creates an area-damage request.
    pub const fn new(base_damage: u32, area: AreaEffect, save: GroupSave) -> Self {
        Self {
            base_damage,
            area,
            save,
        }
    }
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Compute the total damage an area effect deals to a hoard.
///
/// # Formula
///
/// ```text
/// shape_damage    = coverage_multiplier(area) * base_damage
/// adjusted_damage = shape_damage * size_multiplier
/// final_damage    = floor(adjusted_damage * save_reduction)
/// ```
///
/// The result is truncated toward zero, not rounded. The intermediate
/// multipliers are fractional, so this is the one place in the crate where
/// floating point appears; everything downstream is integer arithmetic.
///
/// # Arguments
///
/// * `attack` - The damage request (base damage, area, save outcome)
/// * `size` - Size category of the defending hoard's creatures
///
/// # Returns
///
/// Total damage to distribute across the hoard's member pool.
pub fn compute_damage(attack: &AreaDamage, size: SizeCategory) -> u32 {
    let shape_damage = attack.area.coverage_multiplier() * f64::from(attack.base_damage);
    let adjusted_damage = shape_damage * size.damage_multiplier();
    let final_damage = adjusted_damage * attack.save.reduction();

    // Saturating cast: truncates toward zero, clamps the (unreachable in
    // practice) overflow case to u32::MAX.
    final_damage as u32
}

// ============================================================================
// Damage Allocation
// ============================================================================

/// Distribute `damage` across individual hit-point pools, weakest first.
///
/// The pool is sorted ascending in place, so overkill spillover is wasted
/// on the most depleted targets rather than the healthiest. Walking the
/// sorted pool: each member whose HP is covered by the remaining damage
/// dies and its HP is subtracted from the pool of remaining damage; the
/// first member the remaining damage cannot kill absorbs what is left and
/// the walk stops — damage never spills past the first survivor. Dead
/// members are pruned before returning.
///
/// Excess damage beyond the pool's total HP is simply wasted, never
/// carried over.
///
/// # Returns
///
/// Number of members killed.
pub fn allocate_damage(members: &mut Vec<u32>, damage: u32) -> usize {
    members.sort_unstable();

    let mut remaining = damage;
    let mut killed = 0;

    for hp in members.iter_mut() {
        if remaining >= *hp {
            remaining -= *hp;
            *hp = 0;
            killed += 1;
        } else {
            *hp -= remaining;
            break;
        }
    }

    members.retain(|&hp| hp > 0);
    killed
}
