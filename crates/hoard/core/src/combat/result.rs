//! Resolution outcome and the damage-resolution entry point.

use crate::error::InvalidInput;
use crate::hoard::Hoard;

use super::damage::{AreaDamage, allocate_damage, compute_damage};

/// Result of resolving one area-damage event against a hoard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Damage actually computed and applied.
    pub final_damage: u32,

    /// Creatures whose HP reached 0 during this resolution.
    pub killed: usize,

    /// Creatures left alive after pruning.
    pub survivors_remaining: usize,

    /// Sum of remaining HP across survivors.
    pub survivors_total_hp: u64,

    /// True iff no member survived. The caller is responsible for
    /// discarding a destroyed hoard.
    pub hoard_destroyed: bool,
}

/// Resolve an area-damage event against a hoard.
///
/// This is the main entry point for damage resolution. Steps, in order:
///
/// 1. Validate the request (spell size must be positive)
/// 2. Compute the final damage amount ([`compute_damage`])
/// 3. Distribute it across the member pool, weakest first
///    ([`allocate_damage`]), pruning the dead
/// 4. Assemble the outcome from the pruned pool
///
/// # Errors
///
/// Returns [`InvalidInput`] without mutating the hoard if the request is
/// malformed. Partial application never happens: either the full
/// resolution succeeds, or the hoard is untouched.
pub fn resolve_area_damage(
    hoard: &mut Hoard,
    attack: &AreaDamage,
) -> Result<DamageOutcome, InvalidInput> {
    if attack.area.size_ft == 0 {
        return Err(InvalidInput::NonPositiveSpellSize);
    }

    let final_damage = compute_damage(attack, hoard.size());
    let killed = allocate_damage(&mut hoard.members, final_damage);

    Ok(DamageOutcome {
        final_damage,
        killed,
        survivors_remaining: hoard.count(),
        survivors_total_hp: hoard.total_hp(),
        hoard_destroyed: hoard.is_destroyed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::aoe::{AreaEffect, Shape};
    use crate::combat::save::{GroupSave, SaveMode};
    use crate::hoard::SizeCategory;

    fn cube_attack(base: u32, size_ft: u32, mode: SaveMode, sections: u8) -> AreaDamage {
        AreaDamage::new(
            base,
            AreaEffect::new(Shape::Cube, size_ft),
            GroupSave::new(mode, sections),
        )
    }

    #[test]
    fn overwhelming_damage_destroys_the_hoard() {
        let mut hoard = Hoard::new("Goblin", 3, SizeCategory::Medium, 10).unwrap();
        let attack = cube_attack(40, 30, SaveMode::NoneOnSave, 0);

        let outcome = resolve_area_damage(&mut hoard, &attack).unwrap();

        assert_eq!(outcome.final_damage, 240);
        assert_eq!(outcome.killed, 3);
        assert_eq!(outcome.survivors_remaining, 0);
        assert_eq!(outcome.survivors_total_hp, 0);
        assert!(outcome.hoard_destroyed);
        assert!(hoard.is_destroyed());
    }

    #[test]
    fn partial_damage_kills_weakest_and_wounds_next() {
        let mut hoard = Hoard::new("Orc", 2, SizeCategory::Medium, 20).unwrap();
        // Wound one member down to 15 so the pool is [20, 15].
        hoard.members[1] = 15;

        // (5/5) * 18 = 18 with no size or save adjustment.
        let attack = cube_attack(18, 5, SaveMode::NoneOnSave, 0);
        let outcome = resolve_area_damage(&mut hoard, &attack).unwrap();

        assert_eq!(outcome.final_damage, 18);
        assert_eq!(outcome.killed, 1);
        assert_eq!(outcome.survivors_remaining, 1);
        assert_eq!(outcome.survivors_total_hp, 17);
        assert!(!outcome.hoard_destroyed);
        assert_eq!(hoard.members(), &[17]);
    }

    #[test]
    fn applied_damage_never_exceeds_pool_total() {
        let mut hoard = Hoard::new("Rat", 4, SizeCategory::Medium, 5).unwrap();
        let before = hoard.total_hp();
        let attack = cube_attack(1000, 30, SaveMode::NoneOnSave, 0);

        let outcome = resolve_area_damage(&mut hoard, &attack).unwrap();

        let applied = before - outcome.survivors_total_hp;
        assert!(applied <= u64::from(outcome.final_damage));
        assert!(applied <= before);
    }

    #[test]
    fn zero_final_damage_is_a_no_op() {
        let mut hoard = Hoard::new("Giant", 2, SizeCategory::Huge, 50).unwrap();
        // Full save against a negate-on-save spell: reduction 0.0.
        let attack = cube_attack(100, 20, SaveMode::NoneOnSave, 3);

        let outcome = resolve_area_damage(&mut hoard, &attack).unwrap();

        assert_eq!(outcome.final_damage, 0);
        assert_eq!(outcome.killed, 0);
        assert_eq!(outcome.survivors_remaining, 2);
        assert_eq!(outcome.survivors_total_hp, 100);
    }

    #[test]
    fn zero_spell_size_is_rejected_before_mutation() {
        let mut hoard = Hoard::new("Goblin", 3, SizeCategory::Small, 7).unwrap();
        let attack = cube_attack(40, 0, SaveMode::HalfOnSave, 1);

        assert_eq!(
            resolve_area_damage(&mut hoard, &attack),
            Err(InvalidInput::NonPositiveSpellSize)
        );
        // Untouched: same members in the same order.
        assert_eq!(hoard.members(), &[7, 7, 7]);
    }

    #[test]
    fn gargantuan_line_save_example() {
        let mut hoard = Hoard::new("Kraken", 1, SizeCategory::Gargantuan, 200).unwrap();
        let attack = AreaDamage::new(
            10,
            AreaEffect::new(Shape::Line, 30),
            GroupSave::new(SaveMode::HalfOnSave, 2),
        );

        let outcome = resolve_area_damage(&mut hoard, &attack).unwrap();

        // (30/30)*10 = 10, *0.25 = 2.5, *2/3 -> floor = 1
        assert_eq!(outcome.final_damage, 1);
        assert_eq!(outcome.survivors_total_hp, 199);
    }
}
