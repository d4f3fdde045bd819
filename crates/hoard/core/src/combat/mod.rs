//! Area-damage resolution system.
//!
//! This module provides pure functions for resolving a single area-of-effect
//! damage event against a [`Hoard`](crate::Hoard). All logic is deterministic
//! and free of randomness: the number of hoard sections that succeeded their
//! saving throw is supplied by the caller, never rolled here.
//!
//! # Architecture
//!
//! - **Pure computation first**: `compute_damage` turns a request into a
//!   single integer damage amount without touching any state
//! - **Mutation last**: `resolve_area_damage` validates, computes, then
//!   applies the damage to the hoard's member pool in one pass
//! - **No partial application**: a failed resolution leaves the hoard
//!   untouched
//!
//! # Core Functions
//!
//! - `resolve_area_damage`: complete resolution (validate + compute + apply)
//! - `compute_damage`: shape/size/save multiplier pipeline
//! - `allocate_damage`: weakest-first distribution across member HP pools

pub mod aoe;
pub mod damage;
pub mod result;
pub mod save;

pub use aoe::{AreaEffect, Shape};
pub use damage::{AreaDamage, allocate_damage, compute_damage};
pub use result::{DamageOutcome, resolve_area_damage};
pub use save::{GroupSave, SaveMode};
