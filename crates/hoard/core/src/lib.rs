//! Deterministic hoard combat rules shared across clients.
//!
//! `hoard-core` defines the canonical rules for tracking a group of
//! identical creatures ("hoard") and resolving area-of-effect damage
//! against it. The crate exposes exactly two entry points to its
//! collaborators: [`Hoard::new`] and [`combat::resolve_area_damage`].
//! Everything else is the typed data those entry points consume and
//! produce.
//!
//! The core is pure and synchronous: no I/O, no randomness, and no string
//! parsing on the resolution path. Front-ends own all input collection and
//! presentation and marshal user input into the typed API here.
pub mod combat;
pub mod error;
pub mod hoard;
pub use combat::{
    AreaDamage, AreaEffect, DamageOutcome, GroupSave, SaveMode, Shape, resolve_area_damage,
};
pub use error::InvalidInput;
pub use hoard::{Hoard, SizeCategory};
