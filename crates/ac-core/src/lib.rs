//! Core data types for the Alpha Complex mechanics engine.
//!
//! This crate defines the plain values that flow into and out of the
//! mechanics engine: the fixed stat/skill/wound/clearance key sets, a
//! character's raw attributes, and equipment items. It performs no I/O —
//! the host document layer owns the data and hands it in, optionally via
//! [`CharacterAttributes::from_json`].

/// Character attributes and host-document ingestion.
pub mod attributes;
/// Equipment items and bonus totalling.
pub mod equipment;
/// Error types used throughout the crate.
pub mod error;
/// Security clearances and service groups.
pub mod identity;
/// The sixteen skill keys.
pub mod skill;
/// The four core stat keys.
pub mod stat;
/// Wound levels.
pub mod wound;

/// Re-export attribute types.
pub use attributes::CharacterAttributes;
/// Re-export equipment types.
pub use equipment::{Equipment, EquipmentCategory, total_bonus};
/// Re-export error types.
pub use error::{AcError, AcResult};
/// Re-export identity types.
pub use identity::{Clearance, ServiceGroup};
/// Re-export the skill key.
pub use skill::Skill;
/// Re-export the stat key.
pub use stat::Stat;
/// Re-export the wound level key.
pub use wound::WoundLevel;
