//! Derived attribute pipeline and NODE dice resolution engine.
//!
//! Two collaborating components, both pure aside from one explicit
//! randomness boundary:
//!
//! - [`derive`](derivation::derive) turns a character's raw attributes and
//!   an immutable [`RuleTable`] into a fresh [`DerivedSnapshot`] of wound
//!   penalty, treason flag, attention threshold, and per-skill scores.
//! - [`resolve`](resolution::resolve) takes a [`RollRequest`] and an
//!   injected [`DieRoller`] and produces a [`RollOutcome`]: a variable-size
//!   d6 pool plus one mandatory oversight die, counted under sign-dependent
//!   rules, yielding a pass/fail verdict and an independent attention
//!   signal.
//!
//! Data flows one direction: attributes into `derive`, its snapshot
//! (combined with situational modifiers) into `resolve`. Neither component
//! holds state between calls.

/// The derivation pipeline from raw attributes to a snapshot.
pub mod derivation;
/// Die-roller abstraction and implementations.
pub mod dice;
/// Error types for the mechanics engine.
pub mod error;
/// The NODE dice resolution procedure.
pub mod resolution;
/// Rule tables and the standard preset.
pub mod rules;

pub use derivation::{DerivedSnapshot, derive};
pub use dice::{DIE_SIDES, DieRoller, RngRoller, ScriptedRoller};
pub use error::{MechError, MechResult};
pub use resolution::{RollOutcome, RollRequest, resolve};
pub use rules::{Defaults, RuleTable, SkillDef, TreasonFlag, WoundEntry};
