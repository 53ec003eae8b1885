//! The die-roller abstraction and its implementations.
//!
//! Every test in the NODE system uses six-sided dice. The draw itself is
//! the engine's single side-effecting capability and is injected as a
//! [`DieRoller`], so the resolution algorithm stays deterministic and
//! replayable under test.

pub mod roller;

pub use roller::{RngRoller, ScriptedRoller};

use crate::error::MechResult;

/// Number of faces on every die in the system.
pub const DIE_SIDES: u8 = 6;

/// A source of random die draws.
///
/// `roll(count)` returns `count` independent uniform faces in 1..=6. A
/// roller that cannot produce the requested draw must fail rather than
/// return a partial or fabricated result; the resolver treats each call as
/// one atomic request-response step and never retries.
pub trait DieRoller {
    /// Draw `count` dice, returning their faces.
    fn roll(&mut self, count: u32) -> MechResult<Vec<u8>>;
}
