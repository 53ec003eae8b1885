//! Production and replay die rollers.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DIE_SIDES, DieRoller};
use crate::error::{MechError, MechResult};

/// A die roller backed by [`StdRng`].
#[derive(Debug)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    /// Create a roller seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller with a fixed seed, for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DieRoller for RngRoller {
    fn roll(&mut self, count: u32) -> MechResult<Vec<u8>> {
        Ok((0..count)
            .map(|_| self.rng.random_range(1..=DIE_SIDES))
            .collect())
    }
}

/// A die roller that replays a pre-programmed face sequence.
///
/// Draws consume faces front to back; a draw that would exhaust the script
/// fails with [`MechError::RollUnavailable`]. Used by scenario tests and by
/// hosts replaying a recorded session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    faces: VecDeque<u8>,
}

impl ScriptedRoller {
    /// Create a roller that will produce the given faces in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// How many scripted faces remain.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DieRoller for ScriptedRoller {
    fn roll(&mut self, count: u32) -> MechResult<Vec<u8>> {
        if self.faces.len() < count as usize {
            return Err(MechError::RollUnavailable(format!(
                "script exhausted: {count} dice requested, {} left",
                self.faces.len()
            )));
        }
        Ok(self.faces.drain(..count as usize).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_roller_produces_valid_faces() {
        let mut roller = RngRoller::seeded(42);
        let faces = roller.roll(100).unwrap();
        assert_eq!(faces.len(), 100);
        for face in faces {
            assert!((1..=DIE_SIDES).contains(&face));
        }
    }

    #[test]
    fn rng_roller_deterministic_with_seed() {
        let mut a = RngRoller::seeded(99);
        let mut b = RngRoller::seeded(99);
        assert_eq!(a.roll(10).unwrap(), b.roll(10).unwrap());
    }

    #[test]
    fn rng_roller_zero_draw() {
        let mut roller = RngRoller::seeded(7);
        assert!(roller.roll(0).unwrap().is_empty());
    }

    #[test]
    fn scripted_roller_replays_in_order() {
        let mut roller = ScriptedRoller::new([6, 2, 5, 4]);
        assert_eq!(roller.roll(3).unwrap(), vec![6, 2, 5]);
        assert_eq!(roller.remaining(), 1);
        assert_eq!(roller.roll(1).unwrap(), vec![4]);
    }

    #[test]
    fn scripted_roller_exhaustion_fails() {
        let mut roller = ScriptedRoller::new([3]);
        let err = roller.roll(2).unwrap_err();
        assert!(matches!(err, MechError::RollUnavailable(_)));
        // The failed draw must not have consumed anything it can't return.
        assert_eq!(roller.remaining(), 1);
    }
}
