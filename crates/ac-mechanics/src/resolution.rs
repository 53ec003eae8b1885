//! The NODE dice resolution procedure.
//!
//! A test rolls a pool of d6 equal to the absolute value of the base
//! score, plus one mandatory oversight die. Faces of 5 or 6 are successes,
//! 1 through 4 failures; the oversight die counts in both tallies. With a
//! negative base, failures cancel successes (floored at zero); with a
//! non-negative base, failures are ignored outright. The oversight die
//! also checks, independently of pass/fail, whether the test drew
//! attention.

use std::fmt;

use serde::{Deserialize, Serialize};

use ac_core::Skill;

use crate::derivation::DerivedSnapshot;
use crate::dice::DieRoller;
use crate::error::{MechError, MechResult};

/// Lowest face that counts as a success.
const SUCCESS_MIN: u8 = 5;

/// A single test to resolve. Constructed per test, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequest {
    /// Signed base score: skill score plus equipment bonus plus
    /// situational modifier. The sign decides whether failures cancel
    /// successes.
    pub base: i32,
    /// Net successes needed to pass. Zero passes trivially.
    pub difficulty: u32,
    /// Oversight-die face at or above which attention triggers, 2..=6.
    pub attention_threshold: u8,
}

impl RollRequest {
    /// Build a request for a skill test from a derived snapshot plus
    /// situational inputs.
    pub fn for_skill(
        snapshot: &DerivedSnapshot,
        skill: Skill,
        difficulty: u32,
        equipment_bonus: i32,
        modifier: i32,
    ) -> Self {
        Self {
            base: snapshot.skill_score(skill) + equipment_bonus + modifier,
            difficulty,
            attention_threshold: snapshot.attention_threshold,
        }
    }
}

/// Everything a test produced, raw faces included.
///
/// Per-die results are kept for display and audit; nothing is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    /// Number of pool dice rolled (|base|).
    pub pool_size: u32,
    /// Faces of the pool dice, in draw order. Empty when the base was 0.
    pub pool: Vec<u8>,
    /// Face of the oversight die.
    pub oversight: u8,
    /// Successes across pool and oversight dice.
    pub successes: u32,
    /// Failures across pool and oversight dice.
    pub failures: u32,
    /// Successes after sign handling.
    pub net_successes: u32,
    /// Whether net successes met the difficulty.
    pub passed: bool,
    /// Whether the oversight die met the attention threshold.
    pub attention: bool,
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.pool.iter().map(u8::to_string).collect();
        write!(
            f,
            "pool [{}] oversight {}: {} net, {}",
            faces.join(", "),
            self.oversight,
            self.net_successes,
            if self.passed { "passed" } else { "failed" },
        )?;
        if self.attention {
            write!(f, " (attention)")?;
        }
        Ok(())
    }
}

/// Resolve a test against an injected die roller.
///
/// Draws `|base|` pool dice (zero is fine) and exactly one oversight die,
/// in two roller calls. Each call is one atomic request-response step: the
/// outcome is computed from exactly what the roller returned, with no
/// retry, partial consumption, or caching. Pool size is not bounded above;
/// a large base draws that many dice.
pub fn resolve(request: &RollRequest, roller: &mut dyn DieRoller) -> MechResult<RollOutcome> {
    let pool_size = request.base.unsigned_abs();
    let pool = if pool_size > 0 {
        draw(roller, pool_size)?
    } else {
        Vec::new()
    };
    let oversight = draw(roller, 1)?[0];

    let successes = count_successes(&pool) + u32::from(oversight >= SUCCESS_MIN);
    let failures = count_failures(&pool) + u32::from(oversight < SUCCESS_MIN);

    // A negative base works against its own competence: failures cancel
    // successes, floored at zero. A non-negative base ignores failures.
    let net_successes = if request.base < 0 {
        successes.saturating_sub(failures)
    } else {
        successes
    };

    Ok(RollOutcome {
        pool_size,
        pool,
        oversight,
        successes,
        failures,
        net_successes,
        passed: net_successes >= request.difficulty,
        attention: oversight >= request.attention_threshold,
    })
}

/// Draw `count` dice and verify the roller held up its contract.
fn draw(roller: &mut dyn DieRoller, count: u32) -> MechResult<Vec<u8>> {
    let faces = roller.roll(count)?;
    if faces.len() != count as usize {
        return Err(MechError::ShortDraw {
            requested: count,
            got: faces.len(),
        });
    }
    if let Some(&bad) = faces.iter().find(|&&face| !(1..=6).contains(&face)) {
        return Err(MechError::FaceOutOfRange(bad));
    }
    Ok(faces)
}

fn count_successes(faces: &[u8]) -> u32 {
    faces.iter().filter(|&&face| face >= SUCCESS_MIN).count() as u32
}

fn count_failures(faces: &[u8]) -> u32 {
    faces.iter().filter(|&&face| face < SUCCESS_MIN).count() as u32
}
