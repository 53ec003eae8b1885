//! A character's raw mechanical state, as owned by the host document layer.
//!
//! [`CharacterAttributes`] is the input to the derivation pipeline. It can
//! be built programmatically or ingested from the host's JSON document
//! shape via [`CharacterAttributes::from_json`]. Ingestion is lenient with
//! missing or unknown keys (editable source data passes through transient
//! invalid states) but strict with malformed numbers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AcError, AcResult};
use crate::skill::Skill;
use crate::stat::Stat;
use crate::wound::WoundLevel;

/// Default guns skill for a freshly decanted troubleshooter.
pub const GUNS_SKILL_DEFAULT: i32 = 2;

/// Raw character attributes: stats, skills, wound level, and treason stars.
///
/// Read-only to the engine; missing stat or skill entries read as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAttributes {
    /// Stat scores by stat key.
    pub stats: HashMap<Stat, i32>,
    /// Skill scores by skill key.
    pub skills: HashMap<Skill, i32>,
    /// Current wound level.
    pub wound_level: WoundLevel,
    /// Accumulated treason stars. May be transiently out of range; the
    /// derivation pipeline clamps it.
    pub treason_stars: i32,
}

impl CharacterAttributes {
    /// A freshly decanted troubleshooter: zero in everything except the
    /// mandatory guns training, unhurt, and (officially) loyal.
    pub fn troubleshooter() -> Self {
        Self {
            skills: HashMap::from([(Skill::Guns, GUNS_SKILL_DEFAULT)]),
            ..Self::default()
        }
    }

    /// The score for a stat, or 0 if absent.
    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// The score for a skill, or 0 if absent (untrained).
    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// Ingest attributes from the host's actor document shape.
    ///
    /// Reads `stats.<key>.value`, `skills.<key>.value`, `wounds.level`, and
    /// `resources.treasonStars.value`. Absent fields default (0 scores,
    /// `fine` wound level, 0 stars), as does an unknown wound-level string.
    /// A numeric field holding a fractional, non-finite, or non-numeric
    /// value fails with [`AcError::InvalidInput`] naming the field.
    pub fn from_json(doc: &Value) -> AcResult<Self> {
        let mut stats = HashMap::new();
        for stat in Stat::ALL {
            let path = format!("/stats/{}/value", stat.key());
            if let Some(value) = doc.pointer(&path) {
                stats.insert(stat, int_field(value, &path)?);
            }
        }

        let mut skills = HashMap::new();
        for skill in Skill::ALL {
            let path = format!("/skills/{}/value", skill.key());
            if let Some(value) = doc.pointer(&path) {
                skills.insert(skill, int_field(value, &path)?);
            }
        }

        let wound_level = doc
            .pointer("/wounds/level")
            .and_then(Value::as_str)
            .and_then(WoundLevel::parse)
            .unwrap_or_default();

        let treason_stars = match doc.pointer("/resources/treasonStars/value") {
            Some(value) => int_field(value, "/resources/treasonStars/value")?,
            None => 0,
        };

        Ok(Self {
            stats,
            skills,
            wound_level,
            treason_stars,
        })
    }
}

/// Read an integer from a JSON value, rejecting anything that is not an
/// exact integer in `i32` range.
fn int_field(value: &Value, field: &str) -> AcResult<i32> {
    let invalid = || AcError::InvalidInput {
        field: field.trim_start_matches('/').replace('/', "."),
    };
    match value {
        // An explicit null is the same as an absent field.
        Value::Null => Ok(0),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_err(|_| invalid())
            } else if let Some(f) = n.as_f64() {
                // serde_json stores 2.0 as a float; accept integral floats,
                // reject fractional and non-finite values.
                if f.is_finite()
                    && f.fract() == 0.0
                    && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&f)
                {
                    Ok(f as i32)
                } else {
                    Err(invalid())
                }
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}
