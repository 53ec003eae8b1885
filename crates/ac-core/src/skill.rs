use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the sixteen skills.
///
/// Like [`Stat`](crate::Stat), skills are pure keys. Which stat governs a
/// skill, and its display label, are properties of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    /// Knowing how the complex works.
    AlphaComplex,
    /// Navigating paperwork and procedure.
    Bureaucracy,
    /// Reading and manipulating people.
    Psychology,
    /// Applied research.
    Science,
    /// Lying convincingly.
    Bluff,
    /// Being likeable on purpose.
    Charm,
    /// Being threatening on purpose.
    Intimidate,
    /// Not being noticed.
    Stealth,
    /// Making things explode correctly.
    Demolition,
    /// Building and repairing.
    Engineer,
    /// Driving and piloting.
    Operate,
    /// Writing and breaking software.
    Program,
    /// Running, jumping, climbing.
    Athletics,
    /// Shooting things.
    Guns,
    /// Hitting things up close.
    Melee,
    /// Hitting things from a distance.
    Throw,
}

impl Skill {
    /// All skills in canonical display order (grouped by governing stat in
    /// the standard table).
    pub const ALL: [Self; 16] = [
        Self::AlphaComplex,
        Self::Bureaucracy,
        Self::Psychology,
        Self::Science,
        Self::Bluff,
        Self::Charm,
        Self::Intimidate,
        Self::Stealth,
        Self::Demolition,
        Self::Engineer,
        Self::Operate,
        Self::Program,
        Self::Athletics,
        Self::Guns,
        Self::Melee,
        Self::Throw,
    ];

    /// The canonical key string for this skill.
    pub fn key(self) -> &'static str {
        match self {
            Self::AlphaComplex => "alphaComplex",
            Self::Bureaucracy => "bureaucracy",
            Self::Psychology => "psychology",
            Self::Science => "science",
            Self::Bluff => "bluff",
            Self::Charm => "charm",
            Self::Intimidate => "intimidate",
            Self::Stealth => "stealth",
            Self::Demolition => "demolition",
            Self::Engineer => "engineer",
            Self::Operate => "operate",
            Self::Program => "program",
            Self::Athletics => "athletics",
            Self::Guns => "guns",
            Self::Melee => "melee",
            Self::Throw => "throw",
        }
    }

    /// Parse a skill from its canonical key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|skill| skill.key() == s)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_skills() {
        assert_eq!(Skill::ALL.len(), 16);
    }

    #[test]
    fn key_round_trip() {
        for skill in Skill::ALL {
            assert_eq!(Skill::parse(skill.key()), Some(skill));
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(Skill::parse("basketweaving"), None);
    }

    #[test]
    fn serde_uses_keys() {
        let json = serde_json::to_string(&Skill::AlphaComplex).unwrap();
        assert_eq!(json, "\"alphaComplex\"");
    }
}
