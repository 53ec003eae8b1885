use std::fmt;

use serde::{Deserialize, Serialize};

/// A discrete health state.
///
/// Each level maps to a flat penalty on every derived skill score in the
/// rule table. [`WoundLevel::Dead`] carries a sentinel penalty meaning the
/// character cannot act.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum WoundLevel {
    /// Unhurt; no penalty.
    #[default]
    Fine,
    /// Lightly wounded.
    Hurt,
    /// Seriously wounded.
    Injured,
    /// Barely functional.
    Maimed,
    /// Awaiting the next clone.
    Dead,
}

impl WoundLevel {
    /// All wound levels from least to most severe.
    pub const ALL: [Self; 5] = [
        Self::Fine,
        Self::Hurt,
        Self::Injured,
        Self::Maimed,
        Self::Dead,
    ];

    /// The canonical key string for this wound level.
    pub fn key(self) -> &'static str {
        match self {
            Self::Fine => "fine",
            Self::Hurt => "hurt",
            Self::Injured => "injured",
            Self::Maimed => "maimed",
            Self::Dead => "dead",
        }
    }

    /// Parse a wound level from its canonical key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == s)
    }
}

impl fmt::Display for WoundLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fine() {
        assert_eq!(WoundLevel::default(), WoundLevel::Fine);
    }

    #[test]
    fn key_round_trip() {
        for level in WoundLevel::ALL {
            assert_eq!(WoundLevel::parse(level.key()), Some(level));
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(WoundLevel::parse("vaporized"), None);
    }

    #[test]
    fn ordered_by_severity() {
        assert!(WoundLevel::Fine < WoundLevel::Hurt);
        assert!(WoundLevel::Maimed < WoundLevel::Dead);
    }
}
