use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four core stats.
///
/// Stats are pure keys; their display labels live in the rule table so
/// alternate tables can relabel them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    /// Mental acuity and knowledge.
    Brains,
    /// Social force and nerve.
    Chutzpah,
    /// Technical aptitude.
    Mechanics,
    /// Physical capability.
    Violence,
}

impl Stat {
    /// All stats in canonical display order.
    pub const ALL: [Self; 4] = [Self::Brains, Self::Chutzpah, Self::Mechanics, Self::Violence];

    /// The canonical key string for this stat.
    pub fn key(self) -> &'static str {
        match self {
            Self::Brains => "brains",
            Self::Chutzpah => "chutzpah",
            Self::Mechanics => "mechanics",
            Self::Violence => "violence",
        }
    }

    /// Parse a stat from its canonical key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.key() == s)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        for stat in Stat::ALL {
            assert_eq!(Stat::parse(stat.key()), Some(stat));
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(Stat::parse("luck"), None);
        assert_eq!(Stat::parse("Brains"), None); // keys are case-sensitive
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(Stat::Chutzpah.to_string(), "chutzpah");
    }

    #[test]
    fn serde_uses_keys() {
        let json = serde_json::to_string(&Stat::Violence).unwrap();
        assert_eq!(json, "\"violence\"");
        let back: Stat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stat::Violence);
    }
}
