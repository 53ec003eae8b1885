use std::fmt;

use serde::{Deserialize, Serialize};

/// A security clearance, from lowest (Infrared) to highest (Ultraviolet).
///
/// Clearance gates what equipment a citizen may legally hold; it plays no
/// part in dice resolution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Clearance {
    /// Infrared (IR).
    #[serde(rename = "IR")]
    Infrared,
    /// Red (R), the default clearance for new troubleshooters.
    #[default]
    #[serde(rename = "R")]
    Red,
    /// Orange (O).
    #[serde(rename = "O")]
    Orange,
    /// Yellow (Y).
    #[serde(rename = "Y")]
    Yellow,
    /// Green (G).
    #[serde(rename = "G")]
    Green,
    /// Blue (B).
    #[serde(rename = "B")]
    Blue,
    /// Indigo (I).
    #[serde(rename = "I")]
    Indigo,
    /// Violet (V).
    #[serde(rename = "V")]
    Violet,
    /// Ultraviolet (U).
    #[serde(rename = "U")]
    Ultraviolet,
}

impl Clearance {
    /// All clearances from lowest to highest.
    pub const ALL: [Self; 9] = [
        Self::Infrared,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Ultraviolet,
    ];

    /// The canonical code for this clearance ("IR", "R", ..., "U").
    pub fn code(self) -> &'static str {
        match self {
            Self::Infrared => "IR",
            Self::Red => "R",
            Self::Orange => "O",
            Self::Yellow => "Y",
            Self::Green => "G",
            Self::Blue => "B",
            Self::Indigo => "I",
            Self::Violet => "V",
            Self::Ultraviolet => "U",
        }
    }

    /// Parse a clearance from its code.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == s)
    }
}

impl fmt::Display for Clearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the eight service groups a citizen can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceGroup {
    /// Armed Forces.
    ArmedForces,
    /// Central Processing Unit.
    Cpu,
    /// Housing Preservation & Development and Mind Control.
    Hpdmc,
    /// Internal Security.
    Intsec,
    /// Production, Logistics & Commissary.
    Plc,
    /// Power Services.
    Power,
    /// Research & Design.
    Rnd,
    /// Technical Services.
    Tech,
}

impl ServiceGroup {
    /// All service groups in canonical order.
    pub const ALL: [Self; 8] = [
        Self::ArmedForces,
        Self::Cpu,
        Self::Hpdmc,
        Self::Intsec,
        Self::Plc,
        Self::Power,
        Self::Rnd,
        Self::Tech,
    ];

    /// The canonical key string for this service group.
    pub fn key(self) -> &'static str {
        match self {
            Self::ArmedForces => "armedForces",
            Self::Cpu => "cpu",
            Self::Hpdmc => "hpdmc",
            Self::Intsec => "intsec",
            Self::Plc => "plc",
            Self::Power => "power",
            Self::Rnd => "rnd",
            Self::Tech => "tech",
        }
    }

    /// Parse a service group from its canonical key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == s)
    }
}

impl fmt::Display for ServiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearance_default_is_red() {
        assert_eq!(Clearance::default(), Clearance::Red);
    }

    #[test]
    fn clearance_ordering() {
        assert!(Clearance::Infrared < Clearance::Red);
        assert!(Clearance::Violet < Clearance::Ultraviolet);
    }

    #[test]
    fn clearance_code_round_trip() {
        for clearance in Clearance::ALL {
            assert_eq!(Clearance::parse(clearance.code()), Some(clearance));
        }
    }

    #[test]
    fn clearance_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&Clearance::Infrared).unwrap(),
            "\"IR\""
        );
        let back: Clearance = serde_json::from_str("\"U\"").unwrap();
        assert_eq!(back, Clearance::Ultraviolet);
    }

    #[test]
    fn service_group_key_round_trip() {
        for group in ServiceGroup::ALL {
            assert_eq!(ServiceGroup::parse(group.key()), Some(group));
        }
    }
}
