//! Equipment items and the bonus they grant to skill tests.
//!
//! An equipment item's level is added directly to the base score when a
//! test uses it. The host decides which items apply; [`total_bonus`]
//! covers the common case of summing everything carried.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::Clearance;

/// Category of an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentCategory {
    /// A weapon.
    Weapon,
    /// Armor.
    Armor,
    /// General gear.
    #[default]
    Gear,
    /// Coretech implants and apps.
    Coretech,
}

impl EquipmentCategory {
    /// All equipment categories.
    pub const ALL: [Self; 4] = [Self::Weapon, Self::Armor, Self::Gear, Self::Coretech];

    /// The canonical key string for this category.
    pub fn key(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Gear => "gear",
            Self::Coretech => "coretech",
        }
    }

    /// Parse a category from its canonical key.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == s)
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A piece of equipment carried by a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    /// Item name.
    pub name: String,
    /// Item level; added to the base score of tests made with it.
    pub level: u32,
    /// Minimum clearance required to legally hold this item.
    pub clearance: Clearance,
    /// Item category.
    pub category: EquipmentCategory,
}

impl Equipment {
    /// Create an item with the given name, level, and category at the
    /// default (Red) clearance.
    pub fn new(name: impl Into<String>, level: u32, category: EquipmentCategory) -> Self {
        Self {
            name: name.into(),
            level,
            clearance: Clearance::default(),
            category,
        }
    }

    /// The bonus this item grants to a skill test.
    pub fn bonus(&self) -> i32 {
        self.level as i32
    }

    /// Returns true if this item is a weapon.
    pub fn is_weapon(&self) -> bool {
        self.category == EquipmentCategory::Weapon
    }

    /// Returns true if this item is armor.
    pub fn is_armor(&self) -> bool {
        self.category == EquipmentCategory::Armor
    }
}

/// Total equipment bonus from a set of items.
pub fn total_bonus(items: &[Equipment]) -> i32 {
    items.iter().map(Equipment::bonus).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_is_level() {
        let laser = Equipment::new("Laser Pistol", 2, EquipmentCategory::Weapon);
        assert_eq!(laser.bonus(), 2);
        assert!(laser.is_weapon());
        assert!(!laser.is_armor());
    }

    #[test]
    fn total_bonus_sums_levels() {
        let items = vec![
            Equipment::new("Laser Pistol", 2, EquipmentCategory::Weapon),
            Equipment::new("Reflec Armor", 1, EquipmentCategory::Armor),
            Equipment::new("Cerebral Coretech", 3, EquipmentCategory::Coretech),
        ];
        assert_eq!(total_bonus(&items), 6);
    }

    #[test]
    fn total_bonus_empty() {
        assert_eq!(total_bonus(&[]), 0);
    }

    #[test]
    fn category_key_round_trip() {
        for category in EquipmentCategory::ALL {
            assert_eq!(EquipmentCategory::parse(category.key()), Some(category));
        }
    }
}
