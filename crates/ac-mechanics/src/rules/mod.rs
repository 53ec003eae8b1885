//! Rule tables: the static lookup data behind derivation and resolution.
//!
//! A [`RuleTable`] is an immutable value passed into both engine
//! components at call time. It is loaded once at process start and never
//! mutated, which keeps the engine free of global state and trivially
//! testable with alternate tables. [`RuleTable::standard`] builds the
//! canonical table.

pub mod preset;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use ac_core::{Clearance, EquipmentCategory, ServiceGroup, Skill, Stat, WoundLevel};

/// A skill's table entry: display label and governing stat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    /// Display label (e.g., "Alpha Complex").
    pub label: String,
    /// The stat whose score feeds this skill's derived score.
    pub stat: Stat,
}

/// A wound level's table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WoundEntry {
    /// Display label (e.g., "Maimed").
    pub label: String,
    /// Flat penalty applied to every derived skill score. Always <= 0;
    /// the "dead" level carries a sentinel meaning "cannot act".
    pub penalty: i32,
}

impl WoundEntry {
    /// The built-in no-penalty entry, used when a table has no entry for
    /// the looked-up level and no `fine` entry to fall back on.
    pub fn no_penalty() -> Self {
        Self {
            label: "Fine".to_string(),
            penalty: 0,
        }
    }
}

/// A treason-star count's table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasonFlag {
    /// Display label (e.g., "Greylisted").
    pub label: String,
    /// Oversight-die face at or above which attention triggers, in 2..=6.
    /// Non-increasing as stars rise: more treason, more attention.
    pub attention_threshold: u8,
}

impl TreasonFlag {
    /// The built-in zero-star entry, used when a table maps no flags.
    pub fn loyal() -> Self {
        Self {
            label: "Loyal".to_string(),
            attention_threshold: 6,
        }
    }
}

/// Magic numbers a table carries alongside its lookup data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    /// Default difficulty for a skill test.
    pub difficulty: u32,
    /// Penalty at or below which a character cannot act.
    pub dead_penalty: i32,
}

/// The complete static rule data for the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTable {
    /// Table name (e.g., "node").
    pub name: String,
    /// Display labels for the four stats.
    pub stats: HashMap<Stat, String>,
    /// Per-skill label and governing stat.
    pub skills: HashMap<Skill, SkillDef>,
    /// Per-wound-level label and penalty.
    pub wound_levels: HashMap<WoundLevel, WoundEntry>,
    /// Treason flags keyed by star count, 0 upward.
    pub treason_flags: BTreeMap<u8, TreasonFlag>,
    /// Display labels for security clearances.
    pub clearances: HashMap<Clearance, String>,
    /// Display labels for service groups.
    pub service_groups: HashMap<ServiceGroup, String>,
    /// Display labels for equipment categories.
    pub equipment_categories: HashMap<EquipmentCategory, String>,
    /// System magic numbers.
    pub defaults: Defaults,
}

impl RuleTable {
    /// The governing stat for a skill, if the table maps it.
    pub fn stat_of(&self, skill: Skill) -> Option<Stat> {
        self.skills.get(&skill).map(|def| def.stat)
    }

    /// All mapped skills governed by a stat, in canonical order.
    pub fn skills_for(&self, stat: Stat) -> Vec<Skill> {
        Skill::ALL
            .into_iter()
            .filter(|&skill| self.stat_of(skill) == Some(stat))
            .collect()
    }

    /// Display label for a stat, falling back to its key.
    pub fn stat_label(&self, stat: Stat) -> &str {
        self.stats.get(&stat).map_or_else(|| stat.key(), String::as_str)
    }

    /// Display label for a skill, falling back to its key.
    pub fn skill_label(&self, skill: Skill) -> &str {
        self.skills
            .get(&skill)
            .map_or_else(|| skill.key(), |def| def.label.as_str())
    }

    /// Display label for a clearance, falling back to its code.
    pub fn clearance_label(&self, clearance: Clearance) -> &str {
        self.clearances
            .get(&clearance)
            .map_or_else(|| clearance.code(), String::as_str)
    }

    /// Display label for a service group, falling back to its key.
    pub fn service_group_label(&self, group: ServiceGroup) -> &str {
        self.service_groups
            .get(&group)
            .map_or_else(|| group.key(), String::as_str)
    }

    /// Display label for an equipment category, falling back to its key.
    pub fn equipment_category_label(&self, category: EquipmentCategory) -> &str {
        self.equipment_categories
            .get(&category)
            .map_or_else(|| category.key(), String::as_str)
    }

    /// The wound entry for a level.
    ///
    /// An unmapped level falls back to the table's `fine` entry, then to
    /// the built-in no-penalty entry. Never fails: upstream data may be
    /// transiently invalid while a sheet is being edited.
    pub fn wound_entry(&self, level: WoundLevel) -> WoundEntry {
        self.wound_levels
            .get(&level)
            .or_else(|| self.wound_levels.get(&WoundLevel::Fine))
            .cloned()
            .unwrap_or_else(WoundEntry::no_penalty)
    }

    /// The treason flag for a star count.
    ///
    /// The count is clamped to `[0, max_stars]` first; an unmapped clamped
    /// value falls back to the zero-star entry, then to the built-in
    /// `Loyal` entry.
    pub fn treason_flag(&self, stars: i32) -> TreasonFlag {
        let clamped = stars.clamp(0, i32::from(self.max_stars())) as u8;
        self.treason_flags
            .get(&clamped)
            .or_else(|| self.treason_flags.get(&0))
            .cloned()
            .unwrap_or_else(TreasonFlag::loyal)
    }

    /// The highest star count the table maps (canonically 4).
    pub fn max_stars(&self) -> u8 {
        self.treason_flags.keys().next_back().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_table() -> RuleTable {
        RuleTable {
            name: "sparse".to_string(),
            stats: HashMap::new(),
            skills: HashMap::from([(
                Skill::Guns,
                SkillDef {
                    label: "Guns".to_string(),
                    stat: Stat::Violence,
                },
            )]),
            wound_levels: HashMap::new(),
            treason_flags: BTreeMap::new(),
            clearances: HashMap::new(),
            service_groups: HashMap::new(),
            equipment_categories: HashMap::new(),
            defaults: Defaults {
                difficulty: 2,
                dead_penalty: -999,
            },
        }
    }

    #[test]
    fn stat_of_mapped_and_unmapped() {
        let table = sparse_table();
        assert_eq!(table.stat_of(Skill::Guns), Some(Stat::Violence));
        assert_eq!(table.stat_of(Skill::Bluff), None);
    }

    #[test]
    fn skills_for_filters_by_stat() {
        let table = sparse_table();
        assert_eq!(table.skills_for(Stat::Violence), vec![Skill::Guns]);
        assert!(table.skills_for(Stat::Brains).is_empty());
    }

    #[test]
    fn labels_fall_back_to_keys() {
        let table = sparse_table();
        assert_eq!(table.stat_label(Stat::Brains), "brains");
        assert_eq!(table.skill_label(Skill::Guns), "Guns");
        assert_eq!(table.skill_label(Skill::Bluff), "bluff");
        assert_eq!(table.clearance_label(Clearance::Ultraviolet), "U");
    }

    #[test]
    fn wound_entry_falls_back_to_no_penalty() {
        let table = sparse_table();
        let entry = table.wound_entry(WoundLevel::Maimed);
        assert_eq!(entry.penalty, 0);
        assert_eq!(entry.label, "Fine");
    }

    #[test]
    fn treason_flag_falls_back_to_loyal() {
        let table = sparse_table();
        let flag = table.treason_flag(3);
        assert_eq!(flag.attention_threshold, 6);
        assert_eq!(flag.label, "Loyal");
    }

    #[test]
    fn max_stars_of_empty_map_is_zero() {
        assert_eq!(sparse_table().max_stars(), 0);
    }
}
