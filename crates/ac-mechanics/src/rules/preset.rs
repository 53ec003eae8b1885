//! The standard rule table.
//!
//! All canonical data lives here: stat and skill labels, skill-to-stat
//! governance, wound penalties, treason flags with their attention
//! thresholds, and the clearance ladder.

use std::collections::{BTreeMap, HashMap};

use ac_core::{Clearance, EquipmentCategory, ServiceGroup, Skill, Stat, WoundLevel};

use super::{Defaults, RuleTable, SkillDef, TreasonFlag, WoundEntry};

/// Default difficulty for a skill test.
pub const DEFAULT_DIFFICULTY: u32 = 2;

/// Sentinel penalty for the dead wound level: the character cannot act.
pub const DEAD_PENALTY: i32 = -999;

/// Highest treason-star count the standard table maps.
pub const TREASON_STARS_MAX: u8 = 4;

fn skill_def(label: &str, stat: Stat) -> SkillDef {
    SkillDef {
        label: label.to_string(),
        stat,
    }
}

fn wound_entry(label: &str, penalty: i32) -> WoundEntry {
    WoundEntry {
        label: label.to_string(),
        penalty,
    }
}

fn treason_flag(label: &str, attention_threshold: u8) -> TreasonFlag {
    TreasonFlag {
        label: label.to_string(),
        attention_threshold,
    }
}

/// Build the standard rule table.
pub fn standard() -> RuleTable {
    RuleTable {
        name: "node".to_string(),
        stats: HashMap::from([
            (Stat::Brains, "Brains".to_string()),
            (Stat::Chutzpah, "Chutzpah".to_string()),
            (Stat::Mechanics, "Mechanics".to_string()),
            (Stat::Violence, "Violence".to_string()),
        ]),
        skills: HashMap::from([
            (Skill::AlphaComplex, skill_def("Alpha Complex", Stat::Brains)),
            (Skill::Bureaucracy, skill_def("Bureaucracy", Stat::Brains)),
            (Skill::Psychology, skill_def("Psychology", Stat::Brains)),
            (Skill::Science, skill_def("Science", Stat::Brains)),
            (Skill::Bluff, skill_def("Bluff", Stat::Chutzpah)),
            (Skill::Charm, skill_def("Charm", Stat::Chutzpah)),
            (Skill::Intimidate, skill_def("Intimidate", Stat::Chutzpah)),
            (Skill::Stealth, skill_def("Stealth", Stat::Chutzpah)),
            (Skill::Demolition, skill_def("Demolition", Stat::Mechanics)),
            (Skill::Engineer, skill_def("Engineer", Stat::Mechanics)),
            (Skill::Operate, skill_def("Operate", Stat::Mechanics)),
            (Skill::Program, skill_def("Program", Stat::Mechanics)),
            (Skill::Athletics, skill_def("Athletics", Stat::Violence)),
            (Skill::Guns, skill_def("Guns", Stat::Violence)),
            (Skill::Melee, skill_def("Melee", Stat::Violence)),
            (Skill::Throw, skill_def("Throw", Stat::Violence)),
        ]),
        wound_levels: HashMap::from([
            (WoundLevel::Fine, wound_entry("Fine", 0)),
            (WoundLevel::Hurt, wound_entry("Hurt", -1)),
            (WoundLevel::Injured, wound_entry("Injured", -2)),
            (WoundLevel::Maimed, wound_entry("Maimed", -3)),
            (WoundLevel::Dead, wound_entry("Dead", DEAD_PENALTY)),
        ]),
        treason_flags: BTreeMap::from([
            (0, treason_flag("Loyal", 6)),
            (1, treason_flag("Greylisted", 5)),
            (2, treason_flag("Restricted", 4)),
            (3, treason_flag("Citizen-of-Interest", 3)),
            (4, treason_flag("Wanted", 2)),
        ]),
        clearances: HashMap::from([
            (Clearance::Infrared, "Infrared".to_string()),
            (Clearance::Red, "Red".to_string()),
            (Clearance::Orange, "Orange".to_string()),
            (Clearance::Yellow, "Yellow".to_string()),
            (Clearance::Green, "Green".to_string()),
            (Clearance::Blue, "Blue".to_string()),
            (Clearance::Indigo, "Indigo".to_string()),
            (Clearance::Violet, "Violet".to_string()),
            (Clearance::Ultraviolet, "Ultraviolet".to_string()),
        ]),
        service_groups: HashMap::from([
            (ServiceGroup::ArmedForces, "Armed Forces".to_string()),
            (ServiceGroup::Cpu, "CPU".to_string()),
            (ServiceGroup::Hpdmc, "HPD&MC".to_string()),
            (ServiceGroup::Intsec, "IntSec".to_string()),
            (ServiceGroup::Plc, "PLC".to_string()),
            (ServiceGroup::Power, "Power Services".to_string()),
            (ServiceGroup::Rnd, "R&D".to_string()),
            (ServiceGroup::Tech, "Technical Services".to_string()),
        ]),
        equipment_categories: HashMap::from([
            (EquipmentCategory::Weapon, "Weapon".to_string()),
            (EquipmentCategory::Armor, "Armor".to_string()),
            (EquipmentCategory::Gear, "Gear".to_string()),
            (EquipmentCategory::Coretech, "Coretech".to_string()),
        ]),
        defaults: Defaults {
            difficulty: DEFAULT_DIFFICULTY,
            dead_penalty: DEAD_PENALTY,
        },
    }
}

impl RuleTable {
    /// The standard rule table. Equivalent to [`standard`].
    pub fn standard() -> Self {
        standard()
    }
}
