//! The derivation pipeline: raw attributes in, consistent snapshot out.
//!
//! [`derive`] is a pure function. It is recomputed on every call rather
//! than incrementally patched: inputs are small and mutation is
//! infrequent, and recomputation removes the stale-cache failure mode
//! entirely. The caller owns the returned snapshot and decides whether to
//! keep it around.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ac_core::{CharacterAttributes, Skill};

use crate::rules::RuleTable;

/// A character's derived mechanical state at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSnapshot {
    /// Flat penalty from the current wound level, <= 0.
    pub wound_penalty: i32,
    /// Display label of the current wound level.
    pub wound_label: String,
    /// Display label of the current treason flag.
    pub treason_label: String,
    /// Oversight-die face at or above which attention triggers, 2..=6.
    pub attention_threshold: u8,
    /// Combat-ready score per skill:
    /// stat score + skill score + wound penalty.
    pub skill_scores: HashMap<Skill, i32>,
}

impl DerivedSnapshot {
    /// The derived score for a skill, or 0 if the table did not map it.
    pub fn skill_score(&self, skill: Skill) -> i32 {
        self.skill_scores.get(&skill).copied().unwrap_or(0)
    }

    /// Returns true if the wound penalty is at or below the table's dead
    /// sentinel. The engine still resolves tests for such a character;
    /// refusing to act on their behalf is the caller's decision.
    pub fn is_dead(&self, rules: &RuleTable) -> bool {
        self.wound_penalty <= rules.defaults.dead_penalty
    }
}

/// Derive a fresh snapshot from raw attributes and a rule table.
///
/// Never fails for well-formed input: an unknown wound level falls back to
/// the no-penalty entry, treason stars are clamped to the table's range,
/// and missing stat or skill values read as 0.
pub fn derive(attrs: &CharacterAttributes, rules: &RuleTable) -> DerivedSnapshot {
    let wound = rules.wound_entry(attrs.wound_level);
    let flag = rules.treason_flag(attrs.treason_stars);

    let mut skill_scores = HashMap::with_capacity(rules.skills.len());
    for (&skill, def) in &rules.skills {
        let score = attrs.stat(def.stat) + attrs.skill(skill) + wound.penalty;
        skill_scores.insert(skill, score);
    }

    DerivedSnapshot {
        wound_penalty: wound.penalty,
        wound_label: wound.label,
        treason_label: flag.label,
        attention_threshold: flag.attention_threshold,
        skill_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ac_core::{Stat, WoundLevel};
    use proptest::prelude::*;

    fn make_attrs(
        stats: &[(Stat, i32)],
        skills: &[(Skill, i32)],
        wound_level: WoundLevel,
        treason_stars: i32,
    ) -> CharacterAttributes {
        CharacterAttributes {
            stats: stats.iter().copied().collect(),
            skills: skills.iter().copied().collect(),
            wound_level,
            treason_stars,
        }
    }

    #[test]
    fn skill_score_identity() {
        let table = RuleTable::standard();
        let attrs = make_attrs(
            &[(Stat::Violence, 3), (Stat::Brains, 1)],
            &[(Skill::Guns, 4), (Skill::Science, 2)],
            WoundLevel::Hurt,
            0,
        );
        let snapshot = derive(&attrs, &table);
        assert_eq!(snapshot.wound_penalty, -1);
        assert_eq!(snapshot.skill_score(Skill::Guns), 3 + 4 - 1);
        assert_eq!(snapshot.skill_score(Skill::Science), 1 + 2 - 1);
        // Untrained skill under an untouched stat: just the penalty.
        assert_eq!(snapshot.skill_score(Skill::Operate), -1);
    }

    #[test]
    fn every_table_skill_gets_a_score() {
        let table = RuleTable::standard();
        let snapshot = derive(&CharacterAttributes::default(), &table);
        assert_eq!(snapshot.skill_scores.len(), 16);
    }

    #[test]
    fn wound_penalties_match_table() {
        let table = RuleTable::standard();
        for level in WoundLevel::ALL {
            let snapshot = derive(&make_attrs(&[], &[], level, 0), &table);
            assert_eq!(snapshot.wound_penalty, table.wound_entry(level).penalty);
            assert!(snapshot.wound_penalty <= 0);
        }
    }

    #[test]
    fn dead_sentinel_still_derives() {
        let table = RuleTable::standard();
        let snapshot = derive(
            &make_attrs(&[(Stat::Violence, 3)], &[], WoundLevel::Dead, 0),
            &table,
        );
        assert_eq!(snapshot.wound_penalty, -999);
        assert_eq!(snapshot.wound_label, "Dead");
        assert!(snapshot.is_dead(&table));
        assert_eq!(snapshot.skill_score(Skill::Guns), 3 - 999);
    }

    #[test]
    fn living_character_is_not_dead() {
        let table = RuleTable::standard();
        let snapshot = derive(&make_attrs(&[], &[], WoundLevel::Maimed, 0), &table);
        assert!(!snapshot.is_dead(&table));
    }

    #[test]
    fn treason_flags_lower_threshold() {
        let table = RuleTable::standard();
        let loyal = derive(&make_attrs(&[], &[], WoundLevel::Fine, 0), &table);
        assert_eq!(loyal.treason_label, "Loyal");
        assert_eq!(loyal.attention_threshold, 6);

        let wanted = derive(&make_attrs(&[], &[], WoundLevel::Fine, 4), &table);
        assert_eq!(wanted.treason_label, "Wanted");
        assert_eq!(wanted.attention_threshold, 2);
    }

    #[test]
    fn out_of_range_stars_clamp() {
        let table = RuleTable::standard();
        let below = derive(&make_attrs(&[], &[], WoundLevel::Fine, -3), &table);
        assert_eq!(below.treason_label, "Loyal");
        let above = derive(&make_attrs(&[], &[], WoundLevel::Fine, 99), &table);
        assert_eq!(above.treason_label, "Wanted");
    }

    #[test]
    fn fresh_snapshot_each_call() {
        let table = RuleTable::standard();
        let mut character = make_attrs(&[(Stat::Brains, 2)], &[], WoundLevel::Fine, 0);
        let before = derive(&character, &table);
        character.wound_level = WoundLevel::Injured;
        let after = derive(&character, &table);
        assert_eq!(before.skill_score(Skill::Science), 2);
        assert_eq!(after.skill_score(Skill::Science), 0);
    }

    proptest! {
        #[test]
        fn clamping_is_idempotent(stars in -20i32..20) {
            let table = RuleTable::standard();
            let raw = derive(&make_attrs(&[], &[], WoundLevel::Fine, stars), &table);
            let clamped = derive(
                &make_attrs(&[], &[], WoundLevel::Fine, stars.clamp(0, 4)),
                &table,
            );
            prop_assert_eq!(raw.treason_label, clamped.treason_label);
            prop_assert_eq!(raw.attention_threshold, clamped.attention_threshold);
        }

        #[test]
        fn score_identity_holds_for_all_inputs(
            stat_scores in proptest::collection::hash_map(
                proptest::sample::select(Stat::ALL.to_vec()), -5i32..15, 0..4),
            skill_scores in proptest::collection::hash_map(
                proptest::sample::select(Skill::ALL.to_vec()), -5i32..15, 0..16),
            wound in proptest::sample::select(WoundLevel::ALL.to_vec()),
        ) {
            let table = RuleTable::standard();
            let character = CharacterAttributes {
                stats: stat_scores,
                skills: skill_scores,
                wound_level: wound,
                treason_stars: 0,
            };
            let snapshot = derive(&character, &table);
            let penalty = table.wound_entry(wound).penalty;
            for skill in Skill::ALL {
                let stat = table.stat_of(skill).unwrap();
                prop_assert_eq!(
                    snapshot.skill_score(skill),
                    character.stat(stat) + character.skill(skill) + penalty
                );
            }
        }
    }

    #[test]
    fn alternate_table_is_respected() {
        let mut table = RuleTable::standard();
        table.wound_levels.insert(
            WoundLevel::Hurt,
            crate::rules::WoundEntry {
                label: "Scuffed".to_string(),
                penalty: -2,
            },
        );
        let snapshot = derive(&make_attrs(&[], &[], WoundLevel::Hurt, 0), &table);
        assert_eq!(snapshot.wound_label, "Scuffed");
        assert_eq!(snapshot.wound_penalty, -2);
    }

    #[test]
    fn snapshot_serializes_for_display() {
        let table = RuleTable::standard();
        let snapshot = derive(&CharacterAttributes::troubleshooter(), &table);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["woundLabel"], "Fine");
        assert_eq!(value["skillScores"]["guns"], 2);
    }
}
