//! Generation orchestration.
//!
//! Wires the allocator, improvement pass, and combat derivations into a
//! single run producing a [`CharacterSheet`]. Fully synchronous; the only
//! external dependency is the caller-supplied RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::allocator::{self, AllocationConfig};
use crate::combat;
use crate::error::GenError;
use crate::model::{Ability, AbilitySet, AttackProgression, Save, SaveQuality, DEFAULT_HIT_DIE};

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Character level, drives all derived-value scaling.
    pub level: u32,
    /// Base attack progression tier.
    pub attack: AttackProgression,
    /// Saves that scale at the good rate; the rest are poor.
    pub good_saves: Vec<Save>,
    /// Score array and favor/disfavor lists for the allocation pass.
    pub allocation: AllocationConfig,
    /// Abilities to improve with level-driven bonus points.
    /// Empty means "same as the favored list".
    pub improve: Vec<Ability>,
    /// Hit die faces; `None` falls back to the d4 default.
    pub hit_die: Option<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            level: 1,
            attack: AttackProgression::default(),
            good_saves: Vec::new(),
            allocation: AllocationConfig::default(),
            improve: Vec::new(),
            hit_die: None,
        }
    }
}

impl GeneratorConfig {
    fn save_quality(&self, save: Save) -> SaveQuality {
        if self.good_saves.contains(&save) {
            SaveQuality::Good
        } else {
            SaveQuality::Poor
        }
    }

    /// The list the improvement pass draws from: explicit improve list,
    /// else the favored list, else the physical grouping the allocator
    /// defaults to.
    fn improve_list(&self) -> Vec<Ability> {
        if !self.improve.is_empty() {
            self.improve.clone()
        } else if !self.allocation.favored.is_empty() {
            self.allocation.favored.clone()
        } else {
            Ability::PHYSICAL.to_vec()
        }
    }
}

/// A fully generated character stat block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character level the sheet was generated at.
    pub level: u32,
    /// Final ability scores after the improvement pass.
    pub abilities: AbilitySet,
    /// Base attack plus Strength modifier.
    pub attack_bonus: i32,
    /// 10 plus Dexterity modifier.
    pub touch_ac: i32,
    /// Rolled hit points.
    pub hit_points: u32,
    /// Base fortitude save plus Constitution modifier.
    pub fortitude: i32,
    /// Base reflex save plus Dexterity modifier.
    pub reflex: i32,
    /// Base will save plus Wisdom modifier.
    pub will: i32,
    /// Placeholder class-skill bonus (equal to level).
    pub class_skill_bonus: u32,
}

/// Generate a character sheet from the configuration.
///
/// Allocates base abilities, applies level-driven improvements, then
/// derives attack, touch AC, hit points, and saves from the final scores.
pub fn generate(
    rng: &mut impl Rng,
    config: &GeneratorConfig,
) -> Result<CharacterSheet, GenError> {
    let mut abilities = allocator::assign_scores(rng, &config.allocation)?;
    tracing::debug!(total = abilities.total(), "base abilities allocated");

    allocator::improve_abilities(rng, &mut abilities, config.level, &config.improve_list())?;

    let hit_die = config.hit_die.unwrap_or(DEFAULT_HIT_DIE);
    let con_mod = abilities.modifier(Ability::Constitution);
    let hit_points = combat::hit_points(rng, config.level, hit_die, con_mod);

    let save = |s: Save| {
        combat::save_bonus(config.level, config.save_quality(s)) as i32
            + abilities.modifier(s.key_ability())
    };

    let sheet = CharacterSheet {
        level: config.level,
        attack_bonus: combat::attack_bonus(config.level, config.attack) as i32
            + abilities.modifier(Ability::Strength),
        touch_ac: 10 + abilities.modifier(Ability::Dexterity),
        hit_points,
        fortitude: save(Save::Fortitude),
        reflex: save(Save::Reflex),
        will: save(Save::Will),
        class_skill_bonus: config.level,
        abilities,
    };
    tracing::debug!(level = sheet.level, hp = sheet.hit_points, "sheet generated");
    Ok(sheet)
}
