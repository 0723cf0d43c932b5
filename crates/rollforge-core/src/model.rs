//! Core data model types for rollforge.
//!
//! These are the fundamental types the entire rollforge system uses to
//! represent abilities, scores, and progression categories.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The default elite array of ability-score values, highest first.
pub const ELITE_ARRAY: [i32; 6] = [15, 13, 12, 11, 10, 8];

/// Hit die faces used when a character has no explicit hit die.
///
/// A d4 is unusually small for most rule systems; the value is kept as-is
/// from the original ruleset data.
pub const DEFAULT_HIT_DIE: u32 = 4;

/// One of the six character abilities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Ability {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "wis")]
    Wisdom,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "cha")]
    Charisma,
}

impl Ability {
    /// Number of abilities in the domain.
    pub const COUNT: usize = 6;

    /// All six abilities in display order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Wisdom,
        Ability::Intelligence,
        Ability::Charisma,
    ];

    /// The physical grouping, used as a default favor pool.
    pub const PHYSICAL: [Ability; 3] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
    ];

    /// The mental grouping, used as a default disfavor pool.
    pub const MENTAL: [Ability; 3] = [
        Ability::Wisdom,
        Ability::Intelligence,
        Ability::Charisma,
    ];

    /// The three-letter tag used on the wire and in reports.
    pub fn tag(self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Wisdom => "wis",
            Ability::Intelligence => "int",
            Ability::Charisma => "cha",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Ability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" | "strength" => Ok(Ability::Strength),
            "dex" | "dexterity" => Ok(Ability::Dexterity),
            "con" | "constitution" => Ok(Ability::Constitution),
            "wis" | "wisdom" => Ok(Ability::Wisdom),
            "int" | "intelligence" => Ok(Ability::Intelligence),
            "cha" | "charisma" => Ok(Ability::Charisma),
            other => Err(format!("unknown ability: {other}")),
        }
    }
}

/// Compute the modifier for an ability score.
///
/// Uses floor division (round toward negative infinity), so odd scores
/// below 10 round down: `modifier(9) == -1`, not 0.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Integer division rounding to nearest, ties to even.
///
/// Matches the rounding used for level-progression bonus points and save
/// bonuses: `round(2/4) == 0`, `round(10/4) == 2`, `round(6/4) == 2`.
pub(crate) fn div_round_half_even(n: u32, d: u32) -> u32 {
    let q = n / d;
    let r = n % d;
    match (2 * r).cmp(&d) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => {
            if q % 2 == 0 {
                q
            } else {
                q + 1
            }
        }
    }
}

/// A full mapping from ability to score.
///
/// Invariant: contains all six abilities exactly once. Construction goes
/// through the allocator or [`AbilitySet::from_fn`], both of which fill
/// every ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilitySet {
    scores: BTreeMap<Ability, i32>,
}

impl AbilitySet {
    /// Build a set from a complete ability→score mapping.
    pub fn new(scores: BTreeMap<Ability, i32>) -> Self {
        Self { scores }
    }

    /// Build a set by evaluating `f` for each ability.
    pub fn from_fn(mut f: impl FnMut(Ability) -> i32) -> Self {
        Self {
            scores: Ability::ALL.iter().map(|&a| (a, f(a))).collect(),
        }
    }

    /// The raw score for an ability.
    pub fn score(&self, ability: Ability) -> i32 {
        self.scores.get(&ability).copied().unwrap_or(0)
    }

    /// The derived modifier for an ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier(self.score(ability))
    }

    /// Increase an ability's score.
    pub fn raise(&mut self, ability: Ability, amount: i32) {
        *self.scores.entry(ability).or_insert(0) += amount;
    }

    /// Iterate abilities and scores in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        self.scores.iter().map(|(&a, &s)| (a, s))
    }

    /// Sum of all six scores.
    pub fn total(&self) -> i32 {
        self.scores.values().sum()
    }
}

/// How fast base attack bonus scales with level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackProgression {
    /// Full progression (fighter).
    Good,
    /// Three-quarters progression (cleric, rogue).
    Fair,
    /// Half progression (wizard and everyone else).
    #[default]
    Poor,
}

impl fmt::Display for AttackProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackProgression::Good => write!(f, "good"),
            AttackProgression::Fair => write!(f, "fair"),
            AttackProgression::Poor => write!(f, "poor"),
        }
    }
}

impl FromStr for AttackProgression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" | "fighter" => Ok(AttackProgression::Good),
            "fair" | "cleric" | "rogue" => Ok(AttackProgression::Fair),
            "poor" | "wizard" => Ok(AttackProgression::Poor),
            other => Err(format!("unknown attack progression: {other}")),
        }
    }
}

/// One of the three saving throw categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Save {
    #[serde(rename = "fort")]
    Fortitude,
    #[serde(rename = "ref")]
    Reflex,
    #[serde(rename = "will")]
    Will,
}

impl Save {
    /// The ability whose modifier is added to this save.
    pub fn key_ability(self) -> Ability {
        match self {
            Save::Fortitude => Ability::Constitution,
            Save::Reflex => Ability::Dexterity,
            Save::Will => Ability::Wisdom,
        }
    }
}

impl fmt::Display for Save {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Save::Fortitude => write!(f, "fort"),
            Save::Reflex => write!(f, "ref"),
            Save::Will => write!(f, "will"),
        }
    }
}

impl FromStr for Save {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fort" | "fortitude" => Ok(Save::Fortitude),
            "ref" | "reflex" => Ok(Save::Reflex),
            "will" | "willpower" => Ok(Save::Will),
            other => Err(format!("unknown save: {other}")),
        }
    }
}

/// Whether a save scales at the faster or slower rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveQuality {
    Good,
    #[default]
    Poor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_display_and_parse() {
        assert_eq!(Ability::Strength.to_string(), "str");
        assert_eq!(Ability::Charisma.to_string(), "cha");
        assert_eq!("str".parse::<Ability>().unwrap(), Ability::Strength);
        assert_eq!("Dexterity".parse::<Ability>().unwrap(), Ability::Dexterity);
        assert_eq!("WIS".parse::<Ability>().unwrap(), Ability::Wisdom);
        assert!("luck".parse::<Ability>().is_err());
    }

    #[test]
    fn progression_parse_accepts_class_aliases() {
        assert_eq!(
            "fighter".parse::<AttackProgression>().unwrap(),
            AttackProgression::Good
        );
        assert_eq!(
            "rogue".parse::<AttackProgression>().unwrap(),
            AttackProgression::Fair
        );
        assert_eq!(
            "cleric".parse::<AttackProgression>().unwrap(),
            AttackProgression::Fair
        );
        assert_eq!(
            "wizard".parse::<AttackProgression>().unwrap(),
            AttackProgression::Poor
        );
        assert!("monk".parse::<AttackProgression>().is_err());
    }

    #[test]
    fn save_parse_and_key_ability() {
        assert_eq!("fort".parse::<Save>().unwrap(), Save::Fortitude);
        assert_eq!("reflex".parse::<Save>().unwrap(), Save::Reflex);
        assert_eq!(Save::Fortitude.key_ability(), Ability::Constitution);
        assert_eq!(Save::Reflex.key_ability(), Ability::Dexterity);
        assert_eq!(Save::Will.key_ability(), Ability::Wisdom);
    }

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(15), 2);
        assert_eq!(modifier(3), -4);
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(18), 4);
    }

    #[test]
    fn modifier_matches_floor_formula_broadly() {
        for score in -20..40 {
            let expected = ((score as f64 - 10.0) / 2.0).floor() as i32;
            assert_eq!(modifier(score), expected, "score {score}");
        }
    }

    #[test]
    fn half_even_rounding() {
        assert_eq!(div_round_half_even(2, 4), 0); // 0.5 -> 0
        assert_eq!(div_round_half_even(3, 4), 1); // 0.75 -> 1
        assert_eq!(div_round_half_even(6, 4), 2); // 1.5 -> 2
        assert_eq!(div_round_half_even(8, 4), 2);
        assert_eq!(div_round_half_even(10, 4), 2); // 2.5 -> 2
        assert_eq!(div_round_half_even(10, 3), 3);
        assert_eq!(div_round_half_even(5, 2), 2); // 2.5 -> 2
        assert_eq!(div_round_half_even(7, 2), 4); // 3.5 -> 4
    }

    #[test]
    fn ability_set_accessors() {
        let mut set = AbilitySet::from_fn(|_| 10);
        assert_eq!(set.score(Ability::Strength), 10);
        assert_eq!(set.modifier(Ability::Strength), 0);
        set.raise(Ability::Strength, 2);
        assert_eq!(set.score(Ability::Strength), 12);
        assert_eq!(set.modifier(Ability::Strength), 1);
        assert_eq!(set.total(), 62);
    }

    #[test]
    fn ability_set_serde_roundtrip() {
        let set = AbilitySet::from_fn(|a| match a {
            Ability::Strength => 15,
            _ => 10,
        });
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"str\":15"));
        let back: AbilitySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
