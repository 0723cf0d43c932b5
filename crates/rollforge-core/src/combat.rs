//! Level-driven combat statistic derivations.
//!
//! Pure functions over level, progression tier, and ability modifiers.
//! Inputs are trusted; level 0 yields zero attack and zero hit points.

use rand::Rng;

use crate::model::{div_round_half_even, AttackProgression, SaveQuality};

/// Base attack bonus for a level and progression tier.
///
/// Good scales at full level, Fair at three-quarters (floored), Poor at
/// half (floored).
pub fn attack_bonus(level: u32, progression: AttackProgression) -> u32 {
    match progression {
        AttackProgression::Good => level,
        AttackProgression::Fair => level * 3 / 4,
        AttackProgression::Poor => level / 2,
    }
}

/// Base save bonus for a level and save quality.
///
/// Good saves start at +2 and scale at half level; poor saves scale at a
/// third. Both round half-to-even.
pub fn save_bonus(level: u32, quality: SaveQuality) -> u32 {
    match quality {
        SaveQuality::Good => div_round_half_even(level, 2) + 2,
        SaveQuality::Poor => div_round_half_even(level, 3),
    }
}

/// Roll hit points: one die per level, each draw adding the constitution
/// modifier and floored at 1.
///
/// `hit_die` must have at least one face; the boundary validates this
/// before it reaches the core.
pub fn hit_points(
    rng: &mut impl Rng,
    level: u32,
    hit_die: u32,
    con_modifier: i32,
) -> u32 {
    (0..level)
        .map(|_| {
            let roll = rng.gen_range(1..=hit_die) as i32;
            (roll + con_modifier).max(1) as u32
        })
        .sum()
}
