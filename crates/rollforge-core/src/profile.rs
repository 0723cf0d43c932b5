//! TOML class-profile parser.
//!
//! Loads class profiles from TOML files and directories, and validates
//! them. A profile is a named bundle of generation settings (attack
//! progression, good saves, hit die, favor/improve lists) so common
//! classes don't need a wall of command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::GeneratorConfig;
use crate::model::{Ability, AttackProgression, Save};

/// Intermediate TOML structure for parsing profile files.
#[derive(Debug, Deserialize)]
struct TomlProfileFile {
    profile: TomlProfile,
}

#[derive(Debug, Deserialize)]
struct TomlProfile {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    attack: Option<String>,
    #[serde(default)]
    good_saves: Vec<String>,
    #[serde(default)]
    hit_die: Option<u32>,
    #[serde(default)]
    favor: Vec<String>,
    #[serde(default)]
    disfavor: Vec<String>,
    #[serde(default)]
    improve: Vec<String>,
}

/// A named bundle of generation settings for a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassProfile {
    /// Profile name (e.g. "fighter").
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Base attack progression, if the profile sets one.
    pub attack: Option<AttackProgression>,
    /// Saves that scale at the good rate.
    pub good_saves: Vec<Save>,
    /// Hit die faces, if the profile sets one.
    pub hit_die: Option<u32>,
    /// Abilities favored during allocation.
    pub favor: Vec<Ability>,
    /// Abilities steered away from during allocation.
    pub disfavor: Vec<Ability>,
    /// Abilities improved by level-driven bonus points.
    pub improve: Vec<Ability>,
}

impl ClassProfile {
    /// Fold the profile's settings into a generator configuration.
    ///
    /// Only fields the profile actually sets are written, so flags applied
    /// afterwards override profile values and untouched defaults survive.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(attack) = self.attack {
            config.attack = attack;
        }
        if !self.good_saves.is_empty() {
            config.good_saves = self.good_saves.clone();
        }
        if self.hit_die.is_some() {
            config.hit_die = self.hit_die;
        }
        if !self.favor.is_empty() {
            config.allocation.favored = self.favor.clone();
        }
        if !self.disfavor.is_empty() {
            config.allocation.disfavored = self.disfavor.clone();
        }
        if !self.improve.is_empty() {
            config.improve = self.improve.clone();
        }
    }
}

/// Parse a single TOML file into a `ClassProfile`.
pub fn parse_profile(path: &Path) -> Result<ClassProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile file: {}", path.display()))?;

    parse_profile_str(&content, path)
}

/// Parse a TOML string into a `ClassProfile` (useful for testing).
pub fn parse_profile_str(content: &str, source_path: &Path) -> Result<ClassProfile> {
    let parsed: TomlProfileFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;
    let p = parsed.profile;

    let attack = p
        .attack
        .map(|s| s.parse().map_err(|e: String| anyhow::anyhow!("{}", e)))
        .transpose()?;

    let parse_list = |items: Vec<String>| -> Result<Vec<Ability>> {
        items
            .into_iter()
            .map(|s| s.parse().map_err(|e: String| anyhow::anyhow!("{}", e)))
            .collect()
    };

    let good_saves = p
        .good_saves
        .into_iter()
        .map(|s| s.parse().map_err(|e: String| anyhow::anyhow!("{}", e)))
        .collect::<Result<Vec<Save>>>()?;

    Ok(ClassProfile {
        name: p.name,
        description: p.description,
        attack,
        good_saves,
        hit_die: p.hit_die,
        favor: parse_list(p.favor)?,
        disfavor: parse_list(p.disfavor)?,
        improve: parse_list(p.improve)?,
    })
}

/// Recursively load all `.toml` profile files from a directory.
pub fn load_profile_directory(dir: &Path) -> Result<Vec<ClassProfile>> {
    let mut profiles = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            profiles.extend(load_profile_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_profile(&path) {
                Ok(profile) => profiles.push(profile),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(profiles)
}

/// A warning from profile validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The profile name.
    pub profile: String,
    /// Warning message.
    pub message: String,
}

/// Validate a profile for common issues.
pub fn validate_profile(profile: &ClassProfile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let warn = |warnings: &mut Vec<ValidationWarning>, message: String| {
        warnings.push(ValidationWarning {
            profile: profile.name.clone(),
            message,
        });
    };

    if profile.name.trim().is_empty() {
        warn(&mut warnings, "profile name is empty".into());
    }

    if profile.hit_die == Some(0) {
        warn(&mut warnings, "hit_die is 0; rolls need at least one face".into());
    }

    let mut seen_saves = std::collections::HashSet::new();
    for save in &profile.good_saves {
        if !seen_saves.insert(save) {
            warn(&mut warnings, format!("duplicate good save: {save}"));
        }
    }

    let mut seen_favor = std::collections::HashSet::new();
    for ability in &profile.favor {
        if !seen_favor.insert(ability) {
            warn(&mut warnings, format!("duplicate favored ability: {ability}"));
        }
    }

    for ability in &profile.disfavor {
        if profile.favor.contains(ability) {
            warn(
                &mut warnings,
                format!("ability both favored and disfavored: {ability}"),
            );
        }
    }

    warnings
}
