//! The `rollforge generate` command.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rollforge_core::engine::{generate, CharacterSheet, GeneratorConfig};
use rollforge_core::profile::parse_profile;
use rollforge_report::json::SheetReport;
use rollforge_report::text::{render_stat_block, summary_table};

/// Parse a comma-separated list into typed values.
fn parse_list<T: FromStr<Err = String>>(input: &str, what: &str) -> Result<Vec<T>> {
    input
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<T>()
                .map_err(|e| anyhow::anyhow!("invalid {what}: {e}"))
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn execute(
    level: u32,
    attack: Option<String>,
    good_saves: Option<String>,
    favor: Option<String>,
    disfavor: Option<String>,
    improve: Option<String>,
    hit_die: Option<u32>,
    profile_path: Option<PathBuf>,
    count: usize,
    seed: Option<u64>,
    format: String,
) -> Result<()> {
    // Validate inputs
    anyhow::ensure!(level >= 1, "level must be at least 1");
    anyhow::ensure!(count >= 1, "count must be at least 1");
    if let Some(die) = hit_die {
        anyhow::ensure!(die >= 1, "hit die must have at least one face");
    }

    let mut config = GeneratorConfig {
        level,
        ..Default::default()
    };

    // Profile first, then flags override.
    if let Some(path) = &profile_path {
        let profile = parse_profile(path)?;
        tracing::info!(profile = %profile.name, "applying class profile");
        profile.apply(&mut config);
    }

    if let Some(attack) = &attack {
        config.attack = attack
            .parse()
            .map_err(|e: String| anyhow::anyhow!("invalid attack progression: {e}"))?;
    }
    if let Some(saves) = &good_saves {
        config.good_saves = parse_list(saves, "save")?;
    }
    if let Some(favor) = &favor {
        config.allocation.favored = parse_list(favor, "ability")?;
    }
    if let Some(disfavor) = &disfavor {
        config.allocation.disfavored = parse_list(disfavor, "ability")?;
    }
    if let Some(improve) = &improve {
        config.improve = parse_list(improve, "ability")?;
    }
    if hit_die.is_some() {
        config.hit_die = hit_die;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sheets: Vec<CharacterSheet> = (0..count)
        .map(|_| generate(&mut rng, &config))
        .collect::<Result<_, _>>()?;

    match format.as_str() {
        "text" => {
            for (i, sheet) in sheets.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", render_stat_block(sheet));
            }
        }
        "table" => println!("{}", summary_table(&sheets)),
        "json" => println!("{}", SheetReport::new(sheets).to_json()?),
        other => anyhow::bail!("unknown format: {other} (expected text, table, or json)"),
    }

    Ok(())
}
