//! The `rollforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use rollforge_core::profile::{load_profile_directory, parse_profile, validate_profile};

pub fn execute(profiles_path: PathBuf) -> Result<()> {
    let profiles = if profiles_path.is_dir() {
        load_profile_directory(&profiles_path)?
    } else {
        vec![parse_profile(&profiles_path)?]
    };

    anyhow::ensure!(!profiles.is_empty(), "no profiles found in {}", profiles_path.display());

    let mut total_warnings = 0;

    for profile in &profiles {
        println!("Profile: {}", profile.name);

        let warnings = validate_profile(profile);
        for w in &warnings {
            println!("  WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All profiles valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
