//! The `rollforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("profiles")?;

    let starters = [
        ("profiles/fighter.toml", FIGHTER_PROFILE),
        ("profiles/cleric.toml", CLERIC_PROFILE),
        ("profiles/rogue.toml", ROGUE_PROFILE),
        ("profiles/wizard.toml", WIZARD_PROFILE),
    ];

    for (path, content) in starters {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, content)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Run: rollforge validate --profiles profiles");
    println!("  2. Run: rollforge generate 5 --profile profiles/fighter.toml");

    Ok(())
}

const FIGHTER_PROFILE: &str = r#"[profile]
name = "fighter"
description = "Front-line martial class: full attack progression, tough saves"
attack = "good"
good_saves = ["fort"]
hit_die = 10
favor = ["str", "con"]
"#;

const CLERIC_PROFILE: &str = r#"[profile]
name = "cleric"
description = "Divine caster: fair attack, strong fortitude and will"
attack = "fair"
good_saves = ["fort", "will"]
hit_die = 8
favor = ["wis", "con"]
improve = ["wis"]
"#;

const ROGUE_PROFILE: &str = r#"[profile]
name = "rogue"
description = "Skirmisher: fair attack, quick reflexes"
attack = "fair"
good_saves = ["ref"]
hit_die = 6
favor = ["dex", "int"]
"#;

const WIZARD_PROFILE: &str = r#"[profile]
name = "wizard"
description = "Arcane caster: poor attack, strong will, famously fragile"
attack = "poor"
good_saves = ["will"]
hit_die = 4
favor = ["int", "dex"]
improve = ["int"]
"#;
