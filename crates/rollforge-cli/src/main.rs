//! rollforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rollforge", version, about = "d20 character statistics generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more characters
    Generate {
        /// Desired character level
        level: u32,

        /// Base attack progression: good/fair/poor, or a class alias
        /// (fighter, cleric, rogue, wizard)
        #[arg(long)]
        attack: Option<String>,

        /// Good saves (comma-separated: fort,ref,will)
        #[arg(long)]
        good_saves: Option<String>,

        /// Abilities to favor in stat selection (comma-separated)
        #[arg(long)]
        favor: Option<String>,

        /// Abilities to steer away from in stat selection
        #[arg(long)]
        disfavor: Option<String>,

        /// Abilities to increase with level (default: favored)
        #[arg(long)]
        improve: Option<String>,

        /// Size of hit die (e.g. 4, 6, 8; default: 4)
        #[arg(long)]
        hit_die: Option<u32>,

        /// Class profile TOML file; flags override profile fields
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Number of characters to generate
        #[arg(long, default_value = "1")]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, table, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate class profile TOML files
    Validate {
        /// Path to profile file or directory
        #[arg(long)]
        profiles: PathBuf,
    },

    /// Create starter class profiles
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rollforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            level,
            attack,
            good_saves,
            favor,
            disfavor,
            improve,
            hit_die,
            profile,
            count,
            seed,
            format,
        } => commands::generate::execute(
            level, attack, good_saves, favor, disfavor, improve, hit_die, profile, count,
            seed, format,
        ),
        Commands::Validate { profiles } => commands::validate::execute(profiles),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
