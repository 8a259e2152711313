//! arboquiz CLI — the terminal front end of the tree-taxonomy quiz.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "arboquiz", version, about = "Quiz de taxonomie des arbres")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive quiz session
    Play {
        /// Path to a .toml tree catalog (built-in catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Difficulty level: facile (1 field) or moyen (2 fields)
        #[arg(long, default_value = "facile")]
        difficulty: String,

        /// Number of questions to play
        #[arg(long, default_value = "10")]
        questions: u32,

        /// Seed for reproducible question selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the trees of a catalog
    ListTrees {
        /// Path to a .toml tree catalog (built-in catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Validate tree catalog TOML files
    Validate {
        /// Path to a catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create a starter catalog file
    Init,

    /// Print the usage guide
    Guide,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arboquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            catalog,
            difficulty,
            questions,
            seed,
        } => commands::play::execute(catalog, difficulty, questions, seed),
        Commands::ListTrees { catalog, format } => commands::list_trees::execute(catalog, format),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Init => commands::init::execute(),
        Commands::Guide => commands::guide::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
