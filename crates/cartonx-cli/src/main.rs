//! CartonX CLI
//!
//! Command-line interface for the box allocation engine

use std::path::PathBuf;

use cartonx_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cartonx")]
#[command(about = "CartonX - Assign order items to shipping boxes", long_about = None)]
struct Cli {
    /// Catalog database path
    #[arg(long, global = true, env = "CARTONX_DB", default_value = ".cartonx/catalog.db")]
    db: PathBuf,

    /// Log output on stderr
    #[arg(long, global = true, env = "CARTONX_LOG", value_enum, default_value_t = LogMode::Off)]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    /// Human-readable, debug level
    Dev,
    /// JSON lines, info level
    Json,
    Off,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Pack a batch of orders read as JSON
    Pack(commands::pack::PackArgs),
    /// Suggest the smallest box for a single item
    Suggest(commands::suggest::SuggestArgs),
    /// Box catalog operations
    Boxes(commands::boxes::BoxesArgs),
    /// Item catalog operations
    Items(commands::items::ItemsArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogMode::Dev => logging_facility::init(Profile::Development),
        LogMode::Json => logging_facility::init(Profile::Production),
        LogMode::Off => {}
    }

    let result = match cli.command {
        Commands::Pack(args) => commands::pack::execute(args, &cli.db),
        Commands::Suggest(args) => commands::suggest::execute(args, &cli.db),
        Commands::Boxes(args) => commands::boxes::execute(args, &cli.db),
        Commands::Items(args) => commands::items::execute(args, &cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
