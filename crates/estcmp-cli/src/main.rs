//! CLI application for estimate comparison.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{compare, config, diff, extract};

/// Estimate comparison - extract and reconcile line items from two estimate documents
#[derive(Parser)]
#[command(name = "estcmp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two estimates numerically, item by item
    Compare(compare::CompareArgs),

    /// Show per-group textual diffs between two estimates
    Diff(diff::DiffArgs),

    /// Extract one estimate's section/category hierarchy
    Extract(extract::ExtractArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Compare(args) => compare::run(args, cli.config.as_deref()),
        Commands::Diff(args) => diff::run(args),
        Commands::Extract(args) => extract::run(args, cli.config.as_deref()),
        Commands::Config(args) => config::run(args),
    }
}
