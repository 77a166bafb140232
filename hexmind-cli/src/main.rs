//! HEXMIND CLI - match harness for the Hex engine
//!
//! Commands:
//! - selfplay: play one engine-vs-engine game
//! - bench: score the engine against a seeded random baseline

use clap::{Parser, Subcommand};

mod bench;
mod selfplay;

#[derive(Parser)]
#[command(name = "hexmind")]
#[command(about = "Hex engine match harness")]
struct Cli {
    /// Random seed for baseline opponents (default 42)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one engine-vs-engine game
    Selfplay(selfplay::SelfplayArgs),
    /// Play the engine against a random baseline
    Bench(bench::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Selfplay(args) => selfplay::run(args),
        Commands::Bench(args) => bench::run(args, cli.seed),
    }
}
