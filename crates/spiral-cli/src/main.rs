//! spiral-memory
//!
//! Prints both spiral memory answers for a target value, one per line:
//! the Manhattan distance of the target's cell, then the first neighbor-sum
//! spiral term larger than the target.
//!
//! Usage:
//!   spiral-memory <TARGET>
//!   TARGET=<TARGET> spiral-memory
//!
//! Environment:
//!   TARGET    Puzzle input, used when no argument is given
//!   RUST_LOG  Log filter for stderr output (default: warn)

use clap::Parser;
use spiral_topology::{puzzle, Target};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "spiral-memory", version, about = "Solve the spiral memory puzzle")]
struct Cli {
    /// Puzzle input (a positive integer)
    #[arg(env = "TARGET", allow_hyphen_values = true)]
    target: Target,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for the answers
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!("Solving for target {}", cli.target);

    let answers = puzzle::solve(cli.target)?;

    println!("{}", answers.distance);
    println!("{}", answers.first_larger);

    Ok(())
}
