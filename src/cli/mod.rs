pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vramcast")]
#[command(about = "Offline VRAM capacity planning for LLM inference", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate VRAM for a deployment and print the profile as JSON
    Estimate {
        /// Configuration JSON file (falls back to stdin if absent or missing)
        config: Option<PathBuf>,
        /// Built-in model preset instead of a configuration file
        #[arg(long)]
        preset: Option<String>,
        /// Sequences evaluated together per forward pass
        #[arg(long)]
        batch_size: Option<u64>,
        /// Context window length in tokens
        #[arg(long)]
        context_length: Option<u64>,
        /// Simultaneous requests sharing the instance
        #[arg(long)]
        concurrent_users: Option<u64>,
        /// Bits used to store each weight
        #[arg(long)]
        bits_per_weight: Option<f64>,
        /// Bits used to store each activation/KV element
        #[arg(long)]
        bits_per_activation: Option<f64>,
    },
    /// Estimate VRAM and check the result against known GPUs
    Plan {
        /// Configuration JSON file (falls back to stdin if absent or missing)
        config: Option<PathBuf>,
        /// Built-in model preset instead of a configuration file
        #[arg(long)]
        preset: Option<String>,
        /// Check a single GPU instead of the whole table
        #[arg(long)]
        gpu: Option<String>,
        /// Save the full plan report to a JSON file
        #[arg(long)]
        output: Option<String>,
        /// Sequences evaluated together per forward pass
        #[arg(long)]
        batch_size: Option<u64>,
        /// Context window length in tokens
        #[arg(long)]
        context_length: Option<u64>,
        /// Simultaneous requests sharing the instance
        #[arg(long)]
        concurrent_users: Option<u64>,
        /// Bits used to store each weight
        #[arg(long)]
        bits_per_weight: Option<f64>,
        /// Bits used to store each activation/KV element
        #[arg(long)]
        bits_per_activation: Option<f64>,
    },
    /// List built-in model presets
    Models,
    /// List known GPU specifications
    Gpus,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            config,
            preset,
            batch_size,
            context_length,
            concurrent_users,
            bits_per_weight,
            bits_per_activation,
        } => commands::estimate(
            config,
            preset,
            batch_size,
            context_length,
            concurrent_users,
            bits_per_weight,
            bits_per_activation,
        ),
        Commands::Plan {
            config,
            preset,
            gpu,
            output,
            batch_size,
            context_length,
            concurrent_users,
            bits_per_weight,
            bits_per_activation,
        } => commands::plan(
            config,
            preset,
            gpu,
            output,
            batch_size,
            context_length,
            concurrent_users,
            bits_per_weight,
            bits_per_activation,
        ),
        Commands::Models => commands::models(),
        Commands::Gpus => commands::gpus(),
    }
}
