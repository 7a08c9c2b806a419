//! Roadgrid CLI - Command-line interface for Roadgrid
//!
//! This is the main entry point for users interacting with Roadgrid.
//! It loads a route file and answers shortest-route, center and
//! statistics queries, either one-shot or through an interactive menu.

use clap::{Parser, Subcommand};
use colored::Colorize;
use roadgrid_core::Condition;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod display;
mod menu;

#[derive(Parser)]
#[command(name = "roadgrid")]
#[command(author = "Roadgrid Contributors")]
#[command(version)]
#[command(about = "Weather-aware shortest routes between locations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Route file: `origin destination normal rain snow storm` per line
    #[arg(short, long, global = true, default_value = "guategrafo.txt")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known locations
    Locations,

    /// Shortest route between two locations
    Route {
        /// Starting location
        origin: String,

        /// Final location
        destination: String,

        /// Weather condition (normal, rain, snow, storm or 0-3)
        #[arg(short, long, default_value = "normal")]
        condition: Condition,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Location minimizing the worst-case travel time to all others
    Center {
        /// Weather condition (normal, rain, snow, storm or 0-3)
        #[arg(short, long, default_value = "normal")]
        condition: Condition,

        /// Show the eccentricity of every location
        #[arg(long)]
        why: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print the adjacency matrix for a condition
    Matrix {
        /// Weather condition (normal, rain, snow, storm or 0-3)
        #[arg(short, long, default_value = "normal")]
        condition: Condition,

        /// Show shortest distances instead of direct travel times
        #[arg(long)]
        distances: bool,
    },

    /// Show network statistics for a condition
    Stats {
        /// Weather condition (normal, rain, snow, storm or 0-3)
        #[arg(short, long, default_value = "normal")]
        condition: Condition,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Export the network to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "roadgrid-network.json")]
        output: PathBuf,
    },

    /// Start the interactive menu
    Menu {
        /// Condition active when the menu starts
        #[arg(short, long, default_value = "normal")]
        condition: Condition,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let file = cli.file;
    let result = match cli.command {
        Commands::Locations => commands::locations(&file),
        Commands::Route {
            origin,
            destination,
            condition,
            json,
        } => commands::route(&file, &origin, &destination, condition, json),
        Commands::Center {
            condition,
            why,
            json,
        } => commands::center(&file, condition, why, json),
        Commands::Matrix {
            condition,
            distances,
        } => commands::matrix(&file, condition, distances),
        Commands::Stats { condition, json } => commands::stats(&file, condition, json),
        Commands::Export { output } => commands::export(&file, &output),
        Commands::Menu { condition } => commands::menu(&file, condition),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
