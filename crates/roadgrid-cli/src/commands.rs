//! CLI command implementations.

use crate::display::{format_time, matrix_table};
use crate::menu::{Session, SessionConfig};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use roadgrid_core::Condition;
use roadgrid_graph::{DistanceResult, RoadNetwork};
use serde::Serialize;
use std::io;
use std::path::Path;
use std::time::Duration;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads the route file behind a spinner.
pub fn load_network(path: &Path) -> Result<RoadNetwork> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Loading {}...", path.display()));

    let network = RoadNetwork::load(path);
    spinner.finish_and_clear();

    let network = network?;
    tracing::debug!("{} locations loaded", network.location_count());
    Ok(network)
}

/// List the known locations.
pub fn locations(path: &Path) -> Result<()> {
    let network = load_network(path)?;

    println!(
        "{} {} locations",
        "✓".green(),
        network.location_count().to_string().cyan()
    );
    for (i, name) in network.locations().iter().enumerate() {
        println!("  {:>3} {}", i.to_string().dimmed(), name);
    }

    Ok(())
}

/// Shortest route between two locations.
pub fn route(
    path: &Path,
    origin: &str,
    destination: &str,
    condition: Condition,
    json: bool,
) -> Result<()> {
    let network = load_network(path)?;
    let result = network.compute(condition);
    let route = network.route(origin, destination, &result)?;

    if json {
        #[derive(Serialize)]
        struct RouteOutput<'a> {
            condition: Condition,
            origin: &'a str,
            destination: &'a str,
            stops: &'a [String],
            total_time: f64,
        }

        let output = RouteOutput {
            condition,
            origin,
            destination,
            stops: &route.stops,
            total_time: route.total_time,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} -> {} ({})",
        "Shortest route".cyan().bold(),
        origin,
        destination,
        condition.to_string().yellow()
    );
    println!("  {} {} hours", "Total time:".dimmed(), format_time(route.total_time));
    println!("  {} {}", "Path:".dimmed(), route);

    Ok(())
}

/// Graph center for a condition.
pub fn center(path: &Path, condition: Condition, why: bool, json: bool) -> Result<()> {
    let network = load_network(path)?;
    let result = network.compute(condition);
    let center = network.center(&result)?;

    if json {
        #[derive(Serialize)]
        struct Eccentricity<'a> {
            location: &'a str,
            eccentricity: Option<f64>,
        }

        #[derive(Serialize)]
        struct CenterOutput<'a> {
            condition: Condition,
            center: &'a str,
            eccentricities: Vec<Eccentricity<'a>>,
        }

        let output = CenterOutput {
            condition,
            center,
            eccentricities: network
                .eccentricities(&result)?
                .into_iter()
                .map(|(location, e)| Eccentricity {
                    location,
                    eccentricity: e.is_finite().then_some(e),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        "Graph center:".cyan().bold(),
        center.green(),
        condition.to_string().yellow()
    );

    if why {
        println!();
        println!("  {}", "Worst-case travel time per location:".dimmed());
        for (name, e) in network.eccentricities(&result)? {
            let marker = if name == center { "*" } else { " " };
            println!("  {} {:<20} {}", marker, name, format_time(e));
        }
    }

    Ok(())
}

/// Print a condition's adjacency or distance matrix.
pub fn matrix(path: &Path, condition: Condition, distances: bool) -> Result<()> {
    let network = load_network(path)?;
    print_matrix(&network, condition, distances.then(|| network.compute(condition)).as_ref());
    Ok(())
}

fn print_matrix(network: &RoadNetwork, condition: Condition, result: Option<&DistanceResult>) {
    let (title, rows) = match result {
        Some(result) => ("Shortest distances", result.distances()),
        None => ("Adjacency matrix", network.store().layer(condition)),
    };

    println!("\n{} - {}:", title.cyan().bold(), condition.to_string().yellow());
    print!("{}", matrix_table(network.locations(), rows));
}

/// Network statistics for a condition.
pub fn stats(path: &Path, condition: Condition, json: bool) -> Result<()> {
    let network = load_network(path)?;
    let result = network.compute(condition);
    let stats = network.statistics(&result)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{} ({})", "Network Statistics".cyan().bold(), condition.to_string().yellow());
    println!();
    println!("  {} {}", "Locations:".dimmed(), stats.location_count);
    println!("  {} {}", "Connections:".dimmed(), stats.connection_count);
    println!("  {} {:.4}", "Density:".dimmed(), stats.density);
    if stats.strongly_connected {
        println!("  {} yes", "Strongly connected:".dimmed());
    } else {
        println!(
            "  {} no ({} components)",
            "Strongly connected:".dimmed(),
            stats.component_count
        );
    }
    if let Some(leader) = &stats.closeness_leader {
        println!(
            "  {} {} ({:.4})",
            "Closest to all:".dimmed(),
            leader.location.green(),
            leader.score
        );
    }
    println!(
        "  {} avg {:.2}, max {}, min {}",
        "Degree:".dimmed(),
        stats.average_degree,
        stats.max_degree,
        stats.min_degree
    );

    Ok(())
}

/// Export the network to JSON.
pub fn export(path: &Path, output: &Path) -> Result<()> {
    let network = load_network(path)?;
    let snapshot = network.snapshot();
    snapshot.save(output)?;

    println!(
        "{} Exported {} locations and {} connections to {}",
        "✓".green(),
        snapshot.locations.len(),
        snapshot.connections.len(),
        output.display()
    );
    Ok(())
}

/// Start the interactive menu on stdin/stdout.
pub fn menu(path: &Path, condition: Condition) -> Result<()> {
    let network = load_network(path)?;
    println!(
        "{} Loaded {} locations from {}",
        "✓".green(),
        network.location_count(),
        path.display()
    );

    let config = SessionConfig {
        condition,
        show_matrix_on_start: true,
    };
    let stdin = io::stdin();
    let mut session = Session::new(network, config, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}
