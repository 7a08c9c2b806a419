//! Interactive menu.
//!
//! A session owns one network and the distance result for the active
//! condition. Every modification recomputes that result before the next
//! query, so answers shown in the menu are never stale.

use crate::display::{format_time, matrix_table};
use colored::Colorize;
use roadgrid_core::{Condition, Weights};
use roadgrid_graph::{DistanceResult, GraphError, RoadNetwork};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Settings for an interactive session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Condition active when the session starts.
    pub condition: Condition,
    /// Print the adjacency matrix before the first menu.
    pub show_matrix_on_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            condition: Condition::Normal,
            show_matrix_on_start: true,
        }
    }
}

pub struct Session<R, W> {
    network: RoadNetwork,
    condition: Condition,
    result: DistanceResult,
    config: SessionConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(network: RoadNetwork, config: SessionConfig, input: R, output: W) -> Self {
        let result = network.compute(config.condition);
        Self {
            network,
            condition: config.condition,
            result,
            config,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    #[cfg(test)]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "=== Roadgrid Route Planner ===".cyan().bold())?;
        if self.config.show_matrix_on_start {
            self.print_matrix()?;
        }
        self.print_center("Graph center")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.query_route()?,
                "2" => self.print_center("Graph center")?,
                "3" => self.modify_graph()?,
                "4" => self.print_stats()?,
                "5" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "{}", "Invalid option.".yellow())?,
            }
        }

        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} ({})",
            "=== MAIN MENU ===".bold(),
            self.condition.to_string().yellow()
        )?;
        writeln!(self.output, "1. Shortest route between locations")?;
        writeln!(self.output, "2. Show graph center")?;
        writeln!(self.output, "3. Modify graph")?;
        writeln!(self.output, "4. Show statistics")?;
        writeln!(self.output, "5. Exit")
    }

    /// Prints `label` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number(&mut self, label: &str) -> io::Result<Option<f64>> {
        Ok(self
            .prompt(label)?
            .and_then(|text| text.parse::<f64>().ok()))
    }

    fn recompute(&mut self) {
        debug!("Recomputing shortest paths ({})", self.condition);
        self.result = self.network.compute(self.condition);
    }

    fn query_route(&mut self) -> io::Result<()> {
        let Some(origin) = self.prompt("Origin: ")? else {
            return Ok(());
        };
        let Some(destination) = self.prompt("Destination: ")? else {
            return Ok(());
        };

        match self.network.route(&origin, &destination, &self.result) {
            Ok(route) => {
                writeln!(
                    self.output,
                    "\nShortest route from {} to {}:",
                    origin.green(),
                    destination.green()
                )?;
                writeln!(self.output, "Total time: {} hours", format_time(route.total_time))?;
                writeln!(self.output, "Path: {}", route)
            }
            Err(GraphError::NoPathExists { .. }) => writeln!(
                self.output,
                "{}",
                format!("No route exists from {} to {}", origin, destination).yellow()
            ),
            Err(e) => writeln!(self.output, "{}", e.to_string().red()),
        }
    }

    fn print_center(&mut self, label: &str) -> io::Result<()> {
        match self.network.center(&self.result) {
            Ok(center) => writeln!(self.output, "\n{}: {}", label, center.green()),
            Err(e) => writeln!(self.output, "{}", e.to_string().red()),
        }
    }

    fn print_matrix(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nAdjacency matrix - {}:",
            self.condition.to_string().yellow()
        )?;
        let table = matrix_table(
            self.network.locations(),
            self.network.store().layer(self.condition),
        );
        write!(self.output, "{}", table)
    }

    fn print_stats(&mut self) -> io::Result<()> {
        let stats = match self.network.statistics(&self.result) {
            Ok(stats) => stats,
            Err(e) => return writeln!(self.output, "{}", e.to_string().red()),
        };
        writeln!(self.output, "\n{}", "=== STATISTICS ===".bold())?;
        writeln!(self.output, "{}", stats.summary())?;
        if let Some(leader) = &stats.closeness_leader {
            writeln!(
                self.output,
                "Highest closeness centrality: {} ({:.4})",
                leader.location, leader.score
            )?;
        }
        writeln!(
            self.output,
            "Degree: avg {:.2}, max {}, min {}",
            stats.average_degree, stats.max_degree, stats.min_degree
        )
    }

    fn modify_graph(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=== MODIFY GRAPH ===".bold())?;
        writeln!(self.output, "1. Interrupt traffic between locations")?;
        writeln!(self.output, "2. Add a new connection")?;
        writeln!(self.output, "3. Change weather condition")?;
        let Some(choice) = self.prompt("Select an option: ")? else {
            return Ok(());
        };

        let changed = match choice.as_str() {
            "1" => self.interrupt_traffic()?,
            "2" => self.add_connection()?,
            "3" => self.change_condition()?,
            _ => {
                writeln!(self.output, "{}", "Invalid option.".yellow())?;
                false
            }
        };

        if changed {
            self.recompute();
            self.print_center("New graph center")?;
        }
        Ok(())
    }

    fn interrupt_traffic(&mut self) -> io::Result<bool> {
        let Some(origin) = self.prompt("From: ")? else {
            return Ok(false);
        };
        let Some(destination) = self.prompt("To: ")? else {
            return Ok(false);
        };

        match self.network.remove_connection(&origin, &destination) {
            Ok(()) => {
                writeln!(self.output, "Traffic interrupted from {} to {}", origin, destination)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.output, "{}", e.to_string().red())?;
                Ok(false)
            }
        }
    }

    fn add_connection(&mut self) -> io::Result<bool> {
        let Some(origin) = self.prompt("Origin: ")? else {
            return Ok(false);
        };
        let Some(destination) = self.prompt("Destination: ")? else {
            return Ok(false);
        };

        let mut times = [0.0; Condition::COUNT];
        for (slot, condition) in times.iter_mut().zip(Condition::ALL) {
            match self.prompt_number(&format!("Travel time ({}): ", condition))? {
                Some(time) => *slot = time,
                None => {
                    writeln!(self.output, "{}", "Please enter numeric values.".yellow())?;
                    return Ok(false);
                }
            }
        }

        match self
            .network
            .add_connection(&origin, &destination, Weights::from(times))
        {
            Ok(()) => {
                writeln!(self.output, "New connection established.")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.output, "{}", e.to_string().red())?;
                Ok(false)
            }
        }
    }

    fn change_condition(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Conditions: 0 - normal, 1 - rain, 2 - snow, 3 - storm")?;
        let Some(text) = self.prompt("Select a condition: ")? else {
            return Ok(false);
        };

        match text.parse::<Condition>() {
            Ok(condition) => {
                self.condition = condition;
                self.print_matrix()?;
                writeln!(self.output, "Routes will use {} weather", condition)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.output, "{}", e.to_string().yellow())?;
                Ok(false)
            }
        }
    }
}
