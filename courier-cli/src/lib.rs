//! Command-line interface for querying the Courier routing engine.
//!
//! Every subcommand runs against the bundled sample network and prints a
//! JSON report on stdout.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod query;
mod report;

pub use error::CliError;
use query::{NeighborsArgs, PlanArgs, RouteArgs};

pub(crate) const ARG_FROM: &str = "from";
pub(crate) const ARG_TO: &str = "to";
pub(crate) const ARG_START: &str = "start";
pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ENV_ROUTE_FROM: &str = "COURIER_CMDS_ROUTE_FROM";
pub(crate) const ENV_ROUTE_TO: &str = "COURIER_CMDS_ROUTE_TO";
pub(crate) const ENV_PLAN_START: &str = "COURIER_CMDS_PLAN_START";
pub(crate) const ENV_NEIGHBORS_LOCATION: &str = "COURIER_CMDS_NEIGHBORS_LOCATION";

/// Criterion used when none is configured.
pub(crate) const DEFAULT_CRITERION: &str = "distance";

/// Run the Courier CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// query fails, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    execute(cli.command, &mut stdout)
}

fn execute(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Route(args) => query::run_route(args, writer),
        Command::Plan(args) => query::run_plan(args, writer),
        Command::Neighbors(args) => query::run_neighbors(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Shortest paths and multi-stop plans over a logistics network",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the shortest path between two locations.
    Route(RouteArgs),
    /// Plan a nearest-neighbour itinerary through several stops.
    Plan(PlanArgs),
    /// List the routes leaving a location.
    Neighbors(NeighborsArgs),
}

#[cfg(test)]
mod tests;
