//! `route`, `plan` and `neighbors` command implementations.
//!
//! Each command layers its arguments with `ortho_config`, resolves them into
//! a config struct and queries the bundled sample network. The criterion
//! stays text until the query runs so an unknown value is reported by the
//! routing engine as [`RoutingError::InvalidCriterion`].

use std::io::Write;

use clap::Parser;
use courier_core::{Criterion, Network, RoutingError, sample::sample_network};
use courier_planner::{plan_route, shortest_path};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::{NeighborsReport, RouteReport, write_report};
use crate::{
    ARG_FROM, ARG_LOCATION, ARG_START, ARG_TO, CliError, DEFAULT_CRITERION,
    ENV_NEIGHBORS_LOCATION, ENV_PLAN_START, ENV_ROUTE_FROM, ENV_ROUTE_TO,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the minimum-weight path between two locations of the \
                 sample network under one criterion. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Find the shortest path between two locations"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct RouteArgs {
    /// Location to start from.
    #[arg(long = ARG_FROM, value_name = "id")]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Location to reach.
    #[arg(long = ARG_TO, value_name = "id")]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Weight to minimise: distance, time or cost.
    #[arg(long, value_name = "criterion")]
    #[serde(default)]
    pub(crate) criterion: Option<String>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) criterion: String,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_ROUTE_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_ROUTE_TO,
        })?;
        Ok(Self {
            from,
            to,
            criterion: args
                .criterion
                .unwrap_or_else(|| DEFAULT_CRITERION.to_owned()),
        })
    }
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan an itinerary from a start location through every \
                 listed stop using the nearest-neighbour heuristic. The plan \
                 is not guaranteed to be the shortest possible tour.",
    about = "Plan a multi-stop itinerary"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct PlanArgs {
    /// Location the itinerary starts from.
    #[arg(long = ARG_START, value_name = "id")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Comma-separated stops to visit.
    #[arg(long, value_name = "ids", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) stops: Option<Vec<String>>,
    /// Weight to minimise: distance, time or cost.
    #[arg(long, value_name = "criterion")]
    #[serde(default)]
    pub(crate) criterion: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) start: String,
    pub(crate) stops: Vec<String>,
    pub(crate) criterion: String,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_PLAN_START,
        })?;
        Ok(Self {
            start,
            stops: args.stops.unwrap_or_default(),
            criterion: args
                .criterion
                .unwrap_or_else(|| DEFAULT_CRITERION.to_owned()),
        })
    }
}

/// CLI arguments for the `neighbors` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the routes leaving a location")]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct NeighborsArgs {
    /// Location whose outgoing routes are listed.
    #[arg(long = ARG_LOCATION, value_name = "id")]
    #[serde(default)]
    pub(crate) location: Option<String>,
}

impl NeighborsArgs {
    pub(crate) fn into_config(self) -> Result<NeighborsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NeighborsConfig::try_from(merged)
    }
}

/// Resolved `neighbors` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NeighborsConfig {
    pub(crate) location: String,
}

impl TryFrom<NeighborsArgs> for NeighborsConfig {
    type Error = CliError;

    fn try_from(args: NeighborsArgs) -> Result<Self, Self::Error> {
        let location = args.location.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_NEIGHBORS_LOCATION,
        })?;
        Ok(Self { location })
    }
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_route(&sample_network()?, &config)?;
    write_report(writer, &report)
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_plan(&sample_network()?, &config)?;
    write_report(writer, &report)
}

pub(crate) fn run_neighbors(args: NeighborsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_neighbors(&sample_network()?, &config)?;
    write_report(writer, &report)
}

pub(crate) fn execute_route(
    network: &Network,
    config: &RouteConfig,
) -> Result<RouteReport, CliError> {
    let criterion = parse_criterion(&config.criterion)?;
    debug!("route {} -> {} by {criterion}", config.from, config.to);
    let result = shortest_path(network, &config.from, &config.to, criterion)?;
    Ok(RouteReport::from(&result))
}

pub(crate) fn execute_plan(network: &Network, config: &PlanConfig) -> Result<RouteReport, CliError> {
    let criterion = parse_criterion(&config.criterion)?;
    debug!(
        "plan from {} through {:?} by {criterion}",
        config.start, config.stops
    );
    let result = plan_route(network, &config.start, &config.stops, criterion)?;
    Ok(RouteReport::from(&result))
}

pub(crate) fn execute_neighbors(
    network: &Network,
    config: &NeighborsConfig,
) -> Result<NeighborsReport, CliError> {
    let unknown = || RoutingError::UnknownLocation {
        id: config.location.as_str().into(),
    };
    let location = network.location(&config.location).ok_or_else(unknown)?;
    let neighbors = network
        .neighbors(&config.location)
        .map_err(RoutingError::from)?;
    Ok(NeighborsReport::new(location, neighbors))
}

fn parse_criterion(text: &str) -> Result<Criterion, RoutingError> {
    text.parse::<Criterion>().map_err(RoutingError::from)
}

#[cfg(test)]
pub(crate) fn route_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
