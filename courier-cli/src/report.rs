//! JSON reports printed by the CLI subcommands.

use std::io::Write;

use courier_core::{
    Criterion, Leg, Location, LocationId, Neighbors, RouteResult, RouteTotals, RouteWeights,
};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Outcome of a `route` or `plan` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteReport {
    pub(crate) criterion: Criterion,
    pub(crate) path: Vec<LocationId>,
    pub(crate) weight: f64,
    pub(crate) totals: RouteTotals,
    pub(crate) legs: Vec<Leg>,
}

impl From<&RouteResult> for RouteReport {
    fn from(result: &RouteResult) -> Self {
        Self {
            criterion: result.criterion(),
            path: result.path().to_vec(),
            weight: result.total_weight(),
            totals: result.totals(),
            legs: result.legs().to_vec(),
        }
    }
}

/// Outgoing routes of one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct NeighborsReport {
    pub(crate) location: LocationId,
    pub(crate) label: Option<String>,
    pub(crate) neighbors: Vec<NeighborEntry>,
}

/// One outgoing route in a [`NeighborsReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct NeighborEntry {
    pub(crate) to: LocationId,
    pub(crate) route: u64,
    pub(crate) weights: RouteWeights,
}

impl NeighborsReport {
    pub(crate) fn new(location: &Location, neighbors: Neighbors<'_>) -> Self {
        Self {
            location: location.id().clone(),
            label: location.label().map(str::to_owned),
            neighbors: neighbors
                .map(|(to, route)| NeighborEntry {
                    to: to.clone(),
                    route: route.id().get(),
                    weights: *route.weights(),
                })
                .collect(),
        }
    }
}

pub(crate) fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
