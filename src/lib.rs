//! Facade crate for the Courier routing engine.
//!
//! This crate re-exports the network model and, behind the `planner` feature,
//! the Dijkstra search and multi-stop planner.

#![forbid(unsafe_code)]

pub use courier_core::{
    Criterion, InvalidCriterion, Leg, Location, LocationId, Neighbors, Network, NetworkError,
    PathFinder, Route, RouteId, RouteResult, RouteTotals, RouteWeights, RoutingError,
    SharedNetwork, StopRole, WeightField, sample, weight_of,
};

#[cfg(feature = "planner")]
pub use courier_planner::{
    DijkstraPathFinder, MinHeap, MultiStopPlanner, plan_route, shortest_path,
};
