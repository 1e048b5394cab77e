//! Network builders shared by unit, behaviour and property tests.

use crate::{LocationId, Network, NetworkError, RouteWeights};

/// Weights with the same value in every dimension.
///
/// # Errors
/// Returns [`NetworkError::InvalidWeight`] for negative or non-finite input.
pub fn uniform(weight: f64) -> Result<RouteWeights, NetworkError> {
    RouteWeights::new(weight, weight, weight)
}

/// Build a network from location ids and `(from, to, distance, time, cost)`
/// directed routes.
///
/// # Errors
/// Propagates any [`NetworkError`] raised while inserting.
pub fn network_from(
    locations: &[&str],
    routes: &[(&str, &str, f64, f64, f64)],
) -> Result<Network, NetworkError> {
    let mut network = Network::new();
    for id in locations {
        network.add_location(*id, None)?;
    }
    for &(from, to, distance, time, cost) in routes {
        network.add_route(from, to, RouteWeights::new(distance, time, cost)?)?;
    }
    Ok(network)
}

/// The three-location network `A → B (5)`, `B → C (3)`, `A → C (10)` with
/// uniform weights.
///
/// The cheapest path from `A` to `C` detours through `B`.
///
/// # Errors
/// Propagates any [`NetworkError`] raised while inserting.
pub fn detour_network() -> Result<Network, NetworkError> {
    network_from(
        &["A", "B", "C"],
        &[
            ("A", "B", 5.0, 5.0, 5.0),
            ("B", "C", 3.0, 3.0, 3.0),
            ("A", "C", 10.0, 10.0, 10.0),
        ],
    )
}

/// Two routes `A → B` where the criterion decides which is shorter.
///
/// Route one is `(10, 1, 5)` and route two `(2, 8, 5)` as
/// `(distance, time, cost)`.
///
/// # Errors
/// Propagates any [`NetworkError`] raised while inserting.
pub fn trade_off_network() -> Result<Network, NetworkError> {
    network_from(
        &["A", "B"],
        &[("A", "B", 10.0, 1.0, 5.0), ("A", "B", 2.0, 8.0, 5.0)],
    )
}

/// Convert string ids into a path for comparison with
/// [`RouteResult::path`](crate::RouteResult::path).
#[must_use]
pub fn path(ids: &[&str]) -> Vec<LocationId> {
    ids.iter().copied().map(LocationId::from).collect()
}
