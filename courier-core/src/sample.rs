//! The bundled demonstration network.
//!
//! Eight locations on a unit square joined by twelve two-way routes. The
//! command-line front end answers queries against it, and tests use it as a
//! realistic fixture.

use geo::Coord;

use crate::{Location, Network, NetworkError, RouteWeights};

/// `(id, x, y)` for each sample location.
pub const SAMPLE_LOCATIONS: [(&str, f64, f64); 8] = [
    ("Warehouse", 0.1, 0.5),
    ("City_A", 0.3, 0.8),
    ("City_B", 0.5, 0.6),
    ("City_C", 0.7, 0.9),
    ("City_D", 0.6, 0.3),
    ("City_E", 0.9, 0.5),
    ("Hub_1", 0.4, 0.4),
    ("Hub_2", 0.7, 0.6),
];

/// `(a, b, distance, time, cost)` for each two-way sample route.
pub const SAMPLE_ROUTES: [(&str, &str, f64, f64, f64); 12] = [
    ("Warehouse", "City_A", 25.0, 30.0, 15.0),
    ("Warehouse", "Hub_1", 20.0, 25.0, 12.0),
    ("City_A", "City_B", 18.0, 22.0, 10.0),
    ("City_B", "Hub_1", 15.0, 18.0, 9.0),
    ("City_B", "City_C", 22.0, 28.0, 13.0),
    ("City_B", "Hub_2", 16.0, 20.0, 11.0),
    ("City_C", "Hub_2", 12.0, 15.0, 8.0),
    ("City_C", "City_E", 20.0, 24.0, 12.0),
    ("Hub_1", "City_D", 14.0, 17.0, 9.0),
    ("City_D", "Hub_2", 13.0, 16.0, 8.0),
    ("City_D", "City_E", 19.0, 23.0, 11.0),
    ("Hub_2", "City_E", 17.0, 21.0, 10.0),
];

/// Build the sample network.
///
/// # Errors
/// Propagates any [`NetworkError`] raised while inserting the bundled data;
/// the data is consistent, so this does not fail in practice.
///
/// # Examples
/// ```
/// let network = courier_core::sample::sample_network()?;
/// assert_eq!(network.location_count(), 8);
/// assert_eq!(network.route_count(), 24);
/// # Ok::<(), courier_core::NetworkError>(())
/// ```
pub fn sample_network() -> Result<Network, NetworkError> {
    let mut network = Network::new();
    for (id, x, y) in SAMPLE_LOCATIONS {
        network.insert_location(Location::new(id).with_position(Coord { x, y }))?;
    }
    for (a, b, distance, time, cost) in SAMPLE_ROUTES {
        network.add_bidirectional_route(a, b, RouteWeights::new(distance, time, cost)?)?;
    }
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_route_runs_both_ways() {
        let network = sample_network().expect("sample data is consistent");
        for (a, b, ..) in SAMPLE_ROUTES {
            assert_eq!(network.routes_between(a, b).count(), 1, "{a} -> {b}");
            assert_eq!(network.routes_between(b, a).count(), 1, "{b} -> {a}");
        }
    }

    #[rstest]
    fn locations_carry_positions() {
        let network = sample_network().expect("sample data is consistent");
        let hub = network.location("Hub_2").expect("sample location");
        assert_eq!(hub.position(), Some(Coord { x: 0.7, y: 0.6 }));
    }
}
