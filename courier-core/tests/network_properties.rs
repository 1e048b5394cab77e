//! Property-based tests for `Network` mutations.
//!
//! # Invariants tested
//!
//! - **Cascade:** removing a location leaves no route touching it.
//! - **Route accounting:** `route_count` matches the routes reachable by
//!   iteration after any sequence of removals.
//! - **Rejection is side-effect free:** a second removal of the same
//!   location fails and changes nothing.

use courier_core::{Network, RouteWeights};
use proptest::prelude::*;

const IDS: [&str; 6] = ["L0", "L1", "L2", "L3", "L4", "L5"];

/// Strategy for directed routes between the fixed ids, parallels included.
fn routes_strategy() -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    proptest::collection::vec((0..IDS.len(), 0..IDS.len(), 0.0_f64..100.0), 0..30)
}

fn build(routes: &[(usize, usize, f64)]) -> Network {
    let mut network = Network::new();
    for id in IDS {
        network.add_location(id, None).expect("fresh id");
    }
    for &(from, to, weight) in routes {
        let weights = RouteWeights::new(weight, weight, weight).expect("valid weights");
        network
            .add_route(IDS[from], IDS[to], weights)
            .expect("known endpoints");
    }
    network
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: no route survives that starts or ends at a removed location.
    #[test]
    fn removal_cascades_to_every_incident_route(
        routes in routes_strategy(),
        victim in 0..IDS.len(),
    ) {
        let mut network = build(&routes);
        let incident = network.routes().filter(|r| r.touches(IDS[victim])).count();
        let before = network.route_count();

        network.remove_location(IDS[victim]).expect("known location");

        prop_assert!(network.routes().all(|r| !r.touches(IDS[victim])));
        prop_assert_eq!(network.route_count(), before - incident);
        prop_assert_eq!(network.routes().count(), network.route_count());
        for route in network.routes() {
            prop_assert!(network.route(route.id()).is_some());
        }
    }

    /// Property: removing the same location twice fails without side effects.
    #[test]
    fn second_removal_changes_nothing(
        routes in routes_strategy(),
        victim in 0..IDS.len(),
    ) {
        let mut network = build(&routes);
        network.remove_location(IDS[victim]).expect("known location");
        let after_first = network.clone();

        prop_assert!(network.remove_location(IDS[victim]).is_err());
        prop_assert_eq!(network, after_first);
    }

    /// Property: every neighbour yielded is the destination of its route.
    #[test]
    fn neighbours_match_route_destinations(routes in routes_strategy()) {
        let network = build(&routes);
        for id in IDS {
            let neighbours = network.neighbors(id).expect("known location");
            prop_assert_eq!(neighbours.len(), network.routes().filter(|r| r.origin().as_str() == id).count());
            for (next, route) in neighbours {
                prop_assert_eq!(next, route.destination());
                prop_assert_eq!(route.origin().as_str(), id);
            }
        }
    }
}
