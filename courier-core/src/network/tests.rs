//! Unit tests for `Network` mutations and queries.

use super::*;
use rstest::{fixture, rstest};

fn weights(distance: f64) -> RouteWeights {
    RouteWeights::new(distance, distance, distance).expect("valid weights")
}

#[fixture]
fn triangle() -> Network {
    let mut network = Network::new();
    for id in ["A", "B", "C"] {
        network.add_location(id, None).expect("fresh id");
    }
    network.add_route("A", "B", weights(5.0)).expect("A->B");
    network.add_route("B", "C", weights(3.0)).expect("B->C");
    network.add_route("A", "C", weights(10.0)).expect("A->C");
    network
}

fn neighbour_ids(network: &Network, id: &str) -> Vec<String> {
    network
        .neighbors(id)
        .expect("known location")
        .map(|(next, _)| next.to_string())
        .collect()
}

#[rstest]
fn duplicate_location_is_rejected(mut triangle: Network) {
    let before = triangle.clone();
    let err = triangle
        .add_location("A", Some("again".to_owned()))
        .expect_err("duplicate id");
    assert_eq!(
        err,
        NetworkError::DuplicateLocation {
            id: LocationId::from("A")
        }
    );
    assert_eq!(triangle, before);
}

#[rstest]
fn labels_are_kept(mut triangle: Network) {
    triangle
        .add_location("D", Some("Depot".to_owned()))
        .expect("fresh id");
    let location = triangle.location("D").expect("inserted");
    assert_eq!(location.label(), Some("Depot"));
}

#[rstest]
#[case("X", "A")]
#[case("A", "X")]
fn route_to_unknown_location_is_rejected(
    mut triangle: Network,
    #[case] from: &str,
    #[case] to: &str,
) {
    let before = triangle.clone();
    let err = triangle
        .add_route(from, to, weights(1.0))
        .expect_err("unknown endpoint");
    assert_eq!(
        err,
        NetworkError::UnknownLocation {
            id: LocationId::from("X")
        }
    );
    assert_eq!(triangle, before);
}

#[rstest]
fn bidirectional_route_adds_both_directions(mut triangle: Network) {
    triangle.add_location("D", None).expect("fresh id");
    let (forward, backward) = triangle
        .add_bidirectional_route("C", "D", weights(2.0))
        .expect("both endpoints exist");
    assert_ne!(forward, backward);
    assert_eq!(neighbour_ids(&triangle, "C"), vec!["D"]);
    assert_eq!(neighbour_ids(&triangle, "D"), vec!["C"]);
    assert_eq!(triangle.route_count(), 5);
}

#[rstest]
fn bidirectional_route_with_unknown_endpoint_adds_nothing(mut triangle: Network) {
    let before = triangle.clone();
    triangle
        .add_bidirectional_route("A", "X", weights(1.0))
        .expect_err("unknown endpoint");
    assert_eq!(triangle, before);
}

#[rstest]
fn neighbors_follow_insertion_order(triangle: Network) {
    assert_eq!(neighbour_ids(&triangle, "A"), vec!["B", "C"]);
    assert!(neighbour_ids(&triangle, "C").is_empty());
}

#[rstest]
fn neighbors_can_be_restarted(triangle: Network) {
    let neighbours = triangle.neighbors("A").expect("known location");
    let first: Vec<_> = neighbours.clone().map(|(id, _)| id.clone()).collect();
    let second: Vec<_> = neighbours.map(|(id, _)| id.clone()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[rstest]
fn neighbors_of_unknown_location_fail(triangle: Network) {
    let err = triangle.neighbors("Z").expect_err("unknown location");
    assert_eq!(
        err,
        NetworkError::UnknownLocation {
            id: LocationId::from("Z")
        }
    );
}

#[rstest]
fn removing_location_cascades_to_incident_routes(mut triangle: Network) {
    let removed = triangle.remove_location("B").expect("known location");
    assert_eq!(removed.id().as_str(), "B");
    assert_eq!(triangle.route_count(), 1);
    assert_eq!(neighbour_ids(&triangle, "A"), vec!["C"]);
    assert!(triangle.routes().all(|route| !route.touches("B")));
}

#[rstest]
fn removing_unknown_location_fails(mut triangle: Network) {
    let before = triangle.clone();
    triangle.remove_location("Q").expect_err("unknown location");
    assert_eq!(triangle, before);
}

#[rstest]
fn removing_route_twice_fails_the_second_time(mut triangle: Network) {
    triangle.remove_route("A", "B", None).expect("route exists");
    let after_first = triangle.clone();
    let err = triangle
        .remove_route("A", "B", None)
        .expect_err("already removed");
    assert!(matches!(err, NetworkError::UnknownRoute { .. }));
    assert_eq!(triangle, after_first);
}

#[rstest]
fn parallel_routes_are_removed_by_index(mut triangle: Network) {
    let cheap = triangle.add_route("A", "C", weights(1.0)).expect("parallel");
    assert_eq!(triangle.routes_between("A", "C").count(), 2);

    let removed = triangle.remove_route("A", "C", Some(1)).expect("index 1");
    assert_eq!(removed.id(), cheap);

    let err = triangle
        .remove_route("A", "C", Some(1))
        .expect_err("only one parallel route left");
    assert_eq!(
        err,
        NetworkError::UnknownRoute {
            from: LocationId::from("A"),
            to: LocationId::from("C"),
            index: Some(1),
        }
    );
}

#[rstest]
fn routes_are_removable_by_id(mut triangle: Network) {
    let id = triangle.add_route("C", "A", weights(4.0)).expect("new route");
    assert!(triangle.route(id).is_some());
    let removed = triangle.remove_route_by_id(id).expect("route exists");
    assert_eq!(removed.origin().as_str(), "C");
    assert!(triangle.route(id).is_none());
    assert_eq!(
        triangle.remove_route_by_id(id),
        Err(NetworkError::UnknownRouteId { id })
    );
}

#[rstest]
fn route_ids_are_not_reused(mut triangle: Network) {
    let first = triangle.add_route("C", "A", weights(1.0)).expect("new route");
    triangle.remove_route_by_id(first).expect("route exists");
    let second = triangle.add_route("C", "A", weights(1.0)).expect("new route");
    assert!(second > first);
}

#[rstest]
fn locations_are_listed_by_id() {
    let mut network = Network::new();
    for id in ["Warehouse", "City_B", "City_A"] {
        network.add_location(id, None).expect("fresh id");
    }
    let ids: Vec<_> = network.locations().map(|l| l.id().to_string()).collect();
    assert_eq!(ids, vec!["City_A", "City_B", "Warehouse"]);
}
