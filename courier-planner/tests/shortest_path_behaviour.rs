//! Behavioural tests for the Dijkstra search using rstest-bdd.

use std::cell::RefCell;

use courier_core::test_support::{detour_network, uniform};
use courier_core::{Criterion, Network, RouteResult, RoutingError};
use courier_planner::shortest_path;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct SearchWorld {
    network: RefCell<Network>,
    outcome: RefCell<Option<Result<RouteResult, RoutingError>>>,
}

impl SearchWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<RouteResult, RoutingError> {
        self.outcome
            .borrow()
            .clone()
            .expect("a search should run before assertions")
    }
}

#[fixture]
fn world() -> SearchWorld {
    SearchWorld::default()
}

#[given("the detour network")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_detour(world: &SearchWorld) {
    world
        .network
        .replace(detour_network().expect("valid test network"));
}

#[given("a route from A to C with weight 1")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_shortcut(world: &SearchWorld) {
    world
        .network
        .borrow_mut()
        .add_route("A", "C", uniform(1.0).expect("valid weights"))
        .expect("known endpoints");
}

#[given("an isolated location {id}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_isolated(world: &SearchWorld, id: String) {
    world
        .network
        .borrow_mut()
        .add_location(id, None)
        .expect("fresh id");
}

#[when("I search from {from} to {to} by {criterion}")]
fn when_search(world: &SearchWorld, from: String, to: String, criterion: String) {
    let network = world.network.borrow();
    let outcome = criterion
        .parse::<Criterion>()
        .map_err(RoutingError::from)
        .and_then(|parsed| shortest_path(&network, &from, &to, parsed));
    world.outcome.replace(Some(outcome));
}

#[then("the path is {expected}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_path(world: &SearchWorld, expected: String) {
    let result = world.expect_outcome().expect("expected a path");
    let ids: Vec<&str> = result.path().iter().map(|id| id.as_str()).collect();
    assert_eq!(ids.join(","), expected);
}

#[then("the total weight is {weight}")]
#[expect(
    clippy::expect_used,
    clippy::float_cmp,
    reason = "behaviour tests use expect and exact sums of integral weights"
)]
fn then_weight(world: &SearchWorld, weight: f64) {
    let result = world.expect_outcome().expect("expected a path");
    assert_eq!(result.total_weight(), weight);
}

#[then("the search fails because no path exists")]
fn then_no_path(world: &SearchWorld) {
    assert!(matches!(
        world.expect_outcome(),
        Err(RoutingError::NoPathExists { .. })
    ));
}

#[then("the search fails because the criterion is invalid")]
fn then_invalid_criterion(world: &SearchWorld) {
    assert!(matches!(
        world.expect_outcome(),
        Err(RoutingError::InvalidCriterion(_))
    ));
}

#[scenario(path = "tests/features/shortest_path.feature", index = 0)]
fn detour_beats_direct(world: SearchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 1)]
fn shortcut_is_used(world: SearchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 2)]
fn isolated_location_unreachable(world: SearchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/shortest_path.feature", index = 3)]
fn unknown_criterion_rejected(world: SearchWorld) {
    let _ = world;
}
