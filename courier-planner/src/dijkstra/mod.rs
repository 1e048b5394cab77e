//! Single-criterion shortest paths with Dijkstra's algorithm.
//!
//! The frontier is a [`MinHeap`] with lazy re-insertion: an improved
//! tentative weight pushes a new entry and older entries for the same
//! location are skipped once it has been settled. Relaxation uses a strict
//! comparison so the first predecessor discovered at a given weight is kept.
//! Together with insertion-ordered adjacency and push-ordered heap ties this
//! makes the result a pure function of the network, the endpoints and the
//! criterion.

use std::collections::{HashMap, HashSet};

use courier_core::{
    Criterion, LocationId, Network, PathFinder, Route, RouteResult, RoutingError,
};
use log::{debug, trace};

use crate::MinHeap;

/// [`PathFinder`] backed by Dijkstra's algorithm.
///
/// # Examples
/// ```
/// use courier_core::{Criterion, Network, PathFinder, RouteWeights};
/// use courier_planner::DijkstraPathFinder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut network = Network::new();
/// for id in ["A", "B", "C"] {
///     network.add_location(id, None)?;
/// }
/// network.add_route("A", "B", RouteWeights::new(5.0, 5.0, 5.0)?)?;
/// network.add_route("B", "C", RouteWeights::new(3.0, 3.0, 3.0)?)?;
/// network.add_route("A", "C", RouteWeights::new(10.0, 10.0, 10.0)?)?;
///
/// let result = DijkstraPathFinder.shortest_path(&network, "A", "C", Criterion::Distance)?;
/// let ids: Vec<&str> = result.path().iter().map(|id| id.as_str()).collect();
/// assert_eq!(ids, ["A", "B", "C"]);
/// assert_eq!(result.total_weight(), 8.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn shortest_path(
        &self,
        network: &Network,
        source: &str,
        destination: &str,
        criterion: Criterion,
    ) -> Result<RouteResult, RoutingError> {
        shortest_path(network, source, destination, criterion)
    }
}

/// Find the minimum-weight path from `source` to `destination` under
/// `criterion`.
///
/// When `source == destination` the result is the single-location path with
/// weight zero.
///
/// # Errors
/// Returns [`RoutingError::UnknownLocation`] when either endpoint is absent
/// and [`RoutingError::NoPathExists`] when `destination` cannot be reached.
/// Returns [`RoutingError::WeightOverflow`] instead of `NoPathExists` when
/// the search dropped a path whose weight exceeded the largest finite value
/// and never reached `destination`.
pub fn shortest_path(
    network: &Network,
    source: &str,
    destination: &str,
    criterion: Criterion,
) -> Result<RouteResult, RoutingError> {
    let origin = resolve(network, source)?;
    let target = resolve(network, destination)?;

    let Some(predecessors) = search(network, origin, target, criterion)? else {
        debug!("no {criterion} path from {origin} to {target}");
        return Err(RoutingError::NoPathExists {
            from: origin.clone(),
            to: target.clone(),
        });
    };

    let mut routes = Vec::new();
    let mut cursor = target;
    while cursor != origin {
        let Some(route) = predecessors.get(cursor) else {
            break;
        };
        routes.push((*route).clone());
        cursor = route.origin();
    }
    routes.reverse();

    let result = RouteResult::single_leg(criterion, origin.clone(), routes);
    debug!(
        "{criterion} path from {origin} to {target}: {} hop(s), weight {}",
        result.routes().len(),
        result.total_weight()
    );
    Ok(result)
}

fn resolve<'a>(network: &'a Network, id: &str) -> Result<&'a LocationId, RoutingError> {
    network
        .location(id)
        .map(courier_core::Location::id)
        .ok_or_else(|| RoutingError::UnknownLocation {
            id: LocationId::from(id),
        })
}

type Predecessors<'a> = HashMap<&'a LocationId, &'a Route>;

/// Run the search, returning the predecessor map when `target` is settled.
#[expect(
    clippy::float_arithmetic,
    reason = "tentative weights are sums of route weights"
)]
fn search<'a>(
    network: &'a Network,
    origin: &'a LocationId,
    target: &'a LocationId,
    criterion: Criterion,
) -> Result<Option<Predecessors<'a>>, RoutingError> {
    let mut tentative: HashMap<&LocationId, f64> = HashMap::new();
    let mut predecessors: Predecessors<'a> = HashMap::new();
    let mut settled: HashSet<&LocationId> = HashSet::new();
    let mut frontier = MinHeap::new();
    // Non-finite candidates are dropped; the first is reported if the
    // target is never settled.
    let mut overflowed: Option<&LocationId> = None;

    tentative.insert(origin, 0.0);
    frontier.push(0.0, origin);

    while let Some((weight, here)) = frontier.pop() {
        if !settled.insert(here) {
            trace!("skipping stale entry for {here} at {weight}");
            continue;
        }
        trace!("settled {here} at {weight}");
        if here == target {
            return Ok(Some(predecessors));
        }
        let neighbours = network.neighbors(here.as_str())?;
        for (next, route) in neighbours {
            if settled.contains(next) {
                continue;
            }
            let candidate = weight + criterion.weight_of(route);
            if !candidate.is_finite() {
                trace!("{criterion} weight overflows reaching {next}");
                overflowed.get_or_insert(next);
                continue;
            }
            let improves = tentative.get(next).is_none_or(|known| candidate < *known);
            if improves {
                tentative.insert(next, candidate);
                predecessors.insert(next, route);
                frontier.push(candidate, next);
            }
        }
    }
    match overflowed {
        Some(at) => Err(RoutingError::WeightOverflow {
            criterion,
            at: at.clone(),
        }),
        None => Ok(None),
    }
}
