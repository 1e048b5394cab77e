//! Nearest-neighbour planning of multi-stop itineraries.
//!
//! The heuristic is greedy: from the current position, compute a shortest
//! path to every remaining stop, take the cheapest, move there and repeat.
//! It needs O(k²) path searches for `k` stops and does not in general find
//! the optimal visiting order.

use std::collections::BTreeSet;

use courier_core::{Criterion, LocationId, Network, PathFinder, RouteResult, RoutingError};
use log::debug;

use crate::DijkstraPathFinder;

/// Multi-stop planner generic over the leg [`PathFinder`].
///
/// # Examples
/// ```
/// use courier_core::{Criterion, sample::sample_network};
/// use courier_planner::{DijkstraPathFinder, MultiStopPlanner};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let network = sample_network()?;
/// let planner = MultiStopPlanner::new(DijkstraPathFinder);
/// let plan = planner.plan(&network, "Warehouse", ["City_E", "City_A"], Criterion::Distance)?;
/// assert_eq!(plan.legs().len(), 2);
/// assert_eq!(plan.origin().map(|id| id.as_str()), Some("Warehouse"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct MultiStopPlanner<P: PathFinder> {
    finder: P,
}

impl<P: PathFinder> MultiStopPlanner<P> {
    /// Create a planner computing legs with `finder`.
    pub const fn new(finder: P) -> Self {
        Self { finder }
    }

    /// Plan an itinerary from `start` through every stop in `stops`.
    ///
    /// Duplicate stops are visited once. A stop equal to the current position
    /// contributes a zero-weight leg. With no stops the result is the single
    /// location `start` with weight zero and no legs. Among equally cheap
    /// candidates the stop with the smallest id is visited first.
    ///
    /// # Errors
    /// Returns [`RoutingError::UnknownLocation`] when `start` or a stop is
    /// absent, [`RoutingError::NoPathExists`] as soon as a remaining stop
    /// cannot be reached from the current position, and
    /// [`RoutingError::WeightOverflow`] when the itinerary weight is not
    /// finite. A [`PathFinder`] returning a leg that starts elsewhere fails
    /// with [`RoutingError::DiscontinuousLeg`].
    pub fn plan<I>(
        &self,
        network: &Network,
        start: &str,
        stops: I,
        criterion: Criterion,
    ) -> Result<RouteResult, RoutingError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let origin = known(network, start)?;
        let mut remaining = stops
            .into_iter()
            .map(|stop| known(network, stop.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        debug!(
            "planning {criterion} itinerary from {origin} through {} stop(s)",
            remaining.len()
        );

        let mut itinerary = RouteResult::stationary(criterion, origin.clone());
        let mut current = origin;
        while let Some((stop, leg)) = self.nearest(network, &current, &remaining, criterion)? {
            debug!("next stop {stop} at {}", leg.total_weight());
            remaining.remove(&stop);
            itinerary.append(leg)?;
            current = stop;
        }
        Ok(itinerary)
    }

    /// Cheapest remaining stop from `current`, or `None` when none remain.
    fn nearest(
        &self,
        network: &Network,
        current: &LocationId,
        remaining: &BTreeSet<LocationId>,
        criterion: Criterion,
    ) -> Result<Option<(LocationId, RouteResult)>, RoutingError> {
        let mut best: Option<(LocationId, RouteResult)> = None;
        for stop in remaining {
            let leg = self
                .finder
                .shortest_path(network, current.as_str(), stop.as_str(), criterion)?;
            let closer = best
                .as_ref()
                .is_none_or(|(_, incumbent)| leg.total_weight() < incumbent.total_weight());
            if closer {
                best = Some((stop.clone(), leg));
            }
        }
        Ok(best)
    }
}

/// Plan an itinerary with [`DijkstraPathFinder`] legs.
///
/// See [`MultiStopPlanner::plan`].
///
/// # Errors
/// As for [`MultiStopPlanner::plan`].
pub fn plan_route<I>(
    network: &Network,
    start: &str,
    stops: I,
    criterion: Criterion,
) -> Result<RouteResult, RoutingError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    MultiStopPlanner::new(DijkstraPathFinder).plan(network, start, stops, criterion)
}

fn known(network: &Network, id: &str) -> Result<LocationId, RoutingError> {
    network
        .location(id)
        .map(|location| location.id().clone())
        .ok_or_else(|| RoutingError::UnknownLocation {
            id: LocationId::from(id),
        })
}
