//! The path-finding boundary between the network model and search crates.

use thiserror::Error;

use crate::{Criterion, InvalidCriterion, LocationId, Network, NetworkError, RouteResult};

/// Errors returned by path searches and multi-stop plans.
///
/// Queries never mutate the network, so none of these leave it changed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A queried location is not part of the network.
    #[error("unknown location `{id}`")]
    UnknownLocation {
        /// The missing identifier.
        id: LocationId,
    },
    /// The query named a criterion other than distance, time or cost.
    #[error(transparent)]
    InvalidCriterion(#[from] InvalidCriterion),
    /// The destination cannot be reached from the origin.
    #[error("no path exists from `{from}` to `{to}`")]
    NoPathExists {
        /// Where the search started.
        from: LocationId,
        /// The unreachable location.
        to: LocationId,
    },
    /// Accumulated weight exceeded the largest finite value.
    #[error("accumulated {criterion} weight overflows at `{at}`")]
    WeightOverflow {
        /// Criterion being accumulated.
        criterion: Criterion,
        /// Location whose weight could not be represented.
        at: LocationId,
    },
    /// An appended leg does not start where the itinerary ends.
    #[error("leg starting at {} cannot follow an itinerary ending at {}", endpoint(.starts), endpoint(.ends))]
    DiscontinuousLeg {
        /// Last location of the itinerary, if it has one.
        ends: Option<LocationId>,
        /// First location of the rejected leg, if it has one.
        starts: Option<LocationId>,
    },
    /// A topology lookup failed for a reason other than a missing location.
    #[error(transparent)]
    Network(NetworkError),
}

fn endpoint(id: &Option<LocationId>) -> String {
    id.as_ref()
        .map_or_else(|| "nothing".to_owned(), |id| format!("`{id}`"))
}

impl From<NetworkError> for RoutingError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::UnknownLocation { id } => Self::UnknownLocation { id },
            other => Self::Network(other),
        }
    }
}

/// Compute a single-criterion shortest path through a [`Network`].
///
/// Implementations must be deterministic: the same network, endpoints and
/// criterion always produce the same [`RouteResult`]. They must be
/// `Send + Sync` so a planner can be shared across threads.
///
/// # Examples
/// ```
/// use courier_core::{Criterion, Network, PathFinder, RouteResult, RoutingError};
///
/// /// Only answers queries whose endpoints coincide.
/// struct StayPut;
///
/// impl PathFinder for StayPut {
///     fn shortest_path(
///         &self,
///         network: &Network,
///         source: &str,
///         destination: &str,
///         criterion: Criterion,
///     ) -> Result<RouteResult, RoutingError> {
///         let origin = network
///             .location(source)
///             .ok_or_else(|| RoutingError::UnknownLocation { id: source.into() })?;
///         if source == destination {
///             Ok(RouteResult::single_leg(criterion, origin.id().clone(), Vec::new()))
///         } else {
///             Err(RoutingError::NoPathExists {
///                 from: source.into(),
///                 to: destination.into(),
///             })
///         }
///     }
/// }
///
/// let mut network = Network::new();
/// network.add_location("A", None).expect("fresh id");
/// let result = StayPut.shortest_path(&network, "A", "A", Criterion::Cost)?;
/// assert_eq!(result.total_weight(), 0.0);
/// # Ok::<(), RoutingError>(())
/// ```
pub trait PathFinder: Send + Sync {
    /// Find the minimum-weight path from `source` to `destination`.
    ///
    /// # Errors
    /// Returns [`RoutingError::UnknownLocation`] when either endpoint is
    /// absent, [`RoutingError::NoPathExists`] when `destination` is
    /// unreachable and [`RoutingError::WeightOverflow`] when a path weight
    /// cannot be represented.
    fn shortest_path(
        &self,
        network: &Network,
        source: &str,
        destination: &str,
        criterion: Criterion,
    ) -> Result<RouteResult, RoutingError>;
}
