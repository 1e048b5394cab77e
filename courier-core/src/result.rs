//! Route results produced by path searches and multi-stop plans.

use crate::{Criterion, LocationId, Route, RoutingError};

/// One leg of an itinerary: the shortest path between two consecutive
/// points of a query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Where the leg starts.
    pub from: LocationId,
    /// Where the leg ends.
    pub to: LocationId,
    /// Weight of the leg under the query criterion.
    pub weight: f64,
    /// Number of routes the leg traverses.
    pub route_count: usize,
}

/// Sums of every weight dimension along a path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteTotals {
    /// Total distance.
    pub distance: f64,
    /// Total time.
    pub time: f64,
    /// Total cost.
    pub cost: f64,
}

impl RouteTotals {
    /// The component matching `criterion`.
    #[must_use]
    pub const fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Time => self.time,
            Criterion::Cost => self.cost,
        }
    }
}

/// How a location features in a computed path.
///
/// Front ends use this to colour the start, the end and the locations
/// passed through on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StopRole {
    /// First location of the path.
    Start,
    /// Last location of the path.
    End,
    /// Any other location on the path.
    Intermediate,
}

/// The outcome of a path computation.
///
/// Holds the ordered locations, the routes traversed between them, the
/// accumulated weight under the query [`Criterion`] and a per-leg breakdown.
/// A point-to-point search has exactly one leg; a multi-stop plan has one
/// leg per visited stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    criterion: Criterion,
    path: Vec<LocationId>,
    routes: Vec<Route>,
    total_weight: f64,
    legs: Vec<Leg>,
}

impl RouteResult {
    /// A result that stays at `at` and has no legs.
    ///
    /// Multi-stop plans start from this and [`append`](Self::append) each leg.
    #[must_use]
    pub fn stationary(criterion: Criterion, at: LocationId) -> Self {
        Self {
            criterion,
            path: vec![at],
            routes: Vec::new(),
            total_weight: 0.0,
            legs: Vec::new(),
        }
    }

    /// A single-leg result following `routes` from `origin`.
    ///
    /// The path is `origin` followed by the destination of every route, and
    /// the weight is accumulated in traversal order.
    #[must_use]
    pub fn single_leg(criterion: Criterion, origin: LocationId, routes: Vec<Route>) -> Self {
        let mut path = Vec::with_capacity(routes.len().saturating_add(1));
        path.push(origin.clone());
        path.extend(routes.iter().map(|route| route.destination().clone()));
        let total_weight = accumulate(routes.iter().map(|route| criterion.weight_of(route)));
        let destination = path.last().cloned().unwrap_or_else(|| origin.clone());
        Self {
            criterion,
            legs: vec![Leg {
                from: origin,
                to: destination,
                weight: total_weight,
                route_count: routes.len(),
            }],
            path,
            routes,
            total_weight,
        }
    }

    /// Continue this result with `next`, which must start where this one
    /// ends.
    ///
    /// The shared endpoint appears once in the combined path, and the total
    /// weight grows by `next`'s total. On error `self` is left unchanged.
    ///
    /// # Errors
    /// Returns [`RoutingError::DiscontinuousLeg`] when `next` does not start
    /// at this result's last location, and [`RoutingError::WeightOverflow`]
    /// when the combined weight is not finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "itinerary weight is the running sum of leg weights"
    )]
    pub fn append(&mut self, next: Self) -> Result<(), RoutingError> {
        let (Some(ends), Some(starts)) = (self.path.last(), next.path.first()) else {
            return Err(RoutingError::DiscontinuousLeg {
                ends: self.path.last().cloned(),
                starts: next.path.first().cloned(),
            });
        };
        if ends != starts {
            return Err(RoutingError::DiscontinuousLeg {
                ends: Some(ends.clone()),
                starts: Some(starts.clone()),
            });
        }
        let total_weight = self.total_weight + next.total_weight;
        if !total_weight.is_finite() {
            return Err(RoutingError::WeightOverflow {
                criterion: self.criterion,
                at: next.path.last().cloned().unwrap_or_else(|| ends.clone()),
            });
        }
        self.path.extend(next.path.into_iter().skip(1));
        self.routes.extend(next.routes);
        self.total_weight = total_weight;
        self.legs.extend(next.legs);
        Ok(())
    }

    /// Criterion the result was computed under.
    #[must_use]
    pub const fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Locations in visiting order, starting with the origin.
    #[must_use]
    pub fn path(&self) -> &[LocationId] {
        &self.path
    }

    /// Routes traversed, in order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Accumulated weight under [`criterion`](Self::criterion).
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Per-leg breakdown.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// First location of the path.
    #[must_use]
    pub fn origin(&self) -> Option<&LocationId> {
        self.path.first()
    }

    /// Last location of the path.
    #[must_use]
    pub fn destination(&self) -> Option<&LocationId> {
        self.path.last()
    }

    /// Totals of every weight dimension over the traversed routes.
    #[must_use]
    pub fn totals(&self) -> RouteTotals {
        RouteTotals {
            distance: accumulate(self.routes.iter().map(|r| r.weights().distance())),
            time: accumulate(self.routes.iter().map(|r| r.weights().time())),
            cost: accumulate(self.routes.iter().map(|r| r.weights().cost())),
        }
    }

    /// Role of `id` on the path, if it appears.
    ///
    /// A location visited more than once takes its most prominent role:
    /// start, then end, then intermediate.
    #[must_use]
    pub fn role_of(&self, id: &str) -> Option<StopRole> {
        if self.origin().is_some_and(|first| first.as_str() == id) {
            Some(StopRole::Start)
        } else if self.destination().is_some_and(|last| last.as_str() == id) {
            Some(StopRole::End)
        } else if self.path.iter().any(|step| step.as_str() == id) {
            Some(StopRole::Intermediate)
        } else {
            None
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "path weights are sums of route weights"
)]
fn accumulate(weights: impl Iterator<Item = f64>) -> f64 {
    weights.fold(0.0, |total, weight| total + weight)
}
