//! The logistics network: locations plus the routes linking them.
//!
//! Storage is an ordered map from location id to the location and its
//! outgoing routes, kept in insertion order. Ordering by id makes iteration
//! deterministic; insertion order within each adjacency list is what lets a
//! path search break ties the same way on every run.
//!
//! Every mutation checks all of its preconditions before writing, so an
//! error leaves the network untouched.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::{Location, LocationId, NetworkError, Route, RouteId, RouteWeights};

#[derive(Debug, Clone, PartialEq)]
struct Node {
    location: Location,
    outgoing: Vec<Route>,
}

/// A weighted, directed multigraph of [`Location`]s and [`Route`]s.
///
/// # Examples
/// ```
/// use courier_core::{Network, NetworkError, RouteWeights};
///
/// # fn main() -> Result<(), NetworkError> {
/// let mut network = Network::new();
/// for id in ["A", "B", "C"] {
///     network.add_location(id, None)?;
/// }
/// network.add_route("A", "B", RouteWeights::new(5.0, 1.0, 1.0)?)?;
/// network.add_bidirectional_route("B", "C", RouteWeights::new(3.0, 1.0, 1.0)?)?;
/// assert_eq!(network.route_count(), 3);
///
/// network.remove_location("B")?;
/// assert_eq!(network.route_count(), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    nodes: BTreeMap<LocationId, Node>,
    origins: HashMap<RouteId, LocationId>,
    next_route_id: u64,
}

impl Network {
    /// Create an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location with an optional display label.
    ///
    /// # Errors
    /// Returns [`NetworkError::DuplicateLocation`] when `id` is taken.
    pub fn add_location(
        &mut self,
        id: impl Into<LocationId>,
        label: Option<String>,
    ) -> Result<(), NetworkError> {
        let mut location = Location::new(id);
        if let Some(text) = label {
            location = location.with_label(text);
        }
        self.insert_location(location)
    }

    /// Add a fully described location.
    ///
    /// # Errors
    /// Returns [`NetworkError::DuplicateLocation`] when the id is taken.
    pub fn insert_location(&mut self, location: Location) -> Result<(), NetworkError> {
        let id = location.id().clone();
        if self.nodes.contains_key(&id) {
            return Err(NetworkError::DuplicateLocation { id });
        }
        debug!("added location {id}");
        self.nodes.insert(
            id,
            Node {
                location,
                outgoing: Vec::new(),
            },
        );
        Ok(())
    }

    /// Remove a location and every route starting or ending at it.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownLocation`] when `id` is absent.
    pub fn remove_location(&mut self, id: &str) -> Result<Location, NetworkError> {
        let Self { nodes, origins, .. } = self;
        let node = nodes.remove(id).ok_or_else(|| NetworkError::UnknownLocation {
            id: LocationId::from(id),
        })?;
        for route in &node.outgoing {
            origins.remove(&route.id());
        }
        let mut removed = node.outgoing.len();
        for other in nodes.values_mut() {
            other.outgoing.retain(|route| {
                if route.destination().as_str() == id {
                    origins.remove(&route.id());
                    removed += 1;
                    false
                } else {
                    true
                }
            });
        }
        debug!("removed location {id} and {removed} incident route(s)");
        Ok(node.location)
    }

    /// Add a directed route from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownLocation`] when either endpoint is
    /// absent. Weight validation happens in [`RouteWeights::new`].
    pub fn add_route(
        &mut self,
        from: &str,
        to: &str,
        weights: RouteWeights,
    ) -> Result<RouteId, NetworkError> {
        let (origin, destination) = self.endpoints(from, to)?;
        Ok(self.push_route(origin, destination, weights))
    }

    /// Add a pair of mirrored routes between `a` and `b`.
    ///
    /// Both directions are inserted or neither is. Returns the ids of the
    /// `a → b` and `b → a` routes, in that order.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownLocation`] when either endpoint is
    /// absent.
    pub fn add_bidirectional_route(
        &mut self,
        a: &str,
        b: &str,
        weights: RouteWeights,
    ) -> Result<(RouteId, RouteId), NetworkError> {
        let (origin, destination) = self.endpoints(a, b)?;
        let forward = self.push_route(origin.clone(), destination.clone(), weights);
        let backward = self.push_route(destination, origin, weights);
        Ok((forward, backward))
    }

    /// Remove one route from `from` to `to`.
    ///
    /// Parallel routes are ordered by insertion; `index` picks among them and
    /// defaults to the earliest.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownRoute`] when no route matches.
    pub fn remove_route(
        &mut self,
        from: &str,
        to: &str,
        index: Option<usize>,
    ) -> Result<Route, NetworkError> {
        let unknown = || NetworkError::UnknownRoute {
            from: LocationId::from(from),
            to: LocationId::from(to),
            index,
        };
        let node = self.nodes.get_mut(from).ok_or_else(unknown)?;
        let position = node
            .outgoing
            .iter()
            .enumerate()
            .filter(|(_, route)| route.destination().as_str() == to)
            .nth(index.unwrap_or(0))
            .map(|(position, _)| position)
            .ok_or_else(unknown)?;
        let route = node.outgoing.remove(position);
        self.origins.remove(&route.id());
        debug!("removed route {} from {from} to {to}", route.id());
        Ok(route)
    }

    /// Remove the route with identifier `id`.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownRouteId`] when no route carries `id`.
    pub fn remove_route_by_id(&mut self, id: RouteId) -> Result<Route, NetworkError> {
        let unknown = || NetworkError::UnknownRouteId { id };
        let origin = self.origins.get(&id).ok_or_else(unknown)?;
        let node = self.nodes.get_mut(origin).ok_or_else(unknown)?;
        let position = node
            .outgoing
            .iter()
            .position(|route| route.id() == id)
            .ok_or_else(unknown)?;
        let route = node.outgoing.remove(position);
        self.origins.remove(&id);
        debug!(
            "removed route {id} from {} to {}",
            route.origin(),
            route.destination()
        );
        Ok(route)
    }

    /// Outgoing routes of `id` paired with the location each one reaches.
    ///
    /// The iterator is lazy, yields routes in insertion order and can be
    /// restarted by cloning it before use or calling this method again.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownLocation`] when `id` is absent.
    pub fn neighbors(&self, id: &str) -> Result<Neighbors<'_>, NetworkError> {
        self.nodes
            .get(id)
            .map(|node| Neighbors {
                routes: node.outgoing.iter(),
            })
            .ok_or_else(|| NetworkError::UnknownLocation {
                id: LocationId::from(id),
            })
    }

    /// Look up a location.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.nodes.get(id).map(|node| &node.location)
    }

    /// Whether `id` names a location in the network.
    #[must_use]
    pub fn contains_location(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All locations, ordered by id.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.nodes.values().map(|node| &node.location)
    }

    /// Look up a route by identifier.
    #[must_use]
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        let origin = self.origins.get(&id)?;
        self.nodes
            .get(origin)?
            .outgoing
            .iter()
            .find(|route| route.id() == id)
    }

    /// All routes, grouped by origin id and in insertion order per origin.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.nodes.values().flat_map(|node| node.outgoing.iter())
    }

    /// Parallel routes from `from` to `to`, in insertion order.
    pub fn routes_between<'a>(
        &'a self,
        from: &str,
        to: &'a str,
    ) -> impl Iterator<Item = &'a Route> + 'a {
        self.nodes
            .get(from)
            .into_iter()
            .flat_map(|node| node.outgoing.iter())
            .filter(move |route| route.destination().as_str() == to)
    }

    /// Number of locations.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.origins.len()
    }

    /// Whether the network has no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn endpoints(&self, from: &str, to: &str) -> Result<(LocationId, LocationId), NetworkError> {
        let resolve = |id: &str| {
            self.nodes
                .get_key_value(id)
                .map(|(key, _)| key.clone())
                .ok_or_else(|| NetworkError::UnknownLocation {
                    id: LocationId::from(id),
                })
        };
        Ok((resolve(from)?, resolve(to)?))
    }

    fn push_route(
        &mut self,
        origin: LocationId,
        destination: LocationId,
        weights: RouteWeights,
    ) -> RouteId {
        let id = RouteId::new(self.next_route_id);
        self.next_route_id = self.next_route_id.saturating_add(1);
        debug!("added route {id} from {origin} to {destination}");
        let route = Route::new(id, origin.clone(), destination, weights);
        if let Some(node) = self.nodes.get_mut(&origin) {
            node.outgoing.push(route);
            self.origins.insert(id, origin);
        }
        id
    }
}

/// Iterator over the outgoing routes of one location.
///
/// Created by [`Network::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    routes: std::slice::Iter<'a, Route>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = (&'a LocationId, &'a Route);

    fn next(&mut self) -> Option<Self::Item> {
        self.routes.next().map(|route| (route.destination(), route))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.routes.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests;
