//! A thread-safe handle to a [`Network`].
//!
//! Readers run concurrently and writers take the lock exclusively, so a
//! query never sees a half-applied mutation. The lock is `parking_lot`'s,
//! which does not poison: a panicking closure releases it and later callers
//! proceed normally.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Location, LocationId, Network, NetworkError, Route, RouteId, RouteWeights};

/// A cloneable, lock-protected [`Network`].
///
/// Clones share the same underlying network.
///
/// # Examples
/// ```
/// use courier_core::{Network, NetworkError, RouteWeights, SharedNetwork};
///
/// # fn main() -> Result<(), NetworkError> {
/// let shared = SharedNetwork::new(Network::new());
/// shared.add_location("A", None)?;
/// shared.add_location("B", None)?;
/// shared.add_route("A", "B", RouteWeights::new(1.0, 2.0, 3.0)?)?;
///
/// let reader = shared.clone();
/// assert_eq!(reader.read(Network::route_count), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<Network>>,
}

impl SharedNetwork {
    /// Wrap `network` for shared access.
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    /// Run `f` with shared read access.
    ///
    /// Everything `f` observes comes from one consistent network state.
    pub fn read<T>(&self, f: impl FnOnce(&Network) -> T) -> T {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive write access.
    pub fn write<T>(&self, f: impl FnOnce(&mut Network) -> T) -> T {
        f(&mut self.inner.write())
    }

    /// Clone the current network state.
    #[must_use]
    pub fn snapshot(&self) -> Network {
        self.read(Network::clone)
    }

    /// Add a location under the write lock.
    ///
    /// # Errors
    /// See [`Network::add_location`].
    pub fn add_location(
        &self,
        id: impl Into<LocationId>,
        label: Option<String>,
    ) -> Result<(), NetworkError> {
        self.write(|network| network.add_location(id, label))
    }

    /// Insert a fully described location under the write lock.
    ///
    /// # Errors
    /// See [`Network::insert_location`].
    pub fn insert_location(&self, location: Location) -> Result<(), NetworkError> {
        self.write(|network| network.insert_location(location))
    }

    /// Remove a location and its incident routes under the write lock.
    ///
    /// # Errors
    /// See [`Network::remove_location`].
    pub fn remove_location(&self, id: &str) -> Result<Location, NetworkError> {
        self.write(|network| network.remove_location(id))
    }

    /// Add a directed route under the write lock.
    ///
    /// # Errors
    /// See [`Network::add_route`].
    pub fn add_route(
        &self,
        from: &str,
        to: &str,
        weights: RouteWeights,
    ) -> Result<RouteId, NetworkError> {
        self.write(|network| network.add_route(from, to, weights))
    }

    /// Add a route in each direction under one write lock.
    ///
    /// # Errors
    /// See [`Network::add_bidirectional_route`].
    pub fn add_bidirectional_route(
        &self,
        a: &str,
        b: &str,
        weights: RouteWeights,
    ) -> Result<(RouteId, RouteId), NetworkError> {
        self.write(|network| network.add_bidirectional_route(a, b, weights))
    }

    /// Remove a directed route under the write lock.
    ///
    /// # Errors
    /// See [`Network::remove_route`].
    pub fn remove_route(
        &self,
        from: &str,
        to: &str,
        index: Option<usize>,
    ) -> Result<Route, NetworkError> {
        self.write(|network| network.remove_route(from, to, index))
    }

    /// Remove the route with identifier `id` under the write lock.
    ///
    /// # Errors
    /// See [`Network::remove_route_by_id`].
    pub fn remove_route_by_id(&self, id: RouteId) -> Result<Route, NetworkError> {
        self.write(|network| network.remove_route_by_id(id))
    }
}

impl From<Network> for SharedNetwork {
    fn from(network: Network) -> Self {
        Self::new(network)
    }
}
