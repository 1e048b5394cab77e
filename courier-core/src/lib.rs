//! Core domain types for the Courier routing engine.
//!
//! The crate owns the logistics network model: [`Location`] nodes joined by
//! directed, weighted [`Route`] edges inside a [`Network`]. Mutations validate
//! their input before touching state, so a rejected call never leaves the
//! network half-updated. Queries are scored through a [`Criterion`], and path
//! computations are abstracted behind the [`PathFinder`] trait so solver
//! crates can plug in their own search.
//!
//! # Examples
//!
//! ```
//! use courier_core::{Criterion, Network, RouteWeights};
//!
//! # fn main() -> Result<(), courier_core::NetworkError> {
//! let mut network = Network::new();
//! network.add_location("depot", Some("Central depot".to_owned()))?;
//! network.add_location("store", None)?;
//! network.add_route("depot", "store", RouteWeights::new(12.0, 18.0, 4.5)?)?;
//!
//! let (next, route) = network.neighbors("depot")?.next().expect("one route");
//! assert_eq!(next.as_str(), "store");
//! assert_eq!(Criterion::Time.weight_of(route), 18.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod criterion;
mod error;
mod location;
pub mod network;
mod path_finder;
mod result;
mod route;
pub mod sample;
mod shared;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use criterion::{Criterion, InvalidCriterion, weight_of};
pub use error::{NetworkError, WeightField};
pub use location::{Location, LocationId};
pub use network::{Neighbors, Network};
pub use path_finder::{PathFinder, RoutingError};
pub use result::{Leg, RouteResult, RouteTotals, StopRole};
pub use route::{Route, RouteId, RouteWeights};
pub use shared::SharedNetwork;
