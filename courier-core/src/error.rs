//! Errors raised by network mutations and topology queries.

use std::fmt;

use thiserror::Error;

use crate::LocationId;

/// The weight dimension a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightField {
    /// Travel distance.
    Distance,
    /// Travel time.
    Time,
    /// Monetary cost.
    Cost,
}

impl WeightField {
    /// Return the field name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Cost => "cost",
        }
    }
}

impl fmt::Display for WeightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}

/// Errors returned by [`Network`](crate::Network) mutations and lookups.
///
/// A call that returns one of these leaves the network exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// A location with the same identifier already exists.
    #[error("location `{id}` already exists")]
    DuplicateLocation {
        /// The rejected identifier.
        id: LocationId,
    },
    /// The referenced location is not part of the network.
    #[error("unknown location `{id}`")]
    UnknownLocation {
        /// The missing identifier.
        id: LocationId,
    },
    /// No route matches the requested endpoints and index.
    #[error("no route from `{from}` to `{to}`{}", index_suffix(.index))]
    UnknownRoute {
        /// Origin of the requested route.
        from: LocationId,
        /// Destination of the requested route.
        to: LocationId,
        /// Position among parallel routes, if one was requested.
        index: Option<usize>,
    },
    /// No route carries the requested identifier.
    #[error("no route with id {id}")]
    UnknownRouteId {
        /// The missing route identifier.
        id: crate::RouteId,
    },
    /// A weight was negative, NaN or infinite.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidWeight {
        /// Which weight was rejected.
        field: WeightField,
        /// The rejected value.
        value: f64,
    },
}
