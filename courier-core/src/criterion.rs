//! Optimisation criteria and the weight extraction they drive.
//!
//! A [`Criterion`] is chosen per query. Path searches read route weights
//! exclusively through [`Criterion::weight_of`] so they never depend on the
//! layout of [`RouteWeights`].
//!
//! # Examples
//! ```
//! use courier_core::Criterion;
//!
//! let criterion: Criterion = "Time".parse().expect("known criterion");
//! assert_eq!(criterion, Criterion::Time);
//! assert!("speed".parse::<Criterion>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Route, RouteWeights};

/// The weight dimension a query minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Criterion {
    /// Minimise travelled distance.
    #[default]
    Distance,
    /// Minimise travel time.
    Time,
    /// Minimise monetary cost.
    Cost,
}

impl Criterion {
    /// Every criterion, in declaration order.
    pub const ALL: [Self; 3] = [Self::Distance, Self::Time, Self::Cost];

    /// Return the criterion as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Cost => "cost",
        }
    }

    /// Select the weight this criterion scores.
    #[must_use]
    pub const fn select(self, weights: &RouteWeights) -> f64 {
        match self {
            Self::Distance => weights.distance(),
            Self::Time => weights.time(),
            Self::Cost => weights.cost(),
        }
    }

    /// Scalar weight of `route` under this criterion.
    #[must_use]
    pub const fn weight_of(self, route: &Route) -> f64 {
        self.select(route.weights())
    }
}

/// Scalar weight of `route` under `criterion`.
///
/// Free-function form of [`Criterion::weight_of`].
#[must_use]
pub const fn weight_of(route: &Route, criterion: Criterion) -> f64 {
    criterion.weight_of(route)
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when criterion text names none of distance, time or cost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid criterion `{value}` (expected distance, time or cost)")]
pub struct InvalidCriterion {
    /// The text that failed to parse.
    pub value: String,
}

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "time" => Ok(Self::Time),
            "cost" => Ok(Self::Cost),
            _ => Err(InvalidCriterion {
                value: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<&str> for Criterion {
    type Error = InvalidCriterion;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
