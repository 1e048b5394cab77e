//! Routes: directed, weighted links between two locations.

use std::fmt;

use crate::{LocationId, NetworkError, WeightField};

/// Network-assigned identifier of a [`Route`].
///
/// Identifiers are handed out in insertion order and never reused, so two
/// parallel routes between the same locations remain distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RouteId(u64);

impl RouteId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three weights carried by every route.
///
/// Values are finite and non-negative. [`RouteWeights::new`] is the only
/// constructor, and deserialisation goes through it too.
///
/// # Examples
/// ```
/// use courier_core::{NetworkError, RouteWeights, WeightField};
///
/// let weights = RouteWeights::new(25.0, 30.0, 15.0).expect("valid weights");
/// assert_eq!(weights.distance(), 25.0);
///
/// let err = RouteWeights::new(1.0, -2.0, 0.0).unwrap_err();
/// assert!(matches!(err, NetworkError::InvalidWeight { field: WeightField::Time, .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRouteWeights"))]
pub struct RouteWeights {
    distance: f64,
    time: f64,
    cost: f64,
}

impl RouteWeights {
    /// Validate and construct a weight triple.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidWeight`] naming the first weight that
    /// is negative, NaN or infinite.
    pub fn new(distance: f64, time: f64, cost: f64) -> Result<Self, NetworkError> {
        check(WeightField::Distance, distance)?;
        check(WeightField::Time, time)?;
        check(WeightField::Cost, cost)?;
        Ok(Self {
            distance,
            time,
            cost,
        })
    }

    /// All-zero weights.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            distance: 0.0,
            time: 0.0,
            cost: 0.0,
        }
    }

    /// Travel distance.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Travel time.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Monetary cost.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }
}

fn check(field: WeightField, value: f64) -> Result<(), NetworkError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidWeight { field, value })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRouteWeights {
    distance: f64,
    time: f64,
    cost: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRouteWeights> for RouteWeights {
    type Error = NetworkError;

    fn try_from(raw: RawRouteWeights) -> Result<Self, Self::Error> {
        Self::new(raw.distance, raw.time, raw.cost)
    }
}

/// A directed link from one location to another.
///
/// Routes are created by the [`Network`](crate::Network), which guarantees
/// both endpoints existed at insertion time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    id: RouteId,
    from: LocationId,
    to: LocationId,
    weights: RouteWeights,
}

impl Route {
    pub(crate) const fn new(
        id: RouteId,
        from: LocationId,
        to: LocationId,
        weights: RouteWeights,
    ) -> Self {
        Self {
            id,
            from,
            to,
            weights,
        }
    }

    /// Identifier assigned by the network.
    #[must_use]
    pub const fn id(&self) -> RouteId {
        self.id
    }

    /// Origin location.
    #[must_use]
    pub const fn origin(&self) -> &LocationId {
        &self.from
    }

    /// Destination location.
    #[must_use]
    pub const fn destination(&self) -> &LocationId {
        &self.to
    }

    /// Weights of this route.
    #[must_use]
    pub const fn weights(&self) -> &RouteWeights {
        &self.weights
    }

    /// Whether either endpoint is `location`.
    #[must_use]
    pub fn touches(&self, location: &str) -> bool {
        self.from.as_str() == location || self.to.as_str() == location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accepts_zero_weights() {
        assert_eq!(RouteWeights::new(0.0, 0.0, 0.0), Ok(RouteWeights::zero()));
    }

    #[rstest]
    #[case(-1.0, 0.0, 0.0, WeightField::Distance)]
    #[case(0.0, f64::NAN, 0.0, WeightField::Time)]
    #[case(0.0, 0.0, f64::INFINITY, WeightField::Cost)]
    #[case(f64::NEG_INFINITY, -1.0, -1.0, WeightField::Distance)]
    fn rejects_invalid_weights(
        #[case] distance: f64,
        #[case] time: f64,
        #[case] cost: f64,
        #[case] expected: WeightField,
    ) {
        let err = RouteWeights::new(distance, time, cost).expect_err("weights should be rejected");
        match err {
            NetworkError::InvalidWeight { field, .. } => assert_eq!(field, expected),
            other => panic!("expected InvalidWeight, found {other:?}"),
        }
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_revalidates_weights() {
        let ok: RouteWeights =
            serde_json::from_str(r#"{"distance":1.0,"time":2.0,"cost":3.0}"#).expect("valid");
        assert_eq!(ok.cost(), 3.0);

        let err = serde_json::from_str::<RouteWeights>(r#"{"distance":-1.0,"time":2.0,"cost":3.0}"#)
            .expect_err("negative distance");
        assert!(err.to_string().contains("distance"));
    }
}
