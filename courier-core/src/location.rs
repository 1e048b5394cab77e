//! Locations: the nodes of a logistics network.

use std::borrow::Borrow;
use std::fmt;

use geo::Coord;

/// Caller-assigned identifier of a [`Location`].
///
/// Identifiers are immutable once created, hash like the `str` they wrap and
/// order lexicographically. The ordering is what the multi-stop planner uses
/// to break ties between equally distant stops.
///
/// # Examples
/// ```
/// use courier_core::LocationId;
///
/// let id = LocationId::from("Warehouse");
/// assert_eq!(id.as_str(), "Warehouse");
/// assert!(LocationId::from("City_A") < LocationId::from("City_B"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationId(String);

impl LocationId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&LocationId> for LocationId {
    fn from(id: &LocationId) -> Self {
        id.clone()
    }
}

/// A place goods move between, such as a warehouse, hub or city.
///
/// Only the identifier is required. The label and display position exist
/// for front ends that draw the network; the engine never reads them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use courier_core::Location;
///
/// let hub = Location::new("Hub_1")
///     .with_label("Hub 1")
///     .with_position(Coord { x: 0.4, y: 0.4 });
/// assert_eq!(hub.id().as_str(), "Hub_1");
/// assert_eq!(hub.label(), Some("Hub 1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    id: LocationId,
    #[cfg_attr(feature = "serde", serde(default))]
    label: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    position: Option<Coord<f64>>,
}

impl Location {
    /// Construct an unlabelled location.
    pub fn new(id: impl Into<LocationId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            position: None,
        }
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a display position.
    #[must_use]
    pub const fn with_position(mut self, position: Coord<f64>) -> Self {
        self.position = Some(position);
        self
    }

    /// Unique identifier.
    #[must_use]
    pub const fn id(&self) -> &LocationId {
        &self.id
    }

    /// Optional display label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Optional display position.
    #[must_use]
    pub const fn position(&self) -> Option<Coord<f64>> {
        self.position
    }
}
