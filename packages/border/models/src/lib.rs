#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Coordinate, ring, and border types for region map geometry.
//!
//! Region borders arrive from the API as JSON arrays of `[lat, lng]`
//! pairs, either as a single ring or as a list of rings. The shape of the
//! document is inspected exactly once, when it is deserialized into a
//! [`Border`]; everything downstream works with the explicit variant.

use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
///
/// Serialized as a `[lat, lng]` pair, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees. Usually `[-180, 180]` on input and `[0, 360)`
    /// once normalized.
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are exactly zero.
    ///
    /// The API uses `[0, 0]` as a placeholder for markers that have not
    /// been placed yet.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// An ordered, open sequence of points. A closing duplicate of the first
/// point is tolerated but never required.
pub type Ring = Vec<LatLng>;

/// A ring whose longitudes have been remapped into `[0, 360)` and which
/// contains no antimeridian jump between consecutive points.
pub type NormalizedRing = Vec<LatLng>;

/// A region border: one ring, or several disjoint rings (islands,
/// exclaves).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Border {
    /// A simple polygon given as a flat list of points.
    Single(Ring),
    /// A multi-polygon given as a list of rings.
    Multi(Vec<Ring>),
}

impl Default for Border {
    fn default() -> Self {
        Self::Single(Vec::new())
    }
}

impl Border {
    /// All rings of this border in order. A single ring is returned as a
    /// one-element slice.
    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        match self {
            Self::Single(ring) => std::slice::from_ref(ring),
            Self::Multi(rings) => rings,
        }
    }

    /// The first ring, if there is one.
    #[must_use]
    pub fn first_ring(&self) -> Option<&Ring> {
        self.rings().first()
    }

    /// Returns `true` if the border has no rings or its first ring has no
    /// points.
    ///
    /// Such borders render as nothing, even when later rings of a
    /// multi-polygon carry points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_ring().is_none_or(Vec::is_empty)
    }

    /// Total number of points across all rings.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.rings().iter().map(Vec::len).sum()
    }
}

impl From<Ring> for Border {
    fn from(ring: Ring) -> Self {
        Self::Single(ring)
    }
}

impl From<Vec<Ring>> for Border {
    fn from(rings: Vec<Ring>) -> Self {
        Self::Multi(rings)
    }
}
