//! Remapping longitudes into the `[0, 360)` range.
//!
//! Applied after splitting: crossing detection needs the signed source
//! longitudes, and remapping first would hide the jumps it looks for.

use region_map_border_models::{LatLng, NormalizedRing};

/// Maps a negative longitude to `lng + 360`; non-negative longitudes pass
/// through unchanged.
///
/// Applying this to its own output is a no-op for any input `>= -360`.
#[must_use]
pub fn to_positive_lng(lng: f64) -> f64 {
    if lng < 0.0 { lng + 360.0 } else { lng }
}

/// Remaps the longitude of a single point, leaving the latitude untouched.
#[must_use]
pub fn normalize_point(point: LatLng) -> LatLng {
    LatLng::new(point.lat, to_positive_lng(point.lng))
}

/// Remaps the longitude of every point in a ring.
#[must_use]
pub fn normalize_ring(ring: &[LatLng]) -> NormalizedRing {
    ring.iter().copied().map(normalize_point).collect()
}
