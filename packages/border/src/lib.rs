#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region border preparation for planar map rendering.
//!
//! Region borders are stored with longitudes in `[-180, 180]`. Regions
//! that straddle the antimeridian (Chukotka, the Aleutians) would be drawn
//! with an edge spanning the entire map, so each ring is first split at
//! every antimeridian jump and the pieces then have their longitudes
//! remapped into `[0, 360)` for a projection centered away from the date
//! line.
//!
//! The core transform ([`transform_border`]) is pure and total: it never
//! fails and performs no validation. Errors only come from parsing border
//! documents (see [`interop`]).

pub mod antimeridian;
pub mod interop;
pub mod longitude;

pub use antimeridian::split_ring;
pub use longitude::{normalize_point, normalize_ring, to_positive_lng};
pub use region_map_border_models::{Border, LatLng, NormalizedRing, Ring};

use thiserror::Error;

/// Errors that can occur while reading border documents.
#[derive(Debug, Error)]
pub enum BorderError {
    /// The border JSON did not match either border shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// A `GeoJSON` feature carried no geometry.
    #[error("GeoJSON document has no geometry")]
    MissingGeometry,

    /// The geometry is not a polygon or multi-polygon.
    #[error("Unsupported geometry type: {kind}")]
    UnsupportedGeometry {
        /// `GeoJSON` type name of the rejected geometry.
        kind: &'static str,
    },
}

/// Splits every ring of `border` at antimeridian crossings and remaps the
/// longitudes of the resulting pieces into `[0, 360)`.
///
/// The output is flat: multi-polygon grouping is not preserved, and the
/// pieces appear in ring order, then split order. A border with no rings,
/// or whose first ring is empty, yields no rings.
#[must_use]
pub fn transform_border(border: &Border) -> Vec<NormalizedRing> {
    if border.is_empty() {
        return Vec::new();
    }

    let rings = border.rings();
    let normalized: Vec<NormalizedRing> = rings
        .iter()
        .flat_map(|ring| split_ring(ring))
        .map(|part| normalize_ring(&part))
        .collect();

    if normalized.len() > rings.len() {
        log::debug!(
            "Split {} border ring(s) into {} at the antimeridian",
            rings.len(),
            normalized.len()
        );
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[[f64; 2]]) -> Ring {
        points.iter().copied().map(LatLng::from).collect()
    }

    #[test]
    fn single_ring_is_split_and_remapped() {
        let border = Border::Single(ring(&[
            [10.0, 170.0],
            [10.0, 175.0],
            [10.0, -175.0],
            [10.0, -170.0],
        ]));
        assert_eq!(
            transform_border(&border),
            vec![
                ring(&[[10.0, 170.0], [10.0, 175.0]]),
                ring(&[[10.0, 185.0], [10.0, 190.0]]),
            ]
        );
    }

    #[test]
    fn multi_polygon_is_flattened_in_order() {
        let first = ring(&[[55.0, 37.0], [56.0, 38.0], [55.0, 39.0]]);
        let second = ring(&[[66.0, 178.0], [67.0, 179.0], [67.0, -179.0], [66.0, -178.0]]);
        let border = Border::Multi(vec![first.clone(), second]);

        let rings = transform_border(&border);
        assert_eq!(rings.len(), 3);
        assert_eq!(rings[0], first);
        assert_eq!(rings[1], ring(&[[66.0, 178.0], [67.0, 179.0]]));
        assert_eq!(rings[2], ring(&[[67.0, 181.0], [66.0, 182.0]]));
    }

    #[test]
    fn ring_without_crossing_only_remaps() {
        let border = Border::Single(ring(&[[40.0, -75.0], [41.0, -74.0], [40.0, -73.0]]));
        assert_eq!(
            transform_border(&border),
            vec![ring(&[[40.0, 285.0], [41.0, 286.0], [40.0, 287.0]])]
        );
    }

    #[test]
    fn empty_borders_yield_nothing() {
        assert!(transform_border(&Border::Single(Vec::new())).is_empty());
        assert!(transform_border(&Border::Multi(Vec::new())).is_empty());
        assert!(transform_border(&Border::Multi(vec![Vec::new()])).is_empty());
    }

    #[test]
    fn empty_first_ring_hides_later_rings() {
        let border = Border::Multi(vec![Vec::new(), ring(&[[1.0, 2.0], [3.0, 4.0]])]);
        assert!(transform_border(&border).is_empty());
    }

    #[test]
    fn empty_later_ring_contributes_nothing() {
        let border = Border::Multi(vec![ring(&[[1.0, 2.0]]), Vec::new()]);
        assert_eq!(transform_border(&border), vec![ring(&[[1.0, 2.0]])]);
    }

    #[test]
    fn output_points_are_conserved_and_in_range() {
        let source = ring(&[
            [64.0, 172.0],
            [65.5, 179.9],
            [66.0, -179.9],
            [67.0, -172.0],
            [68.0, 178.0],
            [64.0, 172.0],
        ]);
        let rings = transform_border(&Border::Single(source.clone()));

        let points: Vec<LatLng> = rings.iter().flatten().copied().collect();
        assert_eq!(points.len(), source.len());
        for (out, src) in points.iter().zip(&source) {
            assert!((out.lat - src.lat).abs() < f64::EPSILON);
            assert!((0.0..360.0).contains(&out.lng));
            assert!((out.lng - to_positive_lng(src.lng)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn renormalizing_output_is_a_no_op() {
        let border = Border::Single(ring(&[[10.0, 170.0], [10.0, -170.0], [11.0, -160.0]]));
        let rings = transform_border(&border);
        let again: Vec<NormalizedRing> = rings.iter().map(|r| normalize_ring(r)).collect();
        assert_eq!(rings, again);
    }

    #[test]
    fn parsed_document_transforms() {
        let border = interop::parse_border("[[0, 0], [0, 180]]").unwrap();
        assert_eq!(
            transform_border(&border),
            vec![ring(&[[0.0, 0.0], [0.0, 180.0]])]
        );
    }
}
