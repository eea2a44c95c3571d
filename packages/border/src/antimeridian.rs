//! Splitting rings at antimeridian crossings.
//!
//! A ring that crosses the ±180° meridian shows up in the source data as a
//! jump of more than 180° in longitude between two consecutive points.
//! Drawn as-is on a planar projection, that jump becomes an edge across
//! the whole map. Splitting the ring at every jump keeps each piece on one
//! side of the line.

use region_map_border_models::{LatLng, Ring};

/// Longitude delta above which two consecutive points are considered to be
/// on opposite sides of the antimeridian.
///
/// The comparison is strict: a delta of exactly 180° is not a crossing.
pub const CROSSING_THRESHOLD_DEGREES: f64 = 180.0;

/// Returns `true` if the edge from `prev` to `next` jumps across the
/// antimeridian.
///
/// Uses the signed source longitudes. `NaN` never counts as a crossing.
#[must_use]
pub fn crosses_antimeridian(prev: &LatLng, next: &LatLng) -> bool {
    (next.lng - prev.lng).abs() > CROSSING_THRESHOLD_DEGREES
}

/// Splits a ring into contiguous sub-rings at every antimeridian crossing.
///
/// Concatenating the returned sub-rings reproduces `ring` exactly: no point
/// is dropped, duplicated, reordered, or interpolated at the crossing. An
/// empty ring yields no sub-rings; a ring without crossings yields one
/// sub-ring equal to the input.
#[must_use]
pub fn split_ring(ring: &[LatLng]) -> Vec<Ring> {
    let Some((first, rest)) = ring.split_first() else {
        return Vec::new();
    };

    let mut parts = Vec::new();
    let mut current = vec![*first];
    let mut prev = first;

    for point in rest {
        if crosses_antimeridian(prev, point) {
            parts.push(std::mem::replace(&mut current, vec![*point]));
        } else {
            current.push(*point);
        }
        prev = point;
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[[f64; 2]]) -> Ring {
        points.iter().copied().map(LatLng::from).collect()
    }

    #[test]
    fn empty_ring_has_no_parts() {
        assert!(split_ring(&[]).is_empty());
    }

    #[test]
    fn single_point_is_one_part() {
        let input = ring(&[[10.0, -179.0]]);
        assert_eq!(split_ring(&input), vec![input]);
    }

    #[test]
    fn ring_without_crossing_is_unchanged() {
        let input = ring(&[[55.0, 37.0], [56.0, 40.0], [54.0, 41.0], [55.0, 37.0]]);
        assert_eq!(split_ring(&input), vec![input]);
    }

    #[test]
    fn splits_at_crossing() {
        let input = ring(&[[10.0, 170.0], [10.0, 175.0], [10.0, -175.0], [10.0, -170.0]]);
        assert_eq!(
            split_ring(&input),
            vec![
                ring(&[[10.0, 170.0], [10.0, 175.0]]),
                ring(&[[10.0, -175.0], [10.0, -170.0]]),
            ]
        );
    }

    #[test]
    fn splits_at_every_crossing() {
        let input = ring(&[
            [65.0, 178.0],
            [66.0, -179.0],
            [67.0, -178.0],
            [66.0, 179.0],
            [65.0, 178.0],
        ]);
        let parts = split_ring(&input);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], ring(&[[65.0, 178.0]]));
        assert_eq!(parts[1], ring(&[[66.0, -179.0], [67.0, -178.0]]));
        assert_eq!(parts[2], ring(&[[66.0, 179.0], [65.0, 178.0]]));
    }

    #[test]
    fn exactly_180_degrees_is_not_a_crossing() {
        let input = ring(&[[0.0, 0.0], [0.0, 180.0]]);
        assert_eq!(split_ring(&input), vec![input]);

        let input = ring(&[[0.0, -90.0], [0.0, 90.0], [0.0, -90.0]]);
        assert_eq!(split_ring(&input).len(), 1);
    }

    #[test]
    fn just_over_180_degrees_is_a_crossing() {
        let input = ring(&[[0.0, -90.0], [0.0, 90.000_001]]);
        assert_eq!(split_ring(&input).len(), 2);
    }

    #[test]
    fn parts_concatenate_to_input() {
        let input = ring(&[
            [1.0, 179.5],
            [2.0, -179.5],
            [3.0, 179.0],
            [4.0, 170.0],
            [5.0, -170.0],
            [6.0, -160.0],
        ]);
        let flattened: Ring = split_ring(&input).into_iter().flatten().collect();
        assert_eq!(flattened, input);
    }

    #[test]
    fn nan_propagates_without_splitting() {
        let input = ring(&[[0.0, 170.0], [0.0, f64::NAN], [0.0, -170.0]]);
        let parts = split_ring(&input);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].len(), 3);
        assert!(parts[0][1].lng.is_nan());
    }
}
