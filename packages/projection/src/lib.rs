#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map projections for drawing normalized region borders.
//!
//! Projections take `[lat, lng]` points in degrees and produce `[x, y]`
//! screen-space coordinates (y grows downward). They expect borders that
//! have already been through `region_map_border`, so longitudes past 180°
//! are normal input.

pub mod config;
pub mod equirectangular;
pub mod lambert;

pub use config::{ProjectionConfig, ProjectionKind};
pub use equirectangular::{Equirectangular, EquirectangularParams};
pub use lambert::{LambertConformalConic, LambertParams};

use region_map_border_models::{LatLng, NormalizedRing};
use thiserror::Error;

/// Errors that can occur while configuring a projection.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Reading a projection definition failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A projection definition could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A parameter is out of range or not finite.
    #[error("Invalid projection parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name as written in the definition.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// No definition is compiled in for this kind.
    #[error("No built-in definition for projection {kind}")]
    MissingBuiltin {
        /// The requested kind.
        kind: ProjectionKind,
    },
}

/// Maps geographic points onto a plane.
pub trait Projection: Send + Sync {
    /// Projects one point to `[x, y]`.
    fn project(&self, point: LatLng) -> [f64; 2];
}

/// Projects every point of a ring.
#[must_use]
pub fn project_ring(projection: &dyn Projection, ring: &[LatLng]) -> Vec<[f64; 2]> {
    ring.iter().map(|point| projection.project(*point)).collect()
}

/// Projects a set of normalized rings, keeping ring order.
#[must_use]
pub fn project_rings(projection: &dyn Projection, rings: &[NormalizedRing]) -> Vec<Vec<[f64; 2]>> {
    rings
        .iter()
        .map(|ring| project_ring(projection, ring))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_rings_in_order() {
        let projection = Equirectangular::new(&EquirectangularParams::default()).unwrap();
        let rings = vec![
            vec![LatLng::new(60.0, 80.0), LatLng::new(61.0, 81.0)],
            vec![LatLng::new(59.0, 79.0)],
        ];
        assert_eq!(
            project_rings(&projection, &rings),
            vec![vec![[0.0, 0.0], [15.0, -15.0]], vec![[-15.0, 15.0]]]
        );
    }

    #[test]
    fn empty_input_projects_to_nothing() {
        let projection = ProjectionConfig::default().build().unwrap();
        assert!(project_rings(projection.as_ref(), &[]).is_empty());
    }
}
