//! Scaled lat/lng grid, used for quick previews.

use region_map_border_models::LatLng;
use serde::{Deserialize, Serialize};

use crate::{Projection, ProjectionError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquirectangularParams {
    /// Point mapped to `(0, 0)`.
    pub origin: LatLng,
    pub scale: f64,
}

impl Default for EquirectangularParams {
    fn default() -> Self {
        Self {
            origin: LatLng::new(60.0, 80.0),
            scale: 15.0,
        }
    }
}

/// `x = (lng - lng0) * scale`, `y = -(lat - lat0) * scale`.
///
/// Y is inverted so north is up in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Equirectangular {
    origin: LatLng,
    scale: f64,
}

impl Equirectangular {
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidParameter`] if the scale is zero or
    /// any parameter is not finite.
    pub fn new(params: &EquirectangularParams) -> Result<Self, ProjectionError> {
        let EquirectangularParams { origin, scale } = *params;

        if !scale.is_finite() || scale == 0.0 {
            return Err(ProjectionError::InvalidParameter {
                name: "scale",
                value: scale,
            });
        }
        for (name, value) in [("origin.lat", origin.lat), ("origin.lng", origin.lng)] {
            if !value.is_finite() {
                return Err(ProjectionError::InvalidParameter { name, value });
            }
        }

        Ok(Self { origin, scale })
    }
}

impl Projection for Equirectangular {
    fn project(&self, point: LatLng) -> [f64; 2] {
        [
            (point.lng - self.origin.lng) * self.scale,
            -(point.lat - self.origin.lat) * self.scale,
        ]
    }
}
