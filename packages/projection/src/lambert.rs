//! Spherical Lambert conformal conic projection.

use std::f64::consts::FRAC_PI_4;

use region_map_border_models::LatLng;
use serde::{Deserialize, Serialize};

use crate::{Projection, ProjectionError};

/// Parallels closer than this (in radians) are treated as a single tangent
/// parallel.
const TANGENT_EPSILON: f64 = 1e-10;

/// Parameters for [`LambertConformalConic`], all angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LambertParams {
    pub earth_radius_km: f64,
    pub central_meridian: f64,
    pub standard_parallels: [f64; 2],
    /// Latitude that maps to `y = 0` on the central meridian.
    pub reference_latitude: f64,
    /// Multiplier applied to projected kilometres.
    pub scale: f64,
}

impl Default for LambertParams {
    fn default() -> Self {
        Self {
            earth_radius_km: 6371.0,
            central_meridian: 90.0,
            standard_parallels: [50.0, 70.0],
            reference_latitude: 60.0,
            scale: 2.0,
        }
    }
}

/// Lambert conformal conic on a sphere.
///
/// Longitudes are used as given, so rings normalized into `[0, 360)` stay
/// continuous across the antimeridian as long as the central meridian is
/// far from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LambertConformalConic {
    radius: f64,
    lambda0: f64,
    n: f64,
    f: f64,
    rho0: f64,
    scale: f64,
}

impl LambertConformalConic {
    /// Derives the cone constants from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidParameter`] if the radius or scale
    /// is not a usable finite value, a latitude lies outside `(-90, 90)`,
    /// or the standard parallels do not define a cone (for example, when
    /// they are symmetric about the equator).
    pub fn new(params: &LambertParams) -> Result<Self, ProjectionError> {
        check("earth_radius_km", params.earth_radius_km, |v| v > 0.0)?;
        check("scale", params.scale, |v| v != 0.0)?;
        check("central_meridian", params.central_meridian, |_| true)?;
        check("reference_latitude", params.reference_latitude, is_latitude)?;
        for parallel in params.standard_parallels {
            check("standard_parallels", parallel, is_latitude)?;
        }

        let [phi1, phi2] = params.standard_parallels.map(f64::to_radians);

        let n = if (phi1 - phi2).abs() < TANGENT_EPSILON {
            phi1.sin()
        } else {
            (phi1.cos() / phi2.cos()).ln() / (half_angle_tan(phi2) / half_angle_tan(phi1)).ln()
        };

        if !n.is_finite() || n.abs() < TANGENT_EPSILON {
            return Err(ProjectionError::InvalidParameter {
                name: "standard_parallels",
                value: params.standard_parallels[0],
            });
        }

        let f = phi1.cos() * half_angle_tan(phi1).powf(n) / n;
        let radius = params.earth_radius_km;
        let rho0 = radius * f * half_angle_tan(params.reference_latitude.to_radians()).recip().powf(n);

        log::trace!("Lambert conformal conic: n={n} F={f} rho0={rho0}");

        Ok(Self {
            radius,
            lambda0: params.central_meridian.to_radians(),
            n,
            f,
            rho0,
            scale: params.scale,
        })
    }

    /// The cone constant `n`.
    #[must_use]
    pub const fn cone_constant(&self) -> f64 {
        self.n
    }

    fn rho(&self, phi: f64) -> f64 {
        self.radius * self.f * half_angle_tan(phi).recip().powf(self.n)
    }
}

impl Projection for LambertConformalConic {
    fn project(&self, point: LatLng) -> [f64; 2] {
        let rho = self.rho(point.lat.to_radians());
        let theta = self.n * (point.lng.to_radians() - self.lambda0);

        [
            rho * theta.sin() * self.scale,
            (self.rho0 - rho * theta.cos()) * self.scale,
        ]
    }
}

fn half_angle_tan(phi: f64) -> f64 {
    (FRAC_PI_4 + phi / 2.0).tan()
}

fn is_latitude(value: f64) -> bool {
    value.abs() < 90.0
}

fn check(
    name: &'static str,
    value: f64,
    valid: impl Fn(f64) -> bool,
) -> Result<(), ProjectionError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(ProjectionError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
        (a[0] - b[0]).hypot(a[1] - b[1])
    }

    #[test]
    fn default_cone_constant() {
        let projection = LambertConformalConic::new(&LambertParams::default()).unwrap();
        assert!((projection.cone_constant() - 0.870_590_4).abs() < 1e-6);
    }

    #[test]
    fn reference_point_maps_to_origin() {
        let projection = LambertConformalConic::new(&LambertParams::default()).unwrap();
        let [x, y] = projection.project(LatLng::new(60.0, 90.0));
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn symmetric_about_central_meridian() {
        let projection = LambertConformalConic::new(&LambertParams::default()).unwrap();
        let [east_x, east_y] = projection.project(LatLng::new(55.0, 120.0));
        let [west_x, west_y] = projection.project(LatLng::new(55.0, 60.0));
        assert!(east_x > 0.0);
        assert!((east_x + west_x).abs() < 1e-6);
        assert!((east_y - west_y).abs() < 1e-6);
    }

    #[test]
    fn normalized_longitudes_stay_continuous_past_180() {
        let projection = LambertConformalConic::new(&LambertParams::default()).unwrap();
        let before = projection.project(LatLng::new(65.0, 179.0));
        let after = projection.project(LatLng::new(65.0, 181.0));
        let wrapped = projection.project(LatLng::new(65.0, -179.0));
        assert!(distance(before, after) * 10.0 < distance(before, wrapped));
    }

    #[test]
    fn tangent_cone_uses_sine_of_parallel() {
        let params = LambertParams {
            standard_parallels: [45.0, 45.0],
            ..LambertParams::default()
        };
        let projection = LambertConformalConic::new(&params).unwrap();
        assert!((projection.cone_constant() - 45_f64.to_radians().sin()).abs() < 1e-12);
    }

    #[test]
    fn rejects_parallels_symmetric_about_equator() {
        let params = LambertParams {
            standard_parallels: [-30.0, 30.0],
            ..LambertParams::default()
        };
        assert!(matches!(
            LambertConformalConic::new(&params),
            Err(ProjectionError::InvalidParameter {
                name: "standard_parallels",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_scale_and_polar_reference() {
        let params = LambertParams {
            scale: 0.0,
            ..LambertParams::default()
        };
        assert!(LambertConformalConic::new(&params).is_err());

        let params = LambertParams {
            reference_latitude: 90.0,
            ..LambertParams::default()
        };
        assert!(LambertConformalConic::new(&params).is_err());
    }
}
