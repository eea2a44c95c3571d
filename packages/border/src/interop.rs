//! Conversions between region borders and `geo`/`GeoJSON` geometries.
//!
//! `geo` and `GeoJSON` order coordinates as `(x, y)` = `(lng, lat)`, the
//! reverse of the API's `[lat, lng]` pairs.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::GeoJson;
use region_map_border_models::{Border, LatLng, NormalizedRing, Ring};

use crate::BorderError;

/// Parses a border document as served by the regions API.
///
/// # Errors
///
/// Returns [`BorderError::Json`] if the document is neither a list of
/// `[lat, lng]` pairs nor a list of such lists.
pub fn parse_border(json: &str) -> Result<Border, BorderError> {
    Ok(serde_json::from_str(json)?)
}

/// Builds a [`MultiPolygon`] with one exterior-only polygon per ring.
///
/// `geo` closes each ring, so the output rings repeat their first point.
#[must_use]
pub fn to_multi_polygon(rings: &[NormalizedRing]) -> MultiPolygon<f64> {
    MultiPolygon(
        rings
            .iter()
            .map(|ring| {
                let coords: Vec<Coord<f64>> = ring
                    .iter()
                    .map(|point| Coord {
                        x: point.lng,
                        y: point.lat,
                    })
                    .collect();
                Polygon::new(LineString::from(coords), vec![])
            })
            .collect(),
    )
}

/// Converts normalized rings into a `GeoJSON` `MultiPolygon` geometry.
#[must_use]
pub fn to_geojson(rings: &[NormalizedRing]) -> geojson::Geometry {
    geojson::Geometry::new(geojson::Value::from(&to_multi_polygon(rings)))
}

/// Reads a border from a `GeoJSON` `Polygon` or `MultiPolygon`, either as a
/// bare geometry or wrapped in a `Feature`.
///
/// Only exterior rings are kept; holes are not part of the border model.
///
/// # Errors
///
/// * [`BorderError::GeoJson`] if the document is not valid `GeoJSON`
/// * [`BorderError::MissingGeometry`] for a feature without geometry or a
///   feature collection
/// * [`BorderError::UnsupportedGeometry`] for non-polygonal geometries
pub fn border_from_geojson(geojson_str: &str) -> Result<Border, BorderError> {
    let geometry = match geojson_str.parse::<GeoJson>()? {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature.geometry.ok_or(BorderError::MissingGeometry)?,
        GeoJson::FeatureCollection(_) => return Err(BorderError::MissingGeometry),
    };

    let geometry: geo::Geometry<f64> = geometry.try_into()?;

    match geometry {
        geo::Geometry::Polygon(polygon) => Ok(Border::Single(exterior_ring(&polygon))),
        geo::Geometry::MultiPolygon(multi_polygon) => Ok(Border::Multi(
            multi_polygon.iter().map(exterior_ring).collect(),
        )),
        other => Err(BorderError::UnsupportedGeometry {
            kind: geometry_kind(&other),
        }),
    }
}

fn exterior_ring(polygon: &Polygon<f64>) -> Ring {
    polygon
        .exterior()
        .coords()
        .map(|coord| LatLng::new(coord.y, coord.x))
        .collect()
}

const fn geometry_kind(geometry: &geo::Geometry<f64>) -> &'static str {
    match geometry {
        geo::Geometry::Point(_) => "Point",
        geo::Geometry::LineString(_) => "LineString",
        geo::Geometry::MultiPoint(_) => "MultiPoint",
        geo::Geometry::MultiLineString(_) => "MultiLineString",
        geo::Geometry::GeometryCollection(_) => "GeometryCollection",
        _ => "Geometry",
    }
}
