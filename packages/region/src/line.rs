//! Polyline and marker placement for historical lines.

use region_map_border::LatLng;
use region_map_region_models::{HistoricalLine, Marker};
use serde::Serialize;

/// Where unplaced (`[0, 0]`) markers are drawn: the initial map center.
pub const MAP_CENTER: LatLng = LatLng::new(65.0, 100.0);

/// Stroke colour when a line has none.
pub const DEFAULT_LINE_COLOR: &str = "blue";

/// Vertices of the polyline connecting a line's markers, in ascending
/// `order`. Markers with equal `order` keep their input order.
///
/// Fewer than two markers draw no line.
#[must_use]
pub fn line_positions(markers: &[Marker]) -> Vec<LatLng> {
    if markers.len() < 2 {
        return Vec::new();
    }

    let mut sorted: Vec<&Marker> = markers.iter().collect();
    sorted.sort_by_key(|marker| marker.order);
    sorted.into_iter().map(|marker| marker.coords).collect()
}

/// Where a marker's pin is drawn.
#[must_use]
pub fn marker_position(marker: &Marker) -> LatLng {
    if marker.coords.is_origin() {
        MAP_CENTER
    } else {
        marker.coords
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<&'static str>,
}

#[must_use]
pub fn polyline_style(line: &HistoricalLine) -> PolylineStyle {
    PolylineStyle {
        color: line
            .line_color
            .as_deref()
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_LINE_COLOR)
            .to_string(),
        weight: 3,
        dash_array: line.style().dash_array(),
    }
}
