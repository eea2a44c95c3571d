//! Path styles and tooltip text for region polygons.

use region_map_region_models::Region;
use serde::Serialize;

/// Fill colour of active regions that carry no colour of their own.
pub const DEFAULT_FILL_COLOR: &str = "#7A7A78";

/// Fill colour of inactive regions, regardless of their own colour.
pub const INACTIVE_FILL_COLOR: &str = "#CCCCCC";

/// Stroke and fill options for one polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

/// Style for a region polygon.
///
/// Hovering thickens the outline and lightens the fill; otherwise active
/// regions are opaque and inactive ones greyed out.
#[must_use]
pub fn region_style(region: &Region, hovered: bool) -> PathStyle {
    let (weight, fill_opacity) = match (hovered, region.is_active) {
        (true, _) => (5, 0.5),
        (false, true) => (1, 1.0),
        (false, false) => (1, 0.7),
    };

    PathStyle {
        color: "#000000",
        weight,
        opacity: 1.0,
        fill_color: fill_color(region).to_string(),
        fill_opacity,
    }
}

/// The fill colour a region is drawn with.
#[must_use]
pub fn fill_color(region: &Region) -> &str {
    if !region.is_active {
        INACTIVE_FILL_COLOR
    } else if region.color.is_empty() {
        DEFAULT_FILL_COLOR
    } else {
        &region.color
    }
}

/// Tooltip text for a region: the title alone, or the title followed by
/// its headline indicators.
#[must_use]
pub fn tooltip_text(region: &Region, show_indicators: bool) -> String {
    if !show_indicators {
        return region.title.clone();
    }

    let indicators = &region.indicators;
    format!(
        "{}\nExcursions: {}\nTourists: {}\nRevenue: {} ₽",
        region.title, indicators.excursions, indicators.tourists, indicators.revenue
    )
}
