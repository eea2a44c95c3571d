#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region, marker, and historical line types.
//!
//! These mirror the JSON documents served by the region map API. Borders
//! are decoded straight into [`Border`], so the single-ring vs.
//! multi-polygon decision is made here, once, at the API boundary.

use region_map_border_models::{Border, LatLng};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Deserializes an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where and how large a region's label is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTitle {
    pub text: String,
    /// Label anchor as `[lat, lng]`.
    pub position: LatLng,
    pub font_size: f64,
}

/// Aggregate indicators shown in a region's tooltip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionIndicators {
    /// URL of the coat of arms image.
    pub coat_of_arms: String,
    pub excursions: u64,
    pub partners: u64,
    pub participants: u64,
    pub tourists: u64,
    /// Revenue in rubles.
    pub revenue: f64,
}

/// A region as returned by the regions API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub display_title: Option<DisplayTitle>,
    /// Fill colour for active regions. Empty means the map default.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_indicators: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indicators: RegionIndicators,
    #[serde(default, deserialize_with = "null_as_default")]
    pub border: Border,
    #[serde(default)]
    pub description: Option<String>,
}

/// A point on a historical line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub title: String,
    /// `[0, 0]` means the marker has not been placed yet.
    pub coords: LatLng,
    /// Position along the line; markers are connected in ascending order.
    pub order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_url: String,
}

/// How a historical line's polyline is stroked.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

impl LineStyle {
    /// SVG dash pattern for this style, if it is not solid.
    #[must_use]
    pub const fn dash_array(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("10, 10"),
        }
    }
}

/// Summary of a region attached to a historical line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedRegion {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub display_title: Option<DisplayTitle>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

/// A historical line: an ordered set of markers plus the regions it
/// activates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalLine {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub marker_image: Option<String>,
    #[serde(default)]
    pub line_color: Option<String>,
    /// Free-form style name as stored by the admin panel.
    #[serde(default)]
    pub line_style: Option<String>,
    #[serde(default)]
    pub marker_legend: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub markers: Vec<Marker>,
    /// Regions attached to the line in the admin panel, active or not.
    #[serde(default, deserialize_with = "null_as_default")]
    pub added_regions: Vec<AddedRegion>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_regions: Vec<Region>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
}

impl HistoricalLine {
    /// The line's stroke style. Missing or unrecognized names are solid.
    #[must_use]
    pub fn style(&self) -> LineStyle {
        self.line_style
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}
