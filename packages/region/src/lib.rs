#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Render preparation for regions and historical lines.
//!
//! Turns API regions into polygons ready for drawing: each border is
//! normalized once, and every resulting ring is drawn as its own polygon
//! keyed by region id and ring index.

pub mod line;
pub mod style;

use region_map_border::{NormalizedRing, transform_border};
use region_map_region_models::Region;
use serde::Serialize;

use crate::style::{PathStyle, region_style};

/// A region together with its normalized border rings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableRegion<'a> {
    #[serde(flatten)]
    pub region: &'a Region,
    pub transformed_coordinates: Vec<NormalizedRing>,
    pub style: PathStyle,
}

impl<'a> RenderableRegion<'a> {
    #[must_use]
    pub fn from_region(region: &'a Region) -> Self {
        if region.border.is_empty() {
            log::warn!("Region {} has an empty border", region.id);
        }

        Self {
            region,
            transformed_coordinates: transform_border(&region.border),
            style: region_style(region, false),
        }
    }

    /// Stable per-polygon keys, `"{region_id}-{ring_index}"`.
    pub fn ring_keys(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.transformed_coordinates.len()).map(|idx| ring_key(&self.region.id, idx))
    }
}

/// Key of the `idx`th polygon drawn for a region.
#[must_use]
pub fn ring_key(region_id: &str, idx: usize) -> String {
    format!("{region_id}-{idx}")
}

/// Normalizes every region's border, preserving input order.
#[must_use]
pub fn prepare_regions(regions: &[Region]) -> Vec<RenderableRegion<'_>> {
    let prepared: Vec<RenderableRegion<'_>> =
        regions.iter().map(RenderableRegion::from_region).collect();

    log::debug!(
        "Prepared {} region(s) into {} polygon(s)",
        prepared.len(),
        prepared
            .iter()
            .map(|r| r.transformed_coordinates.len())
            .sum::<usize>()
    );

    prepared
}
