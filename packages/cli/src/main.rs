#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for region border preparation.
//!
//! Reads border or region documents (as served by the regions API) from a
//! file or stdin, and writes normalized rings, projected screen
//! coordinates, or render-ready regions as JSON on stdout.

mod document;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use region_map_border::{Border, interop, transform_border};
use region_map_projection::{ProjectionConfig, ProjectionKind, project_rings};
use region_map_region::prepare_regions;
use region_map_region_models::Region;

#[derive(Parser)]
#[command(name = "region_map_cli", about = "Region border preparation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a border at the antimeridian and remap longitudes to [0, 360)
    Normalize {
        /// Border document, or `-` for stdin
        input: PathBuf,
        /// Read the input as a `GeoJSON` Polygon/MultiPolygon
        #[arg(long)]
        geojson_input: bool,
        /// Write a `GeoJSON` `MultiPolygon` instead of `[lat, lng]` rings
        #[arg(long)]
        geojson: bool,
    },
    /// Normalize a border and project it to screen coordinates
    Project {
        /// Border document, or `-` for stdin
        input: PathBuf,
        /// Read the input as a `GeoJSON` Polygon/MultiPolygon
        #[arg(long)]
        geojson_input: bool,
        /// Projection definition (TOML). Overrides `--kind`.
        #[arg(long, env = "REGION_MAP_PROJECTION")]
        projection: Option<PathBuf>,
        /// Built-in projection to use when no definition file is given
        #[arg(long, default_value = "lambert_conformal_conic")]
        kind: ProjectionKind,
    },
    /// Prepare a list of API regions for rendering
    Regions {
        /// JSON array of regions, or `-` for stdin
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Normalize {
            input,
            geojson_input,
            geojson,
        } => {
            let border = read_border(&input, geojson_input)?;
            let rings = transform_border(&border);
            log::info!(
                "Normalized {} point(s) into {} ring(s)",
                border.point_count(),
                rings.len()
            );

            if geojson {
                serde_json::to_string_pretty(&interop::to_geojson(&rings))?
            } else {
                serde_json::to_string_pretty(&rings)?
            }
        }
        Commands::Project {
            input,
            geojson_input,
            projection,
            kind,
        } => {
            let config = match projection {
                Some(path) => ProjectionConfig::from_path(&path)?,
                None => ProjectionConfig::builtin(kind)?,
            };
            log::info!("Projecting with {}", config.kind());

            let projection = config.build()?;
            let border = read_border(&input, geojson_input)?;
            serde_json::to_string_pretty(&project_rings(
                projection.as_ref(),
                &transform_border(&border),
            ))?
        }
        Commands::Regions { input } => {
            let regions: Vec<Region> = serde_json::from_str(&document::read(&input)?)?;
            log::info!("Preparing {} region(s)", regions.len());
            serde_json::to_string_pretty(&prepare_regions(&regions))?
        }
    };

    println!("{output}");

    Ok(())
}

fn read_border(
    path: &std::path::Path,
    geojson_input: bool,
) -> Result<Border, Box<dyn std::error::Error>> {
    let contents = document::read(path)?;
    Ok(if geojson_input {
        interop::border_from_geojson(&contents)?
    } else {
        interop::parse_border(&contents)?
    })
}
