#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Core data model for the well map pipeline.
//!
//! Defines the compact per-well record stored in the partition files, the
//! derived per-region summary and spatial index documents, and the filename
//! normalization shared by the writer and the index.

use serde::{Deserialize, Serialize};

/// Sentinel region name for records whose county field is blank or missing.
pub const REGION_UNKNOWN: &str = "Unknown";

/// One accepted well completion report, compacted for storage.
///
/// Optional fields are omitted from the serialized form entirely when absent
/// to keep the partition files small. `static` and `yield` are reserved words
/// in Rust, hence the renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    /// Latitude in decimal degrees, rounded to 5 fractional digits.
    pub lat: f64,
    /// Longitude in decimal degrees, rounded to 5 fractional digits.
    pub lon: f64,
    /// Well depth in feet: completed depth when reported, else drill depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    /// Static water level in feet.
    #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
    pub static_level: Option<i64>,
    /// Well yield in gallons per minute.
    #[serde(rename = "yield", skip_serializing_if = "Option::is_none")]
    pub well_yield: Option<f64>,
    /// Year the work was completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Per-region entry in `counties.json`.
///
/// The depth fields serialize as explicit `null` when the region has no
/// records with a known depth, so consumers always see the same keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    /// Region (county) name.
    pub name: String,
    /// Number of wells in the region.
    pub count: u64,
    /// Rounded mean of all known depths in the region.
    #[serde(rename = "avgDepth")]
    pub avg_depth: Option<i64>,
    /// Smallest known depth in the region.
    #[serde(rename = "minDepth")]
    pub min_depth: Option<i64>,
    /// Largest known depth in the region.
    #[serde(rename = "maxDepth")]
    pub max_depth: Option<i64>,
}

/// Tight bounding box over the stored coordinates of a region's records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Creates a degenerate box covering a single point.
    #[must_use]
    pub const fn of_point(lat: f64, lon: f64) -> Self {
        Self {
            min_lat: lat,
            max_lat: lat,
            min_lon: lon,
            max_lon: lon,
        }
    }

    /// Grows the box to include the given point.
    pub fn expand(&mut self, lat: f64, lon: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
    }

    /// Returns whether the point lies inside the box (edges inclusive).
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// Per-region entry in `index.json`, routing a coordinate or region query to
/// the right partition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Region (county) name.
    pub name: String,
    /// Partition filename derived from the region name.
    pub file: String,
    /// Number of wells in the partition file.
    pub count: u64,
    /// Tight bounding box over the partition's records.
    pub bounds: BoundingBox,
}

/// Derives the partition filename for a region name.
///
/// Lowercases, replaces spaces with hyphens, strips periods, and appends
/// `.json`. Two distinct region names can normalize to the same filename;
/// the writer is responsible for detecting that before emitting anything.
#[must_use]
pub fn region_file_name(region: &str) -> String {
    let safe = region.to_lowercase().replace(' ', "-").replace('.', "");
    format!("{safe}.json")
}
