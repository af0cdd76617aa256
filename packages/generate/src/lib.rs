#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for converting the DWR well completion report export into
//! compact, county-partitioned lookup documents.
//!
//! One sequential scan feeds the [`partition::Partitioner`], then a write
//! pass emits three artifact kinds to the output directory: `counties.json`
//! (per-region summary statistics), one `<region>.json` partition file per
//! county, and `index.json` (per-region bounding box + filename for routing
//! lookups).
//!
//! All accepted records are held in memory until the write pass completes,
//! bounding practical input size to available process memory.

pub mod partition;
pub mod spatial;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use well_map_source::SourceError;
use well_map_source::normalize::normalize_row;
use well_map_source::progress::ProgressCallback;
use well_map_source::reader::WellReportReader;
use well_map_well_models::{IndexEntry, RegionSummary};

use crate::partition::{Partitioner, ScanTotals};
use crate::spatial::FileNameCollision;

/// Filename of the per-region summary document.
pub const SUMMARY_FILE: &str = "counties.json";

/// Filename of the spatial index document.
pub const INDEX_FILE: &str = "index.json";

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the source export failed.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Serializing an artifact failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two region names resolve to the same partition filename.
    #[error(transparent)]
    Collision(#[from] FileNameCollision),
}

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR` so the fixed paths
/// work regardless of the caller's working directory.
///
/// # Panics
///
/// Panics if the project root cannot be resolved from `CARGO_MANIFEST_DIR`.
#[must_use]
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("Failed to find project root from CARGO_MANIFEST_DIR")
        .to_path_buf()
}

/// Fixed path of the raw DWR export.
#[must_use]
pub fn default_input_path() -> PathBuf {
    project_root().join("wellcompletionreports_full.csv")
}

/// Fixed output directory for the generated lookup documents.
#[must_use]
pub fn output_dir() -> PathBuf {
    project_root().join("well-lookup/data")
}

/// Report from a completed run, for the binary's final summary line.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Scan totals (rows read, accepted, per-reason rejections).
    pub totals: ScanTotals,
    /// Number of regions discovered.
    pub regions: usize,
    /// Number of files written, including the summary and index.
    pub files_written: u64,
}

/// Runs the full conversion: one sequential scan over the export, then a
/// write pass over the accumulated buckets.
///
/// # Errors
///
/// Returns an error if the export cannot be opened or read, if two region
/// names collide on a filename, or if any artifact write fails. A write
/// failure aborts mid-run and may leave a partial set of region files
/// behind; there is no rollback.
pub fn run(
    csv_path: &Path,
    out_dir: &Path,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<RunReport, GenerateError> {
    let reader = WellReportReader::open(csv_path)?;

    let mut partitioner = Partitioner::new();
    for row in reader.rows() {
        let row = row?;
        progress.inc(1);
        match normalize_row(&row) {
            Ok((region, record)) => partitioner.add(region, record),
            Err(rejection) => partitioner.reject(rejection),
        }
    }

    let totals = partitioner.totals();
    log::info!("Total rows read: {}", totals.rows_read);
    log::info!("Rows with valid coordinates: {}", totals.accepted);
    log::info!("Rows with depth info: {}", totals.with_depth);
    log::info!(
        "Rejected: {} missing coordinates, {} outside envelope",
        totals.missing_coordinates,
        totals.out_of_envelope
    );
    log::info!("Regions found: {}", partitioner.region_count());

    progress.set_message("Writing lookup documents...".to_string());

    // Resolve every filename up front so a collision fails the run before
    // any artifact hits the disk.
    let file_names = spatial::resolve_file_names(partitioner.buckets().map(|(name, _)| name))?;

    std::fs::create_dir_all(out_dir)?;

    write_summary(&partitioner, out_dir)?;
    write_region_files(&partitioner, &file_names, out_dir)?;
    write_index(&partitioner, &file_names, out_dir)?;

    Ok(RunReport {
        totals,
        regions: partitioner.region_count(),
        files_written: partitioner.region_count() as u64 + 2,
    })
}

/// Writes `counties.json`: one [`RegionSummary`] per region, region-name
/// sorted.
fn write_summary(partitioner: &Partitioner, out_dir: &Path) -> Result<(), GenerateError> {
    let summaries: Vec<RegionSummary> = partitioner
        .buckets()
        .map(|(name, bucket)| {
            let stats = bucket.depth_stats();
            RegionSummary {
                name: name.to_owned(),
                count: bucket.count(),
                avg_depth: stats.map(|s| s.avg),
                min_depth: stats.map(|s| s.min),
                max_depth: stats.map(|s| s.max),
            }
        })
        .collect();

    let path = out_dir.join(SUMMARY_FILE);
    write_json(&path, &summaries)?;
    log::info!(
        "Wrote region summary to {} ({} regions)",
        path.display(),
        summaries.len()
    );
    Ok(())
}

/// Writes one partition file per region, in region-name order.
fn write_region_files(
    partitioner: &Partitioner,
    file_names: &BTreeMap<&str, String>,
    out_dir: &Path,
) -> Result<(), GenerateError> {
    log::info!("Writing region files to {}...", out_dir.display());

    for (region, bucket) in partitioner.buckets() {
        let file = &file_names[region];
        write_json(&out_dir.join(file), &bucket.records())?;
        log::info!("  {region}: {} wells -> {file}", bucket.count());
    }
    Ok(())
}

/// Writes `index.json`: one [`IndexEntry`] per region, region-name sorted,
/// each carrying the same filename as its partition file.
fn write_index(
    partitioner: &Partitioner,
    file_names: &BTreeMap<&str, String>,
    out_dir: &Path,
) -> Result<(), GenerateError> {
    let entries: Vec<IndexEntry> = partitioner
        .buckets()
        .filter_map(|(region, bucket)| spatial::index_entry(region, &file_names[region], bucket))
        .collect();

    let path = out_dir.join(INDEX_FILE);
    write_json(&path, &entries)?;
    log::info!(
        "Wrote spatial index to {} ({} regions)",
        path.display(),
        entries.len()
    );
    Ok(())
}

/// Serializes `value` as compact JSON to `path`.
fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), GenerateError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
