//! Spatial index derivation for the emitted partition files.
//!
//! Computes the tight bounding box for each region and resolves the
//! partition filename every region writes to. Filename resolution runs
//! before the write pass so a collision fails the run instead of silently
//! overwriting a partition.

use std::collections::BTreeMap;

use well_map_well_models::{BoundingBox, IndexEntry, region_file_name};

use crate::partition::RegionBucket;

/// Error returned when two distinct region names normalize to the same
/// partition filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameCollision {
    /// The colliding filename.
    pub file: String,
    /// The region that claimed the filename first.
    pub first: String,
    /// The region that collided with it.
    pub second: String,
}

impl std::fmt::Display for FileNameCollision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "regions {:?} and {:?} both normalize to {:?}",
            self.first, self.second, self.file
        )
    }
}

impl std::error::Error for FileNameCollision {}

/// Resolves the partition filename for every region.
///
/// # Errors
///
/// Returns [`FileNameCollision`] if two region names normalize to the same
/// filename.
pub fn resolve_file_names<'a>(
    regions: impl Iterator<Item = &'a str>,
) -> Result<BTreeMap<&'a str, String>, FileNameCollision> {
    let mut by_file: BTreeMap<String, &str> = BTreeMap::new();
    let mut resolved = BTreeMap::new();

    for region in regions {
        let file = region_file_name(region);
        if let Some(&existing) = by_file.get(&file) {
            return Err(FileNameCollision {
                file,
                first: existing.to_owned(),
                second: region.to_owned(),
            });
        }
        by_file.insert(file.clone(), region);
        resolved.insert(region, file);
    }

    Ok(resolved)
}

/// Tight bounding box over a bucket's stored coordinates, or `None` for an
/// empty bucket (which the partitioner never produces).
#[must_use]
pub fn region_bounds(bucket: &RegionBucket) -> Option<BoundingBox> {
    let mut records = bucket.records().iter();
    let first = records.next()?;

    let mut bounds = BoundingBox::of_point(first.lat, first.lon);
    for record in records {
        bounds.expand(record.lat, record.lon);
    }
    Some(bounds)
}

/// Builds the index entry routing queries for `region` to its file.
#[must_use]
pub fn index_entry(region: &str, file: &str, bucket: &RegionBucket) -> Option<IndexEntry> {
    Some(IndexEntry {
        name: region.to_owned(),
        file: file.to_owned(),
        count: bucket.count(),
        bounds: region_bounds(bucket)?,
    })
}
