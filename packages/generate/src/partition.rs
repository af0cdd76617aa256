//! Per-region accumulation of accepted records during the scan.
//!
//! The [`Partitioner`] is the only mutable state in the pipeline: it owns
//! the region buckets while the scan runs and is read-only once the write
//! pass begins.

use std::collections::BTreeMap;

use well_map_source::normalize::Rejection;
use well_map_well_models::WellRecord;

/// Records and running depth samples for one region.
#[derive(Debug, Default)]
pub struct RegionBucket {
    records: Vec<WellRecord>,
    depths: Vec<i64>,
}

impl RegionBucket {
    fn push(&mut self, record: WellRecord) {
        if let Some(depth) = record.depth {
            self.depths.push(depth);
        }
        self.records.push(record);
    }

    /// All records assigned to this region, in arrival order.
    #[must_use]
    pub fn records(&self) -> &[WellRecord] {
        &self.records
    }

    /// Number of records in the bucket.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.records.len() as u64
    }

    /// Statistics over the bucket's known depths, or `None` when no record
    /// in the bucket has a depth.
    #[must_use]
    pub fn depth_stats(&self) -> Option<DepthStats> {
        DepthStats::compute(&self.depths)
    }
}

/// Reduction over a bucket's depth samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStats {
    /// Rounded mean depth.
    pub avg: i64,
    /// Smallest depth sample.
    pub min: i64,
    /// Largest depth sample.
    pub max: i64,
}

impl DepthStats {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn compute(depths: &[i64]) -> Option<Self> {
        if depths.is_empty() {
            return None;
        }
        let sum: i64 = depths.iter().sum();
        let avg = (sum as f64 / depths.len() as f64).round() as i64;
        Some(Self {
            avg,
            min: depths.iter().copied().min()?,
            max: depths.iter().copied().max()?,
        })
    }
}

/// Running totals across all regions; informational, reported at end of
/// scan but not used downstream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanTotals {
    /// Rows read from the source, accepted or not.
    pub rows_read: u64,
    /// Rows with valid in-envelope coordinates.
    pub accepted: u64,
    /// Accepted rows with a known depth.
    pub with_depth: u64,
    /// Rows rejected for missing or unparsable coordinates.
    pub missing_coordinates: u64,
    /// Rows rejected for coordinates outside the envelope.
    pub out_of_envelope: u64,
}

/// Groups accepted records into per-region buckets.
///
/// Buckets are created lazily on first occurrence of a region and keyed in
/// a `BTreeMap`, so iteration (and therefore every output artifact) is
/// sorted by region name.
#[derive(Debug, Default)]
pub struct Partitioner {
    buckets: BTreeMap<String, RegionBucket>,
    totals: ScanTotals,
}

impl Partitioner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one accepted record to its region's bucket.
    pub fn add(&mut self, region: String, record: WellRecord) {
        self.totals.rows_read += 1;
        self.totals.accepted += 1;
        if record.depth.is_some() {
            self.totals.with_depth += 1;
        }
        self.buckets.entry(region).or_default().push(record);
    }

    /// Counts one rejected row under its rejection reason.
    pub fn reject(&mut self, rejection: Rejection) {
        self.totals.rows_read += 1;
        match rejection {
            Rejection::MissingCoordinates => self.totals.missing_coordinates += 1,
            Rejection::OutOfEnvelope => self.totals.out_of_envelope += 1,
        }
    }

    /// Iterates buckets in region-name order.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &RegionBucket)> {
        self.buckets
            .iter()
            .map(|(name, bucket)| (name.as_str(), bucket))
    }

    /// Number of distinct regions seen so far.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.buckets.len()
    }

    /// Running totals for the scan.
    #[must_use]
    pub const fn totals(&self) -> ScanTotals {
        self.totals
    }
}
