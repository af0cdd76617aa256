//! Field normalization for raw report rows.
//!
//! Turns one [`RawRow`] into an accepted `(region, WellRecord)` pair or a
//! [`Rejection`] reason. A large share of the export has no usable
//! coordinates, so rejection is a value here, not an error.

use std::ops::RangeInclusive;

use well_map_well_models::{REGION_UNKNOWN, WellRecord};

use crate::parsing;
use crate::reader::RawRow;

/// Column names in the DWR well completion report export.
pub const COL_LATITUDE: &str = "DECIMALLATITUDE";
pub const COL_LONGITUDE: &str = "DECIMALLONGITUDE";
pub const COL_TOTAL_DEPTH: &str = "TOTALDRILLDEPTH";
pub const COL_COMPLETED_DEPTH: &str = "TOTALCOMPLETEDDEPTH";
pub const COL_STATIC_LEVEL: &str = "STATICWATERLEVEL";
pub const COL_YIELD: &str = "WELLYIELD";
pub const COL_DATE_ENDED: &str = "DATEWORKENDED";
pub const COL_COUNTY: &str = "COUNTYNAME";

/// Latitude envelope for California. Coordinates outside are geocoding
/// errors, not wells.
pub const LAT_RANGE: RangeInclusive<f64> = 32.0..=42.0;

/// Longitude envelope for California.
pub const LON_RANGE: RangeInclusive<f64> = -125.0..=-114.0;

/// Why a row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Latitude or longitude is missing, blank, or unparsable.
    MissingCoordinates,
    /// Both coordinates parsed but fall outside the California envelope.
    OutOfEnvelope,
}

/// Normalizes one raw row into a region key and compact record.
///
/// Validity is judged solely on coordinates: a row with nothing else usable
/// is still accepted. Every other field resolves to an absent value on parse
/// failure. A blank or missing county maps to [`REGION_UNKNOWN`].
///
/// # Errors
///
/// Returns the [`Rejection`] reason when the row has no usable coordinates.
pub fn normalize_row(row: &RawRow) -> Result<(String, WellRecord), Rejection> {
    let Some(lat) = parsing::parse_float(row.get(COL_LATITUDE)) else {
        return Err(Rejection::MissingCoordinates);
    };
    let Some(lon) = parsing::parse_float(row.get(COL_LONGITUDE)) else {
        return Err(Rejection::MissingCoordinates);
    };

    if !LAT_RANGE.contains(&lat) || !LON_RANGE.contains(&lon) {
        return Err(Rejection::OutOfEnvelope);
    }

    let total_depth = parsing::parse_int(row.get(COL_TOTAL_DEPTH));
    let completed_depth = parsing::parse_int(row.get(COL_COMPLETED_DEPTH));

    // RawRow::get already trims and maps blank to None.
    let region = row
        .get(COL_COUNTY)
        .map_or_else(|| REGION_UNKNOWN.to_owned(), str::to_owned);

    let record = WellRecord {
        lat: round_coordinate(lat),
        lon: round_coordinate(lon),
        depth: completed_depth.or(total_depth),
        static_level: parsing::parse_int(row.get(COL_STATIC_LEVEL)),
        well_yield: parsing::parse_float(row.get(COL_YIELD)),
        year: parsing::parse_year(row.get(COL_DATE_ENDED)),
    };

    Ok((region, record))
}

/// Rounds a coordinate to 5 fractional digits (~1 m precision).
fn round_coordinate(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::WellReportReader;

    fn row(header: &str, values: &str) -> RawRow {
        let csv = format!("{header}\n{values}\n");
        WellReportReader::from_reader(csv.as_bytes())
            .unwrap()
            .rows()
            .next()
            .unwrap()
            .unwrap()
    }

    fn full_header() -> String {
        [
            COL_LATITUDE,
            COL_LONGITUDE,
            COL_TOTAL_DEPTH,
            COL_COMPLETED_DEPTH,
            COL_STATIC_LEVEL,
            COL_YIELD,
            COL_DATE_ENDED,
            COL_COUNTY,
        ]
        .join(",")
    }

    #[test]
    fn accepts_complete_row() {
        let raw = row(
            &full_header(),
            "38.12345,-121.54321,200.0,150.0,40,12.5,03/15/2010,Sacramento",
        );
        let (region, record) = normalize_row(&raw).unwrap();
        assert_eq!(region, "Sacramento");
        assert!((record.lat - 38.12345).abs() < 1e-9);
        assert!((record.lon - -121.54321).abs() < 1e-9);
        assert_eq!(record.depth, Some(150));
        assert_eq!(record.static_level, Some(40));
        assert_eq!(record.well_yield, Some(12.5));
        assert_eq!(record.year, Some(2010));
    }

    #[test]
    fn accepts_row_with_only_coordinates() {
        let raw = row(&full_header(), "36.0,-120.0,,,,,,");
        let (region, record) = normalize_row(&raw).unwrap();
        assert_eq!(region, REGION_UNKNOWN);
        assert_eq!(record.depth, None);
        assert_eq!(record.static_level, None);
        assert_eq!(record.well_yield, None);
        assert_eq!(record.year, None);
    }

    #[test]
    fn rejects_missing_latitude() {
        let raw = row(&full_header(), ",-120.0,,,,,,Fresno");
        assert_eq!(normalize_row(&raw), Err(Rejection::MissingCoordinates));
    }

    #[test]
    fn rejects_unparsable_longitude() {
        let raw = row(&full_header(), "36.0,west,,,,,,Fresno");
        assert_eq!(normalize_row(&raw), Err(Rejection::MissingCoordinates));
    }

    #[test]
    fn rejects_out_of_envelope_latitude() {
        let raw = row(&full_header(), "50.0,-120.0,100,,,,,Fresno");
        assert_eq!(normalize_row(&raw), Err(Rejection::OutOfEnvelope));
    }

    #[test]
    fn rejects_out_of_envelope_longitude() {
        let raw = row(&full_header(), "36.0,-100.0,100,,,,,Fresno");
        assert_eq!(normalize_row(&raw), Err(Rejection::OutOfEnvelope));
    }

    #[test]
    fn accepts_envelope_edges() {
        assert!(normalize_row(&row(&full_header(), "32.0,-125.0,,,,,,")).is_ok());
        assert!(normalize_row(&row(&full_header(), "42.0,-114.0,,,,,,")).is_ok());
    }

    #[test]
    fn prefers_completed_depth_over_total() {
        let raw = row(&full_header(), "36.0,-120.0,200,150,,,,Fresno");
        let (_, record) = normalize_row(&raw).unwrap();
        assert_eq!(record.depth, Some(150));
    }

    #[test]
    fn falls_back_to_total_depth() {
        let raw = row(&full_header(), "36.0,-120.0,200,,,,,Fresno");
        let (_, record) = normalize_row(&raw).unwrap();
        assert_eq!(record.depth, Some(200));
    }

    #[test]
    fn completed_depth_of_zero_is_used() {
        let raw = row(&full_header(), "36.0,-120.0,200,0,,,,Fresno");
        let (_, record) = normalize_row(&raw).unwrap();
        assert_eq!(record.depth, Some(0));
    }

    #[test]
    fn blank_county_maps_to_unknown() {
        let raw = row(&full_header(), "36.0,-120.0,,,,,,   ");
        let (region, _) = normalize_row(&raw).unwrap();
        assert_eq!(region, REGION_UNKNOWN);
    }

    #[test]
    fn county_name_is_trimmed() {
        let raw = row(&full_header(), "36.0,-120.0,,,,,, Kern ");
        let (region, _) = normalize_row(&raw).unwrap();
        assert_eq!(region, "Kern");
    }

    #[test]
    fn rounds_coordinates_to_five_digits() {
        let raw = row(&full_header(), "38.123456789,-121.987654321,,,,,,");
        let (_, record) = normalize_row(&raw).unwrap();
        assert!((record.lat - 38.12346).abs() < 1e-9);
        assert!((record.lon - -121.98765).abs() < 1e-9);
    }

    #[test]
    fn hyphen_date_yields_year() {
        let raw = row(&full_header(), "36.0,-120.0,,,,,2010-03-15,Fresno");
        let (_, record) = normalize_row(&raw).unwrap();
        assert_eq!(record.year, Some(2010));
    }

    #[test]
    fn garbage_date_yields_no_year() {
        let raw = row(&full_header(), "36.0,-120.0,,,,,soon,Fresno");
        let (_, record) = normalize_row(&raw).unwrap();
        assert_eq!(record.year, None);
    }
}
