//! Safe field parsers for raw report values.
//!
//! Unparsable or blank input is an expected, common case in the export and
//! never raises past these helpers: every failure reads as `None`.

/// Parses a float field. `None` for missing, blank, or unparsable input.
#[must_use]
pub fn parse_float(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses an integer field via float-then-truncate, so values like `"150.0"`
/// parse to `150`. Truncation is toward zero. Non-finite parses read as
/// missing.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_int(value: Option<&str>) -> Option<i64> {
    parse_float(value)
        .filter(|f| f.is_finite())
        .map(|f| f as i64)
}

/// Extracts a year from a work-completed date field.
///
/// Two formats are recognized, tried in order: slash-delimited `MM/DD/YYYY`
/// (the year is the third part) and hyphen-delimited `YYYY-MM-DD` (the year
/// is the first 4 characters). Anything else reads as `None`.
#[must_use]
pub fn parse_year(value: Option<&str>) -> Option<i32> {
    let date = value?.trim();
    if date.len() < 4 {
        return None;
    }

    if date.contains('/') {
        let parts: Vec<&str> = date.split('/').collect();
        if parts.len() == 3 {
            return parts[2].trim().parse().ok();
        }
        None
    } else if date.contains('-') {
        date.get(..4)?.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_float() {
        assert_eq!(parse_float(Some("12.5")), Some(12.5));
        assert_eq!(parse_float(Some(" 12.5 ")), Some(12.5));
    }

    #[test]
    fn rejects_blank_and_missing_float() {
        assert_eq!(parse_float(None), None);
        assert_eq!(parse_float(Some("")), None);
        assert_eq!(parse_float(Some("   ")), None);
    }

    #[test]
    fn rejects_unparsable_float() {
        assert_eq!(parse_float(Some("n/a")), None);
    }

    #[test]
    fn parses_int_via_float_truncation() {
        assert_eq!(parse_int(Some("150.0")), Some(150));
        assert_eq!(parse_int(Some("150.9")), Some(150));
        assert_eq!(parse_int(Some("-3.7")), Some(-3));
        assert_eq!(parse_int(Some("150")), Some(150));
    }

    #[test]
    fn rejects_non_finite_int() {
        assert_eq!(parse_int(Some("nan")), None);
        assert_eq!(parse_int(Some("inf")), None);
    }

    #[test]
    fn extracts_year_from_slash_date() {
        assert_eq!(parse_year(Some("03/15/2010")), Some(2010));
        assert_eq!(parse_year(Some("1/2/1998")), Some(1998));
    }

    #[test]
    fn extracts_year_from_hyphen_date() {
        assert_eq!(parse_year(Some("2010-03-15")), Some(2010));
    }

    #[test]
    fn rejects_wrong_arity_slash_date() {
        assert_eq!(parse_year(Some("03/2010")), None);
        assert_eq!(parse_year(Some("1/2/3/4")), None);
    }

    #[test]
    fn rejects_unparsable_dates() {
        assert_eq!(parse_year(Some("not-a-date")), None);
        assert_eq!(parse_year(Some("")), None);
        assert_eq!(parse_year(None), None);
        assert_eq!(parse_year(Some("3/9")), None);
        assert_eq!(parse_year(Some("20100315")), None);
    }
}
