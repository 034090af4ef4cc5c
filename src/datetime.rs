//! Parsing and display of show start times.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse {input:?} as a date and time")]
pub struct ParseError {
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

impl DateFormat {
    /// Unknown tags fall back to `Medium`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "full" => DateFormat::Full,
            _ => DateFormat::Medium,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Current local wall-clock time, the reference point for past/upcoming.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, ParseError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ParseError {
            input: value.to_string(),
        })
}

pub fn format_naive(value: &NaiveDateTime, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}

pub fn format_datetime(value: &str, format: &str) -> Result<String, ParseError> {
    let parsed = parse_datetime(value)?;
    Ok(format_naive(&parsed, DateFormat::from_tag(format)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_medium_render_differently() {
        let full = format_datetime("2019-05-21T21:30:00.000Z", "full").unwrap();
        let medium = format_datetime("2019-05-21T21:30:00.000Z", "medium").unwrap();
        assert_eq!(full, "Tuesday May, 21, 2019 at 9:30PM");
        assert_eq!(medium, "Tue 05, 21, 2019 9:30PM");
        assert_ne!(full, medium);
    }

    #[test]
    fn unknown_tag_falls_back_to_medium() {
        let medium = format_datetime("2035-04-01 20:00:00", "medium").unwrap();
        let unknown = format_datetime("2035-04-01 20:00:00", "short").unwrap();
        assert_eq!(unknown, medium);
        assert_eq!(medium, "Sun 04, 01, 2035 8:00PM");
    }

    #[test]
    fn accepts_the_usual_shapes() {
        let expected = NaiveDate::from_ymd_opt(2030, 1, 2)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        for input in [
            "2030-01-02 09:05:00",
            "2030-01-02 09:05",
            "2030-01-02T09:05",
            "2030-01-02T09:05:00.000",
            " 2030-01-02 09:05:00 ",
        ] {
            assert_eq!(parse_datetime(input).unwrap(), expected, "{input}");
        }
        assert_eq!(
            parse_datetime("2030-01-02").unwrap(),
            expected.date().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn malformed_input_is_an_error() {
        let err = format_datetime("next tuesday", "full").unwrap_err();
        assert_eq!(err.input, "next tuesday");
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn formatting_is_deterministic() {
        let a = format_datetime("2030-12-31 23:59:00", "full").unwrap();
        let b = format_datetime("2030-12-31 23:59:00", "full").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "Tuesday December, 31, 2030 at 11:59PM");
    }
}
