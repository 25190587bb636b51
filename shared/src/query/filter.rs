//! Sales filter parameters
//!
//! [`SalesQuery`] is the raw query string exactly as the client sent it.
//! [`SalesFilter`] is the validated form every sales endpoint builds its
//! predicate from. The two endpoints that accept filters differ only in how
//! they treat bad input, selected with [`Strictness`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Raw sales query parameters
///
/// Every field is kept as a string so malformed numbers and dates reach the
/// validation layer instead of being rejected by the extractor.
/// Multi-value filters are comma-separated (`regions=North,South`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesQuery {
    pub search: Option<String>,
    pub regions: Option<String>,
    pub genders: Option<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub categories: Option<String>,
    pub tags: Option<String>,
    pub payment_methods: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// How bad filter input is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Unparseable dates and inverted ranges are rejected with 400.
    /// Malformed or negative ages are still dropped.
    Strict,
    /// Anything unusable is dropped; inverted ranges simply match nothing.
    Lenient,
}

/// Inclusive date bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBound {
    /// Value bound into SQL, compared against the `date` column as text
    pub raw: String,
    /// Parsed instant, used for the range inversion check
    pub at: NaiveDateTime,
}

/// Validated filter set
///
/// Empty vectors and `None` mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesFilter {
    /// Substring matched against customer name or phone number
    pub search: Option<String>,
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub payment_methods: Vec<String>,
    /// A row matches when ANY of these is a substring of its tags column
    pub tags: Vec<String>,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub date_from: Option<DateBound>,
    pub date_to: Option<DateBound>,
}

impl SalesFilter {
    /// Validate the filter part of a query
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// age range inversion, then date formats, then date range inversion.
    pub fn parse(query: &SalesQuery, strictness: Strictness) -> AppResult<Self> {
        let strict = strictness == Strictness::Strict;

        // Age: a parseable min above a parseable max is an error even when
        // one of them is negative and would itself be dropped.
        let raw_min = present(&query.age_min).and_then(parse_int);
        let raw_max = present(&query.age_max).and_then(parse_int);
        if strict
            && let (Some(min), Some(max)) = (raw_min, raw_max)
            && min > max
        {
            return Err(AppError::validation(
                "Invalid age range: minimum age cannot be greater than maximum age",
            )
            .with_detail("ageMin", min)
            .with_detail("ageMax", max));
        }

        let date_from = parse_date_bound(&query.date_from, "dateFrom", strict)?;
        let date_to = parse_date_bound(&query.date_to, "dateTo", strict)?;
        if strict
            && let (Some(from), Some(to)) = (&date_from, &date_to)
            && from.at > to.at
        {
            return Err(AppError::validation(
                "Invalid date range: start date cannot be after end date",
            ));
        }

        Ok(Self {
            search: query
                .search
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            regions: split_list(&query.regions),
            genders: split_list(&query.genders),
            categories: split_list(&query.categories),
            payment_methods: split_list(&query.payment_methods),
            tags: split_list(&query.tags),
            age_min: raw_min.filter(|v| *v >= 0),
            age_max: raw_max.filter(|v| *v >= 0),
            date_from,
            date_to,
        })
    }
}

fn parse_date_bound(
    value: &Option<String>,
    param: &'static str,
    strict: bool,
) -> AppResult<Option<DateBound>> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    match parse_date(raw) {
        Some(at) => Ok(Some(DateBound {
            raw: raw.to_string(),
            at,
        })),
        None if strict => Err(AppError::invalid_format(format!(
            "Invalid date format for {param}"
        ))
        .with_detail("param", param)
        .with_detail("value", raw)),
        None => Ok(None),
    }
}

/// Trimmed, non-empty parameter value
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Split a comma-separated parameter, dropping empty tokens
pub fn split_list(value: &Option<String>) -> Vec<String> {
    value
        .as_deref()
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Leading-integer parse: optional sign then digits, trailing junk ignored
///
/// `"30"` → 30, `"30abc"` → 30, `" -4"` → -4, `"abc"` / `""` → `None`.
pub fn parse_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let n: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Parse a calendar date or date-time
///
/// Accepts `YYYY-MM-DD`, RFC 3339, and `YYYY-MM-DD[T ]HH:MM[:SS]`.
/// Date-only values resolve to midnight.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let s = value.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
