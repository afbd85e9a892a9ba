// src/parsers/dates.rs
//! Free-text date-range normalization.
//!
//! Upstream captions look like "Jun 2020 - Dec 2022", "2017 - 2018 · 1 yr"
//! or "Jan 2021 - Present". The trailing "· …" duration annotation is not
//! date-bearing and is stripped before parsing. Anything unparsable becomes
//! `None`, never an error.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::types::records::DateRange;

/// Month tokens used both for parsing and for the "does this text look like
/// a date" guards in the experience extractor.
const MONTH_TOKENS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static MONTH_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)\s+(\d{4})").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

pub(crate) fn contains_month_token(text: &str) -> bool {
    MONTH_TOKENS.iter().any(|month| text.contains(month))
}

/// Normalize a caption like "Jun 2020 - Dec 2022 · 2 yrs 7 mos".
///
/// A single part ("2019") is both start and end. An ongoing range forces the
/// end date to `None` regardless of what follows the separator.
pub fn parse_date_range(text: &str) -> DateRange {
    let Some(parts) = split_range(text) else {
        return DateRange::default();
    };
    let start = parse_single_date(parts.start);
    let end = if parts.is_current {
        None
    } else {
        parse_single_date(parts.end.unwrap_or(parts.start))
    };
    DateRange {
        start,
        end,
        is_current: parts.is_current,
    }
}

/// Education variant: same splitting and tie-breaks, but plain years.
pub fn parse_year_range(text: &str) -> (Option<i32>, Option<i32>) {
    let Some(parts) = split_range(text) else {
        return (None, None);
    };
    let start = parse_year(parts.start);
    let end = if parts.is_current {
        None
    } else {
        parse_year(parts.end.unwrap_or(parts.start))
    };
    (start, end)
}

struct RangeParts<'a> {
    start: &'a str,
    end: Option<&'a str>,
    is_current: bool,
}

fn split_range(text: &str) -> Option<RangeParts<'_>> {
    if text.trim().is_empty() {
        return None;
    }
    // Only the portion before the middle dot is date-bearing.
    let date_part = text.split('·').next().unwrap_or(text).trim();
    let lowered = date_part.to_lowercase();
    let is_current = lowered.contains("present") || lowered.contains("current");

    // Ranges use either an ASCII hyphen or an en-dash.
    let (start, end) = if let Some((start, end)) = date_part.split_once('-') {
        (start.trim(), Some(end.trim()))
    } else if let Some((start, end)) = date_part.split_once('–') {
        (start.trim(), Some(end.trim()))
    } else {
        (date_part, None)
    };
    Some(RangeParts {
        start,
        end,
        is_current,
    })
}

/// "Jun 2025" -> 2025-06-01, "2017" -> 2017-01-01, otherwise `None`.
fn parse_single_date(part: &str) -> Option<NaiveDate> {
    let part = part.trim();
    if part.is_empty() || is_ongoing_token(part) {
        return None;
    }
    if let Some(caps) = MONTH_YEAR_RE.captures(part) {
        let month = month_number(&caps[1]);
        let year: i32 = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    let year = parse_year(part)?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// First 4-digit run wins, even when surrounded by noise.
fn parse_year(part: &str) -> Option<i32> {
    let part = part.trim();
    if part.is_empty() || is_ongoing_token(part) {
        return None;
    }
    YEAR_RE.find(part)?.as_str().parse().ok()
}

fn is_ongoing_token(part: &str) -> bool {
    part.eq_ignore_ascii_case("present") || part.eq_ignore_ascii_case("current")
}

/// Unrecognized month names fall back to January rather than failing.
fn month_number(name: &str) -> u32 {
    let lowered = name.to_ascii_lowercase();
    match lowered.get(..3) {
        Some("jan") => 1,
        Some("feb") => 2,
        Some("mar") => 3,
        Some("apr") => 4,
        Some("may") => 5,
        Some("jun") => 6,
        Some("jul") => 7,
        Some("aug") => 8,
        Some("sep") => 9,
        Some("oct") => 10,
        Some("nov") => 11,
        Some("dec") => 12,
        _ => 1,
    }
}
