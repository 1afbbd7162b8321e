//! Loose date parsing at the lookup boundary.
//!
//! Accepts 4-digit (or 2-digit, expanded) years with `-`, `.`, or `/`
//! separators. Anything unparsable, or parsable but not a real calendar
//! date, is a bad request — no query is ever issued for it.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static LOOSE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?P<year>\d{4}|\d{2})
        [.\-/]
        (?P<month>\d{1,2})
        [.\-/]
        (?P<day>\d{1,2})
        \s*$",
    )
    .unwrap()
});

/// Expand a 2-digit year to 4 digits (30-99 → 19xx, 00-29 → 20xx).
fn expand_year(year: &str) -> i32 {
    let y: i32 = year.parse().unwrap_or(0);
    if year.len() == 2 {
        if y >= 30 { 1900 + y } else { 2000 + y }
    } else {
        y
    }
}

/// Build a calendar date from components, rejecting impossible dates
/// (month 13, day 32, Feb 30, ...) as bad requests.
pub fn build_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::BadRequest(format!("invalid calendar date {year:04}-{month:02}-{day:02}"))
    })
}

/// Parse a loosely-formatted date string like `2006-08-19`, `2006.8.19`,
/// `2006/08/19`, or `06-08-19`.
pub fn parse_loose_date(input: &str) -> Result<NaiveDate> {
    let caps = LOOSE_DATE_RE
        .captures(input)
        .ok_or_else(|| Error::BadRequest(format!("unparsable date string: {input:?}")))?;

    let year = expand_year(caps.name("year").unwrap().as_str());
    let month: u32 = caps.name("month").unwrap().as_str().parse().unwrap_or(0);
    let day: u32 = caps.name("day").unwrap().as_str().parse().unwrap_or(0);
    build_date(year, month, day)
}
