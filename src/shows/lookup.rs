//! Show lookup and range queries: date↔id conversion plus batch retrieval
//! by year, year+month, or a recent window, each delegating to the detail
//! assembler per matched id.

use chrono::{Days, Local, Months, NaiveDate};
use rusqlite::{OptionalExtension, params};

use crate::config::AppConfig;
use crate::dates::build_date;
use crate::db::Database;
use crate::db::models::ShowDetail;
use crate::error::{Error, Result};

/// Default recent-window reach into the past, in days.
pub const DEFAULT_RECENT_DAYS_BACK: i64 = 32;
/// Default recent-window reach into the future, in days.
pub const DEFAULT_RECENT_DAYS_AHEAD: i64 = 7;

impl Database {
    fn show_id_for(&self, date: NaiveDate) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT id FROM shows WHERE date = ?1",
                params![date],
                |row| row.get(0),
            )
            .optional()?
            .ok_or(Error::NotFound)
    }

    /// The show id for a calendar date. An impossible date is a bad request;
    /// a real date with no show recorded is NotFound.
    pub fn show_id_for_date(&self, year: i32, month: u32, day: u32) -> Result<i64> {
        let date = build_date(year, month, day)?;
        self.show_id_for(date)
    }

    /// The show id for a loosely-formatted date string.
    pub fn show_id_for_date_string(&self, input: &str) -> Result<i64> {
        let date = crate::dates::parse_loose_date(input)?;
        self.show_id_for(date)
    }

    /// Whether any show aired on this calendar date.
    pub fn show_date_exists(&self, year: i32, month: u32, day: u32) -> Result<bool> {
        let date = build_date(year, month, day)?;
        Ok(self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM shows WHERE date = ?1)",
            params![date],
            |row| row.get(0),
        )?)
    }

    /// Every show in a calendar year, assembled in ascending date order.
    /// A year with no shows is NotFound, not an empty list.
    pub fn shows_by_year(&self, year: i32) -> Result<Vec<ShowDetail>> {
        let start = build_date(year, 1, 1)?;
        let end = build_date(year, 12, 31)?;
        self.assemble_range(start, end)
    }

    /// Every show in a calendar month, assembled in ascending date order.
    pub fn shows_by_year_month(&self, year: i32, month: u32) -> Result<Vec<ShowDetail>> {
        let start = build_date(year, month, 1)?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| Error::BadRequest(format!("month out of range: {year}-{month:02}")))?;
        self.assemble_range(start, end)
    }

    /// Shows in the default recent window around today.
    pub fn recent_shows(&self) -> Result<Vec<ShowDetail>> {
        self.recent_shows_window(DEFAULT_RECENT_DAYS_BACK, DEFAULT_RECENT_DAYS_AHEAD)
    }

    /// Shows in the recent window the loaded configuration asks for.
    pub fn recent_shows_with(&self, config: &AppConfig) -> Result<Vec<ShowDetail>> {
        self.recent_shows_window(config.recent_days_back, config.recent_days_ahead)
    }

    /// Shows in the inclusive window `[today - days_back, today + days_ahead]`.
    /// Negative window parameters are bad requests.
    pub fn recent_shows_window(&self, days_back: i64, days_ahead: i64) -> Result<Vec<ShowDetail>> {
        if days_back < 0 || days_ahead < 0 {
            return Err(Error::BadRequest(format!(
                "window days must be non-negative, got back={days_back} ahead={days_ahead}"
            )));
        }
        let today = Local::now().date_naive();
        let start = today
            .checked_sub_days(Days::new(days_back as u64))
            .ok_or_else(|| Error::BadRequest(format!("window too far back: {days_back} days")))?;
        let end = today
            .checked_add_days(Days::new(days_ahead as u64))
            .ok_or_else(|| Error::BadRequest(format!("window too far ahead: {days_ahead} days")))?;
        self.assemble_range(start, end)
    }

    /// Resolve the ids in an inclusive date range and assemble each, oldest
    /// first. Zero matches is NotFound.
    fn assemble_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<ShowDetail>> {
        let mut stmt = self.conn.prepare(
            "SELECT id FROM shows WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC",
        )?;
        let ids = stmt
            .query_map(params![start, end], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;

        if ids.is_empty() {
            return Err(Error::NotFound);
        }

        log::debug!("assembling {} shows between {start} and {end}", ids.len());
        ids.into_iter().map(|id| self.show_details(id)).collect()
    }
}
