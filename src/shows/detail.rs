//! Show detail assembly.
//!
//! Four sequential stages, each its own query: the strict-inner-join core
//! (show, location, host, scorekeeper, description, notes), then panelists,
//! the two Bluff-the-Listener lookups, and guests. A miss in the core stage
//! is NotFound for the whole record and nothing further runs; a query error
//! in any later stage propagates as-is instead of masquerading as an empty
//! section.

use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

use crate::db::Database;
use crate::db::models::{
    BluffPanelist, BluffResult, Rank, ShowDetail, ShowGuest, ShowHost, ShowLocation, ShowPanelist,
    ShowScorekeeper,
};
use crate::error::{Error, Result};

/// Core-stage row before the optional sections are attached.
struct ShowCore {
    id: i64,
    date: NaiveDate,
    best_of: bool,
    repeat_of: Option<i64>,
    location: ShowLocation,
    host: ShowHost,
    scorekeeper: ShowScorekeeper,
    description: Option<String>,
    notes: Option<String>,
}

impl Database {
    /// Assemble the complete denormalized record for one show.
    pub fn show_details(&self, show_id: i64) -> Result<ShowDetail> {
        let core = self.show_core(show_id)?;

        // Repeat shows resolve the original airing's date; first-run shows
        // omit the field entirely.
        let original_show_date = match core.repeat_of {
            Some(original_id) => Some(self.show_date_for_id(original_id)?),
            None => None,
        };

        let panelists = self.show_panel(show_id)?;
        let bluff = self.show_bluff(show_id)?;
        let guests = self.show_guest_spots(show_id)?;

        log::debug!("assembled show {show_id} ({})", core.date);

        Ok(ShowDetail {
            id: core.id,
            date: core.date,
            best_of: core.best_of,
            repeat_of: core.repeat_of,
            original_show_date,
            location: core.location,
            host: core.host,
            scorekeeper: core.scorekeeper,
            description: core.description,
            notes: core.notes,
            panelists,
            bluff,
            guests,
        })
    }

    /// Core stage: strict inner join across all six source tables. Any
    /// missing join target makes the whole record absent.
    fn show_core(&self, show_id: i64) -> Result<ShowCore> {
        self.conn
            .query_row(
                "SELECT s.id, s.date, s.best_of, s.repeat_of,
                        l.id, l.city, l.state, l.venue,
                        h.id, h.name, h.slug, h.gender, sh.guest,
                        k.id, k.name, k.slug, k.gender, sk.guest, sk.description,
                        sd.description, sn.notes
                 FROM shows s
                 JOIN show_locations sl ON sl.show_id = s.id
                 JOIN locations l ON l.id = sl.location_id
                 JOIN show_hosts sh ON sh.show_id = s.id
                 JOIN hosts h ON h.id = sh.host_id
                 JOIN show_scorekeepers sk ON sk.show_id = s.id
                 JOIN scorekeepers k ON k.id = sk.scorekeeper_id
                 JOIN show_descriptions sd ON sd.show_id = s.id
                 JOIN show_notes sn ON sn.show_id = s.id
                 WHERE s.id = ?1",
                params![show_id],
                |row| {
                    Ok(ShowCore {
                        id: row.get(0)?,
                        date: row.get(1)?,
                        best_of: row.get(2)?,
                        repeat_of: row.get(3)?,
                        location: ShowLocation {
                            id: row.get(4)?,
                            city: row.get(5)?,
                            state: row.get(6)?,
                            venue: row.get(7)?,
                        },
                        host: ShowHost {
                            id: row.get(8)?,
                            name: row.get(9)?,
                            slug: row.get(10)?,
                            gender: row.get(11)?,
                            guest: row.get(12)?,
                        },
                        scorekeeper: ShowScorekeeper {
                            id: row.get(13)?,
                            name: row.get(14)?,
                            slug: row.get(15)?,
                            gender: row.get(16)?,
                            guest: row.get(17)?,
                            description: row.get(18)?,
                        },
                        description: row
                            .get::<_, Option<String>>(19)?
                            .map(|s| s.trim().to_string()),
                        notes: row.get::<_, Option<String>>(20)?.map(|s| s.trim().to_string()),
                    })
                },
            )
            .optional()?
            .ok_or(Error::NotFound)
    }

    fn show_date_for_id(&self, show_id: i64) -> Result<NaiveDate> {
        self.conn
            .query_row(
                "SELECT date FROM shows WHERE id = ?1",
                params![show_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or(Error::NotFound)
    }

    /// Panelist stage: ordered by score descending, then by the mapping
    /// row's insertion sequence. SQLite sorts NULL scores last under DESC.
    fn show_panel(&self, show_id: i64) -> Result<Option<Vec<ShowPanelist>>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, p.slug, p.gender,
                    sp.start_score, sp.correct_answers, sp.score, sp.rank
             FROM show_panelists sp
             JOIN panelists p ON p.id = sp.panelist_id
             WHERE sp.show_id = ?1
             ORDER BY sp.score DESC, sp.id ASC",
        )?;
        let rows = stmt
            .query_map(params![show_id], |row| {
                let rank: Option<String> = row.get(7)?;
                let rank = rank.as_deref().and_then(Rank::from_code_logged);
                Ok(ShowPanelist {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    slug: row.get(2)?,
                    gender: row.get(3)?,
                    start_score: row.get(4)?,
                    correct_answers: row.get(5)?,
                    score: row.get(6)?,
                    rank,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(if rows.is_empty() { None } else { Some(rows) })
    }

    /// Bluff stage: the chosen and correct panelists resolve independently.
    fn show_bluff(&self, show_id: i64) -> Result<BluffResult> {
        Ok(BluffResult {
            chosen_panelist: self.bluff_side(show_id, "chosen_panelist_id")?,
            correct_panelist: self.bluff_side(show_id, "correct_panelist_id")?,
        })
    }

    fn bluff_side(&self, show_id: i64, column: &str) -> Result<Option<BluffPanelist>> {
        let sql = format!(
            "SELECT p.id, p.name, p.slug
             FROM show_bluffs b
             JOIN panelists p ON p.id = b.{column}
             WHERE b.show_id = ?1"
        );
        Ok(self
            .conn
            .query_row(&sql, params![show_id], |row| {
                Ok(BluffPanelist {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    slug: row.get(2)?,
                })
            })
            .optional()?)
    }

    /// Guest stage: ordered by the mapping row's insertion sequence.
    fn show_guest_spots(&self, show_id: i64) -> Result<Option<Vec<ShowGuest>>> {
        let mut stmt = self.conn.prepare(
            "SELECT g.id, g.name, g.slug, sg.score, sg.score_exception
             FROM show_guests sg
             JOIN guests g ON g.id = sg.guest_id
             WHERE sg.show_id = ?1
             ORDER BY sg.id ASC",
        )?;
        let rows = stmt
            .query_map(params![show_id], |row| {
                Ok(ShowGuest {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    slug: row.get(2)?,
                    score: row.get(3)?,
                    score_exception: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(if rows.is_empty() { None } else { Some(rows) })
    }
}
