//! Appearance aggregation: one entity's full show history with counts.
//!
//! Each entity kind joins its mapping table against `shows` once, ordered by
//! show date ascending; the counts are derived from the fetched rows (they
//! already carry the best-of/repeat/score flags). An entity with no history
//! gets `counts.all == 0` and `appearances == None` — never an empty vec.

use rusqlite::params;

use crate::db::Database;
use crate::db::models::{
    AppearanceCounts, AppearanceSummary, GuestAppearance, HostAppearance, PanelistAppearance,
    Rank, ScorekeeperAppearance,
};
use crate::error::{Error, Result};
use crate::resolver::Entity;

fn counts_for<T>(rows: &[T], is_regular: impl Fn(&T) -> bool) -> AppearanceCounts {
    AppearanceCounts {
        regular: rows.iter().filter(|r| is_regular(r)).count() as i64,
        all: rows.len() as i64,
        with_scores: None,
    }
}

fn wrap<T>(counts: AppearanceCounts, rows: Vec<T>) -> AppearanceSummary<T> {
    AppearanceSummary {
        counts,
        appearances: if rows.is_empty() { None } else { Some(rows) },
    }
}

impl Database {
    /// A host's appearance history. `NotFound` if the id is unknown.
    pub fn host_appearances(&self, host_id: i64) -> Result<AppearanceSummary<HostAppearance>> {
        if !self.id_exists(Entity::Host, host_id)? {
            return Err(Error::NotFound);
        }
        self.host_appearances_unvalidated(host_id)
    }

    /// As [`host_appearances`](Self::host_appearances), skipping the existence
    /// check when the caller already validated the id.
    pub fn host_appearances_unvalidated(
        &self,
        host_id: i64,
    ) -> Result<AppearanceSummary<HostAppearance>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.date, s.best_of, s.repeat_of IS NOT NULL, sh.guest
             FROM show_hosts sh
             JOIN shows s ON s.id = sh.show_id
             WHERE sh.host_id = ?1
             ORDER BY s.date ASC",
        )?;
        let rows = stmt
            .query_map(params![host_id], |row| {
                Ok(HostAppearance {
                    show_id: row.get(0)?,
                    date: row.get(1)?,
                    best_of: row.get(2)?,
                    repeat: row.get(3)?,
                    guest: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let counts = counts_for(&rows, |a: &HostAppearance| !a.best_of && !a.repeat);
        Ok(wrap(counts, rows))
    }

    /// A scorekeeper's appearance history. `NotFound` if the id is unknown.
    pub fn scorekeeper_appearances(
        &self,
        scorekeeper_id: i64,
    ) -> Result<AppearanceSummary<ScorekeeperAppearance>> {
        if !self.id_exists(Entity::Scorekeeper, scorekeeper_id)? {
            return Err(Error::NotFound);
        }
        self.scorekeeper_appearances_unvalidated(scorekeeper_id)
    }

    pub fn scorekeeper_appearances_unvalidated(
        &self,
        scorekeeper_id: i64,
    ) -> Result<AppearanceSummary<ScorekeeperAppearance>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.date, s.best_of, s.repeat_of IS NOT NULL, sk.guest, sk.description
             FROM show_scorekeepers sk
             JOIN shows s ON s.id = sk.show_id
             WHERE sk.scorekeeper_id = ?1
             ORDER BY s.date ASC",
        )?;
        let rows = stmt
            .query_map(params![scorekeeper_id], |row| {
                Ok(ScorekeeperAppearance {
                    show_id: row.get(0)?,
                    date: row.get(1)?,
                    best_of: row.get(2)?,
                    repeat: row.get(3)?,
                    guest: row.get(4)?,
                    description: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let counts = counts_for(&rows, |a: &ScorekeeperAppearance| !a.best_of && !a.repeat);
        Ok(wrap(counts, rows))
    }

    /// A panelist's appearance history, including the scored-show count.
    /// `NotFound` if the id is unknown.
    pub fn panelist_appearances(
        &self,
        panelist_id: i64,
    ) -> Result<AppearanceSummary<PanelistAppearance>> {
        if !self.id_exists(Entity::Panelist, panelist_id)? {
            return Err(Error::NotFound);
        }
        self.panelist_appearances_unvalidated(panelist_id)
    }

    pub fn panelist_appearances_unvalidated(
        &self,
        panelist_id: i64,
    ) -> Result<AppearanceSummary<PanelistAppearance>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.date, s.best_of, s.repeat_of IS NOT NULL,
                    sp.start_score, sp.correct_answers, sp.score, sp.rank
             FROM show_panelists sp
             JOIN shows s ON s.id = sp.show_id
             WHERE sp.panelist_id = ?1
             ORDER BY s.date ASC",
        )?;
        let rows = stmt
            .query_map(params![panelist_id], |row| {
                let rank: Option<String> = row.get(7)?;
                Ok(PanelistAppearance {
                    show_id: row.get(0)?,
                    date: row.get(1)?,
                    best_of: row.get(2)?,
                    repeat: row.get(3)?,
                    start_score: row.get(4)?,
                    correct_answers: row.get(5)?,
                    score: row.get(6)?,
                    rank: rank.as_deref().and_then(Rank::from_code_logged),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let regular = |a: &PanelistAppearance| !a.best_of && !a.repeat;
        let mut counts = counts_for(&rows, regular);
        counts.with_scores = Some(
            rows.iter()
                .filter(|a| regular(a) && a.score.is_some())
                .count() as i64,
        );
        Ok(wrap(counts, rows))
    }

    /// A Not-My-Job guest's appearance history. `NotFound` if the id is
    /// unknown.
    pub fn guest_appearances(&self, guest_id: i64) -> Result<AppearanceSummary<GuestAppearance>> {
        if !self.id_exists(Entity::Guest, guest_id)? {
            return Err(Error::NotFound);
        }
        self.guest_appearances_unvalidated(guest_id)
    }

    pub fn guest_appearances_unvalidated(
        &self,
        guest_id: i64,
    ) -> Result<AppearanceSummary<GuestAppearance>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.date, s.best_of, s.repeat_of IS NOT NULL, sg.score, sg.score_exception
             FROM show_guests sg
             JOIN shows s ON s.id = sg.show_id
             WHERE sg.guest_id = ?1
             ORDER BY s.date ASC",
        )?;
        let rows = stmt
            .query_map(params![guest_id], |row| {
                Ok(GuestAppearance {
                    show_id: row.get(0)?,
                    date: row.get(1)?,
                    best_of: row.get(2)?,
                    repeat: row.get(3)?,
                    score: row.get(4)?,
                    score_exception: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let counts = counts_for(&rows, |a: &GuestAppearance| !a.best_of && !a.repeat);
        Ok(wrap(counts, rows))
    }
}
