//! Panelist scoring statistics.
//!
//! Two raw series feed the engine, both restricted to regular shows
//! (best-of and repeats excluded): the non-null score series and the
//! per-code rank counts. The descriptive statistics are explicit functions
//! so the formula choices (population standard deviation, integer midpoint
//! median) are pinned by unit tests rather than buried in a library call.

use rusqlite::params;

use crate::db::Database;
use crate::db::models::{
    PanelistStatistics, Rank, RankCounts, RankPercentages, Ranking, ScoreStats,
};
use crate::error::{Error, Result};
use crate::resolver::Entity;

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Median over a sorted-or-not slice; even-length input takes the integer
/// midpoint average of the two middle values. Zero for an empty slice.
pub fn median(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2
    }
}

/// Population standard deviation (denominator N, not N-1). Zero for an
/// empty slice.
pub fn population_std_dev(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - m;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Round to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn score_stats(scores: &[i64]) -> ScoreStats {
    ScoreStats {
        minimum: scores.iter().copied().min().unwrap_or(0),
        maximum: scores.iter().copied().max().unwrap_or(0),
        mean: round4(mean(scores)),
        median: median(scores),
        standard_deviation: round4(population_std_dev(scores)),
        total: scores.iter().sum(),
    }
}

/// Each rank count as a percentage of `denominator`, rounded to 4 decimals.
///
/// The denominator is the *score*-series length, not the rank total — the
/// two series are filtered independently and the percentages deliberately
/// keep that historical behavior.
fn rank_percentages(counts: &RankCounts, denominator: i64) -> RankPercentages {
    let pct = |count: i64| round4(count as f64 / denominator as f64 * 100.0);
    RankPercentages {
        first: pct(counts.first),
        first_tied: pct(counts.first_tied),
        second: pct(counts.second),
        second_tied: pct(counts.second_tied),
        third: pct(counts.third),
    }
}

impl Database {
    fn panelist_score_series(&self, panelist_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT sp.score
             FROM show_panelists sp
             JOIN shows s ON s.id = sp.show_id
             WHERE sp.panelist_id = ?1
               AND s.best_of = 0
               AND s.repeat_of IS NULL
               AND sp.score IS NOT NULL
             ORDER BY s.date ASC",
        )?;
        let scores = stmt
            .query_map(params![panelist_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;
        Ok(scores)
    }

    fn panelist_rank_counts(&self, panelist_id: i64) -> Result<RankCounts> {
        let mut stmt = self.conn.prepare(
            "SELECT sp.rank, COUNT(*)
             FROM show_panelists sp
             JOIN shows s ON s.id = sp.show_id
             WHERE sp.panelist_id = ?1
               AND s.best_of = 0
               AND s.repeat_of IS NULL
               AND sp.rank IS NOT NULL
             GROUP BY sp.rank",
        )?;
        let tallies = stmt
            .query_map(params![panelist_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut counts = RankCounts::default();
        for (code, n) in tallies {
            match Rank::from_code(&code) {
                Some(rank) => counts.tally(rank, n),
                None => {
                    log::warn!("panelist {panelist_id}: ignoring unknown rank code {code:?}");
                }
            }
        }
        Ok(counts)
    }

    /// Scoring and ranking statistics for one panelist over their
    /// regular-show history.
    ///
    /// `NotFound` for an unknown id, and for a panelist whose score or rank
    /// series is empty — no zero-valued statistics are ever fabricated. The
    /// empty-score-series check also runs before any percentage is computed,
    /// so the score-count denominator can never be zero.
    pub fn panelist_statistics(&self, panelist_id: i64) -> Result<PanelistStatistics> {
        if !self.id_exists(Entity::Panelist, panelist_id)? {
            return Err(Error::NotFound);
        }

        let scores = self.panelist_score_series(panelist_id)?;
        let counts = self.panelist_rank_counts(panelist_id)?;
        if scores.is_empty() || counts.total() == 0 {
            return Err(Error::NotFound);
        }

        log::debug!(
            "panelist {panelist_id}: {} scored shows, {} ranked shows",
            scores.len(),
            counts.total()
        );

        let percentage = rank_percentages(&counts, scores.len() as i64);
        Ok(PanelistStatistics {
            scoring: score_stats(&scores),
            ranking: Ranking {
                rank: counts,
                percentage,
            },
        })
    }
}
