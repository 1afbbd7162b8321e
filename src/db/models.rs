use chrono::NaiveDate;
use serde::Serialize;

/// Rank code for a panelist's finish on a single show.
///
/// The closed set is `{1, 1t, 2, 2t, 3}` (t = tied). Codes outside the set
/// are treated as unranked and excluded from every tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "1t")]
    FirstTied,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "2t")]
    SecondTied,
    #[serde(rename = "3")]
    Third,
}

impl Rank {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Rank::First),
            "1t" => Some(Rank::FirstTied),
            "2" => Some(Rank::Second),
            "2t" => Some(Rank::SecondTied),
            "3" => Some(Rank::Third),
            _ => None,
        }
    }

    /// As [`from_code`](Self::from_code), but an out-of-set code is logged
    /// at warn level instead of vanishing silently.
    pub fn from_code_logged(code: &str) -> Option<Self> {
        let rank = Self::from_code(code);
        if rank.is_none() {
            log::warn!("ignoring unknown rank code {code:?}");
        }
        rank
    }

    pub fn code(self) -> &'static str {
        match self {
            Rank::First => "1",
            Rank::FirstTied => "1t",
            Rank::Second => "2",
            Rank::SecondTied => "2t",
            Rank::Third => "3",
        }
    }
}

/// Minimal record returned by the generic entity resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

// ── Show detail records ───────────────────────────────────────────────

/// Venue for a show. All three fields are nullable in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowLocation {
    pub id: i64,
    pub city: Option<String>,
    pub state: Option<String>,
    pub venue: Option<String>,
}

/// Host with their participation record for one show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowHost {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub gender: Option<String>,
    /// Whether this was a non-regular guest-host appearance.
    pub guest: bool,
}

/// Scorekeeper with their participation record for one show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowScorekeeper {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub gender: Option<String>,
    pub guest: bool,
    /// Free-text intro used on this show, when one was recorded.
    pub description: Option<String>,
}

/// Panelist with lightning-round and scoring fields for one show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowPanelist {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub gender: Option<String>,
    pub start_score: Option<i64>,
    pub correct_answers: Option<i64>,
    /// Final score. Some shows lack recorded scores.
    pub score: Option<i64>,
    pub rank: Option<Rank>,
}

/// Not-My-Job guest with their result for one show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowGuest {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub score: Option<i64>,
    /// Scoring anomaly marker (e.g. points awarded outside the normal rules).
    pub score_exception: bool,
}

/// A panelist referenced from the Bluff-the-Listener segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BluffPanelist {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Bluff-the-Listener outcome. The two sides are resolved independently —
/// either may be absent on its own. The struct itself is always present on a
/// [`ShowDetail`], so a bluff-less show serializes both members as null
/// rather than dropping the key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BluffResult {
    pub chosen_panelist: Option<BluffPanelist>,
    pub correct_panelist: Option<BluffPanelist>,
}

/// Complete denormalized record for one show.
///
/// `original_show_date` is omitted from serialized output when the show is
/// not a repeat; `panelists` and `guests` serialize as null (not `[]`) when
/// nothing is mapped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowDetail {
    pub id: i64,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_of: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_show_date: Option<NaiveDate>,
    pub location: ShowLocation,
    pub host: ShowHost,
    pub scorekeeper: ShowScorekeeper,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub panelists: Option<Vec<ShowPanelist>>,
    pub bluff: BluffResult,
    pub guests: Option<Vec<ShowGuest>>,
}

// ── Appearance records ────────────────────────────────────────────────

/// Counts over an entity's appearance history.
///
/// `regular` counts first-run, non-compilation shows (best-of and repeat
/// shows excluded); `all` counts every show. `with_scores` is populated for
/// panelists only: regular-show appearances with a recorded score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppearanceCounts {
    pub regular: i64,
    pub all: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_scores: Option<i64>,
}

/// An entity's appearance history: counts plus the ordered show list.
///
/// `appearances` is `None` (never an empty vec) when the entity has no
/// history at all — "no history" and "everything filtered out" must stay
/// distinguishable downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppearanceSummary<T> {
    pub counts: AppearanceCounts,
    pub appearances: Option<Vec<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostAppearance {
    pub show_id: i64,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat: bool,
    pub guest: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorekeeperAppearance {
    pub show_id: i64,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat: bool,
    pub guest: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelistAppearance {
    pub show_id: i64,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat: bool,
    pub start_score: Option<i64>,
    pub correct_answers: Option<i64>,
    pub score: Option<i64>,
    pub rank: Option<Rank>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestAppearance {
    pub show_id: i64,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat: bool,
    pub score: Option<i64>,
    pub score_exception: bool,
}

// ── Statistics records ────────────────────────────────────────────────

/// Descriptive statistics over a panelist's regular-show score series.
/// `mean` and `standard_deviation` are rounded to 4 decimal places; the
/// standard deviation is the population form (denominator N).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStats {
    pub minimum: i64,
    pub maximum: i64,
    pub mean: f64,
    pub median: i64,
    pub standard_deviation: f64,
    pub total: i64,
}

/// Raw per-code rank counts over regular-show appearances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RankCounts {
    pub first: i64,
    pub first_tied: i64,
    pub second: i64,
    pub second_tied: i64,
    pub third: i64,
}

impl RankCounts {
    pub fn tally(&mut self, rank: Rank, n: i64) {
        match rank {
            Rank::First => self.first += n,
            Rank::FirstTied => self.first_tied += n,
            Rank::Second => self.second += n,
            Rank::SecondTied => self.second_tied += n,
            Rank::Third => self.third += n,
        }
    }

    pub fn total(&self) -> i64 {
        self.first + self.first_tied + self.second + self.second_tied + self.third
    }
}

/// Rank frequencies as percentages, rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankPercentages {
    pub first: f64,
    pub first_tied: f64,
    pub second: f64,
    pub second_tied: f64,
    pub third: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub rank: RankCounts,
    pub percentage: RankPercentages,
}

/// Scoring and ranking statistics for one panelist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelistStatistics {
    pub scoring: ScoreStats,
    pub ranking: Ranking,
}
