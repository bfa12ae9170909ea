//! Multi-criteria torrent scoring.
//!
//! Each criterion gets its own bit range inside one integer, with higher
//! bit positions for higher-priority criteria, so candidates sort by plain
//! numeric comparison: name match first, then season/episode completeness,
//! then resolution, audio channels, and year.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::torrent::{ScoredTorrent, SearchQuery, Torrent};

/// Highest priority: a wrong title must dominate everything else.
pub const NAME_MATCH_BIT_POS: u32 = 10;
pub const SEASON_MATCH_BIT_POS: u32 = 7;
pub const RESOLUTION_BIT_POS: u32 = 4;
pub const AUDIO_BIT_POS: u32 = 2;
/// Lowest priority tiebreak.
pub const YEAR_MATCH_BIT_POS: u32 = 1;

const MAX_NAME_SCORE: i32 = 2;
const MAX_SEASON_SCORE: i32 = 3;
const MAX_RESOLUTION_SCORE: i32 = 3;
const MAX_AUDIO_SCORE: i32 = 2;
const MAX_YEAR_SCORE: i32 = 1;

// Each criterion's maximum shifted sub-score must stay below the next
// criterion's bit position, or single-integer ordering silently breaks.
// Checked here so extending a weight table cannot corrupt the contract.
const _: () = {
    assert!(MAX_YEAR_SCORE << YEAR_MATCH_BIT_POS < 1 << AUDIO_BIT_POS);
    assert!(MAX_AUDIO_SCORE << AUDIO_BIT_POS < 1 << RESOLUTION_BIT_POS);
    assert!(MAX_RESOLUTION_SCORE << RESOLUTION_BIT_POS < 1 << SEASON_MATCH_BIT_POS);
    assert!(MAX_SEASON_SCORE << SEASON_MATCH_BIT_POS < 1 << NAME_MATCH_BIT_POS);
};

/// Sub-score for a failed hard criterion.
const MISMATCH: i32 = -10;

/// Global rejection sentinel: the candidate must be excluded regardless of
/// its other merits. Callers treat any score at or below this as rejected.
pub const REJECTED: i32 = -1000;

/// Why a candidate was rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Torrent title does not match the queried title.
    Name,
    /// Torrent claims a season/episode set that excludes the query.
    SeasonEpisode,
}

/// Tagged scoring outcome. [`Torrent::score_with`] collapses it to the
/// plain integer contract; tests and diagnostics can inspect the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    Accepted(i32),
    Rejected(RejectReason),
}

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

impl Torrent {
    /// Score this torrent's title against the queried title: `2` for a
    /// case-insensitive full match, [`MISMATCH`] otherwise.
    ///
    /// Runs of non-word characters in the query are wildcarded, so
    /// punctuation and spacing differences do not break the match.
    pub fn score_name(&self, title: &str) -> i32 {
        let pattern = format!("(?i)^{}$", NON_WORD.replace_all(title, r"\W+"));
        match Regex::new(&pattern) {
            Ok(re) if re.is_match(&self.title) => 2,
            _ => MISMATCH,
        }
    }

    /// Score this torrent's season/episode claim against the query:
    /// `3` whole-series match, `2` whole-season match, `1` single-episode
    /// match, `0` no claim at all, [`MISMATCH`] when the claim excludes the
    /// query. Only consulted when the query carries both season and episode.
    pub fn score_series(&self, season: u32, episode: u32) -> i32 {
        if !self.season.is_empty() && !self.season.contains(&season) {
            // season mismatch
            return MISMATCH;
        }
        if !self.episode.is_empty() && !self.episode.contains(&episode) {
            // episode mismatch
            return MISMATCH;
        }
        if self.season.is_empty() && self.episode.is_empty() {
            // no season or episode claim
            return 0;
        }
        if self.season.len() > 1 && self.season.contains(&season) {
            // whole series
            return 3;
        }
        if self.season.contains(&season) && self.episode.is_empty() {
            // whole season
            return 2;
        }
        if self.season.contains(&season) && self.episode.contains(&episode) {
            // single episode
            return 1;
        }
        MISMATCH
    }

    /// Score this torrent against a query, tagging rejections with the
    /// failing criterion.
    pub fn evaluate(&self, query: &SearchQuery) -> ScoreOutcome {
        let name_score = self.score_name(&query.title);
        if name_score < 0 {
            return ScoreOutcome::Rejected(RejectReason::Name);
        }

        let series_score = match (query.season, query.episode) {
            (Some(season), Some(episode)) => self.score_series(season, episode),
            _ => 0,
        };
        if series_score < 0 {
            return ScoreOutcome::Rejected(RejectReason::SeasonEpisode);
        }

        let audio_score = if self.audio.contains("7.1") {
            2
        } else if self.audio.contains("5.1") {
            1
        } else {
            0
        };
        let year_score = if self.year != 0 && self.year == query.year {
            1
        } else {
            0
        };

        ScoreOutcome::Accepted(
            (name_score << NAME_MATCH_BIT_POS)
                | (series_score << SEASON_MATCH_BIT_POS)
                | (resolution_weight(&self.resolution) << RESOLUTION_BIT_POS)
                | (audio_score << AUDIO_BIT_POS)
                | (year_score << YEAR_MATCH_BIT_POS),
        )
    }

    /// Composite score for ranking: a non-negative bit-packed integer, or
    /// [`REJECTED`] when the name or season/episode criterion fails. Total
    /// for every structurally valid torrent and query.
    pub fn score_with(&self, query: &SearchQuery) -> i32 {
        match self.evaluate(query) {
            ScoreOutcome::Accepted(score) => score,
            ScoreOutcome::Rejected(_) => REJECTED,
        }
    }
}

/// Fixed weight per resolution tier. "2160p" and "4K" are equal-ranked
/// aliases. An unrecognized or empty token counts as unknown and
/// contributes 0, keeping scoring total.
fn resolution_weight(resolution: &str) -> i32 {
    match resolution {
        "720p" => 1,
        "1080p" => 2,
        "2160p" | "4K" => 3,
        _ => 0,
    }
}

/// Score every candidate, drop rejected ones, and stable-sort the rest by
/// descending score, so ties keep arrival order.
pub fn rank(torrents: Vec<Torrent>, query: &SearchQuery) -> Vec<ScoredTorrent> {
    let mut scored: Vec<ScoredTorrent> = torrents
        .into_iter()
        .filter_map(|torrent| match torrent.evaluate(query) {
            ScoreOutcome::Accepted(score) => {
                debug!(raw_title = %torrent.raw_title, score, "torrent scored");
                Some(ScoredTorrent { torrent, score })
            }
            ScoreOutcome::Rejected(reason) => {
                debug!(raw_title = %torrent.raw_title, ?reason, "torrent rejected");
                None
            }
        })
        .collect();
    scored.sort_by_key(|s| Reverse(s.score));
    scored
}
