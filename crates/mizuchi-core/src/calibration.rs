//! Reference score bounds per resolution tier.
//!
//! Composite score magnitudes are not self-explanatory, so these helpers
//! compute deterministic bounds from synthetic candidates: what a
//! fully-matching torrent scores at a given tier, and what a just-barely
//! valid one scores. Test suites and UI normalization build on them. All
//! values are pure functions of the fixed scoring constants.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use crate::torrent::{SearchQuery, Torrent};

/// The best composite score any candidate can reach: a whole-series 4K
/// release with matching name, year, and 7.1 audio. Computed once.
pub static HIGHEST_SCORE: LazyLock<i32> = LazyLock::new(|| max_score_for("4K"));

fn series_query() -> SearchQuery {
    SearchQuery {
        title: "Friends".to_string(),
        year: 1994,
        season: Some(5),
        episode: Some(10),
    }
}

/// Maximum attainable score at the given resolution tier: every other
/// criterion fully matching.
pub fn max_score_for(resolution: &str) -> i32 {
    Torrent::parse_title(&format!("Friends S01-S10 1994 7.1 COMPLETE {resolution}"))
        .score_with(&series_query())
}

/// Minimum attainable score at the given resolution tier: a just-barely
/// valid candidate matching name and year only, with no season/episode
/// claim.
pub fn min_score_for(resolution: &str) -> i32 {
    Torrent::parse_title(&format!("Oppenheimer 2023 {resolution}")).score_with(&SearchQuery {
        title: "Oppenheimer".to_string(),
        year: 2023,
        season: Some(1),
        episode: Some(1),
    })
}

/// The contiguous range of valid scores at the given resolution tier.
pub fn score_range_for(resolution: &str) -> RangeInclusive<i32> {
    min_score_for(resolution)..=max_score_for(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [&str; 4] = ["720p", "1080p", "2160p", "4K"];

    #[test]
    fn test_highest_score_bit_layout() {
        let expected = (2 << 10) | (3 << 7) | (3 << 4) | (2 << 2) | (1 << 1);
        assert_eq!(*HIGHEST_SCORE, expected);
    }

    #[test]
    fn test_max_at_least_min_per_tier() {
        for tier in TIERS {
            assert!(max_score_for(tier) >= min_score_for(tier), "tier {tier}");
        }
    }

    #[test]
    fn test_lower_bound_non_decreasing() {
        assert!(min_score_for("720p") < min_score_for("1080p"));
        assert!(min_score_for("1080p") < min_score_for("2160p"));
        assert_eq!(min_score_for("2160p"), min_score_for("4K"));
    }

    #[test]
    fn test_min_is_name_year_resolution_only() {
        // Name (2 << 10), year (1 << 1), and the tier itself: nothing else.
        assert_eq!(min_score_for("1080p"), (2 << 10) | (2 << 4) | (1 << 1));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = score_range_for("1080p");
        assert!(range.contains(&max_score_for("1080p")));
        assert!(range.contains(&min_score_for("1080p")));
    }

    #[test]
    fn test_stable_across_calls() {
        assert_eq!(max_score_for("720p"), max_score_for("720p"));
        assert_eq!(*HIGHEST_SCORE, max_score_for("4K"));
    }
}
