use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MizuchiError;

/// One parsed torrent release. Immutable once constructed; scoring only
/// reads it.
///
/// `season` and `episode` are always integer sequences: an absent value is
/// an empty sequence, a bare scalar becomes a one-element sequence. Empty
/// means the release makes no season/episode claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Torrent {
    /// Release/show title as parsed, used for name matching.
    pub title: String,
    /// Optional unique identifier of the torrent.
    pub info_hash: String,
    #[serde(deserialize_with = "one_or_many")]
    pub episode: Vec<u32>,
    #[serde(deserialize_with = "one_or_many")]
    pub season: Vec<u32>,
    /// One of "720p", "1080p", "2160p", "4K"; empty when unknown.
    pub resolution: String,
    pub quality: String,
    pub codec: String,
    /// Audio description; the channel layout ("5.1", "7.1") is what scoring
    /// looks for.
    pub audio: String,
    pub filetype: String,
    pub encoder: String,
    pub language: Vec<String>,
    pub bit_depth: u32,
    pub hdr: bool,
    /// Release year; 0 when unknown.
    pub year: u32,
    /// Original, unparsed input string, retained verbatim.
    pub raw_title: String,
}

impl Default for Torrent {
    fn default() -> Self {
        Self {
            title: String::new(),
            info_hash: String::new(),
            episode: Vec::new(),
            season: Vec::new(),
            resolution: String::new(),
            quality: String::new(),
            codec: String::new(),
            audio: String::new(),
            filetype: String::new(),
            encoder: String::new(),
            language: vec!["English".to_string()],
            bit_depth: 8,
            hdr: false,
            year: 0,
            raw_title: String::new(),
        }
    }
}

impl Torrent {
    /// Build a Torrent from a raw release title via the metadata extractor.
    /// `raw_title` keeps the input verbatim.
    pub fn parse_title(raw_title: &str) -> Self {
        let parsed = mizuchi_parse::parse(raw_title);
        Self {
            title: parsed.title,
            info_hash: String::new(),
            episode: parsed.episodes,
            season: parsed.seasons,
            resolution: parsed.resolution,
            quality: parsed.quality,
            codec: parsed.codec,
            audio: parsed.audio,
            filetype: parsed.filetype,
            encoder: parsed.encoder,
            language: parsed.language,
            bit_depth: parsed.bit_depth,
            hdr: parsed.hdr,
            year: parsed.year,
            raw_title: raw_title.to_string(),
        }
    }

    /// Build a Torrent from externally extracted metadata fields.
    ///
    /// Fails with [`MizuchiError::Validation`] when a field cannot be
    /// coerced to its declared type, e.g. a non-integer season token.
    /// Season/episode scalars and nulls are normalized to sequences.
    pub fn from_metadata(value: serde_json::Value) -> Result<Self, MizuchiError> {
        serde_json::from_value(value).map_err(|e| MizuchiError::Validation(e.to_string()))
    }
}

/// Accept null, a bare integer, or a sequence of integers, normalizing all
/// three to a `Vec<u32>`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(u32),
        Many(Vec<u32>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(n)) => vec![n],
        Some(OneOrMany::Many(v)) => v,
    })
}

/// The media the caller is looking for. Season and episode participate in
/// scoring only when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub title: String,
    pub year: u32,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

/// A candidate that survived scoring, paired with its composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTorrent {
    pub torrent: Torrent,
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_title_keeps_raw() {
        let t = Torrent::parse_title("Friends S01-S10 1994 COMPLETE 7.1 4k");
        assert_eq!(t.raw_title, "Friends S01-S10 1994 COMPLETE 7.1 4k");
        assert_eq!(t.title, "Friends");
        assert_eq!(t.season, (1..=10).collect::<Vec<u32>>());
        assert_eq!(t.resolution, "4K");
        assert_eq!(t.year, 1994);
    }

    #[test]
    fn test_scalar_season_normalizes_to_sequence() {
        let t = Torrent::from_metadata(json!({
            "title": "Friends",
            "season": 5,
            "episode": [10],
        }))
        .unwrap();
        assert_eq!(t.season, vec![5]);
        assert_eq!(t.episode, vec![10]);
    }

    #[test]
    fn test_null_season_normalizes_to_empty() {
        let t = Torrent::from_metadata(json!({
            "title": "Oppenheimer",
            "season": null,
        }))
        .unwrap();
        assert!(t.season.is_empty());
        assert!(t.episode.is_empty());
    }

    #[test]
    fn test_non_integer_season_is_validation_error() {
        let err = Torrent::from_metadata(json!({
            "title": "Friends",
            "season": "five",
        }))
        .unwrap_err();
        assert!(matches!(err, MizuchiError::Validation(_)));
    }

    #[test]
    fn test_defaults() {
        let t = Torrent::from_metadata(json!({ "title": "Friends" })).unwrap();
        assert_eq!(t.language, vec!["English"]);
        assert_eq!(t.bit_depth, 8);
        assert_eq!(t.year, 0);
        assert!(!t.hdr);
    }
}
