use std::sync::LazyLock;

use regex::Regex;

use crate::elements::Elements;
use crate::keyword::{self, KeywordKind};

/// Season range: `S01-S10`, `S1 S3`.
static SEASON_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bS(\d{1,2})[-\s]S?(\d{1,2})\b").unwrap());

/// Season range spelled out: `Season 1-10`.
static SEASON_WORD_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSeason\W(\d{1,2})\W(\d{1,2})\b").unwrap());

/// Season plus episode: `S05E10`, `S05-E10`, `S05 E10`.
static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bS(\d{1,2})[-. ]?E(\d{1,4})\b").unwrap());

/// Standalone season: `S05`, `Season 5`.
static SEASON_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bS(\d{1,2})\b|\bSeason\s+(\d{1,2})\b").unwrap());

/// Standalone episode: `E10`, `Ep10`, `Ep. 10`, `Episode 10`.
static EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:Episode\s+|Ep\.?\s*|E)(\d{1,4})\b").unwrap());

/// Release year.
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

/// Audio channel layout: `7.1`, `5.1`, `2.0` (also attached forms like `DDP5.1`).
static CHANNELS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([257])\.([01])\b").unwrap());

static RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(480p|720p|1080p|2160p|4k)\b").unwrap());

static BIT_DEPTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(8|10)[-. ]?bit\b").unwrap());

/// Trailing container extension, per the usual video extension set.
static EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\.(3g2|3gp|avi|flv|m2ts|m4v|mk3d|mkv|mov|mp2|mp4|mpe|mpeg|mpg|mpv|ogm|ts|webm|wmv)$",
    )
    .unwrap()
});

/// Trailing `-GROUP` release-group suffix.
static ENCODER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([A-Za-z][A-Za-z0-9]{1,15})$").unwrap());

/// A season/episode-shaped token (`S10`, `E05`), which must never be
/// mistaken for a release group.
static SEASON_SHAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[se]\d+$").unwrap());

/// Tokens for the keyword scan. Dots, underscores, spaces, brackets and
/// dashes all separate tokens.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^ ._\[\]()-]+").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Parse a torrent release title into its component elements.
///
/// Extraction never fails: a title with no recognizable metadata yields an
/// `Elements` whose `title` is the whole (cleaned) input.
///
/// # Example
/// ```
/// let e = mizuchi_parse::parse("Friends S01-S10 1994 COMPLETE 7.1 4k");
/// assert_eq!(e.title, "Friends");
/// assert_eq!(e.seasons, (1..=10).collect::<Vec<u32>>());
/// assert_eq!(e.resolution, "4K");
/// assert_eq!(e.audio, "7.1");
/// assert_eq!(e.year, 1994);
/// ```
pub fn parse(input: &str) -> Elements {
    let mut elements = Elements::default();

    // Pass 1: Strip a trailing container extension.
    let work = match EXTENSION.captures(input) {
        Some(c) => {
            elements.filetype = c[1].to_lowercase();
            &input[..c.get(0).map_or(input.len(), |m| m.start())]
        }
        None => input,
    };

    // First byte offset of any recognized metadata; everything before it is
    // the title.
    let mut cut = work.len();

    // Pass 2: Seasons and episodes.
    extract_seasons(work, &mut elements, &mut cut);

    // Pass 3: Year.
    if let Some(m) = YEAR.find(work) {
        elements.year = m.as_str().parse().unwrap_or(0);
        cut = cut.min(m.start());
    }

    // Pass 4: Resolution, channels, bit depth.
    if let Some(m) = RESOLUTION.find(work) {
        elements.resolution = standardise_resolution(m.as_str());
        cut = cut.min(m.start());
    }
    let channels: Option<String> = CHANNELS.captures(work).map(|c| {
        if let Some(m) = c.get(0) {
            cut = cut.min(m.start());
        }
        format!("{}.{}", &c[1], &c[2])
    });
    if let Some(c) = BIT_DEPTH.captures(work) {
        elements.bit_depth = c[1].parse().unwrap_or(8);
        cut = cut.min(c.get(0).map_or(cut, |m| m.start()));
    }

    // Pass 5: Keyword scan over the remaining tokens.
    let mut audio_codec: Option<&'static str> = None;
    let mut languages: Vec<String> = Vec::new();
    for token in TOKEN.find_iter(work) {
        // Channel layouts attach to audio codecs in scene names ("DD5.1"
        // tokenizes as "DD5"), so retry without trailing digits.
        let kw = keyword::lookup(token.as_str()).or_else(|| {
            keyword::lookup(token.as_str().trim_end_matches(|c: char| c.is_ascii_digit()))
        });
        let Some(kw) = kw else {
            continue;
        };
        match kw.kind {
            KeywordKind::Quality => {
                if elements.quality.is_empty() {
                    elements.quality = kw.canonical.to_string();
                }
            }
            KeywordKind::VideoCodec => {
                if elements.codec.is_empty() {
                    elements.codec = kw.canonical.to_string();
                }
            }
            KeywordKind::AudioCodec => {
                if audio_codec.is_none() {
                    audio_codec = Some(kw.canonical);
                }
            }
            KeywordKind::Language => {
                if !languages.iter().any(|l| l == kw.canonical) {
                    languages.push(kw.canonical.to_string());
                }
            }
            KeywordKind::Hdr => elements.hdr = true,
        }
        cut = cut.min(token.start());
    }
    elements.audio = match (audio_codec, channels) {
        (Some(codec), Some(ch)) => format!("{codec} {ch}"),
        (Some(codec), None) => codec.to_string(),
        (None, Some(ch)) => ch,
        (None, None) => String::new(),
    };
    if !languages.is_empty() {
        elements.language = languages;
    }

    // Pass 6: Release group. Only a trailing `-GROUP` after some recognized
    // metadata counts, so hyphenated titles ("Spider-Man") are left alone.
    if let Some(c) = ENCODER.captures(work) {
        let candidate = &c[1];
        let start = c.get(0).map_or(work.len(), |m| m.start());
        if start > cut
            && !SEASON_SHAPED.is_match(candidate)
            && !RESOLUTION.is_match(candidate)
            && keyword::lookup(candidate).is_none()
        {
            elements.encoder = candidate.to_string();
        }
    }

    // Pass 7: Title is the cleaned prefix before the first metadata token.
    elements.title = clean_title(&work[..cut]);

    elements
}

fn extract_seasons(work: &str, elements: &mut Elements, cut: &mut usize) {
    if let Some(c) = SEASON_RANGE
        .captures(work)
        .or_else(|| SEASON_WORD_RANGE.captures(work))
    {
        let begin: u32 = c[1].parse().unwrap_or(0);
        let end: u32 = c[2].parse().unwrap_or(0);
        elements.seasons = if begin == end {
            vec![begin]
        } else {
            (begin..=end).collect()
        };
        if let Some(m) = c.get(0) {
            *cut = (*cut).min(m.start());
        }
    }

    if let Some(c) = SEASON_EPISODE.captures(work) {
        if elements.seasons.is_empty() {
            elements.seasons = vec![c[1].parse().unwrap_or(0)];
        }
        elements.episodes = vec![c[2].parse().unwrap_or(0)];
        if let Some(m) = c.get(0) {
            *cut = (*cut).min(m.start());
        }
        return;
    }

    if elements.seasons.is_empty() {
        if let Some(c) = SEASON_SINGLE.captures(work) {
            let n = c
                .get(1)
                .or_else(|| c.get(2))
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0);
            elements.seasons = vec![n];
            if let Some(m) = c.get(0) {
                *cut = (*cut).min(m.start());
            }
        }
    }

    if elements.episodes.is_empty() {
        if let Some(c) = EPISODE.captures(work) {
            elements.episodes = vec![c[1].parse().unwrap_or(0)];
            if let Some(m) = c.get(0) {
                *cut = (*cut).min(m.start());
            }
        }
    }
}

fn standardise_resolution(token: &str) -> String {
    if token.eq_ignore_ascii_case("4k") {
        "4K".to_string()
    } else {
        token.to_lowercase()
    }
}

fn clean_title(s: &str) -> String {
    let replaced = s.replace(['.', '_'], " ");
    let collapsed = WHITESPACE.replace_all(&replaced, " ");
    collapsed.trim().trim_end_matches('-').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_range() {
        let e = parse("Friends S01-S10 COMPLETE");
        assert_eq!(e.title, "Friends");
        assert_eq!(e.seasons, (1..=10).collect::<Vec<u32>>());
        assert!(e.episodes.is_empty());
    }

    #[test]
    fn test_season_word_range() {
        let e = parse("Friends Season 1-10 COMPLETE");
        assert_eq!(e.seasons, (1..=10).collect::<Vec<u32>>());
        assert_eq!(e.title, "Friends");
    }

    #[test]
    fn test_single_season() {
        let e = parse("Friends S05 COMPLETE 2160p");
        assert_eq!(e.seasons, vec![5]);
        assert!(e.episodes.is_empty());
        assert_eq!(e.resolution, "2160p");

        let e = parse("Friends S5");
        assert_eq!(e.seasons, vec![5]);
    }

    #[test]
    fn test_season_episode() {
        let e = parse("Friends S05E10 1080p");
        assert_eq!(e.seasons, vec![5]);
        assert_eq!(e.episodes, vec![10]);
        assert_eq!(e.resolution, "1080p");

        let e = parse("Friends S05-E10");
        assert_eq!(e.seasons, vec![5]);
        assert_eq!(e.episodes, vec![10]);
    }

    #[test]
    fn test_year_and_audio() {
        let e = parse("Friends S01-S10 1994 COMPLETE 7.1 4k");
        assert_eq!(e.title, "Friends");
        assert_eq!(e.year, 1994);
        assert_eq!(e.audio, "7.1");
        assert_eq!(e.resolution, "4K");
    }

    #[test]
    fn test_scene_style() {
        let e = parse("The.Office.US.S05.1080p.WEB-DL.DD5.1.H264-GROUP.mkv");
        assert_eq!(e.title, "The Office US");
        assert_eq!(e.seasons, vec![5]);
        assert_eq!(e.resolution, "1080p");
        assert_eq!(e.quality, "WEB-DL");
        assert_eq!(e.codec, "x264");
        assert_eq!(e.audio, "Dolby Digital 5.1");
        assert_eq!(e.filetype, "mkv");
        assert_eq!(e.encoder, "GROUP");
    }

    #[test]
    fn test_movie() {
        let e = parse("Oppenheimer 2023 2160p BluRay DTS-HD 7.1 x265 10bit HDR");
        assert_eq!(e.title, "Oppenheimer");
        assert_eq!(e.year, 2023);
        assert_eq!(e.resolution, "2160p");
        assert_eq!(e.quality, "BluRay");
        assert_eq!(e.codec, "x265");
        assert_eq!(e.audio, "DTS 7.1");
        assert_eq!(e.bit_depth, 10);
        assert!(e.hdr);
        assert!(e.seasons.is_empty());
        assert!(e.episodes.is_empty());
    }

    #[test]
    fn test_no_metadata() {
        let e = parse("Friends");
        assert_eq!(e.title, "Friends");
        assert!(e.seasons.is_empty());
        assert!(e.episodes.is_empty());
        assert_eq!(e.resolution, "");
        assert_eq!(e.year, 0);
    }

    #[test]
    fn test_hyphenated_title_keeps_no_group() {
        let e = parse("Spider-Man");
        assert_eq!(e.title, "Spider-Man");
        assert_eq!(e.encoder, "");

        let e = parse("Spider-Man 2002 1080p BluRay x264-SPARKS");
        assert_eq!(e.title, "Spider-Man");
        assert_eq!(e.encoder, "SPARKS");
    }

    #[test]
    fn test_languages() {
        let e = parse("Dark S01 1080p German ENG");
        assert_eq!(e.language, vec!["German", "English"]);

        let e = parse("Dark S01 1080p");
        assert_eq!(e.language, vec!["English"]);
    }

    #[test]
    fn test_episode_only() {
        let e = parse("One Piece Episode 1071 1080p");
        assert_eq!(e.episodes, vec![1071]);
        assert_eq!(e.title, "One Piece");
    }
}
