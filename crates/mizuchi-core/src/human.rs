//! Human-facing formatting helpers for presenting ranked candidates.

use std::sync::LazyLock;

use regex::Regex;

/// Coarse quality tiers in priority order, for free-text probing when no
/// parsed resolution is available.
static QUALITIES: LazyLock<[(&'static str, Regex); 4]> = LazyLock::new(|| {
    [
        ("4K", Regex::new(r"(?i)\b(4K|2160p)\b").unwrap()),
        ("1080p", Regex::new(r"(?i)\b1080p\b").unwrap()),
        ("720p", Regex::new(r"(?i)\b720p\b").unwrap()),
        ("480p", Regex::new(r"(?i)\b480p\b").unwrap()),
    ]
});

/// File extensions considered playable video.
const VIDEO_EXTENSIONS: [&str; 19] = [
    "3g2", "3gp", "avi", "flv", "m2ts", "m4v", "mk3d", "mkv", "mov", "mp2", "mp4", "mpe", "mpeg",
    "mpg", "mpv", "ogm", "ts", "webm", "wmv",
];

/// Best quality label found in a free-text string, or empty.
pub fn grep_quality(s: &str) -> &'static str {
    for (name, re) in QUALITIES.iter() {
        if re.is_match(s) {
            return name;
        }
    }
    ""
}

/// Human-readable byte size: 5120.0 -> "5.00KB".
pub fn bytes(mut num: f64) -> String {
    for unit in ["", "K", "M"] {
        if num.abs() < 1024.0 {
            return format!("{num:.2}{unit}B");
        }
        num /= 1024.0;
    }
    format!("{num:.2}GB")
}

/// Compact season/episode label: [5, 10] -> "S5E10".
pub fn pretty_season_episode(season_episode: &[u32]) -> String {
    let joined: Vec<String> = season_episode.iter().map(|n| n.to_string()).collect();
    format!("S{}", joined.join("E"))
}

/// Whether a file name carries a playable video extension.
pub fn is_video(file: &str) -> bool {
    file.rsplit('.')
        .next()
        .map(|ext| {
            let ext = ext.to_lowercase();
            VIDEO_EXTENSIONS.iter().any(|v| *v == ext)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grep_quality_prefers_best() {
        assert_eq!(grep_quality("Friends 2160p and 720p pack"), "4K");
        assert_eq!(grep_quality("Friends.S01.720p.WEB-DL"), "720p");
        assert_eq!(grep_quality("Friends DVDRip"), "");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(bytes(512.0), "512.00B");
        assert_eq!(bytes(1024.0 * 5.0), "5.00KB");
        assert_eq!(bytes(1024.0 * 1024.0 * 5.0), "5.00MB");
        assert_eq!(bytes(1024.0 * 1024.0 * 1024.0 * 5.0), "5.00GB");
    }

    #[test]
    fn test_pretty_season_episode() {
        assert_eq!(pretty_season_episode(&[5, 10]), "S5E10");
        assert_eq!(pretty_season_episode(&[1]), "S1");
    }

    #[test]
    fn test_is_video() {
        assert!(is_video("Friends.S05E10.mkv"));
        assert!(is_video("movie.MP4"));
        assert!(!is_video("notes.txt"));
        assert!(!is_video("README"));
    }
}
