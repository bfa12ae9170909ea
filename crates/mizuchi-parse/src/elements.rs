use serde::{Deserialize, Serialize};

/// Parsed elements extracted from a torrent release title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elements {
    /// The release/show title: free text preceding the first metadata token.
    pub title: String,
    /// Season numbers the release claims. A range like `S01-S10` expands to
    /// the full inclusive sequence; empty means not season-specific.
    pub seasons: Vec<u32>,
    /// Episode numbers the release claims; empty means not episode-specific.
    pub episodes: Vec<u32>,
    /// Video resolution in canonical form ("720p", "1080p", "2160p", "4K").
    pub resolution: String,
    /// Source quality (e.g., "BluRay", "WEB-DL", "HDTV").
    pub quality: String,
    /// Video codec (e.g., "x264", "HEVC").
    pub codec: String,
    /// Audio description, codec and/or channel layout (e.g., "DTS 7.1").
    pub audio: String,
    /// Container extension when the title ends in one (e.g., "mkv").
    pub filetype: String,
    /// Release group from a trailing `-GROUP` suffix.
    pub encoder: String,
    /// Declared languages.
    pub language: Vec<String>,
    /// Video bit depth.
    pub bit_depth: u32,
    /// Whether an HDR term was present.
    pub hdr: bool,
    /// Release year; 0 when absent.
    pub year: u32,
}

impl Default for Elements {
    fn default() -> Self {
        Self {
            title: String::new(),
            seasons: Vec::new(),
            episodes: Vec::new(),
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_roundtrip() {
        let e = Elements {
            title: "Friends".to_string(),
            seasons: vec![1, 2, 3],
            resolution: "1080p".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&e).unwrap();
        let back: Elements = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Friends");
        assert_eq!(back.seasons, vec![1, 2, 3]);
        assert_eq!(back.language, vec!["English"]);
        assert_eq!(back.bit_depth, 8);
    }
}
