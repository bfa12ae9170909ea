use phf::phf_map;

/// The category a keyword belongs to, determining which element it populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Quality,
    VideoCodec,
    AudioCodec,
    Language,
    Hdr,
}

/// A recognized keyword with the canonical form it standardises to.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub kind: KeywordKind,
    pub canonical: &'static str,
}

const fn kw(kind: KeywordKind, canonical: &'static str) -> Keyword {
    Keyword { kind, canonical }
}

/// Compile-time keyword lookup table.
/// All keys are UPPERCASE for case-insensitive matching.
pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    // Source quality
    "BLURAY" => kw(KeywordKind::Quality, "BluRay"),
    "BLU-RAY" => kw(KeywordKind::Quality, "BluRay"),
    "BDRIP" => kw(KeywordKind::Quality, "BDRip"),
    "BRRIP" => kw(KeywordKind::Quality, "BRRip"),
    "BDREMUX" => kw(KeywordKind::Quality, "BluRay Remux"),
    "REMUX" => kw(KeywordKind::Quality, "Remux"),
    "WEB-DL" => kw(KeywordKind::Quality, "WEB-DL"),
    "WEBDL" => kw(KeywordKind::Quality, "WEB-DL"),
    "WEBRIP" => kw(KeywordKind::Quality, "WEBRip"),
    "WEB-RIP" => kw(KeywordKind::Quality, "WEBRip"),
    "WEB" => kw(KeywordKind::Quality, "WEB-DL"),
    "HDTV" => kw(KeywordKind::Quality, "HDTV"),
    "TVRIP" => kw(KeywordKind::Quality, "HDTV"),
    "DVDRIP" => kw(KeywordKind::Quality, "DVDRip"),
    "DVD" => kw(KeywordKind::Quality, "DVD"),
    "HDCAM" => kw(KeywordKind::Quality, "CAM"),
    "CAM" => kw(KeywordKind::Quality, "CAM"),
    "TELESYNC" => kw(KeywordKind::Quality, "TS"),

    // Video codecs
    "X264" => kw(KeywordKind::VideoCodec, "x264"),
    "H264" => kw(KeywordKind::VideoCodec, "x264"),
    "H.264" => kw(KeywordKind::VideoCodec, "x264"),
    "AVC" => kw(KeywordKind::VideoCodec, "x264"),
    "X265" => kw(KeywordKind::VideoCodec, "x265"),
    "H265" => kw(KeywordKind::VideoCodec, "x265"),
    "H.265" => kw(KeywordKind::VideoCodec, "x265"),
    "HEVC" => kw(KeywordKind::VideoCodec, "HEVC"),
    "AV1" => kw(KeywordKind::VideoCodec, "AV1"),
    "XVID" => kw(KeywordKind::VideoCodec, "XviD"),
    "DIVX" => kw(KeywordKind::VideoCodec, "DivX"),
    "VP9" => kw(KeywordKind::VideoCodec, "VP9"),

    // Audio codecs
    "AAC" => kw(KeywordKind::AudioCodec, "AAC"),
    "AC3" => kw(KeywordKind::AudioCodec, "Dolby Digital"),
    "DD" => kw(KeywordKind::AudioCodec, "Dolby Digital"),
    "DDP" => kw(KeywordKind::AudioCodec, "Dolby Digital Plus"),
    "EAC3" => kw(KeywordKind::AudioCodec, "Dolby Digital Plus"),
    "E-AC3" => kw(KeywordKind::AudioCodec, "Dolby Digital Plus"),
    "ATMOS" => kw(KeywordKind::AudioCodec, "Dolby Atmos"),
    "TRUEHD" => kw(KeywordKind::AudioCodec, "Dolby TrueHD"),
    "DTS" => kw(KeywordKind::AudioCodec, "DTS"),
    "DTS-HD" => kw(KeywordKind::AudioCodec, "DTS-HD"),
    "FLAC" => kw(KeywordKind::AudioCodec, "FLAC"),
    "OPUS" => kw(KeywordKind::AudioCodec, "Opus"),
    "MP3" => kw(KeywordKind::AudioCodec, "MP3"),

    // Languages
    "ENG" => kw(KeywordKind::Language, "English"),
    "ENGLISH" => kw(KeywordKind::Language, "English"),
    "ITA" => kw(KeywordKind::Language, "Italian"),
    "ITALIAN" => kw(KeywordKind::Language, "Italian"),
    "FRENCH" => kw(KeywordKind::Language, "French"),
    "GERMAN" => kw(KeywordKind::Language, "German"),
    "SPANISH" => kw(KeywordKind::Language, "Spanish"),
    "JPN" => kw(KeywordKind::Language, "Japanese"),
    "JAPANESE" => kw(KeywordKind::Language, "Japanese"),
    "KOREAN" => kw(KeywordKind::Language, "Korean"),
    "HINDI" => kw(KeywordKind::Language, "Hindi"),
    "MULTI" => kw(KeywordKind::Language, "Multi"),

    // HDR terms
    "HDR" => kw(KeywordKind::Hdr, "HDR"),
    "HDR10" => kw(KeywordKind::Hdr, "HDR10"),
    "HDR10+" => kw(KeywordKind::Hdr, "HDR10+"),
    "DOVI" => kw(KeywordKind::Hdr, "Dolby Vision"),
};

/// Look up a keyword (case-insensitive).
pub fn lookup(s: &str) -> Option<&'static Keyword> {
    KEYWORDS.get(s.to_uppercase().as_str())
}
