pub mod calibration;
pub mod error;
pub mod human;
pub mod scoring;
pub mod torrent;

pub use error::MizuchiError;
pub use scoring::{rank, RejectReason, ScoreOutcome, REJECTED};
pub use torrent::{ScoredTorrent, SearchQuery, Torrent};
