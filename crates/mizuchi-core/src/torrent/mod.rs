pub mod models;

pub use models::{ScoredTorrent, SearchQuery, Torrent};
