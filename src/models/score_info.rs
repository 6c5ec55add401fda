//! Score metadata (title block)

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ScoreInfo {
    pub title: String,
    pub subtitle: String,
    pub artist: String,
    pub album: String,
    pub lyricist: String,
    pub composer: String,
    pub copyright: String,
    pub transcriber: String,
    pub notes: String,
}
