use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_zero, timestamp, GameType};

/// Lifecycle of a match. `Finished` is terminal.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MatchStatus {
    #[default]
    Active,
    Finished,
}

/// A match record as stored by the backend.
///
/// The score fields keep the backend's `Ascore`/`Bscore` names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u32,
    pub game: GameType,
    pub status: MatchStatus,
    #[serde(rename = "Ascore", default, deserialize_with = "null_as_zero")]
    pub score_a: u32,
    #[serde(rename = "Bscore", default, deserialize_with = "null_as_zero")]
    pub score_b: u32,
    /// `None` when the backend sends no usable timestamp.
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl MatchRecord {
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }
}

/// Body of `POST /matches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub game: GameType,
    pub status: MatchStatus,
}

/// Body of `PUT /matches/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchUpdate {
    #[serde(rename = "Ascore")]
    pub score_a: u32,
    #[serde(rename = "Bscore")]
    pub score_b: u32,
    pub status: MatchStatus,
}
