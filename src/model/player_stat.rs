use serde::{Deserialize, Serialize};

use super::common::{null_as_zero, Role, TeamSide};

/// A per-player, per-match stat row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub id: u32,
    pub player_id: u32,
    pub match_id: u32,
    pub team: TeamSide,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub kills: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub deaths: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub assists: u32,
    /// Only stamped when the match is finished.
    #[serde(default)]
    pub winner: Option<bool>,
}

/// An editable stat column.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum StatField {
    Kills,
    Deaths,
    Assists,
}

impl PlayerStat {
    pub fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Kills => self.kills,
            StatField::Deaths => self.deaths,
            StatField::Assists => self.assists,
        }
    }

    pub(crate) fn set(&mut self, field: StatField, value: u32) {
        match field {
            StatField::Kills => self.kills = value,
            StatField::Deaths => self.deaths = value,
            StatField::Assists => self.assists = value,
        }
    }

    /// The update body carrying this row's counters, plus a winner flag when finishing.
    pub(crate) fn to_update(&self, winner: Option<bool>) -> StatUpdate {
        StatUpdate {
            kills: self.kills,
            deaths: self.deaths,
            assists: self.assists,
            winner,
        }
    }
}

/// Body of `POST /player-stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayerStat {
    pub player_id: u32,
    pub match_id: u32,
    pub team: TeamSide,
    pub role: Option<Role>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

/// Body of `PUT /player-stats/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatUpdate {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<bool>,
}
