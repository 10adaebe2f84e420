use serde::{Deserialize, Deserializer, Serialize};

/// The game a match is played in.
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
pub enum GameType {
    /// Counter-Strike.
    #[default]
    Cs,
    /// League of Legends. The only game with lane roles.
    Lol,
}

impl GameType {
    pub fn has_roles(self) -> bool {
        self == GameType::Lol
    }
}

/// A League of Legends lane role.
#[derive(
    Debug,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Top,
    Jg,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// Every role, once each.
    pub const ALL: [Role; 5] = [Role::Top, Role::Jg, Role::Mid, Role::Adc, Role::Support];
}

/// One of the two sides of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum TeamSide {
    A,
    B,
}

/// Best-of-N series format.
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
pub enum MatchFormat {
    #[default]
    Bo1,
    Bo3,
    Bo5,
}

impl MatchFormat {
    /// Number of match records created for this format.
    pub fn match_count(self) -> usize {
        match self {
            MatchFormat::Bo1 => 1,
            MatchFormat::Bo3 => 3,
            MatchFormat::Bo5 => 5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MatchFormat::Bo1 => "One match with drawn teams",
            MatchFormat::Bo3 => "3 matches with the same teams",
            MatchFormat::Bo5 => "5 matches with the same teams",
        }
    }
}

/// Reads a missing or `null` counter as zero.
pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use tracing::warn;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Parse an RFC 3339 or RFC 2822 timestamp, or a naive one taken as UTC.
    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let zoned =
            DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_rfc2822(raw));
        if let Ok(date) = zoned {
            return Some(date.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|date| date.and_utc())
    }

    /// Reads an optional timestamp. `null` and unrecognized formats become `None`.
    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let date = parse(&raw);
        if date.is_none() {
            warn!(%raw, "unrecognized timestamp");
        }
        Ok(date)
    }
}
