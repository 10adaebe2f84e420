use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::*;
use crate::workflow::{self, MatchSheet, SeriesReport};

/// Backend used when no base URL is given.
///
/// Set `SCOREBOARD_API_URL` at build time to point builds at another backend.
pub const DEFAULT_BASE_URL: &str = match option_env!("SCOREBOARD_API_URL") {
    Some(url) => url,
    None => "https://aplikacja5v5.onrender.com",
};

/// The main entry point for talking to the scoreboard backend.
///
/// `ScoreboardClient` wraps a [`reqwest::Client`] and the backend's base URL,
/// and exposes both the raw REST resources (players, matches, player stats)
/// and the match workflows built on top of them.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> scoreboard_client::Result<()> {
/// use scoreboard_client::{draw_teams, GameType, MatchFormat, ScoreboardClient};
///
/// let client = ScoreboardClient::new();
/// let roster = client.get_players().await?;
/// let lineup: [_; 10] = roster[..10].to_vec().try_into().unwrap();
/// let teams = draw_teams(lineup, GameType::Lol, true);
/// let series = client
///     .create_series(&teams, GameType::Lol, MatchFormat::Bo3)
///     .await?;
/// println!("Created matches {:?}", series.match_ids);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoreboardClient {
    /// Create a new client for [`DEFAULT_BASE_URL`] with default settings.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client for the backend at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full player roster.
    #[instrument(skip(self))]
    pub async fn get_players(&self) -> Result<Roster> {
        api::players::get_players(&self.http, &self.base_url).await
    }

    /// Create a new active match.
    #[instrument(skip(self))]
    pub async fn create_match(&self, game: GameType) -> Result<MatchRecord> {
        let body = NewMatch {
            game,
            status: MatchStatus::Active,
        };
        api::matches::create_match(&self.http, &self.base_url, &body).await
    }

    /// Fetch a single match by ID.
    #[instrument(skip(self))]
    pub async fn get_match(&self, match_id: u32) -> Result<MatchRecord> {
        api::matches::get_match(&self.http, &self.base_url, match_id).await
    }

    /// Overwrite a match's scores and status.
    #[instrument(skip(self))]
    pub async fn update_match(&self, match_id: u32, update: &MatchUpdate) -> Result<()> {
        api::matches::update_match(&self.http, &self.base_url, match_id, update).await
    }

    /// Create one stat row.
    #[instrument(skip(self))]
    pub async fn create_player_stat(&self, stat: &NewPlayerStat) -> Result<()> {
        api::player_stats::create_player_stat(&self.http, &self.base_url, stat).await
    }

    /// Fetch every stat row of a match.
    #[instrument(skip(self))]
    pub async fn get_match_stats(&self, match_id: u32) -> Result<Vec<PlayerStat>> {
        api::player_stats::get_match_stats(&self.http, &self.base_url, match_id).await
    }

    /// Overwrite a stat row's counters (and winner flag, if set).
    #[instrument(skip(self))]
    pub async fn update_player_stat(&self, stat_id: u32, update: &StatUpdate) -> Result<()> {
        api::player_stats::update_player_stat(&self.http, &self.base_url, stat_id, update).await
    }

    /// Create every match of a best-of-N series from one draw.
    ///
    /// See [`workflow::create_series`] for the partial-failure rules.
    #[instrument(skip(self, teams))]
    pub async fn create_series(
        &self,
        teams: &TeamAssignment,
        game: GameType,
        format: MatchFormat,
    ) -> Result<SeriesReport> {
        workflow::create_series(self, teams, game, format).await
    }

    /// Fetch a match with its stat rows joined to player names.
    #[instrument(skip(self))]
    pub async fn load_match(&self, match_id: u32) -> Result<MatchSheet> {
        workflow::load_match(self, match_id).await
    }
}

impl Default for ScoreboardClient {
    fn default() -> Self {
        Self::new()
    }
}
