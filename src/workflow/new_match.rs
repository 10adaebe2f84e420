use rand::Rng;
use tracing::debug;

use crate::client::ScoreboardClient;
use crate::draw::draw;
use crate::error::{Result, ScoreboardError};
use crate::model::{GameType, MatchFormat, Player, TeamAssignment};
use crate::selection::PlayerSelection;
use crate::workflow::series::{create_series, SeriesReport};

/// State of the match creation page.
#[derive(Debug, Clone)]
pub struct NewMatchForm {
    pub game: GameType,
    pub format: MatchFormat,
    /// Hand out League of Legends roles when drawing.
    pub auto_roles: bool,
    selection: PlayerSelection,
    teams: Option<TeamAssignment>,
}

impl Default for NewMatchForm {
    fn default() -> Self {
        Self {
            game: GameType::default(),
            format: MatchFormat::default(),
            auto_roles: true,
            selection: PlayerSelection::new(),
            teams: None,
        }
    }
}

impl NewMatchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &PlayerSelection {
        &self.selection
    }

    pub fn toggle_player(&mut self, player_id: u32) -> bool {
        self.selection.toggle(player_id)
    }

    /// Drawing is offered only once ten players are selected.
    pub fn can_draw(&self) -> bool {
        self.selection.is_complete()
    }

    /// Draw teams from the selected players, replacing any earlier draw.
    ///
    /// Returns `None` (and keeps the earlier draw) when the selection does not
    /// resolve to ten roster players.
    pub fn draw<R>(&mut self, roster: &[Player], rng: &mut R) -> Option<&TeamAssignment>
    where
        R: Rng + ?Sized,
    {
        let lineup = self.selection.lineup(roster)?;
        let teams = draw(lineup, self.game, self.auto_roles, rng);
        debug!(game = %self.game, "replaced drawn teams");
        Some(self.teams.insert(teams))
    }

    pub fn teams(&self) -> Option<&TeamAssignment> {
        self.teams.as_ref()
    }

    /// Create the series for the current draw, game and format.
    pub async fn submit(&self, client: &ScoreboardClient) -> Result<SeriesReport> {
        let teams = self.teams.as_ref().ok_or(ScoreboardError::TeamsNotDrawn)?;
        create_series(client, teams, self.game, self.format).await
    }
}
