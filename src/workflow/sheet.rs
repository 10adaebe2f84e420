use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, info};

use crate::client::ScoreboardClient;
use crate::error::{Result, ScoreboardError};
use crate::model::{MatchRecord, MatchStatus, MatchUpdate, Player, PlayerStat, StatField, TeamSide};

/// Display name for a stat row whose player is not in the roster.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// A stat row with its player's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub stat: PlayerStat,
    pub player_name: String,
}

/// Result of [`MatchSheet::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The confirmation was declined; nothing was sent.
    Cancelled,
    /// The match is finished. `winner` is `None` on a tie.
    Finished { winner: Option<TeamSide> },
}

/// The editable scoreboard of one match.
///
/// Score and stat edits stay in memory until [`save`](Self::save) or
/// [`finish`](Self::finish). Once the match is finished every edit is ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSheet {
    record: MatchRecord,
    score_a: u32,
    score_b: u32,
    lines: Vec<StatLine>,
}

/// Fetch the match, its stat rows and the roster, and join names onto the rows.
pub async fn load_match(client: &ScoreboardClient, match_id: u32) -> Result<MatchSheet> {
    let record = client.get_match(match_id).await?;
    let stats = client.get_match_stats(match_id).await?;
    let roster = client.get_players().await?;
    Ok(MatchSheet::new(record, stats, &roster))
}

fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

impl MatchSheet {
    pub fn new(record: MatchRecord, stats: Vec<PlayerStat>, roster: &[Player]) -> Self {
        let names: HashMap<u32, &str> = roster.iter().map(|p| (p.id, p.name.as_str())).collect();
        let lines = stats
            .into_iter()
            .map(|stat| StatLine {
                player_name: names
                    .get(&stat.player_id)
                    .copied()
                    .unwrap_or(UNKNOWN_PLAYER)
                    .to_owned(),
                stat,
            })
            .collect_vec();

        Self {
            score_a: record.score_a,
            score_b: record.score_b,
            record,
            lines,
        }
    }

    pub fn record(&self) -> &MatchRecord {
        &self.record
    }

    pub fn lines(&self) -> &[StatLine] {
        &self.lines
    }

    /// Rows of one team, in backend order.
    pub fn team(&self, side: TeamSide) -> impl Iterator<Item = &StatLine> {
        self.lines.iter().filter(move |l| l.stat.team == side)
    }

    pub fn score(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::A => self.score_a,
            TeamSide::B => self.score_b,
        }
    }

    pub fn is_editable(&self) -> bool {
        !self.record.is_finished()
    }

    /// Set a team's score, clamped to zero. Returns whether anything changed.
    pub fn set_score(&mut self, side: TeamSide, value: i64) -> bool {
        if !self.is_editable() {
            debug!(id = self.record.id, "ignoring score edit on finished match");
            return false;
        }
        let value = clamp_count(value);
        match side {
            TeamSide::A => self.score_a = value,
            TeamSide::B => self.score_b = value,
        }
        true
    }

    /// Set one counter of a player's row, clamped to zero.
    ///
    /// Returns whether a row was edited.
    pub fn edit_stat(&mut self, player_id: u32, field: StatField, value: i64) -> bool {
        if !self.is_editable() {
            debug!(id = self.record.id, "ignoring stat edit on finished match");
            return false;
        }
        let value = clamp_count(value);
        let mut edited = false;
        for line in self.lines.iter_mut().filter(|l| l.stat.player_id == player_id) {
            line.stat.set(field, value);
            edited = true;
        }
        edited
    }

    /// The side with the higher score, or `None` on a tie.
    pub fn winner(&self) -> Option<TeamSide> {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Some(TeamSide::A),
            std::cmp::Ordering::Less => Some(TeamSide::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Persist the scores (keeping the match active) and every row's counters.
    ///
    /// Rows are written one at a time, in order. The first failed request is
    /// returned; writes before it stay applied.
    pub async fn save(&mut self, client: &ScoreboardClient) -> Result<()> {
        self.ensure_editable()?;
        self.persist(client, MatchStatus::Active).await?;
        self.record.score_a = self.score_a;
        self.record.score_b = self.score_b;
        info!(id = self.record.id, "saved match");
        Ok(())
    }

    /// Finish the match once `confirm` agrees.
    ///
    /// Writes the final scores with status FINISHED, then every row's counters
    /// with `winner` set when the row's team won. A tie leaves every row with
    /// `winner = false`. The sheet only turns read-only after every write
    /// succeeded.
    pub async fn finish<F>(
        &mut self,
        client: &ScoreboardClient,
        confirm: F,
    ) -> Result<FinishOutcome>
    where
        F: FnOnce(&MatchSheet) -> bool,
    {
        self.ensure_editable()?;
        if !confirm(self) {
            return Ok(FinishOutcome::Cancelled);
        }

        let winner = self.winner();
        self.persist(client, MatchStatus::Finished).await?;

        self.record.score_a = self.score_a;
        self.record.score_b = self.score_b;
        self.record.status = MatchStatus::Finished;
        for line in &mut self.lines {
            line.stat.winner = Some(winner == Some(line.stat.team));
        }
        info!(id = self.record.id, ?winner, "finished match");
        Ok(FinishOutcome::Finished { winner })
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(ScoreboardError::MatchFinished {
                match_id: self.record.id,
            })
        }
    }

    async fn persist(&self, client: &ScoreboardClient, status: MatchStatus) -> Result<()> {
        let update = MatchUpdate {
            score_a: self.score_a,
            score_b: self.score_b,
            status,
        };
        client.update_match(self.record.id, &update).await?;

        let winner = self.winner();
        for line in &self.lines {
            let flag = (status == MatchStatus::Finished).then(|| winner == Some(line.stat.team));
            client
                .update_player_stat(line.stat.id, &line.stat.to_update(flag))
                .await?;
        }
        Ok(())
    }
}
