use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::client::ScoreboardClient;
use crate::error::{Result, ScoreboardError};
use crate::model::{GameType, MatchFormat, NewPlayerStat, TeamAssignment};

/// Outcome of a series creation that did not abort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesReport {
    /// Created match ids, in creation order.
    pub match_ids: Vec<u32>,
    /// Stat rows whose creation failed, across all matches.
    pub failed_stats: usize,
}

/// Create `format.match_count()` matches, each with one zeroed stat row per
/// drafted player, all from the same `teams`.
///
/// Matches are created one after another. The ten stat rows of a match are
/// created concurrently and all awaited before the next match starts.
///
/// A failed stat row is counted in [`SeriesReport::failed_stats`] and does not
/// stop the series. A failed match creation stops the series with
/// [`ScoreboardError::SeriesAborted`]; matches created before it are kept.
pub async fn create_series(
    client: &ScoreboardClient,
    teams: &TeamAssignment,
    game: GameType,
    format: MatchFormat,
) -> Result<SeriesReport> {
    let count = format.match_count();
    let mut report = SeriesReport::default();

    for number in 1..=count {
        let created = match client.create_match(game).await {
            Ok(created) => created,
            Err(e) => {
                warn!(number, count, error = %e, "match creation failed, aborting series");
                return Err(ScoreboardError::SeriesAborted {
                    created: report.match_ids,
                    source: Box::new(e),
                });
            }
        };
        info!(id = created.id, number, count, "created match");

        report.failed_stats += create_stat_rows(client, teams, game, created.id).await;
        report.match_ids.push(created.id);
    }

    info!(
        matches = report.match_ids.len(),
        failed_stats = report.failed_stats,
        "series created"
    );
    Ok(report)
}

/// The zeroed stat rows for one match. Roles are only sent for League of Legends.
pub fn stat_rows(teams: &TeamAssignment, game: GameType, match_id: u32) -> Vec<NewPlayerStat> {
    teams
        .entries()
        .map(|(team, drafted)| NewPlayerStat {
            player_id: drafted.player.id,
            match_id,
            team,
            role: if game.has_roles() { drafted.role } else { None },
            kills: 0,
            deaths: 0,
            assists: 0,
        })
        .collect()
}

/// Returns the number of rows that failed.
async fn create_stat_rows(
    client: &ScoreboardClient,
    teams: &TeamAssignment,
    game: GameType,
    match_id: u32,
) -> usize {
    let rows = stat_rows(teams, game, match_id);
    let results = join_all(rows.iter().map(|row| client.create_player_stat(row))).await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!(failed, match_id, "some stat rows were not created");
    }
    failed
}
