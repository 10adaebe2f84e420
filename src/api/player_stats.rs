use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{NewPlayerStat, PlayerStat, StatUpdate};

#[instrument(skip(client))]
pub(crate) async fn create_player_stat(
    client: &reqwest::Client,
    base_url: &str,
    body: &NewPlayerStat,
) -> Result<()> {
    let url = format!("{base_url}/player-stats");
    api::post(client, &url, body).await
}

#[instrument(skip(client))]
pub(crate) async fn get_match_stats(
    client: &reqwest::Client,
    base_url: &str,
    match_id: u32,
) -> Result<Vec<PlayerStat>> {
    let url = format!("{base_url}/player-stats/match/{match_id}");
    let stats: Vec<PlayerStat> = api::get_json(client, &url).await?;
    debug!(count = stats.len(), match_id, "fetched stat rows");
    Ok(stats)
}

#[instrument(skip(client))]
pub(crate) async fn update_player_stat(
    client: &reqwest::Client,
    base_url: &str,
    stat_id: u32,
    body: &StatUpdate,
) -> Result<()> {
    let url = format!("{base_url}/player-stats/{stat_id}");
    api::put(client, &url, body).await
}
