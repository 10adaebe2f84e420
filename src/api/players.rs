use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::Roster;

#[instrument(skip(client))]
pub(crate) async fn get_players(client: &reqwest::Client, base_url: &str) -> Result<Roster> {
    let url = format!("{base_url}/players");
    let players: Roster = api::get_json(client, &url).await?;
    debug!(count = players.len(), "fetched roster");
    Ok(players)
}
