use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{MatchRecord, MatchUpdate, NewMatch};

#[instrument(skip(client))]
pub(crate) async fn create_match(
    client: &reqwest::Client,
    base_url: &str,
    body: &NewMatch,
) -> Result<MatchRecord> {
    let url = format!("{base_url}/matches");
    let created: MatchRecord = api::post_json(client, &url, body).await?;
    debug!(id = created.id, "created match");
    Ok(created)
}

#[instrument(skip(client))]
pub(crate) async fn get_match(
    client: &reqwest::Client,
    base_url: &str,
    match_id: u32,
) -> Result<MatchRecord> {
    let url = format!("{base_url}/matches/{match_id}");
    api::get_json(client, &url).await
}

#[instrument(skip(client))]
pub(crate) async fn update_match(
    client: &reqwest::Client,
    base_url: &str,
    match_id: u32,
    body: &MatchUpdate,
) -> Result<()> {
    let url = format!("{base_url}/matches/{match_id}");
    api::put(client, &url, body).await
}
