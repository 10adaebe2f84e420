pub(crate) mod matches;
pub(crate) mod player_stats;
pub(crate) mod players;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ScoreboardError};

/// Send a prepared request and reject any non-success status.
async fn send(request: RequestBuilder, url: &str) -> Result<Response> {
    let response = request.send().await.map_err(|e| ScoreboardError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScoreboardError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ScoreboardError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
}

/// Fetch a URL and decode the JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "GET");
    let response = send(client.get(url), url).await?;
    read_json(response, url).await
}

/// POST a JSON body and decode the created resource.
pub(crate) async fn post_json<B, T>(client: &reqwest::Client, url: &str, body: &B) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    debug!(url, "POST");
    let response = send(client.post(url).json(body), url).await?;
    read_json(response, url).await
}

/// POST a JSON body; only the status is checked.
pub(crate) async fn post<B: Serialize + ?Sized>(
    client: &reqwest::Client,
    url: &str,
    body: &B,
) -> Result<()> {
    debug!(url, "POST");
    send(client.post(url).json(body), url).await?;
    Ok(())
}

/// PUT a JSON body; only the status is checked.
pub(crate) async fn put<B: Serialize + ?Sized>(
    client: &reqwest::Client,
    url: &str,
    body: &B,
) -> Result<()> {
    debug!(url, "PUT");
    send(client.put(url).json(body), url).await?;
    Ok(())
}
