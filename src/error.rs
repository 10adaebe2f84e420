use tracing::warn;

/// All errors that can occur while talking to the scoreboard backend.
#[derive(thiserror::Error, Debug)]
pub enum ScoreboardError {
    /// HTTP request failed (network, DNS, TLS, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Creating a match failed part way through a series.
    ///
    /// Matches listed in `created` already exist on the backend and are left in place.
    #[error("series aborted after {} created match(es): {source}", .created.len())]
    SeriesAborted {
        created: Vec<u32>,
        source: Box<ScoreboardError>,
    },

    /// The match is already finished and can no longer be edited.
    #[error("match {match_id} is already finished")]
    MatchFinished { match_id: u32 },

    /// A series was requested before any teams were drawn.
    #[error("teams have not been drawn")]
    TeamsNotDrawn,
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;

/// A user-facing operation. Every failure of an operation is reported with the
/// same generic message, whatever went wrong underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Operation {
    #[strum(serialize = "Failed to fetch players")]
    LoadRoster,
    #[strum(serialize = "Could not create the match. Please try again.")]
    CreateSeries,
    #[strum(serialize = "Failed to load the match")]
    LoadMatch,
    #[strum(serialize = "Failed to save changes")]
    Save,
    #[strum(serialize = "Failed to finish the match")]
    Finish,
}

impl Operation {
    /// The message shown to the user when this operation fails.
    pub fn failure_message(self) -> String {
        self.to_string()
    }

    /// Inline message for an action that leaves its page usable, such as
    /// saving or finishing a match. `None` when the action succeeded.
    pub fn message_for<T>(self, result: &Result<T>) -> Option<String> {
        let err = result.as_ref().err()?;
        warn!(operation = %self, error = %err, "operation failed");
        Some(self.failure_message())
    }
}
