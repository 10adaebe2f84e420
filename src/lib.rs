//! Team drawing and live scoreboards for casual 5v5 matches.
//!
//! Players, matches and per-player stats live on a REST backend; this crate
//! picks ten players, splits them into two random teams (with League of
//! Legends lane roles if wanted), creates best-of-N series from one draw and
//! keeps each match's score and kill/death/assist counters until it is
//! finished.

mod api;
mod client;
mod draw;
mod error;
mod model;
mod selection;
pub mod workflow;

pub use client::{ScoreboardClient, DEFAULT_BASE_URL};
pub use draw::{draw, draw_teams};
pub use error::{Operation, Result, ScoreboardError};
pub use model::*;
pub use selection::{PlayerSelection, LINEUP_SIZE};
pub use workflow::{FinishOutcome, MatchSheet, NewMatchForm, PageState, SeriesReport, StatLine};
