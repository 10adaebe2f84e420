//! Match workflows: creating a series from a draw, and keeping the
//! scoreboard of a single match until it is finished.

mod new_match;
mod page;
mod series;
mod sheet;

pub use new_match::NewMatchForm;
pub use page::PageState;
pub use series::{create_series, stat_rows, SeriesReport};
pub use sheet::{load_match, FinishOutcome, MatchSheet, StatLine, UNKNOWN_PLAYER};
