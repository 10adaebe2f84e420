mod common;
mod match_record;
mod player;
mod player_stat;

pub use common::*;
pub use match_record::*;
pub use player::*;
pub use player_stat::*;
