use serde::{Deserialize, Serialize};

use super::common::{Role, TeamSide};

/// The full roster as returned by the backend.
pub type Roster = Vec<Player>;

/// A known player. Owned by the backend; read-only here.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
}

/// A player placed on a team by a draw, with an optional lane role.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DraftedPlayer {
    pub player: Player,
    pub role: Option<Role>,
}

/// Two disjoint five-player teams drawn from ten selected players.
///
/// Only the draw engine builds these, so both teams always hold exactly five
/// players and together hold the ten players the draw was given.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TeamAssignment {
    team_a: [DraftedPlayer; 5],
    team_b: [DraftedPlayer; 5],
}

impl TeamAssignment {
    pub(crate) fn new(team_a: [DraftedPlayer; 5], team_b: [DraftedPlayer; 5]) -> Self {
        Self { team_a, team_b }
    }

    pub fn team(&self, side: TeamSide) -> &[DraftedPlayer; 5] {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    /// Every drafted player with their side, team A first.
    pub fn entries(&self) -> impl Iterator<Item = (TeamSide, &DraftedPlayer)> {
        self.team_a
            .iter()
            .map(|p| (TeamSide::A, p))
            .chain(self.team_b.iter().map(|p| (TeamSide::B, p)))
    }
}
