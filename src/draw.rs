use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::model::{DraftedPlayer, GameType, Player, Role, TeamAssignment};

/// Randomly split ten players into two teams of five.
///
/// The players are Fisher-Yates shuffled; team A takes the first five and
/// team B the last five. For League of Legends with `auto_roles` set, each
/// team gets its own independently shuffled permutation of the five roles.
/// Otherwise nobody carries a role.
///
/// Every call is independent: drawing again with the same players gives a
/// new random split.
pub fn draw<R>(
    mut players: [Player; 10],
    game: GameType,
    auto_roles: bool,
    rng: &mut R,
) -> TeamAssignment
where
    R: Rng + ?Sized,
{
    players.shuffle(rng);
    let [a0, a1, a2, a3, a4, b0, b1, b2, b3, b4] = players;

    let with_roles = game.has_roles() && auto_roles;
    let team_a = assign_roles([a0, a1, a2, a3, a4], with_roles, rng);
    let team_b = assign_roles([b0, b1, b2, b3, b4], with_roles, rng);
    debug!(%game, with_roles, "drew teams");

    TeamAssignment::new(team_a, team_b)
}

/// [`draw`] using the thread-local generator.
pub fn draw_teams(players: [Player; 10], game: GameType, auto_roles: bool) -> TeamAssignment {
    draw(players, game, auto_roles, &mut rand::thread_rng())
}

fn assign_roles<R>(team: [Player; 5], with_roles: bool, rng: &mut R) -> [DraftedPlayer; 5]
where
    R: Rng + ?Sized,
{
    let roles = with_roles.then(|| {
        let mut roles = Role::ALL;
        roles.shuffle(rng);
        roles
    });

    let mut roles = roles.into_iter().flatten();
    team.map(|player| DraftedPlayer {
        player,
        role: roles.next(),
    })
}
