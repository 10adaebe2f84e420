use crate::model::Player;

/// Number of players in a draw.
pub const LINEUP_SIZE: usize = 10;

/// The set of player ids picked for the next draw, capped at ten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSelection {
    ids: Vec<u32>,
}

impl PlayerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a player.
    ///
    /// Deselects a selected player, otherwise appends it unless ten are
    /// already selected. Returns whether the selection changed.
    pub fn toggle(&mut self, player_id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&id| id == player_id) {
            self.ids.remove(pos);
            return true;
        }
        if self.ids.len() >= LINEUP_SIZE {
            return false;
        }
        self.ids.push(player_id);
        true
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.ids.contains(&player_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.ids.len() == LINEUP_SIZE
    }

    /// Selected ids in the order they were picked.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// The ten selected players, in roster order.
    ///
    /// `None` until ten are selected, or if a selected id is not in `roster`.
    pub fn lineup(&self, roster: &[Player]) -> Option<[Player; LINEUP_SIZE]> {
        if !self.is_complete() {
            return None;
        }
        let players: Vec<Player> = roster
            .iter()
            .filter(|p| self.contains(p.id))
            .cloned()
            .collect();
        players.try_into().ok()
    }
}
