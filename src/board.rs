//! Read-only board projections: the attack view (what a shooter sees of the
//! enemy) and the defense view (what an owner sees of their own fleet).

use crate::common::ShotOutcome;
use crate::config::GRID_SIZE;
use crate::game::{Game, PlayerId};

/// Cell marker on a player's own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum DefenseCell {
    /// Intact ship segment.
    Ship,
    /// Struck segment of a still-floating ship.
    Hit,
    /// Segment of a fully sunk ship.
    Sunk,
    /// Incoming shot that found open water.
    Miss,
}

/// What a player sees of the opponent: shot outcomes only.
pub type AttackBoard = [[Option<ShotOutcome>; GRID_SIZE as usize]; GRID_SIZE as usize];
/// What a player sees of their own grid: ships plus incoming shots.
pub type DefenseBoard = [[Option<DefenseCell>; GRID_SIZE as usize]; GRID_SIZE as usize];

impl Game {
    /// Project the opponent's `shots_received` onto a grid. A pure
    /// re-projection of recorded outcomes; `None` means unshot.
    pub fn attack_board(&self, player: PlayerId) -> AttackBoard {
        let mut grid: AttackBoard = [[None; GRID_SIZE as usize]; GRID_SIZE as usize];
        for (&(r, c), &outcome) in &self.player(player.opponent()).shots_received {
            if r < GRID_SIZE && c < GRID_SIZE {
                grid[r as usize][c as usize] = Some(outcome);
            }
        }
        grid
    }

    /// Project the player's own fleet and incoming shots. Sunk status takes
    /// priority over per-cell hits for the whole ship; misses are overlaid
    /// last and by definition only mark open water.
    pub fn defense_board(&self, player: PlayerId) -> DefenseBoard {
        let state = self.player(player);
        let mut grid: DefenseBoard = [[None; GRID_SIZE as usize]; GRID_SIZE as usize];

        for ship in &state.fleet {
            let health = state.ship_health.get(&ship.instance_id);
            for &(r, c) in &ship.cells {
                if r >= GRID_SIZE || c >= GRID_SIZE {
                    continue;
                }
                let mark = match health {
                    Some(h) if h.sunk => DefenseCell::Sunk,
                    Some(h) if h.hit_cells.contains(&(r, c)) => DefenseCell::Hit,
                    _ => DefenseCell::Ship,
                };
                grid[r as usize][c as usize] = Some(mark);
            }
        }

        for (&(r, c), &outcome) in &state.shots_received {
            if outcome == ShotOutcome::Agua && r < GRID_SIZE && c < GRID_SIZE {
                grid[r as usize][c as usize] = Some(DefenseCell::Miss);
            }
        }
        grid
    }
}
