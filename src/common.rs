//! Common types: shot outcomes and engine errors.

use alloc::string::String;

use crate::coord::CoordError;
use crate::game::PlayerId;

/// Outcome of a resolved shot, in the wire vocabulary of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Agua,
    /// Shot struck a ship segment without sinking it.
    Acertou,
    /// Shot sank the ship it struck.
    Afundou,
}

impl core::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotOutcome::Agua => write!(f, "agua"),
            ShotOutcome::Acertou => write!(f, "acertou"),
            ShotOutcome::Afundou => write!(f, "afundou"),
        }
    }
}

/// Errors returned by game operations. Every failure is a normal, expected
/// outcome of caller misuse or game rules; none mutates state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Display coordinate failed to parse.
    Coord(CoordError),
    /// Shot target lies outside the grid.
    OutOfBounds { row: u8, col: u8 },
    /// Game is not in progress (still positioning, or finished).
    NotInProgress,
    /// Shot attempted by the player not holding the turn.
    NotYourTurn { current: PlayerId },
    /// Target cell was already shot.
    AlreadyShot { coord: String },
    /// Fleet registration attempted on a finished game.
    GameFinished,
    /// A ship occupied the cell but carried no health entry.
    UnknownShipHit,
}

impl From<CoordError> for GameError {
    fn from(err: CoordError) -> Self {
        GameError::Coord(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Coord(e) => write!(f, "Coordinate error: {}", e),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::NotInProgress => write!(f, "Game is not in progress"),
            GameError::NotYourTurn { current } => {
                write!(f, "Not your turn. Current turn: {}", current)
            }
            GameError::AlreadyShot { coord } => {
                write!(f, "Cell {} was already shot", coord)
            }
            GameError::GameFinished => write!(f, "Game is already finished"),
            GameError::UnknownShipHit => write!(f, "Hit a ship with no health entry"),
        }
    }
}
