//! Game aggregate: fleet registration, shot resolution and the turn/salvo
//! state machine.
//!
//! The engine is synchronous and pure-state: every operation either fully
//! applies or fully rejects, and everything it knows survives a
//! serialize/deserialize round-trip. Callers own the load → apply → persist
//! cycle and must serialize it per match id.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};

use crate::common::{GameError, ShotOutcome};
use crate::config::{GRID_SIZE, SALVA_SHOTS};
use crate::coord::{format_coord, parse_coord};
use crate::ship::{Ship, ShipHealth};

/// One of the two players of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Player1 => write!(f, "player1"),
            PlayerId::Player2 => write!(f, "player2"),
        }
    }
}

/// Lifecycle of a match: created once, never reused after finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    Positioning,
    InProgress,
    Finished,
}

/// Turn/salvo sub-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TurnState {
    AwaitingShot,
    InSalva,
    GameOver,
}

/// Per-player state: fleet, shots received on the own grid, ship health.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub fleet: Vec<Ship>,
    /// Cell → outcome of the shot that landed there. A cell, once shot, is
    /// permanently recorded and cannot be re-shot.
    pub shots_received: BTreeMap<(u8, u8), ShotOutcome>,
    pub ship_health: BTreeMap<String, ShipHealth>,
}

/// Append-only log entry; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: PlayerId,
    pub target: PlayerId,
    pub row: u8,
    pub col: u8,
    /// Display form, e.g. `"A5"`.
    pub coord: String,
    pub result: ShotOutcome,
    pub ship_name: Option<String>,
    pub is_sunk: bool,
    /// 1-based sequence number.
    pub turn: u32,
}

/// Result payload of a successful shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub result: ShotOutcome,
    pub ship_name: Option<String>,
    pub is_sunk: bool,
    pub salva_remaining: u8,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    pub current_turn: Option<PlayerId>,
    pub turn_state: TurnState,
}

/// Per-ship summary row of [`Game::fleet_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipStatus {
    pub instance_id: String,
    pub name: String,
    /// Undamaged segments left.
    pub health: usize,
    pub total: usize,
    pub sunk: bool,
}

/// Fleet summary for one player ("N of 15 remaining").
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetStatus {
    pub ships: Vec<ShipStatus>,
    pub total_ships: usize,
    pub sunk_ships: usize,
    pub remaining: usize,
}

/// The whole match state. Serializing this value captures everything the
/// engine knows; two games restored from equal values behave identically.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    id: String,
    status: GameStatus,
    players: [PlayerState; 2],
    current_turn: PlayerId,
    turn_state: TurnState,
    salva_remaining: u8,
    winner: Option<PlayerId>,
    shot_log: Vec<ShotRecord>,
}

impl Game {
    /// Create a game in the positioning phase with empty fleets.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: GameStatus::Positioning,
            players: [PlayerState::default(), PlayerState::default()],
            current_turn: PlayerId::Player1,
            turn_state: TurnState::AwaitingShot,
            salva_remaining: 0,
            winner: None,
            shot_log: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn salva_remaining(&self) -> u8 {
        self.salva_remaining
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn shot_log(&self) -> &[ShotRecord] {
        &self.shot_log
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// Register a player's fleet.
    ///
    /// Cells are stored as given, as a defensive copy; geometric validation
    /// is the placement subsystem's contract and is not repeated here. When
    /// both fleets are non-empty the match starts.
    pub fn set_fleet(&mut self, player: PlayerId, ships: &[Ship]) -> Result<(), GameError> {
        if self.status == GameStatus::Finished {
            return Err(GameError::GameFinished);
        }

        let state = &mut self.players[player.index()];
        state.fleet = ships.to_vec();
        state.ship_health = ships
            .iter()
            .map(|s| (s.instance_id.clone(), ShipHealth::new(s.cells.len())))
            .collect();
        debug!("game {}: {} registered {} ships", self.id, player, ships.len());

        if !self.players[0].fleet.is_empty() && !self.players[1].fleet.is_empty() {
            self.status = GameStatus::InProgress;
            info!("game {}: both fleets registered, match started", self.id);
        }
        Ok(())
    }

    fn find_ship_at(&self, target: PlayerId, row: u8, col: u8) -> Option<&Ship> {
        self.players[target.index()]
            .fleet
            .iter()
            .find(|s| s.contains(row, col))
    }

    fn all_ships_sunk(&self, target: PlayerId) -> bool {
        self.players[target.index()]
            .ship_health
            .values()
            .all(|h| h.sunk)
    }

    /// Resolve one shot by `player` at the opponent's `(row, col)`.
    ///
    /// Precondition failures return distinct errors and leave the game
    /// untouched. A terminal shot finishes the game immediately and reports
    /// `salva_remaining = 0`; otherwise the turn/salvo machine advances:
    /// a first hit opens a volley of [`SALVA_SHOTS`] bonus shots, every
    /// volley shot consumes one regardless of outcome, and a plain miss
    /// passes the turn.
    pub fn process_shot(
        &mut self,
        player: PlayerId,
        row: u8,
        col: u8,
    ) -> Result<ShotReport, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        if player != self.current_turn {
            return Err(GameError::NotYourTurn {
                current: self.current_turn,
            });
        }
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        let target = player.opponent();
        if self.players[target.index()].shots_received.contains_key(&(row, col)) {
            return Err(GameError::AlreadyShot {
                coord: format_coord(row, col),
            });
        }

        // All fallible lookups happen before the first write so a failing
        // call leaves the game untouched.
        let struck = self
            .find_ship_at(target, row, col)
            .map(|s| (s.instance_id.clone(), s.name.clone()));
        let (result, ship_name, is_sunk) = match struck {
            None => {
                self.players[target.index()]
                    .shots_received
                    .insert((row, col), ShotOutcome::Agua);
                (ShotOutcome::Agua, None, false)
            }
            Some((instance_id, name)) => {
                let health = self.players[target.index()]
                    .ship_health
                    .get_mut(&instance_id)
                    .ok_or(GameError::UnknownShipHit)?;
                let sank = health.register_hit((row, col));
                let outcome = if sank {
                    ShotOutcome::Afundou
                } else {
                    ShotOutcome::Acertou
                };
                self.players[target.index()]
                    .shots_received
                    .insert((row, col), outcome);
                (outcome, Some(name), sank)
            }
        };

        let coord = format_coord(row, col);
        debug!("game {}: {} fired at {} -> {}", self.id, player, coord, result);
        let turn = self.shot_log.len() as u32 + 1;
        self.shot_log.push(ShotRecord {
            shooter: player,
            target,
            row,
            col,
            coord,
            result,
            ship_name: ship_name.clone(),
            is_sunk,
            turn,
        });

        if is_sunk && self.all_ships_sunk(target) {
            self.status = GameStatus::Finished;
            self.winner = Some(player);
            self.turn_state = TurnState::GameOver;
            self.salva_remaining = 0;
            info!("game {}: {} wins", self.id, player);
            return Ok(ShotReport {
                result,
                ship_name,
                is_sunk,
                salva_remaining: 0,
                game_over: true,
                winner: Some(player),
                current_turn: None,
                turn_state: TurnState::GameOver,
            });
        }

        match self.turn_state {
            TurnState::AwaitingShot if result != ShotOutcome::Agua => {
                // first hit of the turn opens a volley of three bonus shots
                self.turn_state = TurnState::InSalva;
                self.salva_remaining = SALVA_SHOTS;
            }
            TurnState::InSalva => {
                // every volley shot consumes one, hit or miss
                self.salva_remaining = self.salva_remaining.saturating_sub(1);
                if self.salva_remaining == 0 {
                    self.current_turn = target;
                    self.turn_state = TurnState::AwaitingShot;
                }
            }
            TurnState::AwaitingShot => {
                // plain miss passes the turn immediately
                self.current_turn = target;
                self.salva_remaining = 0;
            }
            TurnState::GameOver => {}
        }

        Ok(ShotReport {
            result,
            ship_name,
            is_sunk,
            salva_remaining: self.salva_remaining,
            game_over: false,
            winner: None,
            current_turn: Some(self.current_turn),
            turn_state: self.turn_state,
        })
    }

    /// Resolve a shot given as display text, e.g. `"A5"`.
    pub fn process_shot_at(
        &mut self,
        player: PlayerId,
        coord: &str,
    ) -> Result<ShotReport, GameError> {
        let c = parse_coord(coord)?;
        self.process_shot(player, c.row, c.col)
    }

    /// Fleet summary for one player.
    pub fn fleet_status(&self, player: PlayerId) -> FleetStatus {
        let state = self.player(player);
        let mut ships = Vec::with_capacity(state.fleet.len());
        let mut sunk_ships = 0;
        for ship in &state.fleet {
            let (health, total, sunk) = match state.ship_health.get(&ship.instance_id) {
                Some(h) => (h.remaining(), h.total, h.sunk),
                None => (ship.cells.len(), ship.cells.len(), false),
            };
            if sunk {
                sunk_ships += 1;
            }
            ships.push(ShipStatus {
                instance_id: ship.instance_id.clone(),
                name: ship.name.clone(),
                health,
                total,
                sunk,
            });
        }
        let total_ships = ships.len();
        FleetStatus {
            ships,
            total_ships,
            sunk_ships,
            remaining: total_ships - sunk_ships,
        }
    }
}
