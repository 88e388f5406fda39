//! Turn alternation, mode switching and engine dispatch.

use crate::Command;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use ttt_core::{Board, BoardError, GameStatus, Mark, Move, SearchEngine, SearchError};

/// Who sits on the second chair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[strum(to_string = "player vs player")]
    PlayerVsPlayer,
    /// A human plays the engine.
    #[default]
    #[strum(to_string = "player vs engine")]
    PlayerVsEngine,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsEngine,
            GameMode::PlayerVsEngine => GameMode::PlayerVsPlayer,
        }
    }
}

/// Something the front-end should report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        player: Mark,
        /// Where.
        mv: Move,
    },
    /// The game was decided by the last move.
    GameOver(GameStatus),
    /// The mode was switched.
    ModeChanged(GameMode),
    /// The engine difficulty changed.
    LevelChanged(u8),
    /// A fresh game started.
    Reset,
}

/// Error raised when a command cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ControllerError {
    /// The game is decided; reset to keep playing.
    #[display("Game is already over")]
    GameOver,

    /// The board refused the move.
    #[display("{}", _0)]
    Board(BoardError),

    /// The engine could not pick a move.
    #[display("Engine error: {}", _0)]
    Search(SearchError),
}

impl std::error::Error for ControllerError {}

impl From<BoardError> for ControllerError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<SearchError> for ControllerError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

/// Owns the live board and drives the engine.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    engine: SearchEngine,
    current: Mark,
    mode: GameMode,
    initial_engine: SearchEngine,
    initial_mode: GameMode,
}

impl GameController {
    /// Creates a controller; `reset` returns to these settings.
    #[instrument]
    pub fn new(engine: SearchEngine, mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            engine,
            current: Mark::PlayerOne,
            mode,
            initial_engine: engine,
            initial_mode: mode,
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The engine in play.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Mark of the player to move.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Status of the live board.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// True when the engine should move next.
    pub fn is_engine_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsEngine
            && self.current == self.engine.player()
            && !self.status().is_over()
    }

    /// Places the current player's mark and passes the turn.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn make_move(&mut self, mv: Move) -> Result<Vec<GameEvent>, ControllerError> {
        if self.status().is_over() {
            return Err(ControllerError::GameOver);
        }

        let player = self.current;
        self.board.place_mark(mv, player)?;
        self.next_turn();
        debug!(%mv, "Move applied");

        let mut events = vec![GameEvent::MoveMade { player, mv }];
        let status = self.status();
        if status.is_over() {
            info!(%status, "Game over");
            events.push(GameEvent::GameOver(status));
        }
        Ok(events)
    }

    /// Lets the engine move if it is its turn; otherwise does nothing.
    #[instrument(skip(self))]
    pub fn engine_turn(&mut self) -> Result<Vec<GameEvent>, ControllerError> {
        if !self.is_engine_turn() {
            return Ok(Vec::new());
        }
        let mv = self.engine.select_move(&self.board)?;
        self.make_move(mv)
    }

    /// Switches between player-vs-player and player-vs-engine.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn toggle_mode(&mut self) -> GameEvent {
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "Mode changed");
        GameEvent::ModeChanged(self.mode)
    }

    /// Changes the engine difficulty.
    pub fn set_level(&mut self, level: u8) -> GameEvent {
        self.engine.set_level(level);
        GameEvent::LevelChanged(level)
    }

    /// Starts over with the settings the controller was built with.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameEvent {
        info!("Resetting game");
        *self = Self::new(self.initial_engine, self.initial_mode);
        GameEvent::Reset
    }

    /// Applies a command, then lets the engine reply if it is its turn.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Vec<GameEvent>, ControllerError> {
        let mut events = match command {
            Command::Place(mv) => self.make_move(mv)?,
            Command::ToggleMode => vec![self.toggle_mode()],
            Command::Reset => vec![self.reset()],
            Command::SetLevel(level) => vec![self.set_level(level)],
            Command::Quit => Vec::new(),
        };
        events.extend(self.engine_turn()?);
        Ok(events)
    }

    fn next_turn(&mut self) {
        self.current = self.current.opponent();
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(SearchEngine::default(), GameMode::default())
    }
}
