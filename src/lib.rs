//! Tic-tac-toe against a random or minimax engine.
//!
//! The board and the search live in [`ttt_core`]; this crate adds the
//! game controller, a console front-end, TOML configuration and position
//! analysis.
//!
//! # Architecture
//!
//! - **Controller**: turn alternation, mode switching, engine dispatch
//! - **Console**: line-based input and board rendering over any reader/writer
//! - **Config**: engine level, engine mark and starting mode from TOML
//! - **Analysis**: a single search over a given position
//!
//! # Example
//!
//! ```
//! use ttt_minimax::{Command, GameController};
//! use ttt_core::Move;
//!
//! let mut controller = GameController::default();
//! let events = controller.handle(Command::Place(Move::new(1, 1)?))?;
//! // The human move plus the engine's reply.
//! assert_eq!(events.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod command;
mod config;
mod console;
mod controller;

pub use analysis::{AnalysisReport, analyze_position};
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, GameConfig};
pub use console::ConsoleSession;
pub use controller::{ControllerError, GameController, GameEvent, GameMode};
