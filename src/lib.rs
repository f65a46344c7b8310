//! Gobang (freestyle Gomoku) AI engine
//!
//! Plays five-in-a-row on a 15x15 board by default:
//! - Five or more stones in a row wins
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with an activity heat map
//! - [`eval`]: Shape detection and heuristic scoring
//! - [`search`]: Candidate generation and negamax alpha-beta search
//! - [`rules`]: Win and draw detection
//! - [`engine`]: AI engine facade used by the application
//! - [`config`]: Engine and application configuration
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gobang::{AIEngine, EngineConfig, Players, Pos, Stone};
//!
//! let config = EngineConfig { search_depth: 2, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(Stone::White, config).unwrap();
//! let mut board = engine.new_game();
//!
//! board.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
//! let reply = engine.decide(&mut board, Some(Pos::new(7, 7))).unwrap();
//! board.apply_move(reply, Stone::White).unwrap();
//!
//! assert!(!engine.is_game_over(&board, reply, Players::new(Stone::White)));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Players, Pos, Stone, BOARD_SIZE};
pub use config::{AppConfig, EngineConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, GameError, InvalidMoveReason};
