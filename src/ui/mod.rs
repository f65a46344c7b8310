//! GUI module for the Gobang game
//!
//! Native front-end built on egui/eframe. The AI searches on a worker thread
//! so the window stays responsive.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameResult, GameState, PlayError};
