//! Game rules for freestyle Gobang
//!
//! Five or more in a row wins; a full board without a five is a draw.

pub mod win;

pub use win::{find_winner, is_draw, is_game_over, winning_line};
