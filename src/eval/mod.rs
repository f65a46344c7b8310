//! Evaluation module for Gobang positions
//!
//! This module provides shape recognition and scoring:
//! - Shape detection along one line through a point
//! - Point scores for ranking candidate moves
//! - Board scores for search nodes, with optional tie-breaking jitter

pub mod heuristic;
pub mod jitter;
pub mod patterns;
pub mod shape;

pub use heuristic::{board_value, count_shapes, evaluate_board, evaluate_point};
pub use jitter::Jitter;
pub use patterns::{board_score, point_score, ShapeScore};
pub use shape::{classify, Shape, ShapeCounts, VisitedGrid, DIRECTIONS};
