//! AI engine facade
//!
//! Owns the searcher and the engine configuration, and exposes the two
//! contracts the application relies on: choosing a move and deciding whether
//! the game is over.
//!
//! # Example
//!
//! ```
//! use gobang::{AIEngine, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig { search_depth: 2, jitter: false, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(Stone::White, config).unwrap();
//! let mut board = engine.new_game();
//!
//! board.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
//! let reply = engine.decide(&mut board, Some(Pos::new(7, 7))).unwrap();
//! board.apply_move(reply, Stone::White).unwrap();
//! ```

use std::time::Instant;

use crate::board::{Board, Players, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::{ConfigError, GameError, InvalidMoveReason};
use crate::eval::Jitter;
use crate::rules;
use crate::search::{generate, Searcher};

/// Result of a move decision with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Move chosen for the engine's stone
    pub best_move: Pos,
    /// Search score from the engine's perspective
    pub score: i32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Gobang AI playing one colour.
pub struct AIEngine {
    stone: Stone,
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine for `stone` with default settings.
    #[must_use]
    pub fn new(stone: Stone) -> Self {
        Self::build(stone, EngineConfig::default(), Jitter::from_entropy())
    }

    /// Create an engine from a configuration; jitter follows `config.jitter`
    /// and `config.seed`.
    pub fn with_config(stone: Stone, config: EngineConfig) -> Result<Self, ConfigError> {
        let jitter = match (config.jitter, config.seed) {
            (false, _) => Jitter::disabled(),
            (true, Some(seed)) => Jitter::seeded(seed),
            (true, None) => Jitter::from_entropy(),
        };
        Self::with_jitter(stone, config, jitter)
    }

    /// Create an engine with an explicit jitter source.
    ///
    /// The configuration is validated first; a zero breadth or depth, or a
    /// board size outside `5..=19`, is rejected.
    pub fn with_jitter(
        stone: Stone,
        config: EngineConfig,
        jitter: Jitter,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(stone, config, jitter))
    }

    fn build(stone: Stone, config: EngineConfig, jitter: Jitter) -> Self {
        debug_assert!(stone != Stone::Empty, "engine needs a stone colour");
        let searcher = Searcher::new(config.search_depth, config.candidate_limit, jitter);
        Self {
            stone,
            config,
            searcher,
        }
    }

    #[inline]
    pub fn stone(&self) -> Stone {
        self.stone
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fresh empty board of the configured size
    #[must_use]
    pub fn new_game(&self) -> Board {
        Board::new(self.config.board_size)
    }

    /// Choose the engine's next move.
    ///
    /// `opponent_last` is the opponent's move, already applied to `board`.
    /// The board is searched in place and returned unchanged; the caller
    /// applies the returned move.
    pub fn decide(&mut self, board: &mut Board, opponent_last: Option<Pos>) -> Result<Pos, GameError> {
        self.decide_with_stats(board, opponent_last)
            .map(|result| result.best_move)
    }

    /// Choose the engine's next move and report search statistics.
    pub fn decide_with_stats(
        &mut self,
        board: &mut Board,
        opponent_last: Option<Pos>,
    ) -> Result<MoveResult, GameError> {
        let start = Instant::now();

        if let Some(pos) = opponent_last {
            self.check_opponent_move(board, pos)?;
        }

        // Opening move: nothing to search around yet
        if board.is_board_empty() {
            let center = board.center();
            log::debug!("{:?} opens at {center}", self.stone);
            return Ok(MoveResult {
                best_move: center,
                score: 0,
                nodes: 0,
                time_ms: elapsed_ms(start),
            });
        }

        let players = Players::new(self.stone);
        let result = self.searcher.search(board, players);

        // A decided root yields no move; fall back to the generator's first pick
        let best_move = match result.best_move {
            Some(pos) => pos,
            None => generate(board, players, self.config.candidate_limit)
                .first()
                .map(|candidate| candidate.pos)
                .ok_or(GameError::NoCandidates)?,
        };

        let time_ms = elapsed_ms(start);
        log::debug!(
            "{:?} plays {best_move} (score {}, {} nodes, {time_ms}ms)",
            self.stone,
            result.score,
            result.nodes
        );

        Ok(MoveResult {
            best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        })
    }

    /// Whether the stone just placed at `pos` by `players.mine` wins.
    #[must_use]
    pub fn is_game_over(&self, board: &Board, pos: Pos, players: Players) -> bool {
        rules::is_game_over(board, pos, players)
    }

    fn check_opponent_move(&self, board: &Board, pos: Pos) -> Result<(), GameError> {
        let reason = if !board.contains_pos(pos) {
            InvalidMoveReason::OutOfBounds { size: board.size() }
        } else if board.get(pos) != self.stone.opponent() {
            InvalidMoveReason::NotOpponentStone
        } else {
            return Ok(());
        };
        Err(GameError::InvalidMove { pos, reason })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Stone::White)
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
