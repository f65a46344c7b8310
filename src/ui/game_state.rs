//! Game state management for the Gobang GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::rules::{is_game_over, winning_line};
use crate::{AIEngine, Board, EngineConfig, GameError, MoveResult, Players, Pos, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Stone::Black }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Stone, line: [Pos; 5] },
    Resigned { winner: Stone },
    Draw,
}

impl GameResult {
    pub fn winner(&self) -> Option<Stone> {
        match *self {
            GameResult::Win { winner, .. } | GameResult::Resigned { winner } => Some(winner),
            GameResult::Draw => None,
        }
    }
}

/// Why a player action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("game is over")]
    GameOver,
    #[error("AI is thinking")]
    AiThinking,
    #[error("not your turn")]
    NotYourTurn,
    #[error(transparent)]
    Invalid(#[from] GameError),
}

type AiReply = (AIEngine, Result<MoveResult, GameError>);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub result: Option<GameResult>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,

    config: EngineConfig,
    /// Lent to the worker thread while the AI is thinking
    engine: Option<AIEngine>,
}

impl GameState {
    /// Start a game; an invalid engine configuration falls back to defaults
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{e}; using default engine settings");
                EngineConfig::default()
            }
        };
        let engine = Self::build_engine(mode, &config);
        Self {
            board: Board::new(config.board_size),
            mode,
            current_turn: Stone::Black,
            result: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            config,
            engine,
        }
    }

    fn build_engine(mode: GameMode, config: &EngineConfig) -> Option<AIEngine> {
        let GameMode::PvE { human } = mode else {
            return None;
        };
        AIEngine::with_config(human.opponent(), config.clone())
            .map_err(|e| log::warn!("AI engine unavailable: {e}"))
            .ok()
    }

    /// Start over in the same mode
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config.clone());
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.board.last_move().map(|record| record.pos)
    }

    pub fn move_count(&self) -> usize {
        self.board.history().len()
    }

    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.result {
            Some(GameResult::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the current player's stone at `pos`
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }
        self.execute_move(pos)?;
        Ok(())
    }

    /// Apply a move for the side to move, then check for a finished game
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let stone = self.current_turn;
        self.board.apply_move(pos, stone)?;
        self.move_timer.stop();
        self.message = None;

        if is_game_over(&self.board, pos, Players::new(stone)) {
            if let Some(line) = winning_line(&self.board, pos) {
                log::info!("{stone:?} wins with five through {pos}");
                self.result = Some(GameResult::Win { winner: stone, line });
                return Ok(());
            }
        }
        if self.board.is_full() {
            log::info!("board full, game drawn");
            self.result = Some(GameResult::Draw);
            return Ok(());
        }

        self.current_turn = stone.opponent();
        self.move_timer.start();
        Ok(())
    }

    /// Give up the game.
    ///
    /// Against the AI this always resigns for the human; in a hotseat game
    /// the side to move resigns.
    pub fn resign(&mut self) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }
        let loser = match self.mode {
            GameMode::PvE { human } => human,
            GameMode::PvP => self.current_turn,
        };
        log::info!("{loser:?} resigns");
        self.result = Some(GameResult::Resigned {
            winner: loser.opponent(),
        });
        self.move_timer.stop();
        Ok(())
    }

    /// Take back the last move; against the AI, take back until it is the
    /// human's turn again.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        let Some(record) = self.board.undo_move() else {
            return;
        };
        self.current_turn = record.stone;

        if let GameMode::PvE { human } = self.mode {
            while self.current_turn != human {
                match self.board.undo_move() {
                    Some(record) => self.current_turn = record.stone,
                    None => break,
                }
            }
        }

        self.result = None;
        self.message = None;
        self.move_timer.start();
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_over() {
            return;
        }
        let Some(mut engine) = self.engine.take() else {
            return;
        };

        let mut board = self.board.clone();
        let opponent_last = self.last_move();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.decide_with_stats(&mut board, opponent_last);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and play its move
    pub fn check_ai_result(&mut self) {
        let (reply, elapsed) = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(reply) => (reply, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    // The engine went down with the worker
                    log::warn!("AI worker exited without a move");
                    self.engine = Self::build_engine(self.mode, &self.config);
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        let (engine, result) = reply;
        self.engine = Some(engine);
        self.ai_state = AiState::Idle;
        self.move_timer.ai_thinking_time = Some(elapsed);

        let played = result.and_then(|move_result| {
            self.last_ai_result = Some(move_result);
            self.execute_move(move_result.best_move)
        });
        if let Err(e) = played {
            log::warn!("AI move failed: {e}");
            self.message = Some(format!("AI could not move: {e}"));
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_config() -> EngineConfig {
        EngineConfig {
            search_depth: 2,
            jitter: false,
            ..EngineConfig::default()
        }
    }

    fn wait_for_ai(state: &mut GameState) {
        for _ in 0..500 {
            state.check_ai_result();
            if !state.is_ai_thinking() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("AI did not answer in time");
    }

    #[test]
    fn test_pvp_five_wins() {
        let mut state = GameState::new(GameMode::PvP, test_config());
        for col in 0..4 {
            state.try_place_stone(Pos::new(7, col)).unwrap();
            state.try_place_stone(Pos::new(9, col)).unwrap();
        }
        state.try_place_stone(Pos::new(7, 4)).unwrap();

        assert_eq!(
            state.result,
            Some(GameResult::Win {
                winner: Stone::Black,
                line: [
                    Pos::new(7, 0),
                    Pos::new(7, 1),
                    Pos::new(7, 2),
                    Pos::new(7, 3),
                    Pos::new(7, 4),
                ],
            })
        );
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err(PlayError::GameOver));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::PvP, test_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        let err = state.try_place_stone(Pos::new(7, 7)).unwrap_err();
        assert!(matches!(err, PlayError::Invalid(GameError::InvalidMove { .. })));
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_pvp_undo_one_move() {
        let mut state = GameState::new(GameMode::PvP, test_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(7, 8)).unwrap();
        state.undo();
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(state.last_move(), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_pvp_resign() {
        let mut state = GameState::new(GameMode::PvP, test_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.resign().unwrap();
        assert_eq!(state.result, Some(GameResult::Resigned { winner: Stone::Black }));
        assert_eq!(state.resign(), Err(PlayError::GameOver));
    }

    #[test]
    fn test_pve_ai_opens_center() {
        let mut state = GameState::new(GameMode::PvE { human: Stone::White }, test_config());
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err(PlayError::NotYourTurn));

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.last_move(), Some(Pos::new(7, 7)));
        assert_eq!(state.current_turn, Stone::White);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_pve_undo_returns_to_human() {
        let mut state = GameState::new(GameMode::PvE { human: Stone::Black }, test_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.move_count(), 2);

        state.undo();
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_turn, Stone::Black);
    }

    #[test]
    fn test_pve_resign_is_human_loss() {
        let mut state = GameState::new(GameMode::PvE { human: Stone::Black }, test_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        state.resign().unwrap();
        assert_eq!(state.result.and_then(|r| r.winner()), Some(Stone::White));
    }

    #[test]
    fn test_draw_on_full_board() {
        let config = EngineConfig {
            board_size: 5,
            ..test_config()
        };
        let mut state = GameState::new(GameMode::PvP, config);

        // Final position has no five in any row, column or diagonal
        let rows = ["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"];
        let (mut black, mut white) = (Vec::new(), Vec::new());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                if ch == 'X' {
                    black.push(pos);
                } else {
                    white.push(pos);
                }
            }
        }

        for (i, &pos) in black.iter().enumerate() {
            state.try_place_stone(pos).unwrap();
            if let Some(&reply) = white.get(i) {
                state.try_place_stone(reply).unwrap();
            }
        }
        assert_eq!(state.result, Some(GameResult::Draw));
        assert_eq!(state.result.and_then(|r| r.winner()), None);
    }

    #[test]
    fn test_lost_worker_engine_is_rebuilt() {
        let mut state = GameState::new(GameMode::PvE { human: Stone::White }, test_config());

        // A worker that died before replying took the engine with it
        let (tx, rx) = channel::<AiReply>();
        drop(tx);
        state.engine = None;
        state.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };

        state.check_ai_result();
        assert!(!state.is_ai_thinking());
        assert!(state.engine.is_some());
        assert_eq!(state.message.as_deref(), Some("AI error"));

        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.last_move(), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = EngineConfig {
            candidate_limit: 0,
            ..test_config()
        };
        let state = GameState::new(GameMode::PvE { human: Stone::Black }, config);
        assert_eq!(state.config(), &EngineConfig::default());
        assert!(state.engine.is_some());
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = GameState::new(GameMode::PvE { human: Stone::White }, test_config());
        state.message = Some("hello".into());
        state.reset();
        assert_eq!(state.mode, GameMode::PvE { human: Stone::White });
        assert_eq!(state.move_count(), 0);
        assert!(state.message.is_none());
        assert!(state.engine.is_some());
    }
}
