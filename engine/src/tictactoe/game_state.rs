use crate::MoveRng;
use crate::record::GameRecord;
use super::board::Board;
use super::bot_controller::choose_move;
use super::difficulty::Difficulty;
use super::types::{Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line, is_tie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

/// Board, turn and move history of one game. X always moves first.
/// With `bot` set, the engine plays `bot_mark` and the human plays the other mark.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    history: Vec<usize>,
    current_mark: Mark,
    status: GameStatus,
    bot: Option<Difficulty>,
    bot_mark: Mark,
}

impl GameState {
    pub fn new(bot: Option<Difficulty>) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            bot,
            bot_mark: Mark::O,
        }
    }

    pub fn with_bot_mark(bot: Option<Difficulty>, bot_mark: Mark) -> Result<Self, String> {
        if bot_mark == Mark::Empty {
            return Err("Engine mark must be X or O".to_string());
        }
        Ok(Self {
            bot_mark,
            ..Self::new(bot)
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn bot(&self) -> Option<Difficulty> {
        self.bot
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_bot_turn(&self) -> bool {
        self.bot.is_some() && !self.is_over() && self.current_mark == self.bot_mark
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Human move for the side to move.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if self.is_bot_turn() {
            return Err("Not your turn".to_string());
        }

        self.board.place_mark(index, self.current_mark)?;
        self.finish_move(index);
        Ok(())
    }

    /// Lets the engine move if it is its turn. Returns the chosen cell.
    pub fn play_bot_turn(&mut self, rng: &mut MoveRng) -> Option<usize> {
        if !self.is_bot_turn() {
            return None;
        }

        let difficulty = self.bot?;
        let index = choose_move(&self.board, difficulty, self.bot_mark, rng)?;
        self.board.set(index, self.bot_mark);
        self.finish_move(index);
        Some(index)
    }

    /// Clears board and history. The difficulty stays.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn set_difficulty(&mut self, bot: Option<Difficulty>) {
        self.bot = bot;
        self.restart();
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            difficulty: self.bot.map_or(0, |d| d.level()),
            history: self.history.clone(),
        }
    }

    fn finish_move(&mut self, index: usize) {
        self.history.push(index);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => GameStatus::InProgress,
            };
            return;
        }

        if is_tie(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(level: u8) -> Option<Difficulty> {
        Some(Difficulty::from_level(level).unwrap())
    }

    #[test]
    fn test_two_humans_alternate() {
        let mut state = GameState::new(None);
        for index in [0, 3, 1, 4] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.current_mark(), Mark::X);
        state.place_mark(2).unwrap();
        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.history(), &[0, 3, 1, 4, 2]);
        assert_eq!(state.winning_line().map(|l| l.cells), Some([0, 1, 2]));
        assert!(!state.is_bot_turn());
    }

    #[test]
    fn test_rejects_illegal_moves() {
        let mut state = GameState::new(None);
        state.place_mark(4).unwrap();
        assert_eq!(state.place_mark(4), Err("Cell 4 is already marked".to_string()));
        assert!(state.place_mark(9).is_err());
        assert_eq!(state.history(), &[4]);

        for index in [0, 3, 1, 8, 2] {
            state.place_mark(index).unwrap();
        }
        assert!(state.is_over());
        assert_eq!(state.place_mark(8), Err("Game is already over".to_string()));
    }

    #[test]
    fn test_draw_is_detected() {
        let mut state = GameState::new(None);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.board().to_string(), "XOX\nXOO\nOXX");
    }

    #[test]
    fn test_bot_answers_after_human() {
        let mut state = GameState::new(level(5));
        let mut rng = MoveRng::new(1);
        assert_eq!(state.play_bot_turn(&mut rng), None);

        state.place_mark(0).unwrap();
        assert!(state.is_bot_turn());
        assert_eq!(state.place_mark(1), Err("Not your turn".to_string()));

        let reply = state.play_bot_turn(&mut rng).unwrap();
        assert_eq!(reply, 4);
        assert_eq!(state.history(), &[0, 4]);
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_bot_playing_x_moves_first() {
        let mut state = GameState::with_bot_mark(level(1), Mark::X).unwrap();
        assert!(state.is_bot_turn());
        let mut rng = MoveRng::new(8);
        let first = state.play_bot_turn(&mut rng).unwrap();
        assert_eq!(state.board()[first], Mark::X);
        assert_eq!(state.current_mark(), Mark::O);
        assert!(GameState::with_bot_mark(None, Mark::Empty).is_err());
    }

    #[test]
    fn test_impossible_bot_never_loses_to_random_player() {
        for seed in 0..100 {
            let mut rng = MoveRng::new(seed);
            let mut state = GameState::new(level(5));
            while !state.is_over() {
                if state.is_bot_turn() {
                    state.play_bot_turn(&mut rng).unwrap();
                } else {
                    let moves = state.board().available_moves();
                    let index = rng.choose(&moves).unwrap();
                    state.place_mark(index).unwrap();
                }
            }
            assert_ne!(state.status(), GameStatus::XWon, "seed {} history {:?}", seed, state.history());
        }
    }

    #[test]
    fn test_restart_keeps_difficulty() {
        let mut state = GameState::new(level(3));
        let mut rng = MoveRng::new(4);
        state.place_mark(4).unwrap();
        state.play_bot_turn(&mut rng);
        state.restart();
        assert_eq!(state.board(), &Board::new());
        assert!(state.history().is_empty());
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.bot().map(|d| d.level()), Some(3));
    }

    #[test]
    fn test_set_difficulty_restarts() {
        let mut state = GameState::new(None);
        state.place_mark(0).unwrap();
        state.set_difficulty(level(2));
        assert!(state.history().is_empty());
        assert_eq!(state.bot().map(|d| d.level()), Some(2));
    }

    #[test]
    fn test_record_carries_difficulty_and_history() {
        let mut state = GameState::new(level(4));
        let mut rng = MoveRng::new(12);
        state.place_mark(4).unwrap();
        let reply = state.play_bot_turn(&mut rng).unwrap();
        let record = state.record();
        assert_eq!(record.difficulty, 4);
        assert_eq!(record.history, vec![4, reply]);

        assert_eq!(GameState::new(None).record().difficulty, 0);
    }
}
