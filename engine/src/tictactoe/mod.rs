mod board;
mod bot_controller;
mod difficulty;
mod game_state;
mod heuristic;
mod perfect;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, LINES, Line};
pub use bot_controller::{BotInput, MoveSource, calculate_move, choose_move, select_mover};
pub use difficulty::{DEFAULT_PERFECT_PROBABILITIES, Difficulty, DifficultySettings};
pub use game_state::{GameState, GameStatus};
pub use heuristic::{find_easy_move, winning_moves};
pub use perfect::{find_perfect_move, perfect_moves, score};
pub use types::{GameOutcome, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate, is_full, is_tie};
