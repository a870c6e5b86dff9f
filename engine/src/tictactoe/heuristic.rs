use crate::MoveRng;
use super::board::Board;
use super::types::Mark;
use super::win_detector::check_win;

/// Empty cells where `mark` completes a line immediately.
pub fn winning_moves(board: &Board, mark: Mark) -> Vec<usize> {
    let mut scratch = *board;
    let mut moves = Vec::new();

    for index in board.available_moves() {
        scratch.set(index, mark);
        if check_win(&scratch) == Some(mark) {
            moves.push(index);
        }
        scratch.set(index, Mark::Empty);
    }

    moves
}

/// One-ply move: a random immediate win if there is one, otherwise any random
/// empty cell. Opponent threats are ignored.
pub fn find_easy_move(board: &Board, max_mark: Mark, rng: &mut MoveRng) -> Option<usize> {
    let wins = winning_moves(board, max_mark);
    if !wins.is_empty() {
        return rng.choose(&wins);
    }
    rng.choose(&board.available_moves())
}
