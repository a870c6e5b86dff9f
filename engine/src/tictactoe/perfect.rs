use crate::MoveRng;
use super::board::Board;
use super::types::Mark;
use super::win_detector::{check_win, is_tie};

const WIN_SCORE: i32 = 10;

/// Minimax value of `board` from `max_mark`'s point of view.
///
/// Wins score `10 - depth` and losses `depth - 10`, so among winning lines the
/// fastest is preferred and among losing lines the slowest. The board is
/// mutated in place while searching and restored before returning.
pub fn score(board: &mut Board, depth: usize, maximizing: bool, max_mark: Mark) -> i32 {
    let Some(min_mark) = max_mark.opponent() else {
        return 0;
    };
    minimax(board, depth, maximizing, max_mark, min_mark)
}

fn minimax(board: &mut Board, depth: usize, maximizing: bool, max_mark: Mark, min_mark: Mark) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == max_mark {
            WIN_SCORE - depth as i32
        } else {
            depth as i32 - WIN_SCORE
        };
    }

    if is_tie(board) {
        return 0;
    }

    let mover = if maximizing { max_mark } else { min_mark };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..board.cells().len() {
        if !board[index].is_empty() {
            continue;
        }

        board.set(index, mover);
        let eval = minimax(board, depth + 1, !maximizing, max_mark, min_mark);
        board.set(index, Mark::Empty);

        best = if maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}

/// Every move that reaches the best achievable score for `max_mark`, in index order.
pub fn perfect_moves(board: &Board, max_mark: Mark) -> Vec<usize> {
    let Some(min_mark) = max_mark.opponent() else {
        return Vec::new();
    };

    let mut scratch = *board;
    let mut best_score = i32::MIN;
    let mut best_moves = Vec::new();

    for index in board.available_moves() {
        scratch.set(index, max_mark);
        let move_score = minimax(&mut scratch, 0, false, max_mark, min_mark);
        scratch.set(index, Mark::Empty);

        if move_score > best_score {
            best_score = move_score;
            best_moves.clear();
            best_moves.push(index);
        } else if move_score == best_score {
            best_moves.push(index);
        }
    }

    best_moves
}

/// Optimal move for `max_mark`, breaking ties uniformly at random.
/// `None` when the board has no empty cell.
pub fn find_perfect_move(board: &Board, max_mark: Mark, rng: &mut MoveRng) -> Option<usize> {
    let candidates = perfect_moves(board, max_mark);
    rng.choose(&candidates)
}
