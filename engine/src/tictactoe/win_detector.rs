use super::board::{Board, LINES};
use super::types::{GameOutcome, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Returns the first completed line in `LINES` order. Boards with more than one
/// completed line are unreachable in legal play.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board counts as a tie. Check `check_win` first: a board can be full and won.
pub fn is_tie(board: &Board) -> bool {
    is_full(board)
}

pub fn evaluate(board: &Board) -> Option<GameOutcome> {
    if let Some(mark) = check_win(board) {
        return Some(GameOutcome::Won(mark));
    }
    if is_tie(board) {
        return Some(GameOutcome::Draw);
    }
    None
}
