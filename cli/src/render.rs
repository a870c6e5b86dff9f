use tictactoe_engine::tictactoe::{BOARD_SIDE, GameState, GameStatus, Mark};

/// Draws the board. Empty cells show their index so they can be typed in.
pub fn render_board(state: &GameState) -> String {
    let board = state.board();
    let winning = state.winning_line();
    let mut rows = Vec::with_capacity(BOARD_SIDE);

    for row in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|col| {
                let index = row * BOARD_SIDE + col;
                match board[index] {
                    Mark::Empty => format!(" {} ", index),
                    mark if winning.is_some_and(|line| line.contains(index)) => format!("[{}]", mark),
                    mark => format!(" {} ", mark),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::XWon => "X won the game!".to_string(),
        GameStatus::OWon => "O won the game!".to_string(),
        GameStatus::Draw => "It is a tie!".to_string(),
        GameStatus::InProgress => format!("Next player: {}", state.current_mark()),
    }
}

pub fn opponent_line(state: &GameState) -> String {
    match state.bot() {
        Some(difficulty) => format!(
            "Playing against the engine ({}), engine plays {}",
            difficulty,
            state.bot_mark()
        ),
        None => "Playing against a friend".to_string(),
    }
}
