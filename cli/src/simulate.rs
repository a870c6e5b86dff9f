use tictactoe_engine::MoveRng;
use tictactoe_engine::tictactoe::{Board, Difficulty, GameOutcome, Mark, choose_move, evaluate};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    fn add(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Mark::X) => self.x_wins += 1,
            GameOutcome::Won(_) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one engine-vs-engine game. X moves first.
pub fn play_game(x: Difficulty, o: Difficulty, rng: &mut MoveRng) -> Result<GameOutcome, String> {
    let mut board = Board::new();
    let mut mark = Mark::X;

    loop {
        if let Some(outcome) = evaluate(&board) {
            return Ok(outcome);
        }

        let difficulty = if mark == Mark::X { x } else { o };
        let index = choose_move(&board, difficulty, mark, rng)
            .ok_or_else(|| format!("No move available on unfinished board {:?}", board))?;
        board.place_mark(index, mark)?;
        mark = if mark == Mark::X { Mark::O } else { Mark::X };
    }
}

pub fn run_simulation(x: Difficulty, o: Difficulty, games: u32, rng: &mut MoveRng) -> Result<Tally, String> {
    let mut tally = Tally::default();
    for _ in 0..games {
        tally.add(play_game(x, o, rng)?);
    }
    Ok(tally)
}
