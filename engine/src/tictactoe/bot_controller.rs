use crate::MoveRng;
use super::board::Board;
use super::difficulty::Difficulty;
use super::game_state::GameState;
use super::heuristic::find_easy_move;
use super::perfect::find_perfect_move;
use super::types::Mark;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.bot_mark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Perfect,
    Heuristic,
}

/// Decides which mover plays this turn. Levels with probability 0 or 1 take no draw,
/// so they consume exactly the randomness of the mover they always pick.
pub fn select_mover(difficulty: Difficulty, rng: &mut MoveRng) -> MoveSource {
    let p = difficulty.perfect_probability();
    if p <= 0.0 {
        return MoveSource::Heuristic;
    }
    if p >= 1.0 {
        return MoveSource::Perfect;
    }
    if rng.unit() < p {
        MoveSource::Perfect
    } else {
        MoveSource::Heuristic
    }
}

pub fn calculate_move(difficulty: Difficulty, input: &BotInput, rng: &mut MoveRng) -> Option<usize> {
    match select_mover(difficulty, rng) {
        MoveSource::Perfect => find_perfect_move(&input.board, input.bot_mark, rng),
        MoveSource::Heuristic => find_easy_move(&input.board, input.bot_mark, rng),
    }
}

pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    bot_mark: Mark,
    rng: &mut MoveRng,
) -> Option<usize> {
    calculate_move(difficulty, &BotInput::new(*board, bot_mark), rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn level(level: u8) -> Difficulty {
        Difficulty::from_level(level).unwrap()
    }

    const BOARDS: [&str; 4] = ["XX..O....", "X...O...X", "XOX.O..X.", "OO.XX...."];

    #[test]
    fn test_level_one_matches_easy_mover() {
        for s in BOARDS {
            let b = board(s);
            for seed in 0..50 {
                let chosen = choose_move(&b, level(1), Mark::O, &mut MoveRng::new(seed));
                let easy = find_easy_move(&b, Mark::O, &mut MoveRng::new(seed));
                assert_eq!(chosen, easy, "board {} seed {}", s, seed);
            }
        }
    }

    #[test]
    fn test_level_five_matches_perfect_mover() {
        for s in BOARDS {
            let b = board(s);
            for seed in 0..50 {
                let chosen = choose_move(&b, level(5), Mark::O, &mut MoveRng::new(seed));
                let perfect = find_perfect_move(&b, Mark::O, &mut MoveRng::new(seed));
                assert_eq!(chosen, perfect, "board {} seed {}", s, seed);
            }
        }
    }

    #[test]
    fn test_level_three_routes_half_to_perfect() {
        let mut rng = MoveRng::new(77);
        let trials = 10_000;
        let perfect = (0..trials)
            .filter(|_| select_mover(level(3), &mut rng) == MoveSource::Perfect)
            .count();
        let fraction = perfect as f64 / trials as f64;
        assert!((fraction - 0.5).abs() < 0.03, "fraction {}", fraction);
    }

    #[test]
    fn test_intermediate_levels_follow_table() {
        let mut rng = MoveRng::new(5);
        let trials = 10_000;
        for (lvl, expected) in [(2, 0.2), (4, 0.8)] {
            let perfect = (0..trials)
                .filter(|_| select_mover(level(lvl), &mut rng) == MoveSource::Perfect)
                .count();
            let fraction = perfect as f64 / trials as f64;
            assert!((fraction - expected).abs() < 0.03, "level {} fraction {}", lvl, fraction);
        }
    }

    #[test]
    fn test_level_three_blocks_more_often_than_beginner() {
        // perfect always blocks on 2; easy picks 2 one time in six
        let b = board("XX..O....");
        let trials = 2_000;
        let mut rng = MoveRng::new(99);
        let blocks = (0..trials)
            .filter(|_| choose_move(&b, level(3), Mark::O, &mut rng) == Some(2))
            .count();
        let expected = trials as f64 * (0.5 + 0.5 / 6.0);
        assert!((blocks as f64 - expected).abs() < 80.0, "blocks {}", blocks);
    }

    #[test]
    fn test_full_board_has_no_move_at_any_level() {
        let b = board("XOXOXOOXO");
        let mut rng = MoveRng::new(0);
        for lvl in 1..=5 {
            assert_eq!(choose_move(&b, level(lvl), Mark::O, &mut rng), None);
        }
    }

    #[test]
    fn test_bot_input_from_game_state() {
        let mut state = GameState::new(Some(level(5)));
        state.place_mark(4).unwrap();
        let input = BotInput::from_game_state(&state);
        assert_eq!(input.bot_mark, Mark::O);
        assert_eq!(input.board[4], Mark::X);
        let mv = calculate_move(level(5), &input, &mut MoveRng::new(3)).unwrap();
        assert!([0, 2, 6, 8].contains(&mv));
    }
}
