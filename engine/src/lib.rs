pub mod config;
pub mod logger;
pub mod record;
pub mod rng;
pub mod tictactoe;

pub use rng::MoveRng;
