mod play;
mod render;
mod simulate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tictactoe_engine::MoveRng;
use tictactoe_engine::config::{DEFAULT_CONFIG_FILE, EngineConfig};
use tictactoe_engine::record::{RecordSink, YamlFileRecordSink};
use tictactoe_engine::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or the engine")]
struct Args {
    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Include source locations in log lines.
    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for a reproducible engine.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the terminal. Difficulty 0 is two humans on one keyboard.
    Play {
        #[arg(long, short)]
        difficulty: Option<u8>,

        /// Append finished games to this YAML file.
        #[arg(long)]
        record_file: Option<PathBuf>,
    },
    /// Let the engine play against itself and count results.
    Simulate {
        #[arg(long, default_value_t = 5)]
        x_difficulty: u8,

        #[arg(long, default_value_t = 5)]
        o_difficulty: u8,

        #[arg(long, default_value_t = 100)]
        games: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Tictactoe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = EngineConfig::config_manager(&args.config).load()?;
    let mut rng = match args.seed {
        Some(seed) => MoveRng::new(seed),
        None => MoveRng::from_random(),
    };
    log!("Engine seed {}", rng.seed());

    match args.command {
        Command::Play {
            difficulty,
            record_file,
        } => {
            let level = difficulty.unwrap_or(config.default_level);
            let sink = record_file.map(YamlFileRecordSink::new);
            let stdin = std::io::stdin();
            play::run_play(
                &config,
                level,
                &mut rng,
                sink.as_ref().map(|s| s as &dyn RecordSink),
                stdin.lock(),
                std::io::stdout(),
            )?;
        }
        Command::Simulate {
            x_difficulty,
            o_difficulty,
            games,
        } => {
            let x = config.difficulty.difficulty(x_difficulty)?;
            let o = config.difficulty.difficulty(o_difficulty)?;
            log!("Simulating {} games, X at {} vs O at {}", games, x, o);
            let tally = simulate::run_simulation(x, o, games, &mut rng)?;
            println!(
                "{} games: X won {}, O won {}, draws {}",
                tally.games(),
                tally.x_wins,
                tally.o_wins,
                tally.draws
            );
        }
    }

    Ok(())
}
