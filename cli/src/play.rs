use std::io::{BufRead, Write};

use tictactoe_engine::MoveRng;
use tictactoe_engine::config::EngineConfig;
use tictactoe_engine::log;
use tictactoe_engine::record::{RecordSink, submit_record};
use tictactoe_engine::tictactoe::GameState;

use crate::render::{opponent_line, render_board, status_line};

fn help(max_level: u8) -> String {
    format!(
        "Commands: 0-8 place a mark, r restart, d <0-{}> change difficulty, q quit",
        max_level
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(usize),
    Restart,
    Difficulty(u8),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };

    match head {
        "q" | "quit" => Ok(Command::Quit),
        "r" | "restart" => Ok(Command::Restart),
        "h" | "help" | "?" => Ok(Command::Help),
        "d" | "difficulty" => parts
            .next()
            .and_then(|level| level.parse().ok())
            .map(Command::Difficulty)
            .ok_or_else(|| "Usage: d <level>".to_string()),
        cell => cell
            .parse()
            .map(Command::Place)
            .map_err(|_| format!("Unknown command '{}'", cell)),
    }
}

fn write_error(e: std::io::Error) -> String {
    format!("Failed to write output: {}", e)
}

/// Interactive game loop. Finished games are handed to `sink` once each.
pub fn run_play<R: BufRead, W: Write>(
    config: &EngineConfig,
    level: u8,
    rng: &mut MoveRng,
    sink: Option<&dyn RecordSink>,
    input: R,
    mut output: W,
) -> Result<(), String> {
    let mut state = GameState::with_bot_mark(config.opponent(level)?, config.bot_mark)?;
    let mut lines = input.lines();
    let mut recorded = false;
    let help_text = help(config.difficulty.max_level());

    writeln!(output, "{}\n{}", opponent_line(&state), help_text).map_err(write_error)?;

    loop {
        if let Some(index) = state.play_bot_turn(rng) {
            writeln!(output, "Engine plays {}", index).map_err(write_error)?;
        }

        writeln!(output, "\n{}\n{}", render_board(&state), status_line(&state)).map_err(write_error)?;

        if state.is_over() && !recorded {
            recorded = true;
            log!("Game finished: {} after {:?}", status_line(&state), state.history());
            if let Some(sink) = sink {
                submit_record(sink, &state.record());
            }
        }

        write!(output, "> ").map_err(write_error)?;
        output.flush().map_err(write_error)?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;

        let result = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Place(index)) => state.place_mark(index),
            Ok(Command::Restart) => {
                state.restart();
                recorded = false;
                Ok(())
            }
            Ok(Command::Difficulty(level)) => config.opponent(level).map(|opponent| {
                state.set_difficulty(opponent);
                recorded = false;
                log!("Difficulty changed to {}", level);
            }),
            Ok(Command::Help) => Err(help_text.clone()),
            Err(message) => Err(format!("{}. {}", message, help_text)),
        };

        if let Err(message) = result {
            writeln!(output, "{}", message).map_err(write_error)?;
        }
    }

    Ok(())
}
