//! AI-vs-AI self-play on the standard board.
//!
//! usage: chess_ai [depth] [max_turns] [seed]

use std::env;
use std::process::ExitCode;

use chess_ai::board::{Board, SearchConfig, Team, DEFAULT_MAX_DEPTH};
use chess_ai::engine::{ControllerError, GameStatus, TurnController};

const DEFAULT_MAX_TURNS: u32 = 200;

fn parse_arg<T: std::str::FromStr>(
    args: &[String],
    idx: usize,
    name: &str,
) -> Result<Option<T>, String> {
    match args.get(idx) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid {name}: {raw}")),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = (|| -> Result<(i32, u32, Option<u64>), String> {
        let depth = parse_arg(&args, 0, "depth")?.unwrap_or(DEFAULT_MAX_DEPTH);
        let max_turns = parse_arg(&args, 1, "max_turns")?.unwrap_or(DEFAULT_MAX_TURNS);
        let seed = parse_arg(&args, 2, "seed")?;
        Ok((depth, max_turns, seed))
    })();
    let (depth, max_turns, seed) = match parsed {
        Ok(values) => values,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: chess_ai [depth] [max_turns] [seed]");
            return ExitCode::FAILURE;
        }
    };

    let mut config = SearchConfig::default().with_depth(depth);
    config.seed = seed;
    let controller = TurnController::new(Board::new(), Team::White, config);
    println!("{}", controller.board_snapshot());

    for _ in 0..max_turns {
        match controller.play_turn() {
            Ok(outcome) => {
                let captured = outcome
                    .captured
                    .map(|p| format!(" (takes {})", p.kind.to_char()))
                    .unwrap_or_default();
                println!("{}. {}{captured}", controller.turns_played(), outcome.played);
                if let GameStatus::Won { winner } = outcome.status {
                    println!("{}", controller.board_snapshot());
                    println!("{winner} wins");
                    return ExitCode::SUCCESS;
                }
            }
            Err(ControllerError::NoLegalMove { team }) => {
                println!("{team} cannot move, game drawn");
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("{}", controller.board_snapshot());
    println!("no result after {max_turns} turns");
    ExitCode::SUCCESS
}
