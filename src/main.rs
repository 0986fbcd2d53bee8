//! Interactive human-vs-engine play loop.
//!
//! Hosts a terminal game against one of the built-in engines. Moves are
//! entered in long algebraic form (`e2e4`, promotions as `e7e8q`) and are
//! validated against the legal-move list before being applied.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chess::{Board, ChessMove, Color};
use clap::{Parser, ValueEnum};
use log::info;

use damson_chess::engines::engine_minimax::MinimaxEngine;
use damson_chess::engines::engine_random::RandomEngine;
use damson_chess::engines::engine_trait::{Engine, GoParams};
use damson_chess::rules::{self, GameOutcome};
use damson_chess::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth in plies for the minimax engine.
    #[arg(long, default_value_t = 3)]
    depth: u8,
    /// Which side the human plays.
    #[arg(long, value_enum, default_value = "white")]
    play_as: SideArg,
    /// Which engine fills the other seat.
    #[arg(long, value_enum, default_value = "minimax")]
    engine: EngineArg,
}

fn main() -> Result<(), String> {
    simple_logger::init_with_level(log::Level::Info).map_err(|e| e.to_string())?;

    let args = Args::parse();
    let human_color = match args.play_as {
        SideArg::White => Color::White,
        SideArg::Black => Color::Black,
    };
    let mut engine: Box<dyn Engine> = match args.engine {
        EngineArg::Minimax => Box::new(MinimaxEngine::new(args.depth)),
        EngineArg::Random => Box::new(RandomEngine::new()),
    };
    let params = GoParams {
        depth: Some(args.depth),
    };

    info!("playing against {} at depth {}", engine.name(), args.depth);
    engine.new_game();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Board::default();

    loop {
        if let Some(outcome) = rules::game_outcome(&board) {
            println!("{}", render_board(&board));
            announce(outcome);
            return Ok(());
        }

        if board.side_to_move() == human_color {
            println!("{}", render_board(&board));
            print!("your move: ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            let line = match lines.next() {
                Some(line) => line.map_err(|e| e.to_string())?,
                None => return Ok(()),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "quit" {
                return Ok(());
            }

            let mv = match ChessMove::from_str(trimmed) {
                Ok(mv) => mv,
                Err(_) => {
                    println!("could not parse '{trimmed}', expected e.g. e2e4 or e7e8q");
                    continue;
                }
            };
            if !rules::legal_moves(&board).contains(&mv) {
                println!("illegal move: {trimmed}");
                continue;
            }
            board = board.make_move_new(mv);
        } else {
            let out = engine.choose_move(&board, &params)?;
            for line in &out.info_lines {
                info!("{line}");
            }
            match out.best_move {
                Some(mv) => {
                    println!("{} plays {}", engine.name(), mv);
                    board = board.make_move_new(mv);
                }
                // No legal reply means the outcome check above will fire on
                // the next pass; nothing to apply here.
                None => continue,
            }
        }
    }
}

fn announce(outcome: GameOutcome) {
    match outcome {
        GameOutcome::Checkmate { winner } => {
            let side = match winner {
                Color::White => "White",
                Color::Black => "Black",
            };
            println!("Checkmate! {side} wins!");
        }
        GameOutcome::Stalemate => println!("Draw by stalemate!"),
        GameOutcome::InsufficientMaterial => println!("Draw by insufficient material!"),
    }
}
