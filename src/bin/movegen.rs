use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::{piece_moves, team_moves, Board, Move, Position, Team};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TeamArg {
    White,
    Black,
}

impl From<TeamArg> for Team {
    fn from(t: TeamArg) -> Team {
        match t {
            TeamArg::White => Team::White,
            TeamArg::Black => Team::Black,
        }
    }
}

/// List pseudo-legal moves for a square or a whole side.
#[derive(Debug, Parser)]
#[command(name = "movegen")]
struct Cli {
    /// JSON board snapshot (`{"pieces": [{"square": "e1", "piece": {...}}]}`).
    #[arg(long, conflicts_with = "fen")]
    board: Option<PathBuf>,

    /// FEN piece-placement field.
    #[arg(long)]
    fen: Option<String>,

    /// Square to generate for, e.g. `e2`. Without it, every piece of `--team` is used.
    #[arg(long)]
    square: Option<Position>,

    #[arg(long, value_enum, default_value = "white")]
    team: TeamArg,

    /// Print moves as a JSON array instead of one UCI move per line.
    #[arg(long)]
    json: bool,
}

fn load_board(cli: &Cli) -> Result<Board> {
    if let Some(path) = &cli.board {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let board: Board = serde_json::from_slice(&bytes)
            .with_context(|| format!("invalid board JSON in {}", path.display()))?;
        return Ok(board);
    }
    if let Some(fen) = &cli.fen {
        return Ok(Board::from_fen_placement(fen)?);
    }
    Ok(Board::standard())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let board = load_board(&cli)?;
    info!("board:\n{board}");

    let moves: Vec<Move> = match cli.square {
        Some(sq) => piece_moves(&board, sq)?,
        None => team_moves(&board, cli.team.into()),
    };
    info!("{} moves", moves.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&moves)?);
    } else {
        for m in &moves {
            println!("{m}");
        }
    }
    Ok(())
}
