//! Selfplay command - one engine-vs-engine game
//!
//! The turn loop here is the external collaborator the engine expects:
//! it owns the live board and applies each returned move.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexmind_core::{winner, Board, HexPlayer, Player, Pos, SearchConfig};

#[derive(Args)]
pub struct SelfplayArgs {
    /// Board side length
    #[arg(long, default_value = "7")]
    pub size: i8,

    /// Search depth in plies
    #[arg(long, default_value = "2")]
    pub depth: u32,

    /// Candidates explored per search node
    #[arg(long, default_value = "10")]
    pub branch_cap: usize,

    /// Per-move time budget in milliseconds
    #[arg(long, default_value = "2000")]
    pub time_ms: u64,

    /// Search config JSON file (overrides the flags above)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output the game record as JSON
    #[arg(long)]
    pub json: bool,
}

/// One finished game
struct GameRecord {
    winner: Option<Player>,
    moves: Vec<(u8, Pos)>,
    board: Board,
}

pub fn run(args: SelfplayArgs) -> Result<()> {
    let config = load_config(&args)?;

    tracing::info!(
        "Selfplay: size={}, depth={}, cap={}, budget={}ms",
        args.size,
        config.max_depth,
        config.branch_cap,
        config.time_budget_ms
    );

    let record = play_game(args.size, &config)?;
    report(&record, args.json);
    Ok(())
}

fn load_config(args: &SelfplayArgs) -> Result<SearchConfig> {
    match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("Failed to load search config: {}", path.display())),
        None => Ok(SearchConfig::default()
            .with_depth(args.depth)
            .with_branch_cap(args.branch_cap)
            .with_time_budget_ms(args.time_ms)),
    }
}

fn play_game(size: i8, config: &SearchConfig) -> Result<GameRecord> {
    let mut board = Board::new(size)?;
    let red = HexPlayer::with_config(Player::Red, config.clone());
    let blue = HexPlayer::with_config(Player::Blue, config.clone());

    let mut moves = Vec::new();
    let mut side = Player::Red;

    while winner(&board).is_none() && !board.empty_cells().is_empty() {
        let engine = match side {
            Player::Red => &red,
            Player::Blue => &blue,
        };
        let mv = engine
            .choose_move(&board)
            .context("engine failed to produce a move")?;
        board.place(mv, side)?;
        tracing::debug!("{:?} plays ({},{})", side, mv.row, mv.col);
        moves.push((side.id(), mv));
        side = side.opponent();
    }

    Ok(GameRecord {
        winner: winner(&board),
        moves,
        board,
    })
}

fn report(record: &GameRecord, json: bool) {
    if json {
        print_json_record(record);
    } else {
        print_text_record(record);
    }
}

fn print_json_record(record: &GameRecord) {
    #[derive(serde::Serialize)]
    struct JsonMove {
        player: u8,
        row: i8,
        col: i8,
    }

    #[derive(serde::Serialize)]
    struct JsonRecord {
        winner: Option<u8>,
        total_moves: usize,
        moves: Vec<JsonMove>,
    }

    let output = JsonRecord {
        winner: record.winner.map(Player::id),
        total_moves: record.moves.len(),
        moves: record
            .moves
            .iter()
            .map(|&(player, pos)| JsonMove {
                player,
                row: pos.row,
                col: pos.col,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

fn print_text_record(record: &GameRecord) {
    println!("\n=== Selfplay Result ===");
    match record.winner {
        Some(player) => println!("Winner: {:?} (player {})", player, player.id()),
        None => println!("Winner: none"),
    }
    println!("Moves:  {}", record.moves.len());
    println!("\n{}", record.board);
}
