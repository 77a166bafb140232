//! Bench command - engine vs seeded random baseline
//!
//! Colors alternate per game for fairness; each game derives its own RNG
//! from the base seed so parallel and sequential runs produce identical
//! results.

use anyhow::{anyhow, Result};
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use hexmind_core::{winner, Board, HexPlayer, Player, Pos, SearchConfig};

#[derive(Args)]
pub struct BenchArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board side length
    #[arg(long, default_value = "5")]
    pub size: i8,

    /// Search depth in plies
    #[arg(long, default_value = "2")]
    pub depth: u32,

    /// Run games in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One finished benchmark game
struct GameOutcome {
    game_number: usize,
    engine_side: Player,
    engine_won: bool,
    moves: u32,
}

pub fn run(args: BenchArgs, seed: Option<u64>) -> Result<()> {
    let base_seed = seed.unwrap_or(42);
    let config = SearchConfig::default().with_depth(args.depth);

    tracing::info!(
        "Bench: {} games on {}x{}, depth={}, seed={}",
        args.games,
        args.size,
        args.size,
        args.depth,
        base_seed
    );

    let outcomes: Vec<GameOutcome> = if args.parallel {
        (0..args.games)
            .into_par_iter()
            .map(|i| play_one(i, args.size, &config, base_seed))
            .collect::<Result<_>>()?
    } else {
        (0..args.games)
            .map(|i| play_one(i, args.size, &config, base_seed))
            .collect::<Result<_>>()?
    };

    report(&outcomes, args.json);
    Ok(())
}

fn play_one(
    game_index: usize,
    size: i8,
    config: &SearchConfig,
    base_seed: u64,
) -> Result<GameOutcome> {
    // Alternate colors so first-move advantage cancels out
    let engine_side = if game_index % 2 == 0 {
        Player::Red
    } else {
        Player::Blue
    };
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(game_index as u64));
    let engine = HexPlayer::with_config(engine_side, config.clone());

    let mut board = Board::new(size)?;
    let mut side = Player::Red;
    let mut moves = 0u32;

    while winner(&board).is_none() && !board.empty_cells().is_empty() {
        let mv = if side == engine_side {
            engine.choose_move(&board)?
        } else {
            random_move(&board, &mut rng)?
        };
        board.place(mv, side)?;
        moves += 1;
        side = side.opponent();
    }

    let engine_won = winner(&board) == Some(engine_side);
    tracing::info!(
        "Game {}: engine as {:?} {} in {} moves",
        game_index + 1,
        engine_side,
        if engine_won { "won" } else { "lost" },
        moves
    );

    Ok(GameOutcome {
        game_number: game_index + 1,
        engine_side,
        engine_won,
        moves,
    })
}

fn random_move(board: &Board, rng: &mut ChaCha8Rng) -> Result<Pos> {
    let empties = board.empty_cells();
    empties
        .choose(rng)
        .copied()
        .ok_or_else(|| anyhow!("no empty cells left for the baseline"))
}

fn report(outcomes: &[GameOutcome], json: bool) {
    if json {
        print_json_results(outcomes);
    } else {
        print_text_results(outcomes);
    }
}

fn win_rate(outcomes: &[GameOutcome]) -> f32 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let wins = outcomes.iter().filter(|o| o.engine_won).count();
    wins as f32 / outcomes.len() as f32
}

fn print_json_results(outcomes: &[GameOutcome]) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        engine_player: u8,
        engine_won: bool,
        moves: u32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        engine_wins: usize,
        engine_win_rate: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: outcomes.len(),
        engine_wins: outcomes.iter().filter(|o| o.engine_won).count(),
        engine_win_rate: win_rate(outcomes),
        games: outcomes
            .iter()
            .map(|o| JsonGame {
                game_number: o.game_number,
                engine_player: o.engine_side.id(),
                engine_won: o.engine_won,
                moves: o.moves,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

fn print_text_results(outcomes: &[GameOutcome]) {
    let wins = outcomes.iter().filter(|o| o.engine_won).count();

    println!("\n=== Bench Results ===");
    println!("Total games: {}", outcomes.len());
    println!(
        "Engine wins: {} ({:.1}%)",
        wins,
        win_rate(outcomes) * 100.0
    );
    for o in outcomes {
        println!(
            "  Game {}: engine as {:?} {} in {} moves",
            o.game_number,
            o.engine_side,
            if o.engine_won { "won" } else { "lost" },
            o.moves
        );
    }
}
