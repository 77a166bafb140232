//! Static position evaluation

use crate::board::{Board, Player};
use crate::connect::winner;
use crate::score::{scored_moves, ScoreWeights};

/// Value of a decided game
pub const WIN_VALUE: i32 = 10_000;

/// Evaluate from `player`'s perspective: a decided game scores
/// ±`WIN_VALUE`, anything else sums the candidate scores as a
/// positional-potential estimate.
pub fn evaluate(board: &Board, player: Player, weights: &ScoreWeights) -> i32 {
    match winner(board) {
        Some(w) if w == player => WIN_VALUE,
        Some(_) => -WIN_VALUE,
        None => scored_moves(board, player, weights)
            .iter()
            .map(|&(score, _)| score)
            .sum(),
    }
}
