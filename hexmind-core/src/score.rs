//! Heuristic move scoring and ordering

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos};
use crate::bridge::{at_risk_bridges, is_bridge, pending_bridges};
use crate::connect::on_path;

/// Weights for the positional move scorer. Defaults reproduce the tuned
/// values the engine ships with; all exclusivity rules live in
/// `scored_moves`, the table only supplies magnitudes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Bridge link to at least one own stone
    pub bridge_to_own: i32,
    /// Bridge link to at least one opponent stone
    pub bridge_to_opponent: i32,
    /// Bridge links to both colors at once (replaces the two above)
    pub bridge_to_both: i32,
    /// Bridge links to two or more opponent stones
    pub opponent_pressure: i32,
    /// Cell completes an edge-to-edge component (path heuristic)
    pub on_path: i32,
    /// Carrier of an intact own bridge
    pub pending_carrier: i32,
    /// Last free carrier of a threatened own bridge
    pub at_risk_carrier: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            bridge_to_own: 20,
            bridge_to_opponent: 8,
            bridge_to_both: 30,
            opponent_pressure: 12,
            on_path: 25,
            pending_carrier: 20,
            at_risk_carrier: 40,
        }
    }
}

/// Score every empty cell for `player` and return the candidates sorted
/// by descending (score, position) tuple. The ordering is deterministic:
/// equal scores fall back to the position comparison, mirroring the tuple
/// sort the scorer has always used. The same list drives alpha-beta move
/// ordering and, summed, the static evaluation.
pub fn scored_moves(board: &Board, player: Player, weights: &ScoreWeights) -> Vec<(i32, Pos)> {
    let opponent = player.opponent();
    let own = board.stones(player);
    let theirs = board.stones(opponent);
    let pending = pending_bridges(board, player);
    let at_risk = at_risk_bridges(board, player);

    let mut moves: Vec<(i32, Pos)> = Vec::new();
    for pos in board.empty_cells() {
        let mut score = 0;

        let links_own = own.iter().any(|&s| is_bridge(pos, s));
        let opponent_links = theirs.iter().filter(|&&s| is_bridge(pos, s)).count();

        match (links_own, opponent_links > 0) {
            (true, true) => score += weights.bridge_to_both,
            (true, false) => score += weights.bridge_to_own,
            (false, true) => score += weights.bridge_to_opponent,
            (false, false) => {}
        }
        if opponent_links >= 2 {
            score += weights.opponent_pressure;
        }
        if on_path(board, pos, player) {
            score += weights.on_path;
        }
        if pending.contains(&pos) {
            score += weights.pending_carrier;
        }
        if at_risk.contains(&pos) {
            score += weights.at_risk_carrier;
        }

        moves.push((score, pos));
    }

    // Defensive fallback: every empty cell at score zero
    if moves.is_empty() {
        moves = board.empty_cells().into_iter().map(|p| (0, p)).collect();
    }

    moves.sort_by(|a, b| b.cmp(a));
    moves
}
