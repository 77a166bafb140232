//! Bridge geometry and tactical detectors
//!
//! A bridge is a pair of same-color stones at a knight-like offset sharing
//! two carrier cells. Securing or restoring carriers is the dominant
//! tactical motif the move scorer and the fast-path detector key on.

use rustc_hash::FxHashSet;

use crate::board::{Board, Player, Pos};

/// True iff the two cells sit at a bridge offset: coordinate deltas
/// (2,1) or (1,2) in either order
pub fn is_bridge(p1: Pos, p2: Pos) -> bool {
    let dr = (p1.row - p2.row).abs();
    let dc = (p1.col - p2.col).abs();
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

/// In-bounds cells hex-adjacent to both stones, in neighbor-offset order.
/// A true bridge pair has exactly two; the delta test also admits offsets
/// with no shared neighbors at all, so callers skip pairs where the count
/// is not two.
pub fn carriers(board: &Board, p1: Pos, p2: Pos) -> Vec<Pos> {
    board.neighbors(p1).filter(|&p| p.is_adjacent(p2)).collect()
}

/// Carrier pairs of `player`'s well-formed bridges, enumerated over
/// ascending (row,col) stone pairs. Pairs whose carrier count is not two
/// are malformed geometry and skipped rather than crashed on.
fn bridge_carriers(board: &Board, player: Player) -> Vec<[Pos; 2]> {
    let stones = board.stones(player);
    let mut pairs = Vec::new();
    for (i, &s1) in stones.iter().enumerate() {
        for &s2 in &stones[i + 1..] {
            if !is_bridge(s1, s2) {
                continue;
            }
            if let [a, b] = carriers(board, s1, s2)[..] {
                pairs.push([a, b]);
            }
        }
    }
    pairs
}

/// Find a move that re-secures a bridge whose one carrier was just taken:
/// the first pair (ascending enumeration) with one carrier
/// opponent-occupied and the other empty yields the empty carrier.
///
/// Runs once per top-level move request, never inside the search.
pub fn broken_bridge_move(board: &Board, player: Player) -> Option<Pos> {
    let opponent = player.opponent();
    for [a, b] in bridge_carriers(board, player) {
        if board.stone(a) == Some(opponent) && board.is_empty(b) {
            return Some(b);
        }
        if board.stone(b) == Some(opponent) && board.is_empty(a) {
            return Some(a);
        }
    }
    None
}

/// Carriers of bridge pairs whose two carriers are both still empty: a
/// defensive structure not yet under attack, worth a moderate bonus
pub fn pending_bridges(board: &Board, player: Player) -> FxHashSet<Pos> {
    let mut pending = FxHashSet::default();
    for [a, b] in bridge_carriers(board, player) {
        if board.is_empty(a) && board.is_empty(b) {
            pending.insert(a);
            pending.insert(b);
        }
    }
    pending
}

/// The single empty carrier of bridge pairs whose other carrier the
/// opponent already holds; playing it keeps the bridge alive, so it earns
/// the largest tactical bonus
pub fn at_risk_bridges(board: &Board, player: Player) -> FxHashSet<Pos> {
    let opponent = player.opponent();
    let mut at_risk = FxHashSet::default();
    for [a, b] in bridge_carriers(board, player) {
        if board.is_empty(a) && board.stone(b) == Some(opponent) {
            at_risk.insert(a);
        } else if board.is_empty(b) && board.stone(a) == Some(opponent) {
            at_risk.insert(b);
        }
    }
    at_risk
}
