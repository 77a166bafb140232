//! Depth-bounded minimax with alpha-beta pruning
//!
//! The search explores the top-scored candidates per node (branch cap) and
//! carries a wall-clock deadline checked at node entry. Everything a node
//! needs beyond the board travels in an immutable [`SearchContext`]; no
//! shared mutable search state exists.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos};
use crate::connect::winner;
use crate::eval::evaluate;
use crate::score::{scored_moves, ScoreWeights};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Tunable search parameters. Defaults are the engine's long-standing
/// values: 2 plies, a 2000 ms budget, 10 candidates per node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum recursion depth in plies
    pub max_depth: u32,
    /// Wall-clock budget per move request
    pub time_budget_ms: u64,
    /// Candidates explored per node; moves below the cap are never visited
    pub branch_cap: usize,
    /// Move-scorer weight table
    pub weights: ScoreWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            time_budget_ms: 2000,
            branch_cap: 10,
            weights: ScoreWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_time_budget_ms(mut self, time_budget_ms: u64) -> Self {
        self.time_budget_ms = time_budget_ms;
        self
    }

    pub fn with_branch_cap(mut self, branch_cap: usize) -> Self {
        self.branch_cap = branch_cap;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

// ============================================================================
// SEARCH
// ============================================================================

/// Root search result. `best` is None only when the root itself was a
/// cutoff (game already decided, zero depth, or expired budget).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub value: i32,
    pub best: Option<Pos>,
}

/// Read-only state threaded through the recursion
struct SearchContext<'a> {
    root: Player,
    started: Instant,
    budget: Duration,
    branch_cap: usize,
    weights: &'a ScoreWeights,
}

impl SearchContext<'_> {
    fn out_of_time(&self) -> bool {
        self.started.elapsed() > self.budget
    }
}

/// Pick the best move for `player` within the configured depth, branch
/// cap, and time budget. Deterministic for a given board and config: the
/// candidate ordering is deterministic and ties keep the first-seen move.
pub fn search(board: &Board, player: Player, config: &SearchConfig) -> SearchOutcome {
    let ctx = SearchContext {
        root: player,
        started: Instant::now(),
        budget: Duration::from_millis(config.time_budget_ms),
        branch_cap: config.branch_cap.max(1),
        weights: &config.weights,
    };
    let (value, best) = minimax(board, config.max_depth, true, i32::MIN, i32::MAX, &ctx);
    SearchOutcome { value, best }
}

fn minimax(
    board: &Board,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    ctx: &SearchContext<'_>,
) -> (i32, Option<Pos>) {
    // Cutoff: depth exhausted, decided game, or deadline passed. The
    // deadline is only consulted here, so one node's expansion always
    // completes once started.
    if depth == 0 || winner(board).is_some() || ctx.out_of_time() {
        return (evaluate(board, ctx.root, ctx.weights), None);
    }

    let side = if maximizing { ctx.root } else { ctx.root.opponent() };
    let mut candidates = scored_moves(board, side, ctx.weights);
    candidates.truncate(ctx.branch_cap);

    let mut best_move = None;
    if maximizing {
        let mut best_value = i32::MIN;
        for &(_, mv) in &candidates {
            let child = board.child(mv, side);
            let (value, _) = minimax(&child, depth - 1, false, alpha, beta, ctx);
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        (best_value, best_move)
    } else {
        let mut worst_value = i32::MAX;
        for &(_, mv) in &candidates {
            let child = board.child(mv, side);
            let (value, _) = minimax(&child, depth - 1, true, alpha, beta, ctx);
            if value < worst_value {
                worst_value = value;
                best_move = Some(mv);
            }
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        (worst_value, best_move)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Full-width reference search over the same truncated candidate set,
    /// without any pruning window
    fn minimax_reference(
        board: &Board,
        depth: u32,
        maximizing: bool,
        ctx: &SearchContext<'_>,
    ) -> (i32, Option<Pos>) {
        if depth == 0 || winner(board).is_some() {
            return (evaluate(board, ctx.root, ctx.weights), None);
        }

        let side = if maximizing { ctx.root } else { ctx.root.opponent() };
        let mut candidates = scored_moves(board, side, ctx.weights);
        candidates.truncate(ctx.branch_cap);

        let mut best_move = None;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        for &(_, mv) in &candidates {
            let child = board.child(mv, side);
            let (value, _) = minimax_reference(&child, depth - 1, !maximizing, ctx);
            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_value = value;
                best_move = Some(mv);
            }
        }
        (best_value, best_move)
    }

    fn context<'a>(player: Player, config: &'a SearchConfig) -> SearchContext<'a> {
        SearchContext {
            root: player,
            started: Instant::now(),
            budget: Duration::from_millis(config.time_budget_ms),
            branch_cap: config.branch_cap.max(1),
            weights: &config.weights,
        }
    }

    #[test]
    fn test_depth_one_on_empty_board() {
        let board = Board::new(3).unwrap();
        let config = SearchConfig::default().with_depth(1);
        let outcome = search(&board, Player::Red, &config);

        let best = outcome.best.expect("depth-1 search must pick a move");
        assert!(board.is_empty(best));
        assert_eq!(
            outcome.value,
            evaluate(&board.child(best, Player::Red), Player::Red, &config.weights)
        );
    }

    #[test]
    fn test_finds_winning_move() {
        let mut board = Board::new(3).unwrap();
        board.place(Pos::new(0, 0), Player::Red).unwrap();
        board.place(Pos::new(1, 0), Player::Red).unwrap();

        let outcome = search(&board, Player::Red, &SearchConfig::default());
        assert_eq!(outcome.best, Some(Pos::new(2, 0)));
        assert_eq!(outcome.value, crate::eval::WIN_VALUE);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        // Eight stones, no winner yet; (1,1) is the only legal move
        let board = Board::from_rows(&[
            vec![2, 1, 1],
            vec![2, 0, 2],
            vec![1, 1, 2],
        ])
        .unwrap();
        assert_eq!(winner(&board), None);

        for depth in [1, 2, 5] {
            let config = SearchConfig::default().with_depth(depth);
            let outcome = search(&board, Player::Red, &config);
            assert_eq!(outcome.best, Some(Pos::new(1, 1)), "depth {depth}");
        }
    }

    #[test]
    fn test_decided_board_is_a_root_cutoff() {
        let mut board = Board::new(3).unwrap();
        for row in 0..3 {
            board.place(Pos::new(row, 2), Player::Red).unwrap();
        }
        let outcome = search(&board, Player::Blue, &SearchConfig::default());
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.value, -crate::eval::WIN_VALUE);
    }

    #[test]
    fn test_zero_budget_terminates_immediately() {
        let mut board = Board::new(5).unwrap();
        board.place(Pos::new(2, 2), Player::Red).unwrap();

        let config = SearchConfig::default()
            .with_depth(10)
            .with_time_budget_ms(0);
        let outcome = search(&board, Player::Blue, &config);
        // All nodes past the first instant cut off to the static eval; a
        // best move may or may not survive, but the value stays sane
        assert!(outcome.value.abs() <= crate::eval::WIN_VALUE);
    }

    #[test]
    fn test_pruning_matches_reference_search() {
        // Alpha-beta must return the root value and move of the unpruned
        // full-width search over the same candidate set
        let fixtures: [&[(Pos, Player)]; 3] = [
            &[],
            &[
                (Pos::new(1, 1), Player::Red),
                (Pos::new(2, 2), Player::Blue),
            ],
            &[
                (Pos::new(0, 1), Player::Red),
                (Pos::new(2, 0), Player::Red),
                (Pos::new(1, 0), Player::Blue),
                (Pos::new(3, 3), Player::Blue),
            ],
        ];

        for (i, stones) in fixtures.iter().enumerate() {
            let mut board = Board::new(4).unwrap();
            for &(pos, player) in *stones {
                board.place(pos, player).unwrap();
            }

            for depth in [1, 2, 3] {
                let config = SearchConfig::default().with_depth(depth);
                let pruned = search(&board, Player::Red, &config);
                let ctx = context(Player::Red, &config);
                let (ref_value, ref_move) =
                    minimax_reference(&board, depth, true, &ctx);

                assert_eq!(pruned.value, ref_value, "fixture {i} depth {depth}");
                assert_eq!(pruned.best, ref_move, "fixture {i} depth {depth}");
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut board = Board::new(5).unwrap();
        board.place(Pos::new(2, 2), Player::Red).unwrap();
        board.place(Pos::new(1, 3), Player::Blue).unwrap();

        let config = SearchConfig::default();
        let first = search(&board, Player::Red, &config);
        let second = search(&board, Player::Red, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_defaults_and_builders() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.time_budget_ms, 2000);
        assert_eq!(config.branch_cap, 10);

        let tuned = SearchConfig::default()
            .with_depth(4)
            .with_branch_cap(6)
            .with_time_budget_ms(500);
        assert_eq!(tuned.max_depth, 4);
        assert_eq!(tuned.branch_cap, 6);
        assert_eq!(tuned.time_budget_ms, 500);
    }

    #[test]
    fn test_config_load_roundtrip() {
        let config = SearchConfig::default().with_depth(3);
        let path = std::env::temp_dir().join("hexmind-search-config-test.json");
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = SearchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
