//! Edge-to-edge connectivity: winner detection and the path heuristic

use rustc_hash::FxHashSet;

use crate::board::{Board, Player, Pos};
use crate::bridge::is_bridge;

fn on_start_edge(player: Player, pos: Pos) -> bool {
    match player {
        Player::Red => pos.row == 0,
        Player::Blue => pos.col == 0,
    }
}

fn on_target_edge(player: Player, pos: Pos, size: i8) -> bool {
    match player {
        Player::Red => pos.row == size - 1,
        Player::Blue => pos.col == size - 1,
    }
}

/// True iff `player` has an unbroken stone chain between their two edges.
/// Flood fill with an explicit work stack; each start-edge seed runs with
/// its own visited set.
pub fn is_connected(board: &Board, player: Player) -> bool {
    let size = board.size();
    (0..size)
        .map(|i| match player {
            Player::Red => Pos::new(0, i),
            Player::Blue => Pos::new(i, 0),
        })
        .filter(|&seed| board.stone(seed) == Some(player))
        .any(|seed| reaches_target(board, seed, player))
}

fn reaches_target(board: &Board, seed: Pos, player: Player) -> bool {
    let mut visited = FxHashSet::default();
    let mut stack = vec![seed];
    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if on_target_edge(player, current, board.size()) {
            return true;
        }
        for next in board.neighbors(current) {
            if board.stone(next) == Some(player) && !visited.contains(&next) {
                stack.push(next);
            }
        }
    }
    false
}

/// The player with a completed edge-to-edge chain, if any. Red is checked
/// before Blue; Hex topology keeps both from being connected at once
/// (asserted in tests rather than re-derived here).
pub fn winner(board: &Board) -> Option<Player> {
    if is_connected(board, Player::Red) {
        Some(Player::Red)
    } else if is_connected(board, Player::Blue) {
        Some(Player::Blue)
    } else {
        None
    }
}

/// Would a stone at `pos` sit on a component already touching both of
/// `player`'s edges? The component grows over the player's stones plus
/// `pos` itself, treating cells as linked when hex-adjacent or
/// bridge-related. Never mutates the board.
pub fn on_path(board: &Board, pos: Pos, player: Player) -> bool {
    let mut members = board.stones(player);
    if !members.contains(&pos) {
        members.push(pos);
    }

    let mut visited = FxHashSet::default();
    let mut stack = vec![pos];
    let mut touches_start = false;
    let mut touches_target = false;

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        touches_start |= on_start_edge(player, current);
        touches_target |= on_target_edge(player, current, board.size());
        if touches_start && touches_target {
            return true;
        }
        for &next in &members {
            if !visited.contains(&next)
                && (current.is_adjacent(next) || is_bridge(current, next))
            {
                stack.push(next);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_on_empty_boards() {
        for size in 2..=7 {
            let board = Board::new(size).unwrap();
            assert_eq!(winner(&board), None, "size {size}");
        }
    }

    #[test]
    fn test_red_column_wins() {
        for size in [3, 5] {
            let mut board = Board::new(size).unwrap();
            for row in 0..size {
                board.place(Pos::new(row, 1), Player::Red).unwrap();
            }
            assert_eq!(winner(&board), Some(Player::Red));
        }
    }

    #[test]
    fn test_blue_row_wins() {
        let mut board = Board::new(4).unwrap();
        for col in 0..4 {
            board.place(Pos::new(2, col), Player::Blue).unwrap();
        }
        assert_eq!(winner(&board), Some(Player::Blue));
    }

    #[test]
    fn test_broken_chain_is_not_a_win() {
        let mut board = Board::new(4).unwrap();
        for row in [0, 1, 3] {
            board.place(Pos::new(row, 0), Player::Red).unwrap();
        }
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_zigzag_chain_wins() {
        // (0,1) - (1,1) - (2,0) - (3,0) is connected under hex adjacency
        let mut board = Board::new(4).unwrap();
        for pos in [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 0), Pos::new(3, 0)] {
            board.place(pos, Player::Red).unwrap();
        }
        assert_eq!(winner(&board), Some(Player::Red));
    }

    #[test]
    fn test_filled_boards_never_doubly_connected() {
        // Hex topology: a full board decides for exactly one side
        let grids: [&[&[u8]]; 3] = [
            &[&[1, 2, 1], &[2, 1, 2], &[1, 2, 1]],
            &[&[2, 2, 2], &[1, 1, 1], &[2, 1, 1]],
            &[&[1, 1, 2], &[2, 2, 1], &[1, 2, 2]],
        ];
        for grid in grids {
            let rows: Vec<Vec<u8>> = grid.iter().map(|r| r.to_vec()).collect();
            let board = Board::from_rows(&rows).unwrap();
            let red = is_connected(&board, Player::Red);
            let blue = is_connected(&board, Player::Blue);
            assert!(red ^ blue, "exactly one side must connect: {board}");
        }
    }

    #[test]
    fn test_on_path_gap_in_column() {
        let mut board = Board::new(3).unwrap();
        board.place(Pos::new(0, 0), Player::Red).unwrap();
        board.place(Pos::new(2, 0), Player::Red).unwrap();
        assert!(on_path(&board, Pos::new(1, 0), Player::Red));
    }

    #[test]
    fn test_on_path_through_bridge_link() {
        // (0,1) and (2,0) are bridge-related; the candidate joins their
        // component, which spans both Red edges
        let mut board = Board::new(3).unwrap();
        board.place(Pos::new(0, 1), Player::Red).unwrap();
        board.place(Pos::new(2, 0), Player::Red).unwrap();
        assert!(on_path(&board, Pos::new(1, 1), Player::Red));
    }

    #[test]
    fn test_on_path_false_without_support() {
        let board = Board::new(3).unwrap();
        assert!(!on_path(&board, Pos::new(1, 1), Player::Red));
    }
}
