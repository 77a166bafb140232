//! Hex board geometry and state

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The six hex neighbor offsets (drow, dcol) for the parallelogram layout
pub const NEIGHBOR_OFFSETS: [(i8, i8); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// A 0-indexed (row, col) cell coordinate
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The six hex neighbors, unclipped (callers bounds-check via the board)
    pub fn neighbors(self) -> [Pos; 6] {
        let mut out = [self; 6];
        for (slot, (dr, dc)) in out.iter_mut().zip(NEIGHBOR_OFFSETS) {
            *slot = Pos::new(self.row + dr, self.col + dc);
        }
        out
    }

    /// True iff `other` is one of the six hex neighbors
    pub fn is_adjacent(self, other: Pos) -> bool {
        NEIGHBOR_OFFSETS
            .iter()
            .any(|&(dr, dc)| other.row == self.row + dr && other.col == self.col + dc)
    }
}

/// Stone color. Red connects row 0 to row N-1, Blue connects column 0 to
/// column N-1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// External numeric identity (Red = 1, Blue = 2)
    pub fn id(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Blue => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::Red),
            2 => Some(Player::Blue),
            _ => None,
        }
    }
}

/// Square Hex board of side N. Cells are empty or hold one stone; `place`
/// is the only mutation. Search code works on clones, never on the live
/// board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i8,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Empty board of side `size` (at least 2)
    pub fn new(size: i8) -> Result<Self, EngineError> {
        if size < 2 {
            return Err(EngineError::InvalidDimensions {
                reason: format!("board side must be at least 2, got {size}"),
            });
        }
        Ok(Self {
            size,
            cells: vec![None; size as usize * size as usize],
        })
    }

    /// Build from the external {0 = empty, 1 = Red, 2 = Blue} grid encoding.
    /// Rows must form a square of side at least 2.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, EngineError> {
        let size = rows.len();
        if size < 2 || size > i8::MAX as usize {
            return Err(EngineError::InvalidDimensions {
                reason: format!("board side must be in 2..=127, got {size}"),
            });
        }
        let mut board = Self::new(size as i8)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::InvalidDimensions {
                    reason: format!("row {r} has {} cells, expected {size}", row.len()),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let player = Player::from_id(value).ok_or_else(|| {
                    EngineError::InvalidDimensions {
                        reason: format!("cell ({r},{c}) holds invalid value {value}"),
                    }
                })?;
                board.cells[r * size + c] = Some(player);
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    /// True iff the position lies on the board
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.row < self.size && pos.col >= 0 && pos.col < self.size
    }

    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size as usize + pos.col as usize
    }

    /// Stone at `pos`, or None when empty or out of bounds
    pub fn stone(&self, pos: Pos) -> Option<Player> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// True iff `pos` is on the board and unoccupied
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[self.index(pos)].is_none()
    }

    /// Claim an empty cell for `player`
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), EngineError> {
        if !self.contains(pos) {
            return Err(EngineError::OutOfBounds { pos });
        }
        let idx = self.index(pos);
        if self.cells[idx].is_some() {
            return Err(EngineError::CellOccupied { pos });
        }
        self.cells[idx] = Some(player);
        Ok(())
    }

    /// Snapshot with a hypothetical stone added; the receiver is untouched.
    /// Callers pass an empty in-bounds cell (candidates come from the
    /// board's own empty-cell scan).
    pub fn child(&self, pos: Pos, player: Player) -> Board {
        debug_assert!(self.is_empty(pos));
        let mut next = self.clone();
        let idx = next.index(pos);
        next.cells[idx] = Some(player);
        next
    }

    /// All positions, row-major ascending
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Empty cells in row-major ascending order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.positions().filter(|&p| self.is_empty(p)).collect()
    }

    /// `player`'s stones in row-major ascending order
    pub fn stones(&self, player: Player) -> Vec<Pos> {
        self.positions()
            .filter(|&p| self.stone(p) == Some(player))
            .collect()
    }

    /// In-bounds hex neighbors of `pos`
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        pos.neighbors().into_iter().filter(|&p| self.contains(p))
    }
}

impl fmt::Display for Board {
    /// Rhombus rendering: each row shifted half a cell right of the one above
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for _ in 0..row {
                write!(f, " ")?;
            }
            for col in 0..self.size {
                let glyph = match self.stone(Pos::new(row, col)) {
                    Some(Player::Red) => 'R',
                    Some(Player::Blue) => 'B',
                    None => '.',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
