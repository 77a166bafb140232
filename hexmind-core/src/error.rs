//! Engine error taxonomy

use crate::board::Pos;

/// Errors surfaced by board construction and move selection. A deadline
/// expiring mid-search is not an error; the search returns its best move
/// so far.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions: {reason}")]
    InvalidDimensions { reason: String },

    #[error("position {pos:?} is off the board")]
    OutOfBounds { pos: Pos },

    #[error("cell {pos:?} is already occupied")]
    CellOccupied { pos: Pos },

    #[error("no legal moves available")]
    NoLegalMoves,
}
