//! Move-selection facade consumed by an external turn loop

use crate::board::{Board, Player, Pos};
use crate::bridge::broken_bridge_move;
use crate::error::EngineError;
use crate::score::scored_moves;
use crate::search::{search, SearchConfig};

/// The engine's player: bridge-restore fast path first, alpha-beta search
/// otherwise. Stateless between calls apart from its configuration.
#[derive(Clone, Debug)]
pub struct HexPlayer {
    side: Player,
    config: SearchConfig,
}

impl HexPlayer {
    pub fn new(side: Player) -> Self {
        Self {
            side,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(side: Player, config: SearchConfig) -> Self {
        Self { side, config }
    }

    pub fn side(&self) -> Player {
        self.side
    }

    /// External numeric identity of the acting player
    pub fn player_id(&self) -> u8 {
        self.side.id()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for the acting player. A full board yields
    /// `NoLegalMoves`; if the search roots out at a cutoff (already
    /// decided game, expired budget) the top-scored empty cell stands in
    /// so a legal board always produces a move.
    pub fn choose_move(&self, board: &Board) -> Result<Pos, EngineError> {
        if let Some(fix) = broken_bridge_move(board, self.side) {
            return Ok(fix);
        }

        let outcome = search(board, self.side, &self.config);
        match outcome.best {
            Some(pos) => Ok(pos),
            None => scored_moves(board, self.side, &self.config.weights)
                .first()
                .map(|&(_, pos)| pos)
                .ok_or(EngineError::NoLegalMoves),
        }
    }
}
