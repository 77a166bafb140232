//! HEXMIND Core - Hex move-decision engine
//!
//! This crate provides the engine behind a Hex-playing program:
//! - Board geometry and state (parallelogram grid, hex adjacency)
//! - Edge-to-edge connectivity (winner detection, path heuristic)
//! - Bridge geometry and tactical detectors
//! - Heuristic move scoring and ordering
//! - Depth-bounded alpha-beta search with a wall-clock budget
//! - The player facade an external turn loop drives

pub mod board;
pub mod bridge;
pub mod connect;
pub mod error;
pub mod eval;
pub mod player;
pub mod score;
pub mod search;

// Re-exports for convenient access
pub use board::{Board, Player, Pos, NEIGHBOR_OFFSETS};
pub use bridge::{at_risk_bridges, broken_bridge_move, carriers, is_bridge, pending_bridges};
pub use connect::{is_connected, on_path, winner};
pub use error::EngineError;
pub use eval::{evaluate, WIN_VALUE};
pub use player::HexPlayer;
pub use score::{scored_moves, ScoreWeights};
pub use search::{search, SearchConfig, SearchOutcome};
