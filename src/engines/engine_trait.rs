//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use chess::{Board, ChessMove};

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Override of the engine's configured search depth, in plies.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The selected move, or `None` when the position offers no legal move.
    pub best_move: Option<ChessMove>,
    /// Human-readable diagnostics emitted during selection.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> Result<EngineOutput, String>;
}
