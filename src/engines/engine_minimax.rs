//! Fixed-depth minimax engine.
//!
//! Wraps the core alpha-beta minimax search with a configurable default
//! depth and the material-plus-position scorer. This is the engine the
//! play loop fields by default.

use chess::Board;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::search::board_scoring::MaterialPositionalScorer;
use crate::search::minimax::{minimax_root, SearchConfig};

pub struct MinimaxEngine {
    default_depth: u8,
    scorer: MaterialPositionalScorer,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            scorer: MaterialPositionalScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        // Three plies is the stock strength for interactive play.
        Self::new(3)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Damson Minimax"
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> Result<EngineOutput, String> {
        // Honor an explicit depth override first; otherwise fall back to the
        // configured depth for this engine instance. Depth zero is clamped
        // up because a zero-ply search cannot select a move.
        let depth = params.depth.unwrap_or(self.default_depth).max(1);

        let result = minimax_root(board, &self.scorer, SearchConfig { max_depth: depth });

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            depth, result.best_score, result.nodes
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}
