//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Implements the fixed-depth game-tree search that drives move selection.
//! Scores follow the absolute convention from `scoring`: positive favors
//! White, and the root always maximizes, with the perspective flag flipping
//! on every ply below it.

use chess::{Board, ChessMove};

use crate::rules;
use crate::scoring::{Score, MAX_SCORE, MIN_SCORE};
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: Score,
    pub nodes: u64,
}

/// Select the best root move by searching every legal reply to `depth - 1`.
///
/// Each root child is searched with fresh sentinel bounds and a minimizing
/// first ply. The move with the strictly greatest value wins; on ties the
/// earlier move in the generator's enumeration order is kept. A position
/// with no legal moves yields `best_move: None` and the static score.
pub fn minimax_root<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut nodes = 0u64;

    if config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(board),
            nodes: 1,
        };
    }

    let moves = rules::legal_moves(board);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(board),
            nodes: 1,
        };
    }

    let mut best_move = None;
    let mut best_score = MIN_SCORE;

    for mv in moves {
        let child = board.make_move_new(mv);
        let value = minimax(
            &child,
            scorer,
            config.max_depth - 1,
            MIN_SCORE,
            MAX_SCORE,
            false,
            &mut nodes,
        );

        if value > best_score {
            best_score = value;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

/// Minimax with alpha-beta pruning.
///
/// Returns the static score once `depth` is exhausted or the position is
/// terminal. Otherwise recurses over every legal move with the perspective
/// flag flipped, tightening `alpha` when maximizing and `beta` when
/// minimizing, and stops examining siblings as soon as `beta <= alpha`.
/// `nodes` counts every call for diagnostics.
pub fn minimax<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    nodes: &mut u64,
) -> Score {
    debug_assert!(alpha <= beta, "search bounds crossed: {alpha} > {beta}");

    *nodes += 1;

    if depth == 0 || rules::is_game_over(board) {
        return scorer.score(board);
    }

    if maximizing {
        let mut best = MIN_SCORE;
        for mv in rules::legal_moves(board) {
            let child = board.make_move_new(mv);
            let value = minimax(&child, scorer, depth - 1, alpha, beta, false, nodes);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = MAX_SCORE;
        for mv in rules::legal_moves(board) {
            let child = board.make_move_new(mv);
            let value = minimax(&child, scorer, depth - 1, alpha, beta, true, nodes);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
