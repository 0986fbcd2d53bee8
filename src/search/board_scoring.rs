//! Pluggable board evaluation interfaces and the baseline implementation.
//!
//! Search remains modular by delegating static position scoring to this
//! trait, allowing alternate heuristics to be swapped without altering
//! search code.

use chess::{Board, Color, Piece, Square, ALL_SQUARES};

use crate::scoring::{conventional_score, Score};

/// Static position evaluation.
///
/// Scores are absolute: positive always favors White and negative always
/// favors Black, regardless of the side to move. Implementations must be
/// pure — same board, same score, no mutation.
pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> Score;
}

/// Positional bonus table for pawns, indexed with `0 == a1` through
/// `63 == h8` for White; Black pawns read the mirrored entry `63 - square`.
const PAWN_TABLE: [Score; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    50, 50, 50, 50, 50, 50, 50, 50, //
    10, 10, 20, 30, 30, 20, 10, 10, //
    5, 5, 10, 25, 25, 10, 5, 5, //
    0, 0, 0, 20, 20, 0, 0, 0, //
    5, -5, -10, 0, 0, -10, -5, 5, //
    5, 10, 10, -20, -20, 10, 10, 5, //
    0, 0, 0, 0, 0, 0, 0, 0, //
];

/// The four central squares that earn an occupancy bonus.
const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::D5, Square::E4, Square::E5];

/// Bonus for occupying a center square, signed by the occupant's color.
const CENTER_BONUS: Score = 50;

/// Bonus per castling right White still retains. Black's rights are not
/// scored; the asymmetry is part of the evaluation's defined behavior.
const CASTLING_RIGHTS_BONUS: Score = 30;

/// Material-plus-position scorer: conventional piece values, a pawn
/// piece-square table, center occupancy, and White's castling rights.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPositionalScorer;

impl BoardScorer for MaterialPositionalScorer {
    fn score(&self, board: &Board) -> Score {
        let mut score = 0;

        for square in ALL_SQUARES {
            let piece = match board.piece_on(square) {
                Some(piece) => piece,
                None => continue,
            };
            let color = match board.color_on(square) {
                Some(color) => color,
                None => continue,
            };

            let mut value = conventional_score(piece);
            if piece == Piece::Pawn {
                let index = square.to_index();
                value += match color {
                    Color::White => PAWN_TABLE[index],
                    Color::Black => PAWN_TABLE[63 - index],
                };
            }

            score += match color {
                Color::White => value,
                Color::Black => -value,
            };
        }

        for square in CENTER_SQUARES {
            match board.color_on(square) {
                Some(Color::White) => score += CENTER_BONUS,
                Some(Color::Black) => score -= CENTER_BONUS,
                None => {}
            }
        }

        let white_rights = board.castle_rights(Color::White);
        if white_rights.has_kingside() {
            score += CASTLING_RIGHTS_BONUS;
        }
        if white_rights.has_queenside() {
            score += CASTLING_RIGHTS_BONUS;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn starting_position_scores_whites_castling_rights_only() {
        // Material and pawn-table terms cancel by symmetry; only White's two
        // castling rights remain.
        let board = Board::default();
        assert_eq!(MaterialPositionalScorer.score(&board), 60);
    }

    #[test]
    fn evaluation_is_pure() {
        let board = Board::default();
        let scorer = MaterialPositionalScorer;
        assert_eq!(scorer.score(&board), scorer.score(&board));
    }

    #[test]
    fn black_castling_rights_earn_nothing() {
        let only_black = Board::from_str(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w kq - 0 1",
        )
        .expect("valid FEN");
        assert_eq!(MaterialPositionalScorer.score(&only_black), 0);
    }

    #[test]
    fn mirrored_pawns_score_symmetrically() {
        // A white pawn on e4 and a black pawn on e5 read the same table
        // entry through the mirror and pick up the same center bonus.
        let white = Board::from_str("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("valid FEN");
        let black = Board::from_str("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        let scorer = MaterialPositionalScorer;
        assert_eq!(scorer.score(&white), -scorer.score(&black));
        assert_eq!(scorer.score(&white), 100 + 25 + 50);
    }

    #[test]
    fn center_occupancy_is_signed_by_occupant() {
        let knight_d5 = Board::from_str("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        // Knight material plus center bonus, no pawn-table term for knights.
        assert_eq!(MaterialPositionalScorer.score(&knight_d5), 320 + 50);
    }

    #[test]
    fn score_does_not_flip_with_side_to_move() {
        let white_to_move =
            Board::from_str("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("valid FEN");
        let black_to_move =
            Board::from_str("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").expect("valid FEN");
        let scorer = MaterialPositionalScorer;
        assert_eq!(scorer.score(&white_to_move), scorer.score(&black_to_move));
    }
}
