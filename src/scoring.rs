//! Scoring primitives for the chess engine.
//!
//! This module centralizes the score type, piece valuations, and the
//! sentinel bounds that seed alpha-beta search. Scores are integer
//! centipawns in an absolute convention: positive values favor White and
//! negative values favor Black, regardless of which side is to move.

use chess::Piece;

/// Numeric representation of an evaluation score, in centipawns.
///
/// Positive favors White, negative favors Black. The convention is absolute:
/// it does not flip with the side to move.
pub type Score = i32;

/// Lower sentinel seeding `alpha` at the search root.
///
/// Chosen far outside the reachable evaluation range (|eval| < 50_000) so it
/// can never collide with a real position score.
pub const MIN_SCORE: Score = -1_000_000;

/// Upper sentinel seeding `beta` at the search root.
pub const MAX_SCORE: Score = 1_000_000;

/// Conventional material value for a piece, in centipawns.
///
/// - Pawn:   100
/// - Knight: 320
/// - Bishop: 330
/// - Rook:   500
/// - Queen:  900
/// - King:   20000 (effectively priceless; dominates all other terms)
#[inline]
pub const fn conventional_score(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 20000,
    }
}
