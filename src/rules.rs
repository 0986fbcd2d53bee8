//! Rules adapter over the `chess` crate.
//!
//! The engine core never implements chess rules itself; this module is the
//! single seam through which it consumes legal move generation, terminal
//! detection, and draw adjudication. Positions are applied copy-on-apply
//! (`Board::make_move_new`), so callers never mutate a shared board.

use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square, ALL_SQUARES};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The side to move has been checkmated; `winner` delivered the mate.
    Checkmate { winner: Color },
    /// The side to move has no legal move but is not in check.
    Stalemate,
    /// Neither side retains enough material to ever deliver mate.
    InsufficientMaterial,
}

/// All legal moves for the side to move, in the generator's deterministic
/// enumeration order. Regenerated on every call.
pub fn legal_moves(board: &Board) -> Vec<ChessMove> {
    MoveGen::new_legal(board).collect()
}

/// True once the game has ended by checkmate, stalemate, or the
/// insufficient-material draw.
pub fn is_game_over(board: &Board) -> bool {
    board.status() != BoardStatus::Ongoing || insufficient_material(board)
}

/// Classify a finished game, or `None` while play continues.
pub fn game_outcome(board: &Board) -> Option<GameOutcome> {
    match board.status() {
        BoardStatus::Checkmate => Some(GameOutcome::Checkmate {
            winner: !board.side_to_move(),
        }),
        BoardStatus::Stalemate => Some(GameOutcome::Stalemate),
        BoardStatus::Ongoing => {
            if insufficient_material(board) {
                Some(GameOutcome::InsufficientMaterial)
            } else {
                None
            }
        }
    }
}

/// Dead-position detection for the classic drawn endings: K vs K, K+B vs K,
/// K+N vs K, and K+B vs K+B with both bishops on the same square color.
/// Any pawn, rook, or queen on the board keeps the position live.
pub fn insufficient_material(board: &Board) -> bool {
    let mut knights = [0u8; 2];
    let mut bishops = [0u8; 2];
    let mut bishop_color_parity = [0usize; 2];

    for square in ALL_SQUARES {
        let piece = match board.piece_on(square) {
            Some(piece) => piece,
            None => continue,
        };
        let side = match board.color_on(square) {
            Some(Color::White) => 0,
            Some(Color::Black) => 1,
            None => continue,
        };
        match piece {
            Piece::Pawn | Piece::Rook | Piece::Queen => return false,
            Piece::Knight => knights[side] += 1,
            Piece::Bishop => {
                bishops[side] += 1;
                bishop_color_parity[side] = square_color_parity(square);
            }
            Piece::King => {}
        }
    }

    let minors = knights[0] + knights[1] + bishops[0] + bishops[1];
    match minors {
        0 | 1 => true,
        2 => {
            // Only the same-colored opposing bishops pair is dead.
            bishops[0] == 1 && bishops[1] == 1 && bishop_color_parity[0] == bishop_color_parity[1]
        }
        _ => false,
    }
}

#[inline]
fn square_color_parity(square: Square) -> usize {
    (square.get_rank().to_index() + square.get_file().to_index()) % 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn starting_position_is_not_over() {
        let board = Board::default();
        assert!(!is_game_over(&board));
        assert_eq!(game_outcome(&board), None);
        assert_eq!(legal_moves(&board).len(), 20);
    }

    #[test]
    fn fools_mate_is_checkmate_for_black() {
        let board = Board::from_str("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("valid fool's mate FEN");
        assert!(is_game_over(&board));
        assert_eq!(
            game_outcome(&board),
            Some(GameOutcome::Checkmate {
                winner: Color::Black
            })
        );
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let board =
            Board::from_str("k7/8/1Q6/8/8/8/8/7K b - - 0 1").expect("valid stalemate FEN");
        assert_eq!(game_outcome(&board), Some(GameOutcome::Stalemate));
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn bare_kings_are_a_dead_position() {
        let board = Board::from_str("7k/8/8/8/8/8/8/K7 w - - 0 1").expect("valid FEN");
        assert!(insufficient_material(&board));
        assert_eq!(game_outcome(&board), Some(GameOutcome::InsufficientMaterial));
        // Legal king moves still exist even though the game is drawn.
        assert!(!legal_moves(&board).is_empty());
    }

    #[test]
    fn lone_minor_piece_cannot_mate() {
        let knight = Board::from_str("7k/8/8/8/8/8/8/KN6 w - - 0 1").expect("valid FEN");
        assert!(insufficient_material(&knight));

        let bishop = Board::from_str("7k/8/8/8/8/8/8/KB6 w - - 0 1").expect("valid FEN");
        assert!(insufficient_material(&bishop));
    }

    #[test]
    fn opposing_bishops_depend_on_square_color() {
        // c1 and f8 share the dark square color.
        let same = Board::from_str("5b1k/8/8/8/8/8/8/K1B5 w - - 0 1").expect("valid FEN");
        assert!(insufficient_material(&same));

        // c1 is dark, e8 is light.
        let opposite = Board::from_str("4b2k/8/8/8/8/8/8/K1B5 w - - 0 1").expect("valid FEN");
        assert!(!insufficient_material(&opposite));
    }

    #[test]
    fn a_single_pawn_keeps_the_position_live() {
        let board = Board::from_str("7k/8/8/8/8/8/P7/K7 w - - 0 1").expect("valid FEN");
        assert!(!insufficient_material(&board));
        assert!(!is_game_over(&board));
    }
}
