//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the play loop, tests, and
//! diagnostics in text environments.

use chess::{Board, Color, Piece, Rank, Square, ALL_FILES};

/// Render the board to a Unicode string for terminal output.
///
/// Ranks are printed from 8 down to 1 so White sits at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for (i, file) in ALL_FILES.iter().enumerate() {
            let square = Square::make_square(Rank::from_index(rank), *file);
            match (board.piece_on(square), board.color_on(square)) {
                (Some(piece), Some(color)) => out.push(piece_to_unicode(color, piece)),
                _ => out.push('·'),
            }

            if i < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: Piece) -> char {
    match (color, piece) {
        (Color::White, Piece::Pawn) => '♙',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::King) => '♔',
        (Color::Black, Piece::Pawn) => '♟',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_starting_position() {
        let rendered = render_board(&Board::default());
        assert!(rendered.starts_with("  a b c d e f g h"));
        assert!(rendered.contains('♔'));
        assert!(rendered.contains('♚'));
        // Eight board ranks plus the two file-label lines.
        assert_eq!(rendered.lines().count(), 10);
    }
}
