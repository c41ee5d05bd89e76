//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the grid for debugging, tests,
//! and diagnostics in text environments.

use crate::board::grid::Cell;
use crate::board::piece::{PieceKind, Side};
use crate::board::square::Square;
use crate::game::game_state::GameState;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (1..=8u8).rev() {
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match state.grid.cell(Square::from_file_rank(file, rank)) {
                Cell::Occupied(side, kind) => out.push(piece_to_unicode(side, kind)),
                _ => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(side: Side, kind: PieceKind) -> char {
    match (side, kind) {
        (Side::Light, PieceKind::Pawn) => '♙',
        (Side::Light, PieceKind::Knight) => '♘',
        (Side::Light, PieceKind::Bishop) => '♗',
        (Side::Light, PieceKind::Rook) => '♖',
        (Side::Light, PieceKind::Queen) => '♕',
        (Side::Light, PieceKind::King) => '♔',
        (Side::Dark, PieceKind::Pawn) => '♟',
        (Side::Dark, PieceKind::Knight) => '♞',
        (Side::Dark, PieceKind::Bishop) => '♝',
        (Side::Dark, PieceKind::Rook) => '♜',
        (Side::Dark, PieceKind::Queen) => '♛',
        (Side::Dark, PieceKind::King) => '♚',
    }
}
