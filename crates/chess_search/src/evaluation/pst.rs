//! Piece-square tables
//!
//! Tables are written from White's side with a1 first (index = rank * 8 + file). Black pieces
//! read the table reflected across the horizontal midline (`index ^ 56`).

use chess::{Color, Piece, Square};

const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

const KNIGHT_PST: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

const BISHOP_PST: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

const ROOK_PST: [i32; 64] = [
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
    25, 25, 25, 25, 25, 25, 25, 25,
     0,  0,  5, 10, 10,  5,  0,  0,
];

const QUEEN_PST: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

const KING_PST_MIDDLEGAME: [i32; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

const KING_PST_ENDGAME: [i32; 64] = [
   -50,-30,-30,-30,-30,-30,-30,-50,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -50,-40,-30,-20,-20,-30,-40,-50,
];

/// Positional bonus for `piece` of `color` on `square`, from that side's point of view
pub fn pst_value(piece: Piece, square: Square, color: Color, king_endgame: bool) -> i32 {
    let index = match color {
        Color::White => square.to_index(),
        Color::Black => square.to_index() ^ 56,
    };

    let table = match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King if king_endgame => &KING_PST_ENDGAME,
        Piece::King => &KING_PST_MIDDLEGAME,
    };

    table[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(name: &str) -> Square {
        Square::from_str(name).unwrap()
    }

    #[test]
    fn test_tables_mirror_between_colors() {
        for piece in chess::ALL_PIECES {
            assert_eq!(
                pst_value(piece, sq("e4"), Color::White, false),
                pst_value(piece, sq("e5"), Color::Black, false)
            );
            assert_eq!(
                pst_value(piece, sq("b7"), Color::White, true),
                pst_value(piece, sq("b2"), Color::Black, true)
            );
        }
    }

    #[test]
    fn test_central_pawn_push_is_rewarded() {
        assert!(pst_value(Piece::Pawn, sq("e4"), Color::White, false) > pst_value(Piece::Pawn, sq("e2"), Color::White, false));
        assert!(pst_value(Piece::Pawn, sq("d5"), Color::Black, false) > pst_value(Piece::Pawn, sq("d7"), Color::Black, false));
    }

    #[test]
    fn test_king_prefers_shelter_in_midgame_and_centre_in_endgame() {
        let corner = sq("g1");
        let centre = sq("e4");
        assert!(pst_value(Piece::King, corner, Color::White, false) > pst_value(Piece::King, centre, Color::White, false));
        assert!(pst_value(Piece::King, centre, Color::White, true) > pst_value(Piece::King, corner, Color::White, true));
    }
}
