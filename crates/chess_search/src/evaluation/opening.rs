//! Opening bias hints
//!
//! A handful of early positions, each with a short list of sound replies in coordinate notation.
//! When one of them is legal the side to move gets a small bonus. This nudges the engine towards
//! principled first moves; it is not a book.
//!
//! Keys are written with White to move: placement and side to move, plus castling rights where
//! the line needs it. A position with Black to move is looked up through its colour mirror, and
//! its legal moves are mirrored the same way, so both colours see the same hints.

use crate::board::{mirror_castling, mirror_placement};
use crate::config::EvalWeights;
use crate::constants::Score;
use crate::position::Position;
use chess::{Color, Piece, ALL_PIECES};

pub const OPENING_BIAS: &[(&str, &[&str])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        &["e2e4", "d2d4", "g1f3", "c2c4"],
    ),
    // Black to move after 1.e4
    (
        "rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w",
        &["e2e4", "c2c4"],
    ),
    // Black to move after 1.d4
    (
        "rnbqkbnr/ppp1pppp/8/3p4/8/8/PPPPPPPP/RNBQKBNR w",
        &["d2d4", "g1f3"],
    ),
    // Sicilian after 1.e4 c5
    (
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq",
        &["g1f3", "d2d4"],
    ),
];

const FULL_BOARD: u32 = 32;

fn piece_count<P: Position>(position: &P) -> u32 {
    ALL_PIECES
        .iter()
        .map(|&piece: &Piece| {
            position.pieces(piece, Color::White).popcnt() + position.pieces(piece, Color::Black).popcnt()
        })
        .sum()
}

/// Placement, side to move and castling rights of `fen`, seen from the side to move
///
/// With Black to move the board is reflected top to bottom and the colours swapped.
fn lookup_key(fen: &str, color: Color) -> String {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap_or_default();
    let castling = fields.nth(1).unwrap_or("-");

    match color {
        Color::White => format!("{placement} w {castling}"),
        Color::Black => format!("{} w {}", mirror_placement(placement), mirror_castling(castling)),
    }
}

/// Reflect the ranks of a coordinate move, `e7e5` becomes `e2e4`
fn mirror_move(mv: &str) -> String {
    mv.chars()
        .map(|c| match c.to_digit(10) {
            Some(rank @ 1..=8) => char::from_digit(9 - rank, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Bonus for the side to move when a listed reply is available, 0 otherwise
pub(super) fn opening_bias<P: Position>(position: &P, weights: &EvalWeights) -> Score {
    if weights.opening_bias == 0 || piece_count(position) != FULL_BOARD {
        return 0;
    }

    let to_move = position.side_to_move();
    let key = lookup_key(&position.fen(), to_move);
    let Some((_, replies)) = OPENING_BIAS.iter().find(|(prefix, _)| key.starts_with(prefix)) else {
        return 0;
    };

    let available = position.legal_moves().into_iter().any(|mv| {
        let mv = match to_move {
            Color::White => mv.to_string(),
            Color::Black => mirror_move(&mv.to_string()),
        };
        replies.contains(&mv.as_str())
    });
    if available {
        weights.opening_bias
    } else {
        0
    }
}
