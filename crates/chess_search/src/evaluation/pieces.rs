//! Minor and major piece placement
//!
//! Bishop pair, knight/bishop outposts, rooks on open files, connected rooks, queen
//! centralisation and minor piece development.

use super::{rank_ahead, relative_rank, square_at, Phase};
use crate::config::EvalWeights;
use crate::constants::Score;
use crate::position::Position;
use chess::{BitBoard, Color, Piece, Square, EMPTY};

/// d4, e4, d5, e5
pub(super) const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// An advanced square no enemy pawn guards from behind on an adjacent file
pub(super) fn is_outpost<P: Position>(position: &P, square: Square, color: Color) -> bool {
    if relative_rank(square, color) < 3 {
        return false;
    }
    let file = square.get_file().to_index();
    let Some(behind) = rank_ahead(square.get_rank().to_index(), !color, 1) else {
        return true;
    };
    [file.checked_sub(1), Some(file + 1).filter(|f| *f < 8)]
        .into_iter()
        .flatten()
        .all(|f| !position.is_pawn_of(square_at(f, behind), !color))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RookFile {
    Open,
    SemiOpen,
    Closed,
}

pub(super) fn rook_file<P: Position>(position: &P, square: Square, color: Color) -> RookFile {
    let file = BitBoard::new(0x0101_0101_0101_0101 << square.get_file().to_index());
    let own = position.pieces(Piece::Pawn, color) & file != EMPTY;
    let enemy = position.pieces(Piece::Pawn, !color) & file != EMPTY;
    match (own, enemy) {
        (false, false) => RookFile::Open,
        (false, true) => RookFile::SemiOpen,
        _ => RookFile::Closed,
    }
}

/// Two rooks sharing a rank or file with nothing between them
fn rooks_connected<P: Position>(position: &P, a: Square, b: Square) -> bool {
    let (af, ar) = (a.get_file().to_index(), a.get_rank().to_index());
    let (bf, br) = (b.get_file().to_index(), b.get_rank().to_index());
    let between: Vec<Square> = if af == bf {
        (ar.min(br) + 1..ar.max(br)).map(|r| square_at(af, r)).collect()
    } else if ar == br {
        (af.min(bf) + 1..af.max(bf)).map(|f| square_at(f, ar)).collect()
    } else {
        return false;
    };
    between.into_iter().all(|sq| position.piece_on(sq).is_none())
}

fn home_squares(piece: Piece, color: Color) -> [Square; 2] {
    match (piece, color) {
        (Piece::Knight, Color::White) => [Square::B1, Square::G1],
        (Piece::Knight, Color::Black) => [Square::B8, Square::G8],
        (_, Color::White) => [Square::C1, Square::F1],
        (_, Color::Black) => [Square::C8, Square::F8],
    }
}

/// Placement terms for `color`, from that side's point of view
pub(super) fn piece_placement<P: Position>(
    position: &P,
    color: Color,
    phase: Phase,
    weights: &EvalWeights,
) -> Score {
    let knights = position.pieces(Piece::Knight, color);
    let bishops = position.pieces(Piece::Bishop, color);
    let rooks = position.pieces(Piece::Rook, color);
    let mut score = 0;

    if bishops.popcnt() >= 2 {
        score += weights.bishop_pair;
    }

    for square in knights {
        if is_outpost(position, square, color) {
            score += weights.outpost_knight;
        }
    }
    for square in bishops {
        if is_outpost(position, square, color) {
            score += weights.outpost_bishop;
        }
    }

    for square in position.pieces(Piece::Queen, color) {
        if CENTER_SQUARES.contains(&square) {
            score += phase.midgame_scaled(weights.queen_center);
        }
    }

    let rook_squares: Vec<Square> = rooks.collect();
    for &square in &rook_squares {
        score += match rook_file(position, square, color) {
            RookFile::Open => weights.rook_open_file,
            RookFile::SemiOpen => weights.rook_semiopen_file,
            RookFile::Closed => 0,
        };
    }
    for (i, &a) in rook_squares.iter().enumerate() {
        for &b in &rook_squares[i + 1..] {
            if rooks_connected(position, a, b) {
                score += weights.connected_rooks;
            }
        }
    }

    score
}

/// Minor pieces off their home squares
pub(super) fn development<P: Position>(position: &P, color: Color) -> i32 {
    [Piece::Knight, Piece::Bishop]
        .into_iter()
        .map(|piece| {
            let home = home_squares(piece, color);
            position
                .pieces(piece, color)
                .filter(|sq| !home.contains(sq))
                .count() as i32
        })
        .sum()
}
