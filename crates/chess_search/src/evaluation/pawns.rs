//! Pawn structure: passed, isolated and doubled pawns, and flank majority

use super::{rank_ahead, relative_rank, square_at};
use crate::config::EvalWeights;
use crate::constants::Score;
use crate::position::Position;
use chess::{BitBoard, Color, Piece, Square, EMPTY};

fn files_around(file: usize) -> std::ops::RangeInclusive<usize> {
    file.saturating_sub(1)..=(file + 1).min(7)
}

/// No enemy pawn ahead on the same or an adjacent file
pub(super) fn is_passed(square: Square, color: Color, enemy_pawns: BitBoard) -> bool {
    let file = square.get_file().to_index();
    let mut rank = square.get_rank().to_index();
    while let Some(next) = rank_ahead(rank, color, 1) {
        for f in files_around(file) {
            if enemy_pawns & BitBoard::from_square(square_at(f, next)) != EMPTY {
                return false;
            }
        }
        rank = next;
    }
    true
}

fn pawns_per_file(pawns: BitBoard) -> [i32; 8] {
    let mut per_file = [0; 8];
    for square in pawns {
        per_file[square.get_file().to_index()] += 1;
    }
    per_file
}

/// Passed, isolated and doubled pawn terms for `color`
pub(super) fn pawn_structure<P: Position>(position: &P, color: Color, weights: &EvalWeights) -> Score {
    let own = position.pieces(Piece::Pawn, color);
    let enemy = position.pieces(Piece::Pawn, !color);
    let per_file = pawns_per_file(own);
    let mut score = 0;

    for square in own {
        if is_passed(square, color, enemy) {
            score += weights.passed_pawn_base
                + weights.passed_pawn_advance * relative_rank(square, color) as Score;
        }

        let file = square.get_file().to_index();
        let supported = files_around(file)
            .filter(|&f| f != file)
            .any(|f| per_file[f] > 0);
        if !supported {
            score += weights.isolated_pawn;
        }
    }

    for count in per_file {
        if count > 1 {
            score += weights.doubled_pawn * (count - 1);
        }
    }

    score
}

/// Difference between queenside (a-d) and kingside (e-h) pawn counts
pub(super) fn pawn_majority<P: Position>(position: &P, color: Color, weights: &EvalWeights) -> Score {
    let per_file = pawns_per_file(position.pieces(Piece::Pawn, color));
    let queenside: i32 = per_file[..4].iter().sum();
    let kingside: i32 = per_file[4..].iter().sum();
    (queenside - kingside).abs() * weights.pawn_majority
}
