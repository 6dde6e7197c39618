//! King safety and king activity

use super::{rank_ahead, square_at, Phase};
use crate::config::EvalWeights;
use crate::constants::Score;
use crate::position::Position;
use chess::{Color, Piece, Square};

fn king_square<P: Position>(position: &P, color: Color) -> Option<Square> {
    position.pieces(Piece::King, color).next()
}

/// Own pawns on the king's file and its neighbours, from the king's rank up to two ranks ahead
pub(super) fn shield_pawns<P: Position>(position: &P, color: Color) -> i32 {
    let Some(king) = king_square(position, color) else {
        return 0;
    };
    let file = king.get_file().to_index();
    let rank = king.get_rank().to_index();

    let mut count = 0;
    for f in file.saturating_sub(1)..=(file + 1).min(7) {
        for r in (0..=2).filter_map(|steps| rank_ahead(rank, color, steps)) {
            if position.is_pawn_of(square_at(f, r), color) {
                count += 1;
            }
        }
    }
    count
}

/// Pawn shield, fading out towards the endgame
pub(super) fn king_safety<P: Position>(position: &P, color: Color, phase: Phase, weights: &EvalWeights) -> Score {
    phase.midgame_scaled(shield_pawns(position, color) * weights.king_shield)
}

/// Centralisation bonus, growing towards the endgame
pub(super) fn king_activity<P: Position>(position: &P, color: Color, phase: Phase, weights: &EvalWeights) -> Score {
    let Some(king) = king_square(position, color) else {
        return 0;
    };
    let file = king.get_file().to_index() as i32;
    let rank = king.get_rank().to_index() as i32;
    // Twice the Manhattan distance to the centre point, so it stays integral
    let distance2 = (7 - 2 * file).abs() + (7 - 2 * rank).abs();
    phase.endgame_scaled((8 - distance2) * weights.king_activity) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessPosition;
    use crate::config::DEFAULT_WEIGHTS;

    #[test]
    fn test_castled_king_shield() {
        let pos = ChessPosition::from_fen("6k1/5ppp/8/8/8/8/5PPP/6K1 w - - 0 1").unwrap();
        assert_eq!(shield_pawns(&pos, Color::White), 3);
        assert_eq!(shield_pawns(&pos, Color::Black), 3);
        let phase = Phase::of(&pos);
        assert_eq!(
            king_safety(&pos, Color::White, phase, &DEFAULT_WEIGHTS),
            king_safety(&pos, Color::Black, phase, &DEFAULT_WEIGHTS)
        );
    }

    #[test]
    fn test_enemy_pawns_are_not_shield() {
        let pos = ChessPosition::from_fen("6k1/8/8/8/8/5ppp/7P/6K1 w - - 0 1").unwrap();
        assert_eq!(shield_pawns(&pos, Color::White), 1);
        assert_eq!(shield_pawns(&pos, Color::Black), 0);
    }

    #[test]
    fn test_no_activity_in_opening() {
        let pos = ChessPosition::startpos();
        let phase = Phase::of(&pos);
        assert_eq!(king_activity(&pos, Color::White, phase, &DEFAULT_WEIGHTS), 0);
        assert_eq!(
            king_safety(&pos, Color::White, phase, &DEFAULT_WEIGHTS),
            3 * DEFAULT_WEIGHTS.king_shield
        );
    }

    #[test]
    fn test_central_king_beats_corner_king_in_endgame() {
        let pos = ChessPosition::from_fen("7k/8/8/8/3K4/8/8/8 w - - 0 1").unwrap();
        let phase = Phase::of(&pos);
        let centre = king_activity(&pos, Color::White, phase, &DEFAULT_WEIGHTS);
        let corner = king_activity(&pos, Color::Black, phase, &DEFAULT_WEIGHTS);
        assert_eq!(centre, 3 * DEFAULT_WEIGHTS.king_activity);
        assert_eq!(corner, -3 * DEFAULT_WEIGHTS.king_activity);
    }
}
