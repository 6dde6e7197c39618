//! Mobility and central space

use super::pieces::CENTER_SQUARES;
use crate::config::EvalWeights;
use crate::constants::Score;
use crate::position::Position;
use chess::Color;

/// Weighted legal move count for the side to move, positive for that side
pub(super) fn mobility<P: Position>(position: &P, weights: &EvalWeights) -> Score {
    let raw: i32 = position
        .legal_moves()
        .into_iter()
        .map(|mv| {
            if position.move_kind(mv).is_capture() {
                weights.mobility_capture
            } else {
                weights.mobility_quiet
            }
        })
        .sum();
    raw * weights.mobility_scale_num / weights.mobility_scale_den
}

/// Attackers of `color` on the four central squares
pub(super) fn center_attackers<P: Position>(position: &P, color: Color) -> i32 {
    CENTER_SQUARES
        .iter()
        .map(|&square| position.attackers(square, color).popcnt() as i32)
        .sum()
}

/// Central control balance from White's point of view
pub(super) fn space<P: Position>(position: &P, weights: &EvalWeights) -> Score {
    (center_attackers(position, Color::White) - center_attackers(position, Color::Black)) * weights.space
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessPosition;
    use crate::config::DEFAULT_WEIGHTS;

    #[test]
    fn test_starting_mobility() {
        // 20 quiet moves, scaled by 2/10
        let pos = ChessPosition::startpos();
        assert_eq!(mobility(&pos, &DEFAULT_WEIGHTS), 4);
    }

    #[test]
    fn test_captures_weigh_more() {
        let quiet = ChessPosition::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1").unwrap();
        let capture = ChessPosition::from_fen("4k3/8/8/8/8/8/7p/4K2R w - - 0 1").unwrap();
        assert!(mobility(&capture, &DEFAULT_WEIGHTS) >= mobility(&quiet, &DEFAULT_WEIGHTS));
    }

    #[test]
    fn test_space_after_e4() {
        let mut pos = ChessPosition::startpos();
        assert_eq!(space(&pos, &DEFAULT_WEIGHTS), 0);
        pos.play("e2e4").unwrap();
        // e4 pawn hits d5, the f1 bishop and queen open up nothing central yet
        assert_eq!(center_attackers(&pos, Color::White), 1);
        assert_eq!(space(&pos, &DEFAULT_WEIGHTS), DEFAULT_WEIGHTS.space);
    }
}
