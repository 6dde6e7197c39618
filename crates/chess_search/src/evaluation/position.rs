//! Full position evaluation
//!
//! Combines every term into a single White-positive score. Per-side terms are computed for each
//! colour from that colour's point of view and subtracted; terms that only make sense for the
//! whole board (mobility, space, exchange and opening bias) are signed directly.

use super::activity::{mobility, space};
use super::king::{king_activity, king_safety};
use super::material::{exchange_bias, material};
use super::opening::opening_bias;
use super::pawns::{pawn_majority, pawn_structure};
use super::pieces::{development, piece_placement};
use super::pst::pst_value;
use super::Phase;
use crate::config::EvalWeights;
use crate::constants::{Score, DRAW_SCORE, MATE_SCORE};
use crate::position::Position;
use chess::{BoardStatus, Color, ALL_PIECES};

/// Static evaluator parameterised by a weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub const fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Score in centipawns, positive when White is better
    ///
    /// Checkmate scores `MATE_SCORE` in favour of the side that delivered it; stalemate is
    /// exactly [`DRAW_SCORE`].
    pub fn evaluate<P: Position>(&self, position: &P) -> Score {
        let to_move = sign(position.side_to_move());
        match position.status() {
            BoardStatus::Checkmate => return -to_move * MATE_SCORE,
            BoardStatus::Stalemate => return DRAW_SCORE,
            BoardStatus::Ongoing => {}
        }

        let w = &self.weights;
        let phase = Phase::of(position);
        let white_material = material(position, Color::White);
        let black_material = material(position, Color::Black);

        let mut score = white_material - black_material;
        score += self.side_score(position, Color::White, phase) - self.side_score(position, Color::Black, phase);
        score += space(position, w);
        score += exchange_bias(white_material, black_material, w);
        score += to_move * (mobility(position, w) + opening_bias(position, w));
        score
    }

    /// Score from the side to move's point of view
    pub fn evaluate_relative<P: Position>(&self, position: &P) -> Score {
        sign(position.side_to_move()) * self.evaluate(position)
    }

    /// Positional terms for one side, material excluded
    fn side_score<P: Position>(&self, position: &P, color: Color, phase: Phase) -> Score {
        let w = &self.weights;
        let king_endgame = phase.is_king_endgame();

        let placement: Score = ALL_PIECES
            .iter()
            .flat_map(|&piece| position.pieces(piece, color).map(move |sq| (piece, sq)))
            .map(|(piece, square)| pst_value(piece, square, color, king_endgame))
            .sum();

        placement
            + pawn_structure(position, color, w)
            + pawn_majority(position, color, w)
            + piece_placement(position, color, phase, w)
            + king_safety(position, color, phase, w)
            + king_activity(position, color, phase, w)
            + development(position, color) * w.development
    }
}

#[inline]
fn sign(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Evaluate with the default weights
pub fn evaluate<P: Position>(position: &P) -> Score {
    Evaluator::default().evaluate(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessPosition;
    use crate::config::DEFAULT_WEIGHTS;

    fn no_opening_bias() -> Evaluator {
        Evaluator::new(EvalWeights {
            opening_bias: 0,
            ..DEFAULT_WEIGHTS
        })
    }

    #[test]
    fn test_starting_position_is_balanced_apart_from_tempo() {
        let pos = ChessPosition::startpos();
        let eval = no_opening_bias();
        // Only mobility, which belongs to the side to move
        assert_eq!(eval.evaluate(&pos), mobility(&pos, &DEFAULT_WEIGHTS));
    }

    #[test]
    fn test_checkmate_favours_the_mating_side() {
        // Fool's mate: white is mated
        let mut pos = ChessPosition::startpos();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            pos.play(mv).unwrap();
        }
        assert_eq!(pos.status(), BoardStatus::Checkmate);
        assert_eq!(evaluate(&pos), -MATE_SCORE);
        assert_eq!(Evaluator::default().evaluate_relative(&pos), -MATE_SCORE);
    }

    #[test]
    fn test_black_mated_is_positive() {
        let pos = ChessPosition::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(evaluate(&pos), MATE_SCORE);
        assert_eq!(Evaluator::default().evaluate_relative(&pos), -MATE_SCORE);
    }

    #[test]
    fn test_stalemate_is_zero() {
        let pos = ChessPosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(pos.status(), BoardStatus::Stalemate);
        assert_eq!(evaluate(&pos), 0);
    }

    #[test]
    fn test_extra_queen_dominates() {
        let pos = ChessPosition::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert!(evaluate(&pos) > 800);
    }

    #[test]
    fn test_relative_score_flips_with_side_to_move() {
        let white = ChessPosition::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let black = ChessPosition::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").unwrap();
        let eval = Evaluator::default();
        assert!(eval.evaluate_relative(&white) > 0);
        assert!(eval.evaluate_relative(&black) < 0);
    }

    #[test]
    fn test_evaluation_is_colour_symmetric() {
        let eval = Evaluator::default();
        for fen in [
            crate::constants::START_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
            "r3k2r/pp3ppp/2n1b3/3qp3/8/2NB1N2/PPP2PPP/R2QK2R w KQkq - 0 9",
            "8/5pk1/6p1/3R4/8/6P1/5PK1/2r5 b - - 3 41",
            "rnbqkb1r/pp2pppp/3p1n2/8/3NP3/8/PPP2PPP/RNBQKB1R w KQkq - 1 5",
        ] {
            let pos = ChessPosition::from_fen(fen).unwrap();
            let flipped = pos.color_flipped().unwrap();
            assert_eq!(eval.evaluate(&pos), -eval.evaluate(&flipped), "{fen}");
        }
    }

    #[test]
    fn test_opening_hint_counts_for_both_colours() {
        let eval = Evaluator::default();
        let start = ChessPosition::startpos();
        let with_hint = eval.evaluate(&start);
        assert_eq!(with_hint - no_opening_bias().evaluate(&start), DEFAULT_WEIGHTS.opening_bias);
        assert_eq!(eval.evaluate(&start.color_flipped().unwrap()), -with_hint);
    }
}
