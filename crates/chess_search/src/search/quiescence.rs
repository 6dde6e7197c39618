//! Quiescence search to avoid horizon effect
//!
//! Only captures are searched. The side to move may "stand pat" on the static evaluation, so the
//! result is never below it unless the position is terminal.

use super::make_unmake::MoveGuard;
use super::ordering::order_captures;
use super::Searcher;
use crate::constants::{Score, DRAW_SCORE, MATE_SCORE, MAX_PLY};
use crate::position::Position;
use chess::BoardStatus;

/// Score for the side to move at a terminal node `ply` plies below the root
#[inline]
pub(crate) fn terminal_score(status: BoardStatus, ply: usize) -> Option<Score> {
    match status {
        BoardStatus::Checkmate => Some(-(MATE_SCORE - ply as Score)),
        BoardStatus::Stalemate => Some(DRAW_SCORE),
        BoardStatus::Ongoing => None,
    }
}

impl Searcher<'_> {
    /// Fail-hard capture search in the window `(alpha, beta)`
    pub(crate) fn quiesce<P: Position>(&mut self, position: &mut P, mut alpha: Score, beta: Score, ply: usize) -> Score {
        self.stats.qnodes += 1;

        if let Some(score) = terminal_score(position.status(), ply) {
            return score.clamp(alpha, beta);
        }

        let stand_pat = self.evaluator.evaluate_relative(position);
        if stand_pat >= beta {
            self.stats.cutoffs += 1;
            return beta;
        }
        alpha = alpha.max(stand_pat);

        if ply >= MAX_PLY {
            return alpha;
        }

        for mv in order_captures(position, position.legal_moves()) {
            let score = {
                let mut child = MoveGuard::new(position, mv);
                -self.quiesce(&mut *child, -beta, -alpha, ply + 1)
            };

            if score >= beta {
                self.stats.cutoffs += 1;
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessPosition;
    use crate::constants::INFINITY;
    use crate::evaluation::Evaluator;
    use crate::hash::TranspositionTable;
    use crate::search::SearchStats;

    fn quiesce_full(pos: &mut ChessPosition) -> (Score, SearchStats) {
        let mut tt = TranspositionTable::new(16);
        let evaluator = Evaluator::default();
        let mut stats = SearchStats::default();
        let score = Searcher::new(&mut tt, &evaluator, &mut stats).quiesce(pos, -INFINITY, INFINITY, 0);
        (score, stats)
    }

    #[test]
    fn test_quiet_position_returns_static_eval() {
        let mut pos = ChessPosition::startpos();
        let (score, stats) = quiesce_full(&mut pos);
        assert_eq!(score, Evaluator::default().evaluate_relative(&pos));
        assert_eq!(stats.qnodes, 1);
    }

    #[test]
    fn test_hanging_queen_is_taken() {
        // White to move can win the d5 queen with the e4 pawn
        let mut pos = ChessPosition::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let static_eval = Evaluator::default().evaluate_relative(&pos);
        let key = pos.key();
        let (score, _) = quiesce_full(&mut pos);
        assert!(score > static_eval + 500);
        assert_eq!(pos.key(), key);
    }

    #[test]
    fn test_mated_side_scores_mate() {
        let mut pos = ChessPosition::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let (score, _) = quiesce_full(&mut pos);
        assert_eq!(score, -MATE_SCORE);
    }

    #[test]
    fn test_stand_pat_cutoff_returns_beta() {
        let mut pos = ChessPosition::from_fen("4k3/8/8/8/8/8/8/QQQQK3 w - - 0 1").unwrap();
        let mut tt = TranspositionTable::new(16);
        let evaluator = Evaluator::default();
        let mut stats = SearchStats::default();
        let score = Searcher::new(&mut tt, &evaluator, &mut stats).quiesce(&mut pos, -100, 100, 0);
        assert_eq!(score, 100);
        assert_eq!(stats.cutoffs, 1);
    }
}
