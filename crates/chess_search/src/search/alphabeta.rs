//! Alpha-beta search with negamax
//!
//! Recursive, depth-limited search. Every node first consults the transposition table; leaves
//! and terminal nodes hand over to quiescence search. Results are written back with a bound flag
//! describing how they relate to the window they were searched with.

use super::make_unmake::MoveGuard;
use super::ordering::order_moves;
use super::Searcher;
use crate::constants::{Score, INFINITY, MAX_PLY};
use crate::hash::Bound;
use crate::position::Position;

#[inline]
fn bound_for(score: Score, original_alpha: Score, beta: Score) -> Bound {
    if score <= original_alpha {
        Bound::UpperBound
    } else if score >= beta {
        Bound::LowerBound
    } else {
        Bound::Exact
    }
}

impl Searcher<'_> {
    /// Score of `position` for the side to move, searched `depth` plies deep
    pub(crate) fn alphabeta<P: Position>(
        &mut self,
        position: &mut P,
        depth: u8,
        mut alpha: Score,
        beta: Score,
        ply: usize,
    ) -> Score {
        self.stats.nodes += 1;
        let key = position.key();
        let original_alpha = alpha;

        if let Some(entry) = self.tt.probe(key, depth, ply) {
            if entry.cuts(alpha, beta) {
                self.stats.tt_hits += 1;
                return entry.value;
            }
        }

        if depth == 0 || position.is_game_over() || ply >= MAX_PLY {
            let score = self.quiesce(position, alpha, beta, ply);
            self.tt
                .store(key, score, depth, bound_for(score, original_alpha, beta), None, ply);
            return score;
        }

        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in order_moves(position, position.legal_moves()) {
            let score = {
                let mut child = MoveGuard::new(position, mv);
                -self.alphabeta(&mut *child, depth - 1, -beta, -alpha, ply + 1)
            };

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.tt.store(
            key,
            best_score,
            depth,
            bound_for(best_score, original_alpha, beta),
            best_move,
            ply,
        );
        best_score
    }
}
