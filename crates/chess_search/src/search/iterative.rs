//! Iterative deepening search
//!
//! Searches the root at depth 1, 2, ... up to the budget's maximum. Each root move is scored
//! with a full window, and the elapsed time is checked before every root move. Those checks are
//! also the only points where the async driver yields.
//!
//! Only completed iterations are trusted. If the budget runs out during depth 1, the best of the
//! root moves compared so far is used instead. If not even one root move was compared, the first
//! ordered legal move is returned.

use super::ordering::order_moves;
use super::quiescence::terminal_score;
use super::{make_unmake::MoveGuard, SearchResult, SearchStats, Searcher};
use crate::config::SearchBudget;
use crate::constants::{Score, INFINITY, MATE_THRESHOLD, TT_DEFAULT_ENTRIES};
use crate::evaluation::Evaluator;
use crate::hash::TranspositionTable;
use crate::position::Position;
use chess::ChessMove;
use futures_lite::future::{block_on, yield_now};
use instant::Instant;
use tracing::{debug, info, warn};

/// Session-scoped search state: transposition table, evaluator and the last search's counters
#[derive(Debug, Clone)]
pub struct Engine {
    tt: TranspositionTable,
    evaluator: Evaluator,
    stats: SearchStats,
}

impl Engine {
    /// Engine with a table of about `tt_entries` entries and default evaluation weights
    pub fn new(tt_entries: usize) -> Self {
        Self::with_evaluator(tt_entries, Evaluator::default())
    }

    pub fn with_evaluator(tt_entries: usize, evaluator: Evaluator) -> Self {
        Self {
            tt: TranspositionTable::new(tt_entries),
            evaluator,
            stats: SearchStats::default(),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Counters from the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Forget everything learned in earlier searches
    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats = SearchStats::default();
    }

    /// White-positive static evaluation
    pub fn evaluate<P: Position>(&self, position: &P) -> Score {
        self.evaluator.evaluate(position)
    }

    /// Best move within `budget`, `None` only when there are no legal moves
    pub fn find_best_move<P: Position>(&mut self, position: &mut P, budget: SearchBudget) -> Option<ChessMove> {
        self.search(position, budget).best_move
    }

    /// Blocking iterative deepening search
    pub fn search<P: Position>(&mut self, position: &mut P, budget: SearchBudget) -> SearchResult {
        block_on(self.iterative_deepening(position, budget))
    }

    /// Iterative deepening search that yields before every root move
    pub async fn iterative_deepening<P: Position>(&mut self, position: &mut P, budget: SearchBudget) -> SearchResult {
        let start = Instant::now();
        let out_of_time = |start: Instant| start.elapsed() >= budget.time_limit();

        self.stats = SearchStats::default();
        self.tt.new_search();

        let root_moves = order_moves(position, position.legal_moves());
        let Some(&first_move) = root_moves.first() else {
            return self.no_moves(position);
        };

        let mut completed: Option<(ChessMove, Score)> = None;
        let mut depth_reached = 0;

        for depth in 1..=budget.max_depth() {
            let mut best: Option<(ChessMove, Score)> = None;
            let mut finished = true;

            for &mv in &root_moves {
                if out_of_time(start) {
                    finished = false;
                    break;
                }
                yield_now().await;

                let score = self.score_root_move(position, mv, depth);
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((mv, score));
                }
            }

            if !finished {
                if completed.is_none() {
                    warn!(depth, compared = best.is_some(), "time ran out before the first iteration completed");
                    completed = best;
                }
                break;
            }

            completed = best;
            depth_reached = depth;
            if let Some((mv, score)) = best {
                debug!(
                    depth,
                    score,
                    best_move = %mv,
                    nodes = self.stats.total_nodes(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "iteration complete"
                );
                if score.abs() > MATE_THRESHOLD {
                    break;
                }
            }

            if out_of_time(start) {
                break;
            }
        }

        let (best_move, score) =
            completed.unwrap_or_else(|| (first_move, self.evaluator.evaluate_relative(position)));

        info!(
            best_move = %best_move,
            score,
            depth = depth_reached,
            nodes = self.stats.total_nodes(),
            tt_hits = self.stats.tt_hits,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move: Some(best_move),
            score,
            depth_reached,
            stats: self.stats,
        }
    }

    /// One-shot fixed-depth root search with no time limit
    pub fn search_root<P: Position>(&mut self, position: &mut P, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        self.tt.new_search();

        let mut best: Option<(ChessMove, Score)> = None;
        for mv in order_moves(position, position.legal_moves()) {
            let score = self.score_root_move(position, mv, depth.max(1));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        match best {
            Some((mv, score)) => SearchResult {
                best_move: Some(mv),
                score,
                depth_reached: depth.max(1),
                stats: self.stats,
            },
            None => self.no_moves(position),
        }
    }

    /// Full-window alpha-beta score of `position` for the side to move
    pub fn search_score<P: Position>(&mut self, position: &mut P, depth: u8) -> Score {
        Searcher::new(&mut self.tt, &self.evaluator, &mut self.stats).alphabeta(position, depth, -INFINITY, INFINITY, 0)
    }

    /// Full-window quiescence score of `position` for the side to move
    pub fn quiescence_score<P: Position>(&mut self, position: &mut P) -> Score {
        Searcher::new(&mut self.tt, &self.evaluator, &mut self.stats).quiesce(position, -INFINITY, INFINITY, 0)
    }

    /// Full-window score of one root move searched to `depth`
    fn score_root_move<P: Position>(&mut self, position: &mut P, mv: ChessMove, depth: u8) -> Score {
        let mut searcher = Searcher::new(&mut self.tt, &self.evaluator, &mut self.stats);
        let mut child = MoveGuard::new(position, mv);
        -searcher.alphabeta(&mut *child, depth - 1, -INFINITY, INFINITY, 1)
    }

    fn no_moves<P: Position>(&self, position: &P) -> SearchResult {
        let score = terminal_score(position.status(), 0).unwrap_or_else(|| self.evaluator.evaluate_relative(position));
        info!(status = ?position.status(), "no legal moves at the root");
        SearchResult {
            best_move: None,
            score,
            depth_reached: 0,
            stats: self.stats,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(TT_DEFAULT_ENTRIES)
    }
}

/// Best move for `position` within `budget`, using a fresh engine
pub fn find_best_move<P: Position>(position: &mut P, budget: SearchBudget) -> Option<ChessMove> {
    Engine::default().find_best_move(position, budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessPosition;
    use crate::constants::MATE_SCORE;
    use std::time::Duration;

    fn engine() -> Engine {
        Engine::new(1 << 14)
    }

    #[test]
    fn test_find_best_move_starting_position() {
        let mut pos = ChessPosition::startpos();
        let budget = SearchBudget::depth(1).unwrap();
        let mv = engine().find_best_move(&mut pos, budget).unwrap();
        assert!(pos.legal_moves().contains(&mv));
        assert_eq!(pos.ply(), 0);
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        let mut pos = ChessPosition::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let result = engine().search(&mut pos, SearchBudget::depth(3).unwrap());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -MATE_SCORE);
        assert_eq!(result.depth_reached, 0);
    }

    #[test]
    fn test_zero_time_falls_back_to_first_ordered_move() {
        let mut pos = ChessPosition::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let budget = SearchBudget::new(4, Duration::ZERO).unwrap();
        let result = engine().search(&mut pos, budget);
        assert_eq!(result.best_move, Some(pos.parse_move("e4d5").unwrap()));
        assert_eq!(result.depth_reached, 0);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_mate_stops_deepening() {
        let mut pos = ChessPosition::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let result = engine().search(&mut pos, SearchBudget::depth(6).unwrap());
        assert_eq!(result.best_move, Some(pos.parse_move("a1a8").unwrap()));
        assert_eq!(result.score, MATE_SCORE - 1);
        assert_eq!(result.depth_reached, 1);
    }

    #[test]
    fn test_iterative_deepening_updates_stats() {
        let mut pos = ChessPosition::startpos();
        let mut engine = engine();
        let result = engine.search(&mut pos, SearchBudget::depth(2).unwrap());
        assert_eq!(result.depth_reached, 2);
        assert!(result.stats.nodes > 20);
        assert_eq!(engine.stats(), result.stats);
    }

    #[test]
    fn test_find_best_move_for_black() {
        let mut pos = ChessPosition::startpos();
        pos.play("e2e4").unwrap();
        let mv = find_best_move(&mut pos, SearchBudget::depth(2).unwrap()).unwrap();
        assert!(pos.legal_moves().contains(&mv));
        assert_eq!(pos.side_to_move(), chess::Color::Black);
    }

    #[test]
    fn test_search_root_matches_driver() {
        let mut pos = ChessPosition::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();
        let driven = engine().search(&mut pos, SearchBudget::depth(2).unwrap());
        let direct = engine().search_root(&mut pos, 2);
        assert_eq!(driven.best_move, direct.best_move);
        assert_eq!(driven.score, direct.score);
    }

    #[test]
    fn test_async_driver_runs_under_block_on() {
        let mut pos = ChessPosition::startpos();
        let mut engine = engine();
        let result = futures_lite::future::block_on(
            engine.iterative_deepening(&mut pos, SearchBudget::depth(1).unwrap()),
        );
        assert!(result.best_move.is_some());
        assert_eq!(result.depth_reached, 1);
    }
}
