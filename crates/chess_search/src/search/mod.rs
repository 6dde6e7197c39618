//! Alpha-beta search with iterative deepening
//!
//! This module implements the move search using:
//! - Negamax variant of alpha-beta pruning
//! - Quiescence search over captures at the leaves
//! - Transposition table with bound flags and depth-sufficiency checks
//! - Move ordering (captures by exchange estimate first)
//! - Iterative deepening with a cooperative wall-clock budget
//!
//! Scores inside the search are relative to the side to move. A mated side scores
//! `-(MATE_SCORE - ply)`, so nearer mates are preferred.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `quiescence` - Quiescence search to avoid horizon effect
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Scoped apply/undo guard
//! - `iterative` - Iterative deepening driver and the [`Engine`] entry points

mod alphabeta;
mod iterative;
mod make_unmake;
mod ordering;
mod quiescence;

pub use iterative::{find_best_move, Engine};

use crate::constants::Score;
use crate::evaluation::Evaluator;
use crate::hash::TranspositionTable;
use chess::ChessMove;

/// Node counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha-beta nodes visited
    pub nodes: u64,
    /// Quiescence nodes visited
    pub qnodes: u64,
    /// Beta cutoffs in either search
    pub cutoffs: u64,
    /// Nodes answered straight from the transposition table
    pub tt_hits: u64,
}

impl SearchStats {
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.qnodes
    }
}

/// Outcome of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal moves
    pub best_move: Option<ChessMove>,
    /// Score of `best_move` for the side to move, at `depth_reached`
    pub score: Score,
    /// Deepest fully completed iteration, 0 when none completed
    pub depth_reached: u8,
    pub stats: SearchStats,
}

/// Borrowed search state for one tree walk
pub(crate) struct Searcher<'a> {
    tt: &'a mut TranspositionTable,
    evaluator: &'a Evaluator,
    stats: &'a mut SearchStats,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(tt: &'a mut TranspositionTable, evaluator: &'a Evaluator, stats: &'a mut SearchStats) -> Self {
        Self { tt, evaluator, stats }
    }
}
