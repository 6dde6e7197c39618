//! Tuning table for the evaluator and the per-call search budget
//!
//! Every evaluation weight is a named field of [`EvalWeights`]. The compiled-in defaults are in
//! [`DEFAULT_WEIGHTS`]; an [`crate::evaluation::Evaluator`] can be built with a modified copy for
//! tuning experiments without touching evaluation logic.

use crate::constants::MAX_DEPTH;
use crate::error::{EngineResult, SearchError};
use std::time::Duration;

/// Named evaluation weights, in centipawns unless stated otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub bishop_pair: i32,
    pub passed_pawn_base: i32,
    /// Added per rank a passed pawn has advanced
    pub passed_pawn_advance: i32,
    pub isolated_pawn: i32,
    /// Applied once per extra pawn on a file
    pub doubled_pawn: i32,
    pub outpost_knight: i32,
    pub outpost_bishop: i32,
    pub rook_open_file: i32,
    pub rook_semiopen_file: i32,
    pub connected_rooks: i32,
    /// Per shielding pawn, scaled down towards the endgame
    pub king_shield: i32,
    /// Per attacker of a central square
    pub space: i32,
    /// Per developed minor piece
    pub development: i32,
    pub exchange_when_ahead: i32,
    pub avoid_exchange_when_behind: i32,
    pub pawn_majority: i32,
    /// Per step closer to the centre, scaled up towards the endgame
    pub king_activity: i32,
    pub queen_center: i32,
    pub opening_bias: i32,
    pub mobility_capture: i32,
    pub mobility_quiet: i32,
    /// Mobility is multiplied by `mobility_scale_num / mobility_scale_den`
    pub mobility_scale_num: i32,
    pub mobility_scale_den: i32,
}

pub const DEFAULT_WEIGHTS: EvalWeights = EvalWeights {
    bishop_pair: 40,
    passed_pawn_base: 30,
    passed_pawn_advance: 10,
    isolated_pawn: -15,
    doubled_pawn: -10,
    outpost_knight: 25,
    outpost_bishop: 15,
    rook_open_file: 20,
    rook_semiopen_file: 10,
    connected_rooks: 20,
    king_shield: 8,
    space: 6,
    development: 10,
    exchange_when_ahead: 30,
    avoid_exchange_when_behind: -20,
    pawn_majority: 12,
    king_activity: 30,
    queen_center: 12,
    opening_bias: 25,
    mobility_capture: 3,
    mobility_quiet: 1,
    mobility_scale_num: 2,
    mobility_scale_den: 10,
};

impl Default for EvalWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Depth and wall-clock limits for one `find_best_move` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    max_depth: u8,
    time_limit: Duration,
}

impl SearchBudget {
    /// Build a budget, rejecting depths outside `1..=MAX_DEPTH`
    pub fn new(max_depth: u8, time_limit: Duration) -> EngineResult<Self> {
        if max_depth == 0 || max_depth > MAX_DEPTH {
            return Err(SearchError::InvalidBudget {
                max_depth,
                limit: MAX_DEPTH,
            });
        }
        Ok(Self {
            max_depth,
            time_limit,
        })
    }

    /// Depth-limited budget with no practical time limit
    pub fn depth(max_depth: u8) -> EngineResult<Self> {
        Self::new(max_depth, Duration::MAX)
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_limit: Duration::from_millis(1500),
        }
    }
}
