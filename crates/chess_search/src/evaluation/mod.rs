//! Static position evaluation
//!
//! Scores a position in centipawns from White's point of view using:
//! - Material count (piece values)
//! - Piece-square tables, with the king table chosen by game phase
//! - Pawn structure (passed, isolated, doubled pawns, flank majority)
//! - Piece placement (bishop pair, outposts, rook files, connected rooks, development)
//! - King safety and endgame king activity
//! - Mobility and central space
//! - Exchange and opening biases
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance and the exchange bias
//! - `pawns` - Pawn structure terms
//! - `pieces` - Minor and major piece placement terms
//! - `king` - King shield and king activity
//! - `activity` - Mobility and central space
//! - `opening` - Opening bias hints
//! - `position` - Full position evaluation combining all of the above

mod activity;
mod king;
mod material;
mod opening;
mod pawns;
mod pieces;
mod position;
mod pst;

pub use opening::OPENING_BIAS;
pub use position::{evaluate, Evaluator};
pub use pst::pst_value;

use crate::constants::{KING_ENDGAME_PHASE, PHASE_TOTAL, PHASE_WEIGHT};
use crate::position::Position;
use chess::{Color, File, Rank, Square, ALL_PIECES};

/// Game phase as a fixed-point fraction of [`PHASE_TOTAL`]
///
/// `endgame == 0` is the opening, `endgame == PHASE_TOTAL` a bare-kings ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    endgame: u32,
}

impl Phase {
    pub fn of<P: Position>(position: &P) -> Self {
        let mut remaining = 0u32;
        for piece in ALL_PIECES {
            let count = position.pieces(piece, Color::White).popcnt()
                + position.pieces(piece, Color::Black).popcnt();
            remaining += count * PHASE_WEIGHT[piece.to_index()];
        }
        Self {
            endgame: PHASE_TOTAL - remaining.min(PHASE_TOTAL),
        }
    }

    /// Phase in `[0, 1]`, for diagnostic output
    pub fn fraction(&self) -> f32 {
        self.endgame as f32 / PHASE_TOTAL as f32
    }

    pub fn is_king_endgame(&self) -> bool {
        self.endgame > KING_ENDGAME_PHASE
    }

    /// `value * (1 - phase)`, truncated toward zero
    #[inline]
    pub(crate) fn midgame_scaled(&self, value: i32) -> i32 {
        value * (PHASE_TOTAL - self.endgame) as i32 / PHASE_TOTAL as i32
    }

    /// `value * phase`, truncated toward zero
    #[inline]
    pub(crate) fn endgame_scaled(&self, value: i32) -> i32 {
        value * self.endgame as i32 / PHASE_TOTAL as i32
    }
}

/// Rank counted from `color`'s own back rank (0..=7)
#[inline]
pub(crate) fn relative_rank(square: Square, color: Color) -> usize {
    let rank = square.get_rank().to_index();
    match color {
        Color::White => rank,
        Color::Black => 7 - rank,
    }
}

#[inline]
pub(crate) fn square_at(file: usize, rank: usize) -> Square {
    Square::make_square(Rank::from_index(rank), File::from_index(file))
}

/// Rank index `steps` ranks towards the opponent, if still on the board
#[inline]
pub(crate) fn rank_ahead(rank: usize, color: Color, steps: usize) -> Option<usize> {
    match color {
        Color::White => Some(rank + steps).filter(|r| *r < 8),
        Color::Black => rank.checked_sub(steps),
    }
}
