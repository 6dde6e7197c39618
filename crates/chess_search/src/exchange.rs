//! Single-step static exchange estimate
//!
//! `value(victim) - value(attacker)` for captures, 0 otherwise. Recaptures are not simulated, so
//! the number is only good for ordering captures (most promising first). It is never used as a
//! score.

use crate::constants::{piece_value, Score, PAWN_VALUE};
use crate::position::{MoveKind, Position};
use chess::ChessMove;

/// Expected material gain of `mv` for the side to move
pub fn estimate_gain<P: Position>(position: &P, mv: ChessMove) -> Score {
    gain_of(position.move_kind(mv))
}

pub(crate) fn gain_of(kind: MoveKind) -> Score {
    match kind {
        MoveKind::Quiet { .. } => 0,
        MoveKind::Capture { attacker, victim } => piece_value(victim) - piece_value(attacker),
        MoveKind::Promotion {
            captured: Some(victim),
            ..
        } => piece_value(victim) - PAWN_VALUE,
        MoveKind::Promotion { captured: None, .. } => 0,
    }
}
