//! Move ordering for alpha-beta pruning
//!
//! Captures come first, most promising exchange first; quiet moves follow in the order the rules
//! engine generated them. The sort is stable so equal estimates keep generation order, which
//! makes root move selection deterministic.

use crate::exchange::gain_of;
use crate::position::Position;
use chess::ChessMove;
use std::cmp::Reverse;

/// Order all moves: captures by descending exchange estimate, then quiet moves
pub(crate) fn order_moves<P: Position>(position: &P, moves: Vec<ChessMove>) -> Vec<ChessMove> {
    let (mut captures, quiet): (Vec<_>, Vec<_>) = moves
        .into_iter()
        .map(|mv| (mv, position.move_kind(mv)))
        .partition(|(_, kind)| kind.is_capture());

    captures.sort_by_key(|(_, kind)| Reverse(gain_of(*kind)));
    captures.into_iter().chain(quiet).map(|(mv, _)| mv).collect()
}

/// Only the captures, by descending exchange estimate
pub(crate) fn order_captures<P: Position>(position: &P, moves: Vec<ChessMove>) -> Vec<ChessMove> {
    let mut captures: Vec<_> = moves
        .into_iter()
        .filter_map(|mv| {
            let kind = position.move_kind(mv);
            kind.is_capture().then(|| (mv, gain_of(kind)))
        })
        .collect();

    captures.sort_by_key(|(_, gain)| Reverse(*gain));
    captures.into_iter().map(|(mv, _)| mv).collect()
}
