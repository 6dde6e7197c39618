//! Material evaluation
//!
//! Counts piece values per side (kings excluded) and applies the exchange bias: the side ahead
//! by more than [`EXCHANGE_BIAS_MARGIN`] is nudged towards trades, the side behind away from them.

use crate::config::EvalWeights;
use crate::constants::{piece_value, Score, EXCHANGE_BIAS_MARGIN};
use crate::position::Position;
use chess::{Color, ALL_PIECES};

/// Material held by `color`, kings excluded
pub(super) fn material<P: Position>(position: &P, color: Color) -> Score {
    ALL_PIECES
        .iter()
        .map(|&piece| position.pieces(piece, color).popcnt() as Score * piece_value(piece))
        .sum()
}

/// Exchange bias from White's point of view
pub(super) fn exchange_bias(white: Score, black: Score, weights: &EvalWeights) -> Score {
    // Bonus for the side ahead, penalty for the side behind
    let swing = weights.exchange_when_ahead - weights.avoid_exchange_when_behind;
    let diff = white - black;
    if diff > EXCHANGE_BIAS_MARGIN {
        swing
    } else if diff < -EXCHANGE_BIAS_MARGIN {
        -swing
    } else {
        0
    }
}
