//! # Search Constants - Piece Values, Score Bounds & Table Sizing
//!
//! ## Overview
//!
//! This module centralizes the fixed numbers the search core is built on: material values in
//! centipawns, the score window used by alpha-beta, mate scoring, the game-phase weights and the
//! transposition table geometry. Evaluation *weights* (bonuses and penalties for structural
//! features) live in [`crate::config`] so they can be tuned as one table.
//!
//! ## Centipawn Valuation System
//!
//! Scores are integers in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330 (slightly above a knight so the engine does not trade a bishop for a knight
//!   for free)
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: excluded from the material sum. Losing the king is expressed through
//!   [`MATE_SCORE`], not through material.
//!
//! ## Score Window
//!
//! [`MATE_SCORE`] (100 000) is far above any reachable material + positional total, and
//! [`INFINITY`] sits above it so that `-INFINITY..INFINITY` is a true "full width" window. A mate
//! found `n` plies below the root is reported as `MATE_SCORE - n`, so every score whose magnitude
//! exceeds [`MATE_THRESHOLD`] is a forced mate.
//!
//! ## Game Phase
//!
//! Phase weights count in half-units so the pawn weight (0.5) stays integral:
//! queen = 8, rook = 4, minor = 2, pawn = 1. The starting position holds
//! [`PHASE_TOTAL`] = 64 half-units; phase 0 is the opening, phase 1 a bare-kings ending.

use chess::Piece;

pub type Score = i32;

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 0;

/// Material value per piece, indexed by `Piece::to_index()`
pub const PIECE_VALUE: [Score; 6] = [
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

#[inline]
pub fn piece_value(piece: Piece) -> Score {
    PIECE_VALUE[piece.to_index()]
}

pub const MATE_SCORE: Score = 100_000;
pub const INFINITY: Score = 1_000_000;
pub const MATE_THRESHOLD: Score = MATE_SCORE - MAX_PLY as Score;
pub const DRAW_SCORE: Score = 0;

/// Hard cap on the iterative deepening depth a budget may ask for
pub const MAX_DEPTH: u8 = 32;
/// Upper bound on recursion (main search plies plus capture sequences)
pub const MAX_PLY: usize = 256;

/// Phase weights in half-units, indexed by `Piece::to_index()` (king carries no phase weight)
pub const PHASE_WEIGHT: [u32; 6] = [1, 2, 2, 4, 8, 0];
pub const PHASE_TOTAL: u32 = 16 * 1 + 4 * 2 + 4 * 2 + 4 * 4 + 2 * 8;
/// Above this phase the endgame king table replaces the midgame one (0.6 of `PHASE_TOTAL`)
pub const KING_ENDGAME_PHASE: u32 = PHASE_TOTAL * 6 / 10;

/// Material lead (excluding kings) that triggers the exchange bias, 1.5 pawns
pub const EXCHANGE_BIAS_MARGIN: Score = 150;

/// Default transposition table size in entries
pub const TT_DEFAULT_ENTRIES: usize = 1 << 18;
/// Slots per bucket; a bucket is the unit of replacement
pub const TT_SLOTS: usize = 4;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
