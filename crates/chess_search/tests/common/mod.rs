//! Shared helpers for the integration tests

#![allow(dead_code)]

use chess::BoardStatus;
use chess_search::constants::{DRAW_SCORE, MATE_SCORE, MATE_THRESHOLD};
use chess_search::{ChessPosition, Engine, Evaluator, Position, Score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Positions reached by random playouts from the start, skipping finished games
pub fn random_positions(seed: u64, count: usize, max_plies: usize) -> Vec<ChessPosition> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);

    while positions.len() < count {
        let mut pos = ChessPosition::startpos();
        let plies = rng.random_range(1..=max_plies);
        for _ in 0..plies {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.random_range(0..moves.len())];
            pos.apply(mv);
        }
        if !pos.is_game_over() {
            // Detach from the playout history
            positions.push(ChessPosition::from_board(*pos.board()));
        }
    }

    positions
}

fn terminal(position: &ChessPosition, ply: usize) -> Option<Score> {
    match position.status() {
        BoardStatus::Checkmate => Some(-(MATE_SCORE - ply as Score)),
        BoardStatus::Stalemate => Some(DRAW_SCORE),
        BoardStatus::Ongoing => None,
    }
}

/// Capture-only search with no pruning: the best of standing pat and every capture
pub fn reference_quiesce(position: &mut ChessPosition, evaluator: &Evaluator, ply: usize) -> Score {
    if let Some(score) = terminal(position, ply) {
        return score;
    }
    let mut best = evaluator.evaluate_relative(position);
    for mv in position.legal_moves() {
        if !position.move_kind(mv).is_capture() {
            continue;
        }
        position.apply(mv);
        let score = -reference_quiesce(position, evaluator, ply + 1);
        position.undo();
        best = best.max(score);
    }
    best
}

/// Plain negamax with no pruning and no cache above the leaves
///
/// Leaves use the engine's full-window quiescence score, rebased for mates found below the root.
pub fn reference_negamax(position: &mut ChessPosition, leaves: &mut Engine, depth: u8, ply: usize) -> Score {
    if depth == 0 || position.is_game_over() {
        if let Some(score) = terminal(position, ply) {
            return score;
        }
        let score = leaves.quiescence_score(position);
        return match score {
            s if s > MATE_THRESHOLD => s - ply as Score,
            s if s < -MATE_THRESHOLD => s + ply as Score,
            s => s,
        };
    }
    let mut best = Score::MIN;
    for mv in position.legal_moves() {
        position.apply(mv);
        let score = -reference_negamax(position, leaves, depth - 1, ply + 1);
        position.undo();
        best = best.max(score);
    }
    best
}
