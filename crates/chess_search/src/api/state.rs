//! Game state queries and engine replies

use super::Game;
use crate::constants::Score;
use crate::position::Position;
use chess::{BoardStatus, ChessMove, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Checkmate { winner: Color },
    Stalemate,
}

pub fn game_state(game: &Game) -> GameState {
    match game.position.status() {
        BoardStatus::Ongoing => GameState::Playing,
        BoardStatus::Checkmate => GameState::Checkmate {
            winner: !game.position.side_to_move(),
        },
        BoardStatus::Stalemate => GameState::Stalemate,
    }
}

/// Search for the side to move and play the chosen move
///
/// Returns `None`, leaving the game untouched, when the game is already over.
pub fn reply(game: &mut Game) -> Option<ChessMove> {
    let mv = game.engine.find_best_move(&mut game.position, game.budget)?;
    game.position.apply(mv);
    Some(mv)
}

/// White-positive static evaluation of the current position
pub fn evaluate_game(game: &Game) -> Score {
    game.engine.evaluate(&game.position)
}
