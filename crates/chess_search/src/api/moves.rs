//! Move execution and validation

use super::Game;
use crate::error::EngineResult;
use chess::ChessMove;

/// Play a move given in coordinate notation (`e2e4`, `e7e8q`)
///
/// # Errors
///
/// [`crate::SearchError::InvalidMove`] when the text is not a move,
/// [`crate::SearchError::IllegalMove`] when it is not legal here. The position is unchanged on
/// error.
pub fn do_move(game: &mut Game, text: &str) -> EngineResult<ChessMove> {
    game.position.play(text)
}

pub fn is_legal_move(game: &Game, text: &str) -> bool {
    game.position.parse_move(text).is_ok()
}
