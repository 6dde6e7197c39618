//! Public API for the search engine
//!
//! Session-level helpers for callers that just want to play a game: one [`Game`] value owns the
//! position, the engine and the budget, and is passed explicitly to every call.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, is_legal_move)
//! - `state` - Game state queries and engine replies (game_state, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game, Game};
pub use moves::{do_move, is_legal_move};
pub use state::{evaluate_game, game_state, reply, GameState};
