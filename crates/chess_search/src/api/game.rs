//! Game lifecycle management

use crate::board::ChessPosition;
use crate::config::SearchBudget;
use crate::error::EngineResult;
use crate::search::Engine;

/// A game session: current position, search engine and thinking budget
#[derive(Debug, Clone, Default)]
pub struct Game {
    pub(super) position: ChessPosition,
    pub(super) engine: Engine,
    pub(super) budget: SearchBudget,
}

impl Game {
    /// Start from an arbitrary position
    pub fn from_fen(fen: &str, budget: SearchBudget) -> EngineResult<Self> {
        Ok(Self {
            position: ChessPosition::from_fen(fen)?,
            engine: Engine::default(),
            budget,
        })
    }

    pub fn position(&self) -> &ChessPosition {
        &self.position
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn budget(&self) -> SearchBudget {
        self.budget
    }

    pub fn set_budget(&mut self, budget: SearchBudget) {
        self.budget = budget;
    }
}

/// Create a new game at the starting position with the default budget
pub fn new_game() -> Game {
    Game::default()
}

/// Back to the starting position; the budget is kept, the engine forgets earlier searches
pub fn reset_game(game: &mut Game) {
    game.position = ChessPosition::startpos();
    game.engine.clear();
}
