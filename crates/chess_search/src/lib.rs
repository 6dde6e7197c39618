//! Move search core for chess
//!
//! Given a position, picks a move under a depth and wall-clock budget:
//! - [`evaluation`] - Static evaluation (material, tables, structure, king safety, mobility)
//! - [`exchange`] - Single-step exchange estimate used to order captures
//! - [`hash`] - Bounded transposition table
//! - [`search`] - Alpha-beta, quiescence and the iterative deepening driver
//!
//! The rules of the game are not implemented here. The search consumes them through the
//! [`position::Position`] trait; [`board::ChessPosition`] adapts the `chess` crate to it.
//!
//! ```rust,no_run
//! use chess_search::{ChessPosition, Engine, SearchBudget};
//! use std::time::Duration;
//!
//! let mut position = ChessPosition::startpos();
//! let budget = SearchBudget::new(5, Duration::from_millis(500))?;
//! let best = Engine::default().find_best_move(&mut position, budget);
//! # Ok::<(), chess_search::SearchError>(())
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod exchange;
pub mod hash;
pub mod position;
pub mod search;

pub use board::ChessPosition;
pub use config::{EvalWeights, SearchBudget, DEFAULT_WEIGHTS};
pub use constants::Score;
pub use error::{EngineResult, SearchError};
pub use evaluation::{evaluate, Evaluator};
pub use exchange::estimate_gain;
pub use hash::{Bound, TranspositionEntry, TranspositionTable};
pub use position::{MoveKind, Position, PositionKey};
pub use search::{find_best_move, Engine, SearchResult, SearchStats};
