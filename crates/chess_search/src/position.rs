//! Capability interface to the rules engine
//!
//! The search core never generates moves or decides legality itself. It talks to the game through
//! the [`Position`] trait: enumerate legal moves, apply and undo them, ask whether the game is
//! over, and query piece placement and attacks for evaluation. [`crate::board::ChessPosition`] is
//! the reference implementation over the `chess` crate.
//!
//! Piece, colour, square and bitboard vocabulary is shared with the `chess` crate so adapters do
//! not need a translation layer.

use chess::{BitBoard, BoardStatus, ChessMove, Color, Piece, Square};

/// Canonical, order-independent position key (Zobrist hash)
pub type PositionKey = u64;

/// What a move does to material
///
/// En passant is reported as a `Capture` whose victim is a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet {
        piece: Piece,
    },
    Capture {
        attacker: Piece,
        victim: Piece,
    },
    Promotion {
        to: Piece,
        captured: Option<Piece>,
    },
}

impl MoveKind {
    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(
            self,
            MoveKind::Capture { .. }
                | MoveKind::Promotion {
                    captured: Some(_),
                    ..
                }
        )
    }
}

/// Everything the search core needs from a game position
///
/// `apply` and `undo` mutate in place and must pair exactly: after `apply(m); undo();` the
/// position, including its [`key`](Position::key), is identical to what it was before.
pub trait Position {
    /// Legal moves for the side to move, in the rules engine's generation order
    fn legal_moves(&self) -> Vec<ChessMove>;

    fn apply(&mut self, mv: ChessMove);

    /// Undo the most recent `apply`
    fn undo(&mut self);

    fn status(&self) -> BoardStatus;

    fn side_to_move(&self) -> Color;

    fn piece_on(&self, square: Square) -> Option<Piece>;

    fn color_on(&self, square: Square) -> Option<Color>;

    /// Squares holding `piece`s of `color`
    fn pieces(&self, piece: Piece, color: Color) -> BitBoard;

    /// Pieces of `color` attacking `square`
    fn attackers(&self, square: Square, color: Color) -> BitBoard;

    fn key(&self) -> PositionKey;

    fn fen(&self) -> String;

    /// Classify a legal move of the side to move
    fn move_kind(&self, mv: ChessMove) -> MoveKind;

    #[inline]
    fn is_game_over(&self) -> bool {
        self.status() != BoardStatus::Ongoing
    }

    #[inline]
    fn is_pawn_of(&self, square: Square, color: Color) -> bool {
        self.piece_on(square) == Some(Piece::Pawn) && self.color_on(square) == Some(color)
    }
}
