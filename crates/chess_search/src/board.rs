//! Reference position adapter over the `chess` crate
//!
//! Provides the board operations the engine consumes:
//! - Legal move generation and game status (delegated to `chess::Board`)
//! - Apply/undo through a history stack of prior boards
//! - Attack and occupancy queries for evaluation
//! - FEN and coordinate-notation conversion

use crate::error::{EngineResult, SearchError};
use crate::position::{MoveKind, Position, PositionKey};
use chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square,
};
use std::fmt;
use std::str::FromStr;

/// A game position with undo history
#[derive(Clone, Debug)]
pub struct ChessPosition {
    board: Board,
    history: Vec<Board>,
}

impl ChessPosition {
    /// Standard starting position
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let board = Board::from_str(fen).map_err(|e| SearchError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied and not yet undone
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Parse coordinate notation (`e2e4`, `e7e8q`) and check it against the legal moves
    pub fn parse_move(&self, text: &str) -> EngineResult<ChessMove> {
        let invalid = || SearchError::InvalidMove {
            text: text.to_string(),
        };
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }

        let source = Square::from_str(&text[0..2]).map_err(|_| invalid())?;
        let dest = Square::from_str(&text[2..4]).map_err(|_| invalid())?;
        let promotion = match text.as_bytes().get(4) {
            None => None,
            Some(b'q') | Some(b'Q') => Some(Piece::Queen),
            Some(b'r') | Some(b'R') => Some(Piece::Rook),
            Some(b'b') | Some(b'B') => Some(Piece::Bishop),
            Some(b'n') | Some(b'N') => Some(Piece::Knight),
            Some(_) => return Err(invalid()),
        };

        let mv = ChessMove::new(source, dest, promotion);
        if MoveGen::new_legal(&self.board).any(|legal| legal == mv) {
            Ok(mv)
        } else {
            Err(SearchError::IllegalMove {
                mv: mv.to_string(),
                fen: self.fen(),
            })
        }
    }

    /// Parse and apply a move given in coordinate notation
    pub fn play(&mut self, text: &str) -> EngineResult<ChessMove> {
        let mv = self.parse_move(text)?;
        self.apply(mv);
        Ok(mv)
    }

    /// The same position with colours swapped and the board reflected across its horizontal
    /// midline. Evaluation of the result is the exact negation of evaluation of `self`.
    pub fn color_flipped(&self) -> EngineResult<Self> {
        let fen = self.fen();
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(SearchError::InvalidFen {
                fen: fen.clone(),
                reason: "expected at least four fields".to_string(),
            });
        }

        let placement = mirror_placement(fields[0]);
        let side = if fields[1] == "w" { "b" } else { "w" };
        let castling = mirror_castling(fields[2]);
        let en_passant = match fields[3].as_bytes() {
            [file, b'3'] => format!("{}6", *file as char),
            [file, b'6'] => format!("{}3", *file as char),
            _ => "-".to_string(),
        };
        let counters = if fields.len() >= 6 {
            format!("{} {}", fields[4], fields[5])
        } else {
            "0 1".to_string()
        };

        Self::from_fen(&format!(
            "{placement} {side} {castling} {en_passant} {counters}"
        ))
    }
}

/// FEN piece placement reflected top to bottom with the colours swapped
pub(crate) fn mirror_placement(placement: &str) -> String {
    placement.split('/').rev().map(swap_case).collect::<Vec<_>>().join("/")
}

/// FEN castling rights with the colours swapped, in `KQkq` order
pub(crate) fn mirror_castling(castling: &str) -> String {
    let swapped = swap_case(castling);
    let ordered: String = ['K', 'Q', 'k', 'q'].iter().filter(|c| swapped.contains(**c)).collect();
    if ordered.is_empty() {
        "-".to_string()
    } else {
        ordered
    }
}

fn swap_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Position for ChessPosition {
    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply(&mut self, mv: ChessMove) {
        let next = self.board.make_move_new(mv);
        self.history.push(self.board);
        self.board = next;
    }

    fn undo(&mut self) {
        debug_assert!(!self.history.is_empty(), "undo without a matching apply");
        if let Some(previous) = self.history.pop() {
            self.board = previous;
        }
    }

    fn status(&self) -> BoardStatus {
        self.board.status()
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board.piece_on(square)
    }

    fn color_on(&self, square: Square) -> Option<Color> {
        self.board.color_on(square)
    }

    fn pieces(&self, piece: Piece, color: Color) -> BitBoard {
        *self.board.pieces(piece) & *self.board.color_combined(color)
    }

    fn attackers(&self, square: Square, color: Color) -> BitBoard {
        let occupied = *self.board.combined();
        let diagonal = self.pieces(Piece::Bishop, color) | self.pieces(Piece::Queen, color);
        let straight = self.pieces(Piece::Rook, color) | self.pieces(Piece::Queen, color);

        // A pawn of `color` attacks `square` from exactly the squares a pawn of the other colour
        // on `square` would attack.
        get_pawn_attacks(square, !color, self.pieces(Piece::Pawn, color))
            | (get_knight_moves(square) & self.pieces(Piece::Knight, color))
            | (get_bishop_moves(square, occupied) & diagonal)
            | (get_rook_moves(square, occupied) & straight)
            | (get_king_moves(square) & self.pieces(Piece::King, color))
    }

    fn key(&self) -> PositionKey {
        self.board.get_hash()
    }

    fn fen(&self) -> String {
        self.board.to_string()
    }

    fn move_kind(&self, mv: ChessMove) -> MoveKind {
        let source = mv.get_source();
        let dest = mv.get_dest();
        let attacker = self.board.piece_on(source).unwrap_or(Piece::Pawn);
        let victim = self.board.piece_on(dest);

        if let Some(to) = mv.get_promotion() {
            return MoveKind::Promotion {
                to,
                captured: victim,
            };
        }

        match victim {
            Some(victim) => MoveKind::Capture { attacker, victim },
            // A pawn changing file onto an empty square can only be capturing en passant
            None if attacker == Piece::Pawn && source.get_file() != dest.get_file() => {
                MoveKind::Capture {
                    attacker,
                    victim: Piece::Pawn,
                }
            }
            None => MoveKind::Quiet { piece: attacker },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_has_twenty_moves() {
        let pos = ChessPosition::startpos();
        assert_eq!(pos.legal_moves().len(), 20);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.status(), BoardStatus::Ongoing);
    }

    #[test]
    fn test_apply_undo_restores_key() {
        let mut pos = ChessPosition::startpos();
        let before = pos.key();
        let mv = pos.parse_move("e2e4").unwrap();
        pos.apply(mv);
        assert_ne!(pos.key(), before);
        assert_eq!(pos.ply(), 1);
        pos.undo();
        assert_eq!(pos.key(), before);
        assert_eq!(pos.ply(), 0);
    }

    #[test]
    fn test_parse_move_rejects_garbage_and_illegal() {
        let pos = ChessPosition::startpos();
        assert!(matches!(
            pos.parse_move("zz99"),
            Err(SearchError::InvalidMove { .. })
        ));
        assert!(matches!(
            pos.parse_move("e2e5"),
            Err(SearchError::IllegalMove { .. })
        ));
        assert!(pos.parse_move("g1f3").is_ok());
    }

    #[test]
    fn test_invalid_fen_is_reported() {
        assert!(matches!(
            ChessPosition::from_fen("not a fen"),
            Err(SearchError::InvalidFen { .. })
        ));
    }

    #[test]
    fn test_move_kind_en_passant_and_promotion() {
        let pos = ChessPosition::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let ep = pos.parse_move("e5d6").unwrap();
        assert_eq!(
            pos.move_kind(ep),
            MoveKind::Capture {
                attacker: Piece::Pawn,
                victim: Piece::Pawn
            }
        );

        let pos = ChessPosition::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let push = pos.parse_move("a7a8q").unwrap();
        let take = pos.parse_move("a7b8n").unwrap();
        assert_eq!(
            pos.move_kind(push),
            MoveKind::Promotion {
                to: Piece::Queen,
                captured: None
            }
        );
        assert!(pos.move_kind(take).is_capture());
    }

    #[test]
    fn test_attackers_of_center_square() {
        let pos = ChessPosition::from_fen("4k3/8/8/3p4/8/2N5/8/3RK3 w - - 0 1").unwrap();
        let d5 = Square::from_str("d5").unwrap();
        let white = pos.attackers(d5, Color::White);
        // Rook on d1 has a clear file, knight on c3 jumps to d5
        assert_eq!(white.popcnt(), 2);
        assert_eq!(pos.attackers(d5, Color::Black).popcnt(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "undo without a matching apply")]
    fn test_unbalanced_undo_panics_in_debug() {
        let mut pos = ChessPosition::startpos();
        pos.play("e2e4").unwrap();
        pos.undo();
        pos.undo();
    }

    #[test]
    fn test_color_flipped_round_trip() {
        let pos = ChessPosition::from_fen(
            "r3k2r/pp3ppp/2n1b3/3qp3/8/2NB1N2/PPP2PPP/R2QK2R w KQkq - 0 9",
        )
        .unwrap();
        let flipped = pos.color_flipped().unwrap();
        assert_eq!(flipped.side_to_move(), Color::Black);
        assert_eq!(flipped.legal_moves().len(), pos.legal_moves().len());
        let back = flipped.color_flipped().unwrap();
        assert_eq!(back.key(), pos.key());
    }
}
