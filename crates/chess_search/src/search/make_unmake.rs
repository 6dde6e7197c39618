//! Scoped move application
//!
//! A [`MoveGuard`] applies a move when created and undoes it when dropped, so every exit from a
//! search node (normal return, cutoff `break`, early `return`, unwinding panic) leaves the
//! position exactly as it found it.

use crate::position::Position;
use chess::ChessMove;
use std::ops::{Deref, DerefMut};

pub(crate) struct MoveGuard<'a, P: Position> {
    position: &'a mut P,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    pub(crate) fn new(position: &'a mut P, mv: ChessMove) -> Self {
        position.apply(mv);
        Self { position }
    }
}

impl<P: Position> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.position.undo();
    }
}
