use std::ops::{Deref, DerefMut};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_unchecked, undo_move_unchecked};

/// Pre-image of a single fast-path move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Rook relocation performed by a castling move, `(rook_from, rook_to)`.
    pub rook_relocation: Option<(Square, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_side_to_move: Color,
    pub prev_move_count: u32,
}

/// A move applied through the fast path, undone when the guard drops.
///
/// Derefs to the mutated `GameState` so recursion can continue on the child
/// position. Nested guards unwind in stack order.
pub struct AppliedMove<'a> {
    game_state: &'a mut GameState,
    undo: UndoState,
}

impl<'a> AppliedMove<'a> {
    pub(crate) fn new(game_state: &'a mut GameState, from: Square, to: Square) -> Option<Self> {
        let undo = apply_move_unchecked(game_state, from, to)?;
        Some(Self { game_state, undo })
    }

    pub fn undo_state(&self) -> &UndoState {
        &self.undo
    }
}

impl Deref for AppliedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        undo_move_unchecked(self.game_state, &self.undo);
    }
}

/// Temporarily hands the move to `color`; the previous side is restored on drop.
pub struct TurnOverride<'a> {
    game_state: &'a mut GameState,
    previous: Color,
}

impl<'a> TurnOverride<'a> {
    pub(crate) fn new(game_state: &'a mut GameState, color: Color) -> Self {
        let previous = game_state.side_to_move;
        game_state.side_to_move = color;
        Self {
            game_state,
            previous,
        }
    }
}

impl Deref for TurnOverride<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for TurnOverride<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for TurnOverride<'_> {
    fn drop(&mut self) {
        self.game_state.side_to_move = self.previous;
    }
}

impl GameState {
    /// Apply `from -> to` through the fast path (no legality check) and return
    /// a guard that reverts it. `None` when `from` is empty or off the board.
    pub fn scoped_move(&mut self, from: Square, to: Square) -> Option<AppliedMove<'_>> {
        AppliedMove::new(self, from, to)
    }

    /// Give the move to `color` for the lifetime of the returned guard.
    pub fn scoped_turn(&mut self, color: Color) -> TurnOverride<'_> {
        TurnOverride::new(self, color)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;

    #[test]
    fn scoped_move_reverts_on_drop() {
        let mut game = GameState::new_game();
        let before = game.clone();
        {
            let child = game
                .scoped_move(Square::new(6, 4), Square::new(4, 4))
                .expect("source square is occupied");
            assert!(child.is_turn(Color::Dark));
            assert_eq!(child.move_count(), 1);
            assert!(child.board().is_empty(Square::new(6, 4)));
        }
        assert_eq!(game, before);
    }

    #[test]
    fn nested_scoped_moves_unwind_in_stack_order() {
        let mut game = GameState::new_game();
        let before = game.clone();
        {
            let mut first = game
                .scoped_move(Square::new(6, 4), Square::new(4, 4))
                .expect("e-pawn present");
            let middle = first.clone();
            {
                let second = first
                    .scoped_move(Square::new(1, 3), Square::new(3, 3))
                    .expect("d-pawn present");
                assert_eq!(second.move_count(), 2);
            }
            assert_eq!(*first, middle);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn scoped_move_from_empty_square_is_refused() {
        let mut game = GameState::new_game();
        assert!(game
            .scoped_move(Square::new(4, 4), Square::new(3, 4))
            .is_none());
        assert!(game
            .scoped_move(Square::new(9, 4), Square::new(3, 4))
            .is_none());
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn scoped_turn_restores_side_to_move() {
        let mut game = GameState::new_game();
        {
            let flipped = game.scoped_turn(Color::Dark);
            assert!(flipped.is_turn(Color::Dark));
        }
        assert!(game.is_turn(Color::Light));
    }
}
