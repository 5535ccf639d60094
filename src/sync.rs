//! Synchronization wrapper for hosting a game on several threads.
//!
//! A `Game` is a plain value with no interior locking. Hosts that share one
//! game between threads go through `SharedGame`, which holds a single lock
//! for the whole duration of each query or move.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Color, Game, InvalidMove, Move, MoveList, Square, Status};

/// A game behind one lock, cheap to clone and hand to other threads.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    /// Share a game in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        SharedGame::from_game(Game::new())
    }

    #[must_use]
    pub fn from_game(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    #[must_use]
    pub fn valid_moves(&self, from: Square) -> Option<MoveList> {
        self.0.lock().valid_moves(from)
    }

    /// # Errors
    ///
    /// See [`Game::make_move`].
    pub fn make_move(&self, mv: Move) -> Result<(), InvalidMove> {
        self.0.lock().make_move(mv)
    }

    #[must_use]
    pub fn status(&self, color: Color) -> Status {
        self.0.lock().status(color)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.0.lock().side_to_move()
    }

    /// Run `f` with the lock held.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Game {
        self.0.lock().clone()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::from_game(game)
    }
}
