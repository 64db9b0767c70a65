//! Game sessions tying a board to its end conditions.

mod game;

pub use game::Game;
