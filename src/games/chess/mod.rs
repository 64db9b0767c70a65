//! Standard chess on the generic engine.
//!
//! Shows how an assembler feeds the engine:
//! - `standard_catalog()` declares the six piece kinds as move rules
//! - `standard_setup()` lays out the opening position
//! - `StandardChessBuilder` turns both into a playable `Game`
//!
//! White starts on rows 6-7 and moves first. Castling, en passant and
//! promotion are not modelled.

mod game;

pub use game::{standard_board, standard_catalog, standard_setup, StandardChessBuilder, BLACK, WHITE};
