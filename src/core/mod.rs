//! Core game types: pairs, cards, game state, RNG.
//!
//! This module contains the fundamental building blocks shared by the parser,
//! the deck builder, and the match engine. Nothing here touches a rendering
//! surface or a timer.

pub mod card;
pub mod rng;
pub mod state;

pub use card::{Card, Face, Pair, PairId, Role};
pub use rng::DeckRng;
pub use state::GameState;
