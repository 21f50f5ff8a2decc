//! # termflip
//!
//! A memory-match game engine for term/definition study decks.
//!
//! ## Design Principles
//!
//! 1. **Logic without a surface**: parsing, deck building, matching, and
//!    timing are plain data and pure transitions. Every behavior is usable
//!    and testable with no rendering surface present.
//!
//! 2. **Explicit state**: no long-lived controller mutating hidden globals.
//!    A [`session::Session`] holds all state; adapters feed it events and
//!    honor the effects it returns.
//!
//! 3. **Safe deferred work**: the mismatch reveal delay is scheduled by the
//!    adapter, and a generation counter makes late callbacks no-op after a
//!    reset. No scheduling primitive is assumed to support cancellation.
//!
//! ## Architecture
//!
//! - **Deterministic shuffling**: seeded ChaCha8 behind an unbiased
//!   Fisher-Yates pass, so any board is reproducible from its seed.
//!
//! - **Persistent data structures**: O(1) board snapshots via `im` for
//!   adapters that diff state between events.
//!
//! ## Modules
//!
//! - `core`: pairs, cards, game state, RNG
//! - `input`: the two input formats, live validation, example content
//! - `deck`: deck builder and shuffle
//! - `engine`: the flip/match state machine
//! - `clock`: elapsed-time tracking and MM:SS formatting
//! - `theme`: light/dark preference with pluggable persistence
//! - `session`: screens, events, and effects - the presentation seam

pub mod clock;
pub mod core;
pub mod deck;
pub mod engine;
pub mod input;
pub mod session;
pub mod theme;

// Re-export commonly used types
pub use crate::core::{Card, DeckRng, Face, GameState, Pair, PairId, Role};

pub use crate::input::{
    example_pairs, parse_pairs, validate, Feedback, FormatError, Verdict, EXAMPLE_JSON, MAX_PAIRS,
};

pub use crate::deck::{build_deck, shuffle_deck};

pub use crate::engine::{flip, resolve_mismatch, FlipOutcome, MISMATCH_REVEAL_DELAY};

pub use crate::clock::{format_elapsed, GameClock, TIMER_TICK};

pub use crate::theme::{
    FileThemeStore, MemoryThemeStore, Theme, ThemeManager, ThemeStore, ThemeStoreError,
};

pub use crate::session::{
    entropy_seed, CompletionStats, Effect, GameRound, Screen, Session, SessionEvent,
};
