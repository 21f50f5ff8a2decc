//! Board state for one game round.
//!
//! `GameState` is created fresh at game start and fully replaced on restart.
//! It holds the shuffled deck, the at-most-two currently revealed cards, and
//! the per-round counters. All mutation goes through the pure transition
//! functions in [`crate::engine`].
//!
//! Uses `im` persistent data structures so adapters can take O(1) snapshot
//! clones of the board between events.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Face};

/// State of one game round.
///
/// ## Invariants
///
/// - `cards.len()` is even and fixed for the lifetime of the round.
/// - `flipped` holds at most 2 indices, each pointing at a `Face::Flipped`
///   card. The cap is the deliberate pacing mechanism: while a mismatched
///   pair waits for its reveal delay, no further flips are accepted.
/// - `matched_pairs <= total_pairs()`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Shuffled deck, in board order.
    pub cards: Vector<Card>,

    /// Indices of currently flipped-but-unmatched cards.
    pub flipped: SmallVec<[usize; 2]>,

    /// Pairs resolved so far.
    pub matched_pairs: usize,

    /// A move is counted each time a second card is revealed.
    pub moves: u32,

    /// Session generation this round belongs to. Deferred callbacks carry
    /// the generation they were scheduled under and no-op if it has moved on.
    pub generation: u64,
}

impl GameState {
    /// Create a fresh round over an already-shuffled deck.
    #[must_use]
    pub fn new(cards: Vector<Card>, generation: u64) -> Self {
        assert!(cards.len() % 2 == 0, "Deck must hold an even number of cards");
        Self {
            cards,
            flipped: SmallVec::new(),
            matched_pairs: 0,
            moves: 0,
            generation,
        }
    }

    /// Total number of pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Has every pair been matched?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    /// Get a card by board position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards currently revealed and unresolved.
    #[must_use]
    pub fn flipped_count(&self) -> usize {
        self.flipped.len()
    }

    /// Is a mismatched pair waiting for its reveal delay?
    ///
    /// True exactly when two cards are revealed but neither matched; the
    /// second flip already resolved matches, so a full `flipped` set means
    /// a pending mismatch.
    #[must_use]
    pub fn mismatch_pending(&self) -> bool {
        self.flipped.len() == 2
    }

    /// Turn every card face-down again, clearing the revealed set.
    pub fn reset_faces(&mut self) {
        for index in 0..self.cards.len() {
            if let Some(card) = self.cards.get_mut(index) {
                card.face = Face::Down;
            }
        }
        self.flipped.clear();
    }
}
