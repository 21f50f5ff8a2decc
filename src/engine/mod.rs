//! The match engine: pure transitions over [`GameState`].
//!
//! Per-card states are face-down, flipped, and matched; globally at most two
//! cards may sit in the flipped state. The engine owns no timers - a
//! mismatch returns [`FlipOutcome::Mismatch`] carrying the generation the
//! adapter must echo back via [`resolve_mismatch`] after the reveal delay.
//! While that pair is pending, the two-card cap blocks further flips, which
//! is what gives the player time to view both cards.

use std::time::Duration;

use crate::core::{Face, GameState};

/// How long a mismatched pair stays revealed before flipping back.
///
/// Fixed by design; adapters own the actual scheduling.
pub const MISMATCH_REVEAL_DELAY: Duration = Duration::from_secs(1);

/// Result of a flip attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip refused: two cards already pending, index out of range, or the
    /// card is already flipped/matched.
    Ignored,

    /// First card of a move revealed.
    Flipped,

    /// Second card revealed and it matched.
    Matched,

    /// Second card revealed, it matched, and that was the final pair.
    Completed,

    /// Second card revealed and it did not match. The adapter should call
    /// [`resolve_mismatch`] with this generation after
    /// [`MISMATCH_REVEAL_DELAY`].
    Mismatch { generation: u64 },
}

/// Attempt to flip the card at `index`.
///
/// Counts a move each time a second card is revealed, then resolves the
/// pair: equal pair ID with differing role is a match.
pub fn flip(state: &mut GameState, index: usize) -> FlipOutcome {
    if state.flipped.len() >= 2 {
        return FlipOutcome::Ignored;
    }
    match state.cards.get(index) {
        Some(card) if card.is_face_down() => {}
        _ => return FlipOutcome::Ignored,
    }

    if let Some(card) = state.cards.get_mut(index) {
        card.face = Face::Flipped;
    }
    state.flipped.push(index);

    if state.flipped.len() < 2 {
        return FlipOutcome::Flipped;
    }

    state.moves += 1;
    let (first, second) = (state.flipped[0], state.flipped[1]);
    let is_match = state.cards[first].matches(&state.cards[second]);
    log::debug!(
        "move {}: {} vs {} -> {}",
        state.moves,
        state.cards[first].pair_id,
        state.cards[second].pair_id,
        if is_match { "match" } else { "mismatch" }
    );

    if is_match {
        for i in [first, second] {
            if let Some(card) = state.cards.get_mut(i) {
                card.face = Face::Matched;
            }
        }
        state.flipped.clear();
        state.matched_pairs += 1;

        if state.is_complete() {
            log::info!(
                "board complete: {} pairs in {} moves",
                state.matched_pairs,
                state.moves
            );
            FlipOutcome::Completed
        } else {
            FlipOutcome::Matched
        }
    } else {
        FlipOutcome::Mismatch {
            generation: state.generation,
        }
    }
}

/// Flip a pending mismatched pair back face-down.
///
/// No-op when `generation` is stale (the round was reset after the callback
/// was scheduled) or when nothing is pending, so deferred callbacks are safe
/// to deliver late.
pub fn resolve_mismatch(state: &mut GameState, generation: u64) {
    if generation != state.generation {
        log::trace!(
            "dropping stale mismatch callback (generation {generation}, current {})",
            state.generation
        );
        return;
    }
    if !state.mismatch_pending() {
        return;
    }

    let pending: Vec<usize> = state.flipped.drain(..).collect();
    for index in pending {
        if let Some(card) = state.cards.get_mut(index) {
            card.face = Face::Down;
        }
    }
}
