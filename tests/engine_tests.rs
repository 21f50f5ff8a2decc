//! Match engine scenarios on full boards.
//!
//! Unit-level transitions are covered next to the engine; these play whole
//! games against shuffled decks.

use termflip::{
    build_deck, flip, resolve_mismatch, shuffle_deck, DeckRng, FlipOutcome, GameState, Pair, Role,
};

fn shuffled_board(n: usize, seed: u64) -> GameState {
    let pairs: Vec<_> = (0..n)
        .map(|i| Pair::new(format!("t{i}"), format!("d{i}")))
        .collect();
    let mut cards = build_deck(&pairs);
    shuffle_deck(&mut cards, &mut DeckRng::new(seed));
    GameState::new(cards, 1)
}

fn position_of(state: &GameState, id: u16, role: Role) -> usize {
    state
        .cards
        .iter()
        .position(|c| c.pair_id.raw() == id && c.role == role)
        .expect("card must exist")
}

#[test]
fn test_perfect_game_completes_in_n_moves() {
    let n = 5;
    let mut state = shuffled_board(n, 99);

    for id in 0..n as u16 {
        let term = position_of(&state, id, Role::Term);
        let def = position_of(&state, id, Role::Definition);

        assert_eq!(flip(&mut state, term), FlipOutcome::Flipped);
        let outcome = flip(&mut state, def);
        if id as usize == n - 1 {
            assert_eq!(outcome, FlipOutcome::Completed);
        } else {
            assert_eq!(outcome, FlipOutcome::Matched);
        }
    }

    assert!(state.is_complete());
    assert_eq!(state.moves, n as u32);
    assert_eq!(state.matched_pairs, n);
}

#[test]
fn test_completion_never_fires_early() {
    let n = 3;
    let mut state = shuffled_board(n, 7);

    for id in 0..n as u16 {
        let term = position_of(&state, id, Role::Term);
        let def = position_of(&state, id, Role::Definition);
        flip(&mut state, term);
        let outcome = flip(&mut state, def);

        if (id as usize) < n - 1 {
            assert_ne!(outcome, FlipOutcome::Completed);
            assert!(!state.is_complete());
        } else {
            assert_eq!(outcome, FlipOutcome::Completed);
        }
    }
}

#[test]
fn test_mismatch_heavy_game_still_completes() {
    let n = 4;
    let mut state = shuffled_board(n, 3);
    let mut mismatches = 0;

    // Deliberately mismatch every pair once before matching it.
    for id in 0..n as u16 {
        let term = position_of(&state, id, Role::Term);
        let wrong = position_of(&state, (id + 1) % n as u16, Role::Definition);
        let def = position_of(&state, id, Role::Definition);

        if !state.cards[wrong].is_matched() {
            flip(&mut state, term);
            if let FlipOutcome::Mismatch { generation } = flip(&mut state, wrong) {
                mismatches += 1;
                resolve_mismatch(&mut state, generation);
            }
        }

        flip(&mut state, term);
        flip(&mut state, def);
    }

    assert!(state.is_complete());
    assert!(mismatches > 0);
    // Every two-card reveal counted, matched or not.
    assert_eq!(state.moves as usize, n + mismatches);
}

#[test]
fn test_duplicate_content_distinguished_by_pair_id() {
    // Two pairs with identical text: only role + pair ID decide matches.
    let pairs = vec![Pair::new("same", "same"), Pair::new("same", "same")];
    let cards = build_deck(&pairs);
    let mut state = GameState::new(cards, 1);

    let t0 = position_of(&state, 0, Role::Term);
    let t1 = position_of(&state, 1, Role::Term);

    flip(&mut state, t0);
    let outcome = flip(&mut state, t1);
    assert_eq!(outcome, FlipOutcome::Mismatch { generation: 1 });
    assert_eq!(state.matched_pairs, 0);
}

#[test]
fn test_flip_cap_holds_across_resolution_cycle() {
    let mut state = shuffled_board(2, 11);
    let t0 = position_of(&state, 0, Role::Term);
    let d1 = position_of(&state, 1, Role::Definition);
    let d0 = position_of(&state, 0, Role::Definition);

    flip(&mut state, t0);
    let outcome = flip(&mut state, d1);
    assert!(matches!(outcome, FlipOutcome::Mismatch { .. }));

    // Blocked while the mismatch is pending.
    assert_eq!(flip(&mut state, d0), FlipOutcome::Ignored);

    resolve_mismatch(&mut state, 1);

    // Unblocked afterwards.
    assert_eq!(flip(&mut state, d0), FlipOutcome::Flipped);
}
