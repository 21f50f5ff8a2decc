//! Deck construction and shuffling.
//!
//! For the pair at index `i` the builder emits one term card and one
//! definition card, both carrying `PairId(i)`. That gives 2N cards with each
//! pair ID appearing exactly twice, once per role - the invariant the match
//! engine relies on.

use im::Vector;

use crate::core::{Card, DeckRng, Pair, PairId, Role};
use crate::input::MAX_PAIRS;

/// Build an unshuffled deck of 2N cards from N pairs.
#[must_use]
pub fn build_deck(pairs: &[Pair]) -> Vector<Card> {
    assert!(
        pairs.len() <= MAX_PAIRS,
        "Pair count exceeds PairId width; the parser enforces this bound"
    );

    let mut cards = Vector::new();
    for (index, pair) in pairs.iter().enumerate() {
        let id = PairId::new(index as u16);
        cards.push_back(Card::new(pair.term.clone(), Role::Term, id));
        cards.push_back(Card::new(pair.definition.clone(), Role::Definition, id));
    }
    cards
}

/// Shuffle the deck in place with an unbiased uniform permutation.
///
/// Fisher-Yates, last index to first, swapping each position with a
/// uniformly chosen position at or before it.
pub fn shuffle_deck(cards: &mut Vector<Card>, rng: &mut DeckRng) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        cards.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cards_per_pair() {
        let pairs = vec![Pair::new("A", "a"), Pair::new("B", "b"), Pair::new("C", "c")];
        let deck = build_deck(&pairs);

        assert_eq!(deck.len(), 6);
        for (i, pair) in pairs.iter().enumerate() {
            let id = PairId::new(i as u16);
            let term: Vec<_> = deck
                .iter()
                .filter(|c| c.pair_id == id && c.role == Role::Term)
                .collect();
            let def: Vec<_> = deck
                .iter()
                .filter(|c| c.pair_id == id && c.role == Role::Definition)
                .collect();
            assert_eq!(term.len(), 1);
            assert_eq!(def.len(), 1);
            assert_eq!(term[0].content, pair.term);
            assert_eq!(def[0].content, pair.definition);
        }
    }

    #[test]
    fn test_cards_start_face_down() {
        let deck = build_deck(&[Pair::new("A", "a")]);
        assert!(deck.iter().all(Card::is_face_down));
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let pairs: Vec<_> = (0..8).map(|i| Pair::new(format!("t{i}"), format!("d{i}"))).collect();

        let mut deck1 = build_deck(&pairs);
        let mut deck2 = build_deck(&pairs);
        shuffle_deck(&mut deck1, &mut DeckRng::new(7));
        shuffle_deck(&mut deck2, &mut DeckRng::new(7));
        assert_eq!(deck1, deck2);

        let mut deck3 = build_deck(&pairs);
        shuffle_deck(&mut deck3, &mut DeckRng::new(8));
        assert_ne!(deck1, deck3);
    }

    #[test]
    fn test_shuffle_single_pair_is_safe() {
        let mut deck = build_deck(&[Pair::new("A", "a")]);
        shuffle_deck(&mut deck, &mut DeckRng::new(0));
        assert_eq!(deck.len(), 2);
    }
}
