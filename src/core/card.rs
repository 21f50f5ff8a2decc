//! Pairs and cards.
//!
//! A `Pair` is one term/definition unit of game content, immutable once
//! parsed. The deck builder turns each pair into two `Card`s that share a
//! `PairId`, one per `Role`.
//!
//! ## Invariant
//!
//! In any deck, exactly two cards carry a given `PairId`, and exactly one of
//! them has each role. The deck builder is the only place cards are created.

use serde::{Deserialize, Serialize};

/// Index of a pair in the parsed pair list.
///
/// Opaque identifier - the engine only compares pair IDs for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u16);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Which half of a pair a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Term,
    Definition,
}

impl Role {
    /// The role of the other card in the same pair.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            Role::Term => Role::Definition,
            Role::Definition => Role::Term,
        }
    }
}

/// A term/definition unit of game content.
///
/// `Deserialize` defines the structured input format: a JSON array of objects
/// with string `term` and `definition` fields. Missing fields fail parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub term: String,
    pub definition: String,
}

impl Pair {
    /// Create a pair from term and definition text.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Per-card face state.
///
/// `Flipped` means revealed but not yet resolved into a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    #[default]
    Down,
    Flipped,
    Matched,
}

/// One visual/logical unit on the board: either the term or the definition
/// half of a pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Text shown when the card is face-up.
    pub content: String,

    /// Which half of the pair this card shows.
    pub role: Role,

    /// Index into the parsed pair list.
    pub pair_id: PairId,

    /// Current face state.
    pub face: Face,
}

impl Card {
    /// Create a face-down card.
    pub fn new(content: impl Into<String>, role: Role, pair_id: PairId) -> Self {
        Self {
            content: content.into(),
            role,
            pair_id,
            face: Face::Down,
        }
    }

    /// Two cards match iff they belong to the same pair with differing roles.
    ///
    /// The role check stops a term from matching another pair's copy of
    /// itself when duplicate content appears in the input.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.pair_id == other.pair_id && self.role != other.role
    }

    /// Is this card face-down (flippable)?
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.face == Face::Down
    }

    /// Has this card been resolved into a match?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == Face::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_requires_equal_id_and_differing_role() {
        let term = Card::new("Osmosis", Role::Term, PairId::new(0));
        let def = Card::new("Water movement", Role::Definition, PairId::new(0));
        let other_term = Card::new("Mitosis", Role::Term, PairId::new(1));

        assert!(term.matches(&def));
        assert!(def.matches(&term));
        assert!(!term.matches(&other_term));
    }

    #[test]
    fn test_same_role_never_matches() {
        // Equal pair ID but both term-side: not a match.
        let a = Card::new("A", Role::Term, PairId::new(0));
        let b = Card::new("A", Role::Term, PairId::new(0));
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_role_partner() {
        assert_eq!(Role::Term.partner(), Role::Definition);
        assert_eq!(Role::Definition.partner(), Role::Term);
    }

    #[test]
    fn test_pair_deserialize_requires_both_fields() {
        let ok: Result<Pair, _> = serde_json::from_str(r#"{"term":"A","definition":"B"}"#);
        assert_eq!(ok.unwrap(), Pair::new("A", "B"));

        let missing: Result<Pair, _> = serde_json::from_str(r#"{"term":"A"}"#);
        assert!(missing.is_err());
    }
}
