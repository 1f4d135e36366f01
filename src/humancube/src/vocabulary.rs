use crate::Move;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The dense index of a move in a [`Vocabulary`]. Only a vocabulary hands these
/// out, so looking one up in the vocabulary that produced it always succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveIndex(usize);

impl MoveIndex {
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

/// A bidirectional table between move tokens and dense indices, numbered in
/// order of first occurrence. It never changes after construction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    moves: Vec<Move>,
    indices: FxHashMap<Move, MoveIndex>,
}

impl Vocabulary {
    pub fn new(tokens: impl IntoIterator<Item = Move>) -> Self {
        let mut vocabulary = Vocabulary::default();
        for token in tokens {
            if !vocabulary.indices.contains_key(&token) {
                vocabulary
                    .indices
                    .insert(token.clone(), MoveIndex(vocabulary.moves.len()));
                vocabulary.moves.push(token);
            }
        }
        vocabulary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, token: &Move) -> Option<MoveIndex> {
        self.indices.get(token).copied()
    }

    #[must_use]
    pub fn contains(&self, token: &Move) -> bool {
        self.indices.contains_key(token)
    }

    /// The move behind an index.
    ///
    /// # Panics
    ///
    /// If `index` came from a different, smaller vocabulary.
    #[must_use]
    pub fn token(&self, index: MoveIndex) -> &Move {
        &self.moves[index.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, &Move)> {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, token)| (MoveIndex(i), token))
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(tokens: Vec<String>) -> Self {
        Vocabulary::new(tokens.iter().map(|token| Move::from(token.as_str())))
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary
            .moves
            .iter()
            .map(|token| token.to_string())
            .collect()
    }
}
