use crate::{
    notation::{self, Turn},
    state::CubeState,
    stickers::{StickerCube, StickerError},
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Empty move is invalid")]
    Empty,
    #[error("Invalid move: {0}")]
    Invalid(String),
    #[error("Rotation produced an invalid sticker arrangement: {0}")]
    Stickers(#[from] StickerError),
}

/// Moves written as a fixed sequence of other moves. Wide turns are a face
/// turn followed by a rotation and slices are two face turns followed by a
/// rotation, so none of them needs its own permutation.
static HYBRIDS: phf::Map<char, &'static [&'static str]> = phf::phf_map! {
    'r' => &["L", "x"],
    'l' => &["R", "x'"],
    'u' => &["D", "y"],
    'd' => &["U", "y'"],
    'f' => &["B", "z"],
    'b' => &["F", "z'"],
    'M' => &["R", "L'", "x'"],
    'E' => &["U", "D'", "y'"],
    'S' => &["F'", "B", "z"],
};

impl CubeState {
    /// Apply a WCA notation move.
    ///
    /// # Errors
    ///
    /// If the move is empty or cannot be parsed. The state is left untouched
    /// unless the move is a hybrid whose expansion fails midway, which cannot
    /// happen for the built in hybrid table.
    pub fn apply(&mut self, token: &str) -> Result<(), MoveError> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(MoveError::Empty)?;

        if let Some(expansion) = HYBRIDS.get(&letter) {
            let repeats = match chars.as_str() {
                "" => {
                    for part in *expansion {
                        self.apply(part)?;
                    }
                    return Ok(());
                }
                "'" => 3,
                "2" => 2,
                _ => return Err(MoveError::Invalid(token.to_owned())),
            };
            let bare = &token[..letter.len_utf8()];
            for _ in 0..repeats {
                self.apply(bare)?;
            }
            return Ok(());
        }

        match token.parse::<Turn>()? {
            Turn::Face { face, quarters } => self.turn_face(face, quarters),
            Turn::Rotation {
                axis_face,
                quarters,
            } => {
                let mut stickers = StickerCube::from(&*self);
                stickers.turn(axis_face, quarters, true);
                stickers.reinterpret_centers();
                *self = CubeState::try_from(&stickers)?;
            }
        }
        Ok(())
    }

    /// Apply the inverse of a move, so that applying `token` afterwards
    /// restores the original state.
    ///
    /// # Errors
    ///
    /// If the move is empty or cannot be parsed.
    pub fn apply_inverse(&mut self, token: &str) -> Result<(), MoveError> {
        self.apply(&notation::inverse_token(token)?)
    }

    /// Apply every whitespace separated move of `sequence` in order.
    ///
    /// # Errors
    ///
    /// On the first move that cannot be applied.
    pub fn apply_sequence(&mut self, sequence: &str) -> Result<(), MoveError> {
        for token in sequence.split_whitespace() {
            self.apply(token)?;
        }
        Ok(())
    }

    /// The state reached by applying `scramble` to a solved cube.
    ///
    /// # Errors
    ///
    /// On the first move that cannot be applied.
    pub fn from_scramble(scramble: &str) -> Result<Self, MoveError> {
        let mut state = Self::SOLVED;
        state.apply_sequence(scramble)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_modifiers() {
        let mut twice = CubeState::SOLVED;
        twice.apply("r").unwrap();
        twice.apply("r").unwrap();
        let mut doubled = CubeState::SOLVED;
        doubled.apply("r2").unwrap();
        assert_eq!(twice, doubled);

        let mut thrice = CubeState::SOLVED;
        thrice.apply_sequence("M M M").unwrap();
        let mut prime = CubeState::SOLVED;
        prime.apply("M'").unwrap();
        assert_eq!(thrice, prime);
    }

    #[test]
    fn test_bare_hybrid_applies_whole_expansion() {
        let hybrid = CubeState::from_scramble("M").unwrap();
        let expanded = CubeState::from_scramble("R L' x'").unwrap();
        assert_eq!(hybrid, expanded);
        assert_ne!(hybrid, CubeState::from_scramble("R").unwrap());
        // Relative to the centers a wide turn is the opposite face turn
        assert_eq!(
            CubeState::from_scramble("u").unwrap(),
            CubeState::from_scramble("D").unwrap()
        );
    }

    #[test]
    fn test_invalid_moves() {
        let mut state = CubeState::SOLVED;
        assert_eq!(state.apply(""), Err(MoveError::Empty));
        assert_eq!(state.apply("r3"), Err(MoveError::Invalid("r3".to_owned())));
        assert_eq!(state.apply("M''"), Err(MoveError::Invalid("M''".to_owned())));
        assert_eq!(state.apply("Q"), Err(MoveError::Invalid("Q".to_owned())));
        assert_eq!(state.apply_inverse(""), Err(MoveError::Empty));
        assert!(state.is_solved());
    }
}
