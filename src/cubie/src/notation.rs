use crate::{geometry::Face, moves::MoveError};
use std::{fmt, str::FromStr};

/// A standard WCA turn: an outer face turn or a whole cube rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Face { face: Face, quarters: u8 },
    /// A rotation of the whole cube in the direction of `axis_face`, so `x`
    /// follows R, `y` follows U and `z` follows F.
    Rotation { axis_face: Face, quarters: u8 },
}

/// The number of clockwise quarter turns a modifier stands for.
pub(crate) fn modifier_quarters(modifier: &str) -> Option<u8> {
    match modifier {
        "" => Some(1),
        "2" => Some(2),
        "'" => Some(3),
        _ => None,
    }
}

impl FromStr for Turn {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(MoveError::Empty)?;
        let quarters =
            modifier_quarters(chars.as_str()).ok_or_else(|| MoveError::Invalid(s.to_owned()))?;

        if let Some(face) = Face::from_letter(letter) {
            return Ok(Turn::Face { face, quarters });
        }
        let axis_face = match letter {
            'x' => Face::R,
            'y' => Face::U,
            'z' => Face::F,
            _ => return Err(MoveError::Invalid(s.to_owned())),
        };
        Ok(Turn::Rotation {
            axis_face,
            quarters,
        })
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (letter, quarters) = match *self {
            Turn::Face { face, quarters } => (format!("{face:?}"), quarters),
            Turn::Rotation {
                axis_face,
                quarters,
            } => (
                match axis_face {
                    Face::R | Face::L => "x",
                    Face::U | Face::D => "y",
                    Face::F | Face::B => "z",
                }
                .to_owned(),
                quarters,
            ),
        };
        let modifier = match quarters % 4 {
            2 => "2",
            3 => "'",
            _ => "",
        };
        write!(f, "{letter}{modifier}")
    }
}

/// The token undoing `token`: `X` becomes `X'`, `X'` becomes `X` and `X2`
/// stays as it is.
///
/// # Errors
///
/// If the token is empty or its modifier is not one of `'` and `2`.
pub fn inverse_token(token: &str) -> Result<String, MoveError> {
    let mut chars = token.chars();
    let letter = chars.next().ok_or(MoveError::Empty)?;
    match chars.as_str() {
        "" => Ok(format!("{letter}'")),
        "'" => Ok(letter.to_string()),
        "2" => Ok(token.to_owned()),
        _ => Err(MoveError::Invalid(token.to_owned())),
    }
}
