//! Fixed 3D layout of the cube shared by the piece and sticker models.
//!
//! Positions are integer vectors: x runs from L (-1) to R (+1), y from D (-1)
//! to U (+1) and z from B (-1) to F (+1). Every slot, sticker and face turn is
//! derived from these vectors so the piece arrays and the sticker arrays can
//! never disagree about which way a turn goes.

use serde::{Deserialize, Serialize};

pub type Vec3 = [i8; 3];

pub const X: usize = 0;
pub const Y: usize = 1;
pub const Z: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    F,
    B,
    R,
    L,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, D, F, B, R, L];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn axis(self) -> usize {
        match self {
            Face::R | Face::L => X,
            Face::U | Face::D => Y,
            Face::F | Face::B => Z,
        }
    }

    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Face::R | Face::U | Face::F => 1,
            Face::L | Face::D | Face::B => -1,
        }
    }

    #[must_use]
    pub const fn from_axis_sign(axis: usize, sign: i8) -> Self {
        match (axis, sign > 0) {
            (X, true) => Face::R,
            (X, false) => Face::L,
            (Y, true) => Face::U,
            (Y, false) => Face::D,
            (_, true) => Face::F,
            (_, false) => Face::B,
        }
    }

    #[must_use]
    pub const fn normal(self) -> Vec3 {
        let mut normal = [0; 3];
        normal[self.axis()] = self.sign();
        normal
    }

    /// The face a unit normal points at.
    ///
    /// # Panics
    ///
    /// Panics if `normal` is the zero vector.
    #[must_use]
    pub fn from_normal(normal: Vec3) -> Self {
        let axis = (0..3)
            .find(|&axis| normal[axis] != 0)
            .expect("a face normal has exactly one nonzero component");
        Self::from_axis_sign(axis, normal[axis])
    }

    /// Parse an upper case face letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'U' => Face::U,
            'D' => Face::D,
            'F' => Face::F,
            'B' => Face::B,
            'R' => Face::R,
            'L' => Face::L,
            _ => return None,
        })
    }
}

const fn bit_coordinate(index: usize, bit: usize) -> i8 {
    if (index >> bit) & 1 == 1 { 1 } else { -1 }
}

/// Corner slot `i` has its x, y, z coordinate positive when bit 0, 1, 2 of `i`
/// is set, so BLD is 0 and FRU is 7.
pub const CORNER_POSITIONS: [Vec3; 8] = {
    let mut positions = [[0; 3]; 8];
    let mut i = 0;
    while i < positions.len() {
        positions[i] = [
            bit_coordinate(i, X),
            bit_coordinate(i, Y),
            bit_coordinate(i, Z),
        ];
        i += 1;
    }
    positions
};

/// UF, RF, DF, LF, UL, UR, BU, BR, BD, BL, DL, DR
pub const EDGE_POSITIONS: [Vec3; 12] = [
    [0, 1, 1],
    [1, 0, 1],
    [0, -1, 1],
    [-1, 0, 1],
    [-1, 1, 0],
    [1, 1, 0],
    [0, 1, -1],
    [1, 0, -1],
    [0, -1, -1],
    [-1, 0, -1],
    [-1, -1, 0],
    [1, -1, 0],
];

/// The U layer corner slots.
pub const U_LAYER_CORNERS: [usize; 4] = [2, 3, 6, 7];
/// The U layer edge slots.
pub const U_LAYER_EDGES: [usize; 4] = [0, 4, 5, 6];

#[must_use]
pub fn corner_slot(position: Vec3) -> Option<usize> {
    CORNER_POSITIONS.iter().position(|&p| p == position)
}

#[must_use]
pub fn edge_slot(position: Vec3) -> Option<usize> {
    EDGE_POSITIONS.iter().position(|&p| p == position)
}

/// A counterclockwise quarter turn about `axis`, looking from the positive end
/// of the axis towards the origin.
fn rotate_ccw(v: Vec3, axis: usize) -> Vec3 {
    let [x, y, z] = v;
    match axis {
        X => [x, -z, y],
        Y => [z, y, -x],
        _ => [-y, x, z],
    }
}

/// Turn `v` the way `quarters` clockwise quarter turns of `face` would move it.
#[must_use]
pub fn turn_vector(mut v: Vec3, face: Face, quarters: u8) -> Vec3 {
    // Clockwise seen from outside `face` is clockwise about the outward normal,
    // which is three counterclockwise turns about the positive axis for the
    // positive faces and one for the negative faces.
    let per_quarter = if face.sign() > 0 { 3 } else { 1 };
    for _ in 0..(per_quarter * u32::from(quarters)) % 4 {
        v = rotate_ccw(v, face.axis());
    }
    v
}

/// The axis a sticker lying along `sticker_axis` ends up on after a quarter
/// turn about `turn_axis`.
#[must_use]
pub const fn swap_axes(sticker_axis: usize, turn_axis: usize) -> usize {
    if sticker_axis == turn_axis {
        sticker_axis
    } else {
        3 - sticker_axis - turn_axis
    }
}

/// The axis holding the sticker that decides edge orientation: the U/D sticker
/// for U and D layer edges, the F/B sticker for E slice edges.
#[must_use]
pub const fn primary_axis(edge_position: Vec3) -> usize {
    if edge_position[Y] != 0 { Y } else { Z }
}

/// The second sticker axis of an edge position.
#[must_use]
pub fn other_axis(edge_position: Vec3, axis: usize) -> usize {
    (0..3)
        .find(|&a| a != axis && edge_position[a] != 0)
        .expect("edge positions have two nonzero coordinates")
}

/// The product of the coordinate signs of a corner position. Corners with
/// opposite handedness list their faces in opposite cyclic order.
#[must_use]
pub const fn handedness(corner_position: Vec3) -> i8 {
    corner_position[X] * corner_position[Y] * corner_position[Z]
}

/// Whether a sequence of distinct values is an odd permutation of its sorted
/// order.
#[must_use]
pub fn is_odd_permutation<T: Ord>(values: &[T]) -> bool {
    let mut inversions = 0;
    for (i, a) in values.iter().enumerate() {
        inversions += values[i + 1..].iter().filter(|b| a > *b).count();
    }
    inversions % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_indices() {
        assert_eq!(CORNER_POSITIONS[0], [-1, -1, -1]);
        assert_eq!(CORNER_POSITIONS[5], [1, -1, 1]);
        assert_eq!(CORNER_POSITIONS[7], [1, 1, 1]);
        for slot in U_LAYER_CORNERS {
            assert_eq!(CORNER_POSITIONS[slot][Y], 1);
        }
        for slot in U_LAYER_EDGES {
            assert_eq!(EDGE_POSITIONS[slot][Y], 1);
        }
    }

    #[test]
    fn test_clockwise_directions() {
        // U sends the front stickers to the left face
        assert_eq!(turn_vector(Face::F.normal(), Face::U, 1), Face::L.normal());
        // R sends the front stickers up
        assert_eq!(turn_vector(Face::F.normal(), Face::R, 1), Face::U.normal());
        // F sends the top stickers right
        assert_eq!(turn_vector(Face::U.normal(), Face::F, 1), Face::R.normal());
        // D is U seen from below
        assert_eq!(turn_vector(Face::F.normal(), Face::D, 1), Face::R.normal());
        // L sends the front stickers down
        assert_eq!(turn_vector(Face::F.normal(), Face::L, 1), Face::D.normal());
    }

    #[test]
    fn test_turns_keep_slots() {
        for face in Face::ALL {
            for quarters in 1..=3 {
                for position in CORNER_POSITIONS {
                    assert!(corner_slot(turn_vector(position, face, quarters)).is_some());
                }
                for position in EDGE_POSITIONS {
                    assert!(edge_slot(turn_vector(position, face, quarters)).is_some());
                }
            }
            let four = turn_vector([1, 0, -1], face, 4);
            assert_eq!(four, [1, 0, -1]);
        }
    }

    #[test]
    fn test_permutation_parity() {
        assert!(!is_odd_permutation(&[0, 1, 2, 3]));
        assert!(is_odd_permutation(&[1, 0, 2, 3]));
        assert!(!is_odd_permutation(&[1, 2, 0]));
    }
}
