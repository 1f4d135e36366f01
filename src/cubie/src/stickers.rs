//! The sticker level view of a cube.
//!
//! Whole cube rotations are only meaningful once the cube is seen as 54
//! coloured stickers: the rotation moves the centers, and re-reading the
//! colours relative to the moved centers turns the result back into pieces.

use crate::{
    geometry::{
        self, CORNER_POSITIONS, EDGE_POSITIONS, Face, Vec3, Y, is_odd_permutation,
    },
    state::{Corner, CubeState, Edge},
};
use thiserror::Error;

pub const STICKER_COUNT: usize = 54;
pub const CENTER_INDEX: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StickerError {
    #[error("The stickers of {kind} slot {slot} do not belong to a single piece")]
    UnknownPiece { kind: &'static str, slot: usize },
    #[error("The {kind} piece {piece} appears more than once")]
    DuplicatePiece { kind: &'static str, piece: usize },
}

/// Every sticker of the cube, holding the face it belongs to when solved.
/// Face `f` owns indices `9 * f..9 * f + 9` with its center at `9 * f + 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StickerCube([Face; STICKER_COUNT]);

/// The two in-plane axes of a face, column axis first.
const fn plane_axes(axis: usize) -> (usize, usize) {
    match axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// The index of the sticker on `face` belonging to the piece at `position`.
#[must_use]
pub fn sticker_index(face: Face, position: Vec3) -> usize {
    let (column_axis, row_axis) = plane_axes(face.axis());
    let row = (position[row_axis] + 1) as usize;
    let column = (position[column_axis] + 1) as usize;
    face as usize * 9 + row * 3 + column
}

/// The face and piece position of a sticker index.
#[must_use]
pub fn sticker_location(index: usize) -> (Face, Vec3) {
    let face = Face::ALL[index / 9];
    let (column_axis, row_axis) = plane_axes(face.axis());
    let mut position = [0; 3];
    position[face.axis()] = face.sign();
    position[row_axis] = (index % 9 / 3) as i8 - 1;
    position[column_axis] = (index % 3) as i8 - 1;
    (face, position)
}

/// Assign the colour axes of a corner piece to the axes of the slot holding
/// it. The piece's y colour goes on `orientation`, the rest is forced by the
/// handedness of the slot and of the piece's home.
fn corner_axis_assignment(slot: Vec3, home: Vec3, orientation: usize) -> [usize; 3] {
    let rest = [0, 1, 2]
        .into_iter()
        .filter(|&axis| axis != orientation)
        .collect::<Vec<_>>();
    let mut assignment = [rest[0], orientation, rest[1]];
    let mirrored = geometry::handedness(slot) * geometry::handedness(home) < 0;
    if is_odd_permutation(&assignment) != mirrored {
        assignment.swap(0, 2);
    }
    assignment
}

fn colors_to_home(colors: impl IntoIterator<Item = Face>) -> Vec3 {
    let mut home = [0; 3];
    for color in colors {
        home[color.axis()] = color.sign();
    }
    home
}

impl StickerCube {
    #[must_use]
    pub fn stickers(&self) -> &[Face; STICKER_COUNT] {
        &self.0
    }

    #[must_use]
    pub fn center(&self, face: Face) -> Face {
        self.0[face as usize * 9 + CENTER_INDEX]
    }

    /// Turn the stickers `quarters` clockwise quarter turns of `face`. Only the
    /// outer layer moves unless `whole_cube` is set.
    pub fn turn(&mut self, face: Face, quarters: u8, whole_cube: bool) {
        let old = self.0;
        for (index, &color) in old.iter().enumerate() {
            let (sticker_face, position) = sticker_location(index);
            if !whole_cube && position[face.axis()] != face.sign() {
                continue;
            }
            let new_face = Face::from_normal(geometry::turn_vector(
                sticker_face.normal(),
                face,
                quarters,
            ));
            let new_position = geometry::turn_vector(position, face, quarters);
            self.0[sticker_index(new_face, new_position)] = color;
        }
    }

    /// Recolour every sticker so that each center matches the face it sits on.
    pub fn reinterpret_centers(&mut self) {
        let mut recolor = Face::ALL;
        for face in Face::ALL {
            recolor[self.center(face) as usize] = face;
        }
        for sticker in &mut self.0 {
            *sticker = recolor[*sticker as usize];
        }
    }
}

impl From<&CubeState> for StickerCube {
    fn from(state: &CubeState) -> Self {
        let mut stickers = [Face::U; STICKER_COUNT];
        for face in Face::ALL {
            stickers[face as usize * 9 + CENTER_INDEX] = face;
        }

        for (slot, corner) in state.corners.iter().enumerate() {
            let position = CORNER_POSITIONS[slot];
            let home = CORNER_POSITIONS[usize::from(corner.piece)];
            let assignment =
                corner_axis_assignment(position, home, usize::from(corner.orientation));
            for (color_axis, &slot_axis) in assignment.iter().enumerate() {
                let color = Face::from_axis_sign(color_axis, home[color_axis]);
                let face = Face::from_axis_sign(slot_axis, position[slot_axis]);
                stickers[sticker_index(face, position)] = color;
            }
        }

        for (slot, edge) in state.edges.iter().enumerate() {
            let position = EDGE_POSITIONS[slot];
            let home = EDGE_POSITIONS[usize::from(edge.piece)];
            let slot_primary = geometry::primary_axis(position);
            let slot_other = geometry::other_axis(position, slot_primary);
            let home_primary = geometry::primary_axis(home);
            let home_other = geometry::other_axis(home, home_primary);

            let (primary_target, other_target) = if edge.flip {
                (slot_other, slot_primary)
            } else {
                (slot_primary, slot_other)
            };
            stickers[sticker_index(
                Face::from_axis_sign(primary_target, position[primary_target]),
                position,
            )] = Face::from_axis_sign(home_primary, home[home_primary]);
            stickers[sticker_index(
                Face::from_axis_sign(other_target, position[other_target]),
                position,
            )] = Face::from_axis_sign(home_other, home[home_other]);
        }

        StickerCube(stickers)
    }
}

impl TryFrom<&StickerCube> for CubeState {
    type Error = StickerError;

    fn try_from(stickers: &StickerCube) -> Result<Self, Self::Error> {
        let mut state = CubeState::SOLVED;
        let color_at = |axis: usize, position: Vec3| {
            stickers.0[sticker_index(Face::from_axis_sign(axis, position[axis]), position)]
        };

        let mut seen_corners = [false; 8];
        for (slot, &position) in CORNER_POSITIONS.iter().enumerate() {
            let colors = [0, 1, 2].map(|axis| color_at(axis, position));
            let unknown = StickerError::UnknownPiece {
                kind: "corner",
                slot,
            };
            let piece = geometry::corner_slot(colors_to_home(colors)).ok_or(unknown.clone())?;
            let orientation = colors
                .iter()
                .position(|color| color.axis() == Y)
                .ok_or(unknown)?;
            if std::mem::replace(&mut seen_corners[piece], true) {
                return Err(StickerError::DuplicatePiece {
                    kind: "corner",
                    piece,
                });
            }
            state.corners[slot] = Corner {
                piece: piece as u8,
                orientation: orientation as u8,
            };
        }

        let mut seen_edges = [false; 12];
        for (slot, &position) in EDGE_POSITIONS.iter().enumerate() {
            let slot_primary = geometry::primary_axis(position);
            let slot_other = geometry::other_axis(position, slot_primary);
            let primary_color = color_at(slot_primary, position);
            let other_color = color_at(slot_other, position);

            let piece = geometry::edge_slot(colors_to_home([primary_color, other_color]))
                .ok_or(StickerError::UnknownPiece { kind: "edge", slot })?;
            if std::mem::replace(&mut seen_edges[piece], true) {
                return Err(StickerError::DuplicatePiece {
                    kind: "edge",
                    piece,
                });
            }
            let home_primary = geometry::primary_axis(EDGE_POSITIONS[piece]);
            state.edges[slot] = Edge {
                piece: piece as u8,
                flip: primary_color.axis() != home_primary,
            };
        }

        Ok(state)
    }
}
