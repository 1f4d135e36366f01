use crate::geometry::{
    self, CORNER_POSITIONS, EDGE_POSITIONS, Face, U_LAYER_CORNERS, U_LAYER_EDGES, Y,
    is_odd_permutation,
};
use serde::{Deserialize, Serialize};

/// An edge piece sitting in a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub piece: u8,
    /// Whether the edge is misoriented with respect to the F/B axis.
    pub flip: bool,
}

/// A corner piece sitting in a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corner {
    pub piece: u8,
    /// The axis (0 = x, 1 = y, 2 = z) the piece's U/D sticker points along.
    pub orientation: u8,
}

/// A 3x3x3 cube described relative to its centers.
///
/// `edges[i]` is the piece in edge slot `i` and `corners[i]` is the piece in
/// corner slot `i`; see [`crate::geometry`] for the slot numbering. The piece
/// ids form permutations of `0..12` and `0..8`. Whether the state is reachable
/// is not checked, states only come from the solved state and valid moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    pub edges: [Edge; 12],
    pub corners: [Corner; 8],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl CubeState {
    pub const SOLVED: Self = {
        let mut edges = [Edge {
            piece: 0,
            flip: false,
        }; 12];
        let mut corners = [Corner {
            piece: 0,
            orientation: Y as u8,
        }; 8];

        let mut i = 0;
        while i < edges.len() {
            edges[i].piece = i as u8;
            i += 1;
        }
        let mut i = 0;
        while i < corners.len() {
            corners[i].piece = i as u8;
            i += 1;
        }

        CubeState { edges, corners }
    };

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Check that the piece ids form permutations and that every orientation
    /// is in range. States read from disk go through this before use.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut seen_edges = [false; 12];
        for edge in &self.edges {
            match seen_edges.get_mut(usize::from(edge.piece)) {
                Some(seen) if !*seen => *seen = true,
                _ => return false,
            }
        }
        let mut seen_corners = [false; 8];
        for corner in &self.corners {
            if corner.orientation > 2 {
                return false;
            }
            match seen_corners.get_mut(usize::from(corner.piece)) {
                Some(seen) if !*seen => *seen = true,
                _ => return false,
            }
        }
        true
    }

    /// Turn the outer layer of `face` clockwise `quarters` times.
    pub fn turn_face(&mut self, face: Face, quarters: u8) {
        for _ in 0..quarters % 4 {
            self.quarter_turn(face);
        }
    }

    fn quarter_turn(&mut self, face: Face) {
        let axis = face.axis();
        let old = *self;

        for (slot, &position) in CORNER_POSITIONS.iter().enumerate() {
            if position[axis] != face.sign() {
                continue;
            }
            let corner = old.corners[slot];
            let target = geometry::corner_slot(geometry::turn_vector(position, face, 1))
                .expect("a turn maps corner slots to corner slots");
            self.corners[target] = Corner {
                piece: corner.piece,
                orientation: geometry::swap_axes(usize::from(corner.orientation), axis) as u8,
            };
        }

        for (slot, &position) in EDGE_POSITIONS.iter().enumerate() {
            if position[axis] != face.sign() {
                continue;
            }
            let edge = old.edges[slot];
            let primary = geometry::primary_axis(position);
            let sticker_axis = if edge.flip {
                geometry::other_axis(position, primary)
            } else {
                primary
            };
            let target_position = geometry::turn_vector(position, face, 1);
            let target = geometry::edge_slot(target_position)
                .expect("a turn maps edge slots to edge slots");
            self.edges[target] = Edge {
                piece: edge.piece,
                flip: geometry::swap_axes(sticker_axis, axis)
                    != geometry::primary_axis(target_position),
            };
        }
    }

    /// A uniformly random, solvable last layer case on top of solved first two
    /// layers.
    ///
    /// The U layer pieces are permuted with matching corner and edge parity,
    /// an even number of edges is flipped and the corner twists sum to zero
    /// modulo three.
    #[must_use]
    pub fn random_last_layer(rng: &mut fastrand::Rng) -> Self {
        let mut state = Self::SOLVED;

        let mut corner_pieces = U_LAYER_CORNERS;
        let mut edge_pieces = U_LAYER_EDGES;
        rng.shuffle(&mut corner_pieces);
        rng.shuffle(&mut edge_pieces);
        if is_odd_permutation(&corner_pieces) != is_odd_permutation(&edge_pieces) {
            edge_pieces.swap(0, 1);
        }

        let mut flip_parity = false;
        for (i, (&slot, &piece)) in U_LAYER_EDGES.iter().zip(&edge_pieces).enumerate() {
            let flip = if i + 1 == U_LAYER_EDGES.len() {
                flip_parity
            } else {
                rng.bool()
            };
            flip_parity ^= flip;
            state.edges[slot] = Edge {
                piece: piece as u8,
                flip,
            };
        }

        let mut twist_sum = 0;
        for (i, (&slot, &piece)) in U_LAYER_CORNERS.iter().zip(&corner_pieces).enumerate() {
            let twist = if i + 1 == U_LAYER_CORNERS.len() {
                (3 - twist_sum % 3) % 3
            } else {
                rng.u8(..3)
            };
            twist_sum += twist;
            state.corners[slot] = Corner {
                piece: piece as u8,
                orientation: twisted_orientation(CORNER_POSITIONS[slot], twist),
            };
        }

        state
    }
}

/// The orientation of a U layer corner whose U sticker sits `twist` clockwise
/// steps away from the U face.
fn twisted_orientation(position: [i8; 3], twist: u8) -> u8 {
    // Clockwise around a corner seen from outside: y, x, z for corners where an
    // even number of coordinates is negative, y, z, x otherwise.
    let order = if geometry::handedness(position) > 0 {
        [1, 0, 2]
    } else {
        [1, 2, 0]
    };
    order[usize::from(twist)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{U_LAYER_CORNERS, U_LAYER_EDGES};

    #[test]
    fn test_solved() {
        let solved = CubeState::SOLVED;
        assert!(solved.is_solved());
        assert!(solved.is_well_formed());
        assert!(solved.corners.iter().all(|c| c.orientation == 1));
        assert!(solved.edges.iter().all(|e| !e.flip));
    }

    #[test]
    fn test_face_turn_order() {
        for face in Face::ALL {
            let mut state = CubeState::SOLVED;
            state.turn_face(face, 1);
            assert!(!state.is_solved());
            assert!(state.is_well_formed());
            state.turn_face(face, 3);
            assert!(state.is_solved());
        }
    }

    #[test]
    fn test_edge_orientation_convention() {
        // U, D, R, L never change edge orientation
        for face in [Face::U, Face::D, Face::R, Face::L] {
            let mut state = CubeState::SOLVED;
            state.turn_face(face, 1);
            assert!(state.edges.iter().all(|e| !e.flip));
        }
        // F and B flip the four edges they move
        for face in [Face::F, Face::B] {
            let mut state = CubeState::SOLVED;
            state.turn_face(face, 1);
            assert_eq!(state.edges.iter().filter(|e| e.flip).count(), 4);
            state.turn_face(face, 1);
            assert!(state.edges.iter().all(|e| !e.flip));
        }
    }

    #[test]
    fn test_malformed() {
        let mut state = CubeState::SOLVED;
        state.edges[3].piece = 4;
        assert!(!state.is_well_formed());

        let mut state = CubeState::SOLVED;
        state.corners[0].orientation = 3;
        assert!(!state.is_well_formed());
    }

    #[test]
    fn test_random_last_layer_is_legal() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..200 {
            let state = CubeState::random_last_layer(&mut rng);
            assert!(state.is_well_formed());

            for slot in (0..12).filter(|slot| !U_LAYER_EDGES.contains(slot)) {
                assert_eq!(state.edges[slot], CubeState::SOLVED.edges[slot]);
            }
            for slot in (0..8).filter(|slot| !U_LAYER_CORNERS.contains(slot)) {
                assert_eq!(state.corners[slot], CubeState::SOLVED.corners[slot]);
            }

            let edge_pieces = U_LAYER_EDGES.map(|slot| state.edges[slot].piece);
            let corner_pieces = U_LAYER_CORNERS.map(|slot| state.corners[slot].piece);
            assert_eq!(
                is_odd_permutation(&edge_pieces),
                is_odd_permutation(&corner_pieces)
            );
            let flips = U_LAYER_EDGES
                .iter()
                .filter(|&&slot| state.edges[slot].flip)
                .count();
            assert_eq!(flips % 2, 0);
        }
    }

    #[test]
    fn test_random_last_layer_varies() {
        let mut rng = fastrand::Rng::with_seed(11);
        let first = CubeState::random_last_layer(&mut rng);
        assert!((0..20).any(|_| CubeState::random_last_layer(&mut rng) != first));
    }
}
