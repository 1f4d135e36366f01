//! Predicates describing how far a CFOP style solve has progressed.

use cubie::CubeState;
use std::fmt;

/// DF, BD, DL and DR.
pub const CROSS_EDGES: [usize; 4] = [2, 8, 10, 11];
/// Every edge outside the U layer.
pub const F2L_EDGES: [usize; 8] = [1, 2, 3, 7, 8, 9, 10, 11];
/// The D layer corners.
pub const F2L_CORNERS: [usize; 4] = [0, 1, 4, 5];
/// The edge and corner slot of each F2L pair: FR, FL, BR and BL.
pub const PAIRS: [(usize, usize); 4] = [(1, 5), (3, 4), (7, 1), (9, 0)];

const SOLVED_ORIENTATION: u8 = 1;

fn edge_solved(state: &CubeState, slot: usize) -> bool {
    let edge = state.edges[slot];
    usize::from(edge.piece) == slot && !edge.flip
}

fn corner_solved(state: &CubeState, slot: usize) -> bool {
    let corner = state.corners[slot];
    usize::from(corner.piece) == slot && corner.orientation == SOLVED_ORIENTATION
}

#[must_use]
pub fn cross_solved(state: &CubeState) -> bool {
    CROSS_EDGES.iter().all(|&slot| edge_solved(state, slot))
}

/// Whether the first two layers are solved, whatever the last layer holds.
#[must_use]
pub fn f2l_solved(state: &CubeState) -> bool {
    F2L_EDGES.iter().all(|&slot| edge_solved(state, slot))
        && F2L_CORNERS.iter().all(|&slot| corner_solved(state, slot))
}

/// Which F2L pairs are solved, or nothing while the cross is unsolved since
/// pairs mean nothing without it.
///
/// Displays as four `1`/`0` characters in [`PAIRS`] order, or as the empty
/// string when there is no cross.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PairSignature(Option<[bool; 4]>);

impl PairSignature {
    #[must_use]
    pub fn of(state: &CubeState) -> Self {
        if !cross_solved(state) {
            return PairSignature(None);
        }
        PairSignature(Some(PAIRS.map(|(edge, corner)| {
            edge_solved(state, edge) && corner_solved(state, corner)
        })))
    }

    #[must_use]
    pub fn pairs(&self) -> Option<[bool; 4]> {
        self.0
    }

    #[must_use]
    pub fn solved_pair_count(&self) -> usize {
        self.0
            .map_or(0, |pairs| pairs.iter().filter(|&&solved| solved).count())
    }
}

impl fmt::Display for PairSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for solved in self.0.iter().flatten() {
            f.write_str(if *solved { "1" } else { "0" })?;
        }
        Ok(())
    }
}
