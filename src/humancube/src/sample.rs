use crate::{Move, parse_moves, progress};
use cubie::{CubeState, MoveError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A solve or part of a solve: applying `moves` to `start` reaches the solved
/// state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SampleRepr", into = "SampleRepr")]
pub struct Sample {
    pub start: CubeState,
    pub moves: Vec<Move>,
}

#[derive(Serialize, Deserialize)]
struct SampleRepr {
    start: CubeState,
    moves: String,
}

impl From<SampleRepr> for Sample {
    fn from(value: SampleRepr) -> Self {
        Sample {
            start: value.start,
            moves: parse_moves(&value.moves),
        }
    }
}

impl From<Sample> for SampleRepr {
    fn from(value: Sample) -> Self {
        SampleRepr {
            start: value.start,
            moves: value.notation(),
        }
    }
}

/// One move of a sample together with the states around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<'a> {
    pub before: CubeState,
    pub token: &'a Move,
    pub after: CubeState,
}

/// Replays a sample one move at a time. Stops after the first move that
/// fails to apply.
pub struct Steps<'a> {
    state: CubeState,
    moves: std::slice::Iter<'a, Move>,
    failed: bool,
}

impl<'a> Iterator for Steps<'a> {
    type Item = Result<Step<'a>, MoveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.moves.next()?;
        let before = self.state;
        if let Err(err) = self.state.apply(token) {
            self.failed = true;
            return Some(Err(err));
        }
        Some(Ok(Step {
            before,
            token,
            after: self.state,
        }))
    }
}

/// The moves of a sample up to the point where F2L is first solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct F2lPrefix<'a> {
    pub moves: &'a [Move],
    /// The state right after the last prefix move.
    pub state: CubeState,
}

/// Undo `moves` starting from `end`, giving the state they were applied to.
///
/// # Errors
///
/// If any of the moves is invalid.
pub fn rewind(mut end: CubeState, moves: &[Move]) -> Result<CubeState, MoveError> {
    for token in moves.iter().rev() {
        end.apply_inverse(token)?;
    }
    Ok(end)
}

impl Sample {
    #[must_use]
    pub fn new(start: CubeState, moves: Vec<Move>) -> Self {
        Sample { start, moves }
    }

    /// The sample that `moves` solves, found by undoing them from the solved
    /// state.
    ///
    /// # Errors
    ///
    /// If any of the moves is invalid.
    pub fn from_solution(moves: Vec<Move>) -> Result<Self, MoveError> {
        Ok(Sample {
            start: rewind(CubeState::SOLVED, &moves)?,
            moves,
        })
    }

    #[must_use]
    pub fn notation(&self) -> String {
        self.moves.iter().map(|token| &**token).join(" ")
    }

    #[must_use]
    pub fn steps(&self) -> Steps<'_> {
        Steps {
            state: self.start,
            moves: self.moves.iter(),
            failed: false,
        }
    }

    /// # Errors
    ///
    /// If any of the moves is invalid.
    pub fn end_state(&self) -> Result<CubeState, MoveError> {
        let mut state = self.start;
        for token in &self.moves {
            state.apply(token)?;
        }
        Ok(state)
    }

    /// The shortest non-empty prefix of the moves after which F2L is solved,
    /// or `None` if F2L is never solved.
    ///
    /// # Errors
    ///
    /// If any of the replayed moves is invalid.
    pub fn f2l_prefix(&self) -> Result<Option<F2lPrefix<'_>>, MoveError> {
        for (i, step) in self.steps().enumerate() {
            let step = step?;
            if progress::f2l_solved(&step.after) {
                return Ok(Some(F2lPrefix {
                    moves: &self.moves[..=i],
                    state: step.after,
                }));
            }
        }
        Ok(None)
    }
}
