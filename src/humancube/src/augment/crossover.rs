//! Splicing solves together at points of comparable F2L progress.
//!
//! Each solve is cut into fragments, one per increase in the number of solved
//! F2L pairs plus a final fragment finishing the cube. The fragments become
//! edges of a graph over pair signatures and random walks through it yield new
//! move sequences. The synthetic start is found by undoing the walk from the
//! solved state, so the walk solves it whatever the fragments did originally.

use crate::{Move, PairSignature, Sample, sample::rewind};
use cubie::{CubeState, MoveError};
use fxhash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressNode {
    Start,
    Pairs(PairSignature),
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<'a> {
    pub target: ProgressNode,
    pub moves: &'a [Move],
}

/// Fragments of every solve in a corpus, keyed by the progress they start at.
/// Outgoing transitions keep corpus order so seeded walks are reproducible.
#[derive(Clone, Debug, Default)]
pub struct TransitionGraph<'a> {
    transitions: FxHashMap<ProgressNode, Vec<Transition<'a>>>,
}

impl<'a> TransitionGraph<'a> {
    /// # Errors
    ///
    /// If a sample contains an invalid move.
    pub fn build(samples: &'a [Sample]) -> Result<Self, MoveError> {
        let mut graph = TransitionGraph::default();
        for sample in samples {
            let mut most_solved = 0;
            let mut last = ProgressNode::Start;
            let mut cursor = 0;
            for (i, step) in sample.steps().enumerate() {
                let signature = PairSignature::of(&step?.after);
                let solved = signature.solved_pair_count();
                if solved <= most_solved {
                    continue;
                }
                most_solved = solved;
                let target = ProgressNode::Pairs(signature);
                graph.add(last, target, &sample.moves[cursor..=i]);
                cursor = i + 1;
                last = target;
            }
            graph.add(last, ProgressNode::Done, &sample.moves[cursor..]);
        }
        Ok(graph)
    }

    fn add(&mut self, from: ProgressNode, target: ProgressNode, moves: &'a [Move]) {
        self.transitions
            .entry(from)
            .or_default()
            .push(Transition { target, moves });
    }

    #[must_use]
    pub fn transitions(&self, from: ProgressNode) -> &[Transition<'a>] {
        self.transitions
            .get(&from)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Walk from [`ProgressNode::Start`] to [`ProgressNode::Done`] picking an
    /// outgoing transition uniformly at random at every node, and return the
    /// concatenated moves. `None` if the graph is empty.
    pub fn random_walk(&self, rng: &mut fastrand::Rng) -> Option<Vec<Move>> {
        let mut node = ProgressNode::Start;
        let mut moves = Vec::new();
        // Every transition either solves more pairs or finishes.
        while node != ProgressNode::Done {
            let options = self.transitions(node);
            if options.is_empty() {
                return None;
            }
            let transition = options[rng.usize(..options.len())];
            moves.extend_from_slice(transition.moves);
            node = transition.target;
        }
        Some(moves)
    }
}

/// Synthesize `count` samples by recombining fragments of `samples`.
///
/// # Errors
///
/// If a sample contains an invalid move.
pub fn crossover(
    samples: &[Sample],
    count: usize,
    rng: &mut fastrand::Rng,
) -> Result<Vec<Sample>, MoveError> {
    if samples.is_empty() || count == 0 {
        return Ok(Vec::new());
    }
    let graph = TransitionGraph::build(samples)?;
    let mut generated = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(moves) = graph.random_walk(rng) else {
            break;
        };
        generated.push(Sample::new(rewind(CubeState::SOLVED, &moves)?, moves));
    }
    Ok(generated)
}
