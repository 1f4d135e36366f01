//! Samples that begin partway into a solve.

use crate::{Sample, progress::cross_solved};
use cubie::MoveError;
use log::debug;

/// For every sample that builds its cross, the remainder of the solve starting
/// right after the move that completed the cross.
///
/// # Errors
///
/// If a sample contains an invalid move.
pub fn cross_skips(samples: &[Sample]) -> Result<Vec<Sample>, MoveError> {
    let mut generated = Vec::new();
    for sample in samples {
        if cross_solved(&sample.start) {
            continue;
        }
        for (i, step) in sample.steps().enumerate() {
            let step = step?;
            if cross_solved(&step.after) {
                generated.push(Sample::new(step.after, sample.moves[i + 1..].to_vec()));
                break;
            }
        }
    }
    Ok(generated)
}

/// For every sample without a cross, the solve with its first move already
/// made. Skipped when that first move completes the cross.
///
/// # Errors
///
/// If a first move is invalid.
pub fn first_skips(samples: &[Sample]) -> Result<Vec<Sample>, MoveError> {
    let mut generated = Vec::new();
    for (i, sample) in samples.iter().enumerate() {
        if cross_solved(&sample.start) {
            continue;
        }
        let Some((first, rest)) = sample.moves.split_first() else {
            debug!("Sample {i} has no moves");
            continue;
        };
        let mut state = sample.start;
        state.apply(first)?;
        if cross_solved(&state) {
            continue;
        }
        generated.push(Sample::new(state, rest.to_vec()));
    }
    Ok(generated)
}
