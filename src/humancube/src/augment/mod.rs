//! Growing a corpus of complete solves with algebraically correct variants.
//!
//! Every generator reads the corpus as it was before augmentation started, so
//! no stage builds on samples synthesized by another.

use crate::{Error, SampleSet, start, success, working};
use cubie::MoveError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod crossover;
pub mod last_layer;
pub mod skips;

pub use crossover::{ProgressNode, Transition, TransitionGraph, crossover};
pub use last_layer::randomize_last_layers;
pub use skips::{cross_skips, first_skips};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AugmentParams {
    /// How many samples to splice together from fragments of different solves.
    pub crossover: usize,
    /// How many random last layer cases to attach to each F2L solve.
    pub ll_cases: usize,
    /// Add samples starting right after the cross is built.
    pub cross_skips: bool,
    /// Add samples starting after the first move.
    pub first_skips: bool,
}

impl AugmentParams {
    /// # Errors
    ///
    /// If the file cannot be read or is not a valid configuration.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }
}

/// Append augmented samples to `set`, returning how many were added.
///
/// # Errors
///
/// If a sample in the set contains an invalid move.
pub fn augment(
    set: &mut SampleSet,
    params: &AugmentParams,
    rng: &mut fastrand::Rng,
) -> Result<usize, MoveError> {
    info!(start!("Augmenting {} samples with {:?}"), set.len(), params);
    let seed = set.samples();

    let mut generated = crossover(seed, params.crossover, rng)?;
    debug!(working!("Generated {} crossover samples"), generated.len());

    let last_layers = randomize_last_layers(seed, params.ll_cases, rng)?;
    debug!(working!("Generated {} last layer samples"), last_layers.len());
    generated.extend(last_layers);

    if params.cross_skips {
        let skipped = cross_skips(seed)?;
        debug!(working!("Generated {} cross skip samples"), skipped.len());
        generated.extend(skipped);
    }
    if params.first_skips {
        let skipped = first_skips(seed)?;
        debug!(working!("Generated {} first skip samples"), skipped.len());
        generated.extend(skipped);
    }

    let added = generated.len();
    set.extend(generated);
    info!(success!("Added {} samples, {} in total"), added, set.len());
    Ok(added)
}
