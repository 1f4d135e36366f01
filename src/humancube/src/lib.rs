#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Training data curation for imitating human Rubik's cube solves.
//!
//! Verified reconstructions become [`Sample`]s collected in a [`SampleSet`],
//! which the [`augment`] engine grows using cube algebra: splicing fragments
//! that make comparable F2L progress, swapping in random last layer cases and
//! cutting solves short at the cross.

use cubie::MoveError;
use internment::ArcIntern;
use thiserror::Error;

pub mod augment;
pub mod features;
pub mod progress;
pub mod record;
pub mod sample;
pub mod sample_set;
pub mod vocabulary;

pub use augment::{AugmentParams, augment};
pub use progress::PairSignature;
pub use record::{RecordCheck, RecordStats, ReconstructedSolve};
pub use sample::Sample;
pub use sample_set::SampleSet;
pub use vocabulary::{MoveIndex, Vocabulary};

/// A single move token such as `R'` or `u2`. Tokens repeat constantly across a
/// corpus so they are interned.
pub type Move = ArcIntern<str>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("The move `{0}` is not in the vocabulary")]
    UnknownMove(String),
    #[error("Sample {0} has a malformed starting state")]
    MalformedState(usize),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Split a notation string into interned move tokens.
#[must_use]
pub fn parse_moves(notation: &str) -> Vec<Move> {
    notation.split_whitespace().map(Move::from).collect()
}

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
