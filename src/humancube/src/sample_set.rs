use crate::{
    Error, Move, MoveIndex, Sample, Vocabulary, features,
    parse_moves,
    record::{self, RecordCheck, ReconstructedSolve},
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    ops::Range,
    path::Path,
    sync::Arc,
};

/// Samples sharing one move vocabulary.
///
/// Cloning copies the sample list but shares the vocabulary. Subsets and
/// augmented sets keep the vocabulary of the set they came from.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
    vocabulary: Arc<Vocabulary>,
}

#[derive(Serialize, Deserialize)]
struct SampleSetRepr<S> {
    vocabulary: Vocabulary,
    samples: S,
}

/// A single model training example: the encoded state before a move and the
/// move that was taken.
pub type TrainingStep = (Vec<f32>, MoveIndex);

impl SampleSet {
    /// Build a set from the records whose reconstruction solves their scramble.
    /// No augmentation is performed.
    #[must_use]
    pub fn from_records(records: &[ReconstructedSolve]) -> Self {
        let usable = records
            .iter()
            .filter_map(|record| match record.check() {
                RecordCheck::Usable(start) => Some((record, start)),
                check => {
                    debug!("Skipping record {}: {check:?}", record.id);
                    None
                }
            })
            .collect::<Vec<_>>();

        let vocabulary = Vocabulary::new(usable.iter().flat_map(|(record, _)| {
            parse_moves(&record.scramble)
                .into_iter()
                .chain(parse_moves(&record.reconstruction))
        }));
        let samples = usable
            .iter()
            .map(|(record, start)| Sample::new(*start, parse_moves(&record.reconstruction)))
            .collect::<Vec<_>>();

        info!(
            "Kept {} of {} records with {} distinct moves",
            samples.len(),
            records.len(),
            vocabulary.len()
        );
        SampleSet {
            samples,
            vocabulary: Arc::new(vocabulary),
        }
    }

    /// Like [`SampleSet::from_records`] but reading the records from a file.
    ///
    /// # Errors
    ///
    /// If the records cannot be read.
    pub fn load_records(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self::from_records(&record::load_records(path)?))
    }

    /// Write the set and its vocabulary as JSON.
    ///
    /// # Errors
    ///
    /// If the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(
            &mut writer,
            &SampleSetRepr {
                vocabulary: (*self.vocabulary).clone(),
                samples: &self.samples,
            },
        )?;
        writer.flush()?;
        Ok(())
    }

    /// Read a set written by [`SampleSet::save`].
    ///
    /// # Errors
    ///
    /// If the file cannot be read, a starting state is not a valid piece
    /// arrangement or a sample uses a move outside the vocabulary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let repr: SampleSetRepr<Vec<Sample>> =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;
        for (i, sample) in repr.samples.iter().enumerate() {
            if !sample.start.is_well_formed() {
                return Err(Error::MalformedState(i));
            }
            if let Some(token) = sample
                .moves
                .iter()
                .find(|token| !repr.vocabulary.contains(token))
            {
                return Err(Error::UnknownMove(token.to_string()));
            }
        }
        Ok(SampleSet {
            samples: repr.samples,
            vocabulary: Arc::new(repr.vocabulary),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The samples in `range`, sharing this set's vocabulary.
    ///
    /// # Panics
    ///
    /// If `range` is out of bounds.
    #[must_use]
    pub fn subset(&self, range: Range<usize>) -> SampleSet {
        SampleSet {
            samples: self.samples[range].to_vec(),
            vocabulary: Arc::clone(&self.vocabulary),
        }
    }

    pub fn shuffle(&mut self, rng: &mut fastrand::Rng) {
        rng.shuffle(&mut self.samples);
    }

    /// Append samples. They must only use moves from the vocabulary.
    pub fn extend(&mut self, samples: impl IntoIterator<Item = Sample>) {
        let before = self.samples.len();
        self.samples.extend(samples);
        debug_assert!(
            self.samples[before..]
                .iter()
                .flat_map(|sample| &sample.moves)
                .all(|token| self.vocabulary.contains(token)),
            "appended samples introduced a move outside the vocabulary"
        );
    }

    /// The model inputs and targets of every move of a sample.
    ///
    /// # Errors
    ///
    /// If a move cannot be applied or is not in the vocabulary.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn training_steps(&self, index: usize) -> Result<Vec<TrainingStep>, Error> {
        self.samples[index]
            .steps()
            .map(|step| {
                let step = step?;
                let target = self.index_of(step.token)?;
                Ok((features::sticker_features(&step.before), target))
            })
            .collect()
    }

    fn index_of(&self, token: &Move) -> Result<MoveIndex, Error> {
        self.vocabulary
            .index_of(token)
            .ok_or_else(|| Error::UnknownMove(token.to_string()))
    }
}
