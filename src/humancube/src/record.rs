//! Human solve reconstructions as scraped from a reconstruction database.

use crate::Error;
use cubie::{CubeState, MoveError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, fs::File, io::BufReader, path::Path};

/// A single reconstructed solve. Both lower case keys and the capitalized keys
/// written by the scraper are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructedSolve {
    #[serde(alias = "ID")]
    pub id: u64,
    #[serde(alias = "Scramble")]
    pub scramble: String,
    #[serde(alias = "Reconstruction")]
    pub reconstruction: String,
    #[serde(alias = "Commented")]
    pub commented: String,
}

/// What replaying a record revealed about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordCheck {
    BadScramble(MoveError),
    BadReconstruction(MoveError),
    Unsolved,
    /// The reconstruction solves the scramble, which produced this state.
    Usable(CubeState),
}

impl ReconstructedSolve {
    #[must_use]
    pub fn check(&self) -> RecordCheck {
        let start = match CubeState::from_scramble(&self.scramble) {
            Ok(start) => start,
            Err(err) => return RecordCheck::BadScramble(err),
        };
        let mut cube = start;
        if let Err(err) = cube.apply_sequence(&self.reconstruction) {
            return RecordCheck::BadReconstruction(err);
        }
        if cube.is_solved() {
            RecordCheck::Usable(start)
        } else {
            RecordCheck::Unsolved
        }
    }
}

/// Read a JSON array of records.
///
/// # Errors
///
/// If the file cannot be read or is not a JSON array of records.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ReconstructedSolve>, Error> {
    let path = path.as_ref();
    let records: Vec<ReconstructedSolve> =
        serde_json::from_reader(BufReader::new(File::open(path)?))?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// How many records survive each stage of validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub total: usize,
    pub valid_scrambles: usize,
    pub valid_solutions: usize,
    pub correct_solutions: usize,
}

impl RecordStats {
    #[must_use]
    pub fn of(records: &[ReconstructedSolve]) -> Self {
        let mut stats = RecordStats::default();
        for record in records {
            stats.total += 1;
            match record.check() {
                RecordCheck::BadScramble(_) => continue,
                RecordCheck::BadReconstruction(_) => {}
                RecordCheck::Unsolved => stats.valid_solutions += 1,
                RecordCheck::Usable(_) => {
                    stats.valid_solutions += 1;
                    stats.correct_solutions += 1;
                }
            }
            stats.valid_scrambles += 1;
        }
        stats
    }
}

impl fmt::Display for RecordStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processed {} data items:", self.total)?;
        writeln!(f, "  Valid scrambles: {}", self.valid_scrambles)?;
        writeln!(f, "  Valid solutions: {}", self.valid_solutions)?;
        write!(f, "Correct solutions: {}", self.correct_solutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(scramble: &str, reconstruction: &str) -> ReconstructedSolve {
        ReconstructedSolve {
            scramble: scramble.to_owned(),
            reconstruction: reconstruction.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_check() {
        assert_eq!(
            record("R U", "U' R'").check(),
            RecordCheck::Usable(CubeState::from_scramble("R U").unwrap())
        );
        assert_eq!(record("", "R U R' U'").check(), RecordCheck::Unsolved);
        assert!(matches!(
            record("R Uw", "").check(),
            RecordCheck::BadScramble(MoveError::Invalid(_))
        ));
        assert!(matches!(
            record("R", "R' (U)").check(),
            RecordCheck::BadReconstruction(_)
        ));
    }

    #[test]
    fn test_stats() {
        let records = [
            record("R U", "U' R'"),
            record("", "R U R' U'"),
            record("R Uw", ""),
            record("R", "R' (U)"),
            record("F", "F'"),
        ];
        let stats = RecordStats::of(&records);
        assert_eq!(
            stats,
            RecordStats {
                total: 5,
                valid_scrambles: 4,
                valid_solutions: 3,
                correct_solutions: 2,
            }
        );
        assert!(stats.to_string().starts_with("Processed 5 data items:"));
    }

    #[test]
    fn test_scraper_keys() {
        let json = r#"[{"ID": 12, "Scramble": "R", "Reconstruction": "R'", "Commented": "R' // done"}]"#;
        let records: Vec<ReconstructedSolve> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].id, 12);
        assert_eq!(records[0].reconstruction, "R'");

        let records: Vec<ReconstructedSolve> =
            serde_json::from_str(r#"[{"scramble": "U", "reconstruction": "U'"}]"#).unwrap();
        assert!(matches!(records[0].check(), RecordCheck::Usable(_)));
    }
}
