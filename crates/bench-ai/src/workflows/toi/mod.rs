//! Import of time-on-ice report exports (`Player,Position,Shift_Sec,Ice_Rating`).

mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::roster::domain::{PlayerId, ShiftObservation};

#[derive(Debug)]
pub enum ToiImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownPosition { player: String, token: String },
}

impl std::fmt::Display for ToiImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToiImportError::Io(err) => write!(f, "failed to read TOI report: {}", err),
            ToiImportError::Csv(err) => write!(f, "invalid TOI report data: {}", err),
            ToiImportError::UnknownPosition { player, token } => write!(
                f,
                "unrecognized position '{}' for player '{}' in TOI report",
                token, player
            ),
        }
    }
}

impl std::error::Error for ToiImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToiImportError::Io(err) => Some(err),
            ToiImportError::Csv(err) => Some(err),
            ToiImportError::UnknownPosition { .. } => None,
        }
    }
}

impl From<std::io::Error> for ToiImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ToiImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ToiReportImporter;

impl ToiReportImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ShiftObservation>, ToiImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a TOI report into raw observations.
    ///
    /// Rows come back in file order; snapshot-level validation (duplicates,
    /// negative durations) is the intake guard's job, not the importer's.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ShiftObservation>, ToiImportError> {
        let mut observations = Vec::new();

        for record in parser::parse_records(reader)? {
            let position = mapping::position_for_token(&record.position).ok_or_else(|| {
                ToiImportError::UnknownPosition {
                    player: record.player.clone(),
                    token: record.position.clone(),
                }
            })?;

            observations.push(ShiftObservation {
                player_id: PlayerId(record.player),
                position,
                shift_seconds: record.shift_seconds,
                stability_score: record.ice_rating,
            });
        }

        Ok(observations)
    }
}
