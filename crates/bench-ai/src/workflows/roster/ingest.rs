use std::collections::HashSet;

use super::domain::ShiftObservation;

/// Validation errors raised by the roster intake guard.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("roster snapshot is empty")]
    EmptyRoster,
    #[error("blank player id at snapshot row {row}")]
    BlankPlayerId { row: usize },
    #[error("duplicate player id '{0}' in roster snapshot")]
    DuplicatePlayer(String),
    #[error("negative shift duration {seconds} for player '{player_id}'")]
    NegativeShiftSeconds { player_id: String, seconds: f32 },
    #[error("non-finite {field} for player '{player_id}'")]
    NonFiniteField {
        player_id: String,
        field: &'static str,
    },
}

/// Guard validating a roster snapshot before any derivation runs.
///
/// The whole snapshot is accepted or rejected; a single bad observation
/// fails the run and nothing downstream sees partial input.
#[derive(Debug, Default, Clone)]
pub struct RosterIngestor;

impl RosterIngestor {
    /// Validate raw observations into a snapshot ready for classification.
    pub fn snapshot_from_observations(
        &self,
        observations: Vec<ShiftObservation>,
    ) -> Result<Vec<ShiftObservation>, ValidationError> {
        if observations.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(observations.len());
        for (row, observation) in observations.iter().enumerate() {
            let player_id = observation.player_id.0.as_str();
            if player_id.trim().is_empty() {
                return Err(ValidationError::BlankPlayerId { row });
            }

            // NaN or infinite telemetry would poison every downstream sort.
            if !observation.shift_seconds.is_finite() {
                return Err(ValidationError::NonFiniteField {
                    player_id: player_id.to_string(),
                    field: "shift_seconds",
                });
            }
            if !observation.stability_score.is_finite() {
                return Err(ValidationError::NonFiniteField {
                    player_id: player_id.to_string(),
                    field: "stability_score",
                });
            }

            if observation.shift_seconds < 0.0 {
                return Err(ValidationError::NegativeShiftSeconds {
                    player_id: player_id.to_string(),
                    seconds: observation.shift_seconds,
                });
            }

            if !seen.insert(player_id) {
                return Err(ValidationError::DuplicatePlayer(player_id.to_string()));
            }
        }

        Ok(observations)
    }
}
