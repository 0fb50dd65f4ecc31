use std::sync::Arc;

use serde::Serialize;

use super::alerts::{AlertError, AlertPublisher, BenchAlert};
use super::classification::{ConfigurationError, PolicyConfig, RosterEngine};
use super::domain::{BenchDecision, ClassifiedShiftRecord, ShiftObservation};
use super::ingest::{RosterIngestor, ValidationError};
use super::report::summary::BenchSummary;
use super::report::views::{rank_by_impact, rank_by_urgency, ShiftRecordView};

/// One classified snapshot with its two ranked views and rollup.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRoster {
    pub records: Vec<ClassifiedShiftRecord>,
    pub by_impact: Vec<ShiftRecordView>,
    pub by_urgency: Vec<ShiftRecordView>,
    pub summary: BenchSummary,
}

/// Service composing the intake guard, classification engine, and alert hook.
pub struct ShiftBoardService<A> {
    ingestor: RosterIngestor,
    engine: RosterEngine,
    alerts: Arc<A>,
}

impl<A> ShiftBoardService<A>
where
    A: AlertPublisher + 'static,
{
    pub fn new(alerts: Arc<A>, config: PolicyConfig) -> Result<Self, ShiftBoardError> {
        let engine = RosterEngine::new(config)?;
        Ok(Self {
            ingestor: RosterIngestor,
            engine,
            alerts,
        })
    }

    pub fn policy(&self) -> &PolicyConfig {
        self.engine.config()
    }

    /// Run the full pipeline over one snapshot.
    ///
    /// All-or-nothing: a validation failure classifies nothing and no alert
    /// fires. Every EXIT_NOW record dispatches one bench alert.
    pub fn classify_snapshot(
        &self,
        observations: Vec<ShiftObservation>,
    ) -> Result<ClassifiedRoster, ShiftBoardError> {
        let snapshot = self.ingestor.snapshot_from_observations(observations)?;
        let records = self.engine.classify_snapshot(&snapshot);

        for record in &records {
            if record.decision == BenchDecision::ExitNow {
                self.alerts.publish(BenchAlert {
                    player_id: record.player_id.clone(),
                    res: record.res,
                    message: format!(
                        "{} is {}s past the cliff, pull now",
                        record.player_id.0, -record.res
                    ),
                })?;
            }
        }

        let by_impact = rank_by_impact(&records);
        let by_urgency = rank_by_urgency(&records);
        let summary = BenchSummary::from_records(&records);

        Ok(ClassifiedRoster {
            records,
            by_impact,
            by_urgency,
            summary,
        })
    }
}

/// Error raised by the shift board service.
#[derive(Debug, thiserror::Error)]
pub enum ShiftBoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
