//! Roster snapshot intake, classification, and ranked reporting.
//!
//! The pipeline runs strictly forward over one in-memory snapshot:
//! intake guard, fatigue model, metric derivation, policy rule, then the two
//! ranked views. Records are dropped at the end of the run; nothing is
//! persisted between invocations.

pub mod alerts;
pub(crate) mod classification;
pub mod domain;
pub(crate) mod ingest;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use alerts::{AlertError, AlertPublisher, BenchAlert};
pub use classification::{
    ConfigurationError, FatigueAssessment, ImpactBlend, PolicyConfig, RosterEngine,
};
pub use domain::{
    BenchDecision, ClassifiedShiftRecord, FatigueState, PlayerId, Position, ShiftObservation,
};
pub use ingest::{RosterIngestor, ValidationError};
pub use report::summary::BenchSummary;
pub use report::views::{rank_by_impact, rank_by_urgency, ShiftRecordView};
pub use router::roster_router;
pub use service::{ClassifiedRoster, ShiftBoardError, ShiftBoardService};
