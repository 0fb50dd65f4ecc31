mod config;
mod fatigue;
mod metrics;
mod policy;

pub use config::{ConfigurationError, ImpactBlend, PolicyConfig};
pub use fatigue::FatigueAssessment;

use super::domain::{ClassifiedShiftRecord, ShiftObservation};

/// Stateless engine running the fatigue, metric, and policy stages per record.
pub struct RosterEngine {
    config: PolicyConfig,
}

impl RosterEngine {
    /// Build an engine, rejecting invalid policy dials before any record is seen.
    pub fn new(config: PolicyConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Derive the classified record for one observation.
    ///
    /// Each record depends only on its own raw fields, so callers are free to
    /// run this per record in any order before ranking.
    pub fn classify(&self, observation: &ShiftObservation) -> ClassifiedShiftRecord {
        let assessment = fatigue::assess(observation.shift_seconds, observation.position, &self.config);
        let metrics = metrics::derive(
            observation.shift_seconds,
            observation.stability_score,
            assessment.weight,
            &self.config,
        );
        let decision = policy::decide(metrics.res);

        ClassifiedShiftRecord {
            player_id: observation.player_id.clone(),
            position: observation.position,
            shift_seconds: observation.shift_seconds,
            stability_score: observation.stability_score,
            fatigue_state: assessment.state,
            fatigue_weight: assessment.weight,
            reward: metrics.reward,
            res: metrics.res,
            impact: metrics.impact,
            decision,
        }
    }

    /// Classify a validated snapshot, preserving input order.
    pub fn classify_snapshot(&self, snapshot: &[ShiftObservation]) -> Vec<ClassifiedShiftRecord> {
        snapshot
            .iter()
            .map(|observation| self.classify(observation))
            .collect()
    }
}
