use serde::Serialize;

use super::super::domain::{BenchDecision, ClassifiedShiftRecord};

/// Named roster extreme surfaced on the bench summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryHighlight {
    pub player_id: String,
    pub value: f32,
}

/// Deepest time debt on the roster.
#[derive(Debug, Clone, Serialize)]
pub struct DebtHighlight {
    pub player_id: String,
    pub res: i32,
}

/// Snapshot-level rollup for the bench staff.
#[derive(Debug, Clone, Serialize)]
pub struct BenchSummary {
    pub roster_size: usize,
    pub exit_now: usize,
    pub maintain: usize,
    /// Highest-impact player on the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_asset: Option<SummaryHighlight>,
    /// Lowest stability score on the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_variance_asset: Option<SummaryHighlight>,
    /// Lowest remaining effective seconds on the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepest_debt: Option<DebtHighlight>,
}

impl BenchSummary {
    /// Roll up one classified snapshot. Ties on any extreme resolve to the
    /// lexicographically smaller player id so repeated runs agree.
    pub fn from_records(records: &[ClassifiedShiftRecord]) -> Self {
        let exit_now = records
            .iter()
            .filter(|record| record.decision == BenchDecision::ExitNow)
            .count();

        let top_asset = records
            .iter()
            .max_by(|a, b| {
                a.impact
                    .total_cmp(&b.impact)
                    .then_with(|| b.player_id.cmp(&a.player_id))
            })
            .map(|record| SummaryHighlight {
                player_id: record.player_id.0.clone(),
                value: record.impact,
            });

        let max_variance_asset = records
            .iter()
            .min_by(|a, b| {
                a.stability_score
                    .total_cmp(&b.stability_score)
                    .then_with(|| a.player_id.cmp(&b.player_id))
            })
            .map(|record| SummaryHighlight {
                player_id: record.player_id.0.clone(),
                value: record.stability_score,
            });

        let deepest_debt = records
            .iter()
            .min_by(|a, b| {
                a.res
                    .cmp(&b.res)
                    .then_with(|| a.player_id.cmp(&b.player_id))
            })
            .map(|record| DebtHighlight {
                player_id: record.player_id.0.clone(),
                res: record.res,
            });

        Self {
            roster_size: records.len(),
            exit_now,
            maintain: records.len() - exit_now,
            top_asset,
            max_variance_asset,
            deepest_debt,
        }
    }
}
