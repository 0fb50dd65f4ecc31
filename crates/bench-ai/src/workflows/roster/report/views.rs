use serde::Serialize;

use super::super::domain::{
    BenchDecision, ClassifiedShiftRecord, FatigueState, Position,
};

/// Flat row view of a classified record for tables and API payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftRecordView {
    pub player_id: String,
    pub position: Position,
    pub position_label: &'static str,
    pub shift_seconds: f32,
    pub stability_score: f32,
    pub fatigue_state: FatigueState,
    pub fatigue_weight: f32,
    pub reward: f32,
    pub res: i32,
    pub impact: f32,
    pub decision: BenchDecision,
    pub decision_label: &'static str,
}

impl From<&ClassifiedShiftRecord> for ShiftRecordView {
    fn from(record: &ClassifiedShiftRecord) -> Self {
        Self {
            player_id: record.player_id.0.clone(),
            position: record.position,
            position_label: record.position.label(),
            shift_seconds: record.shift_seconds,
            stability_score: record.stability_score,
            fatigue_state: record.fatigue_state,
            fatigue_weight: record.fatigue_weight,
            reward: record.reward,
            res: record.res,
            impact: record.impact,
            decision: record.decision,
            decision_label: record.decision.label(),
        }
    }
}

/// Asset-quality ranking: impact descending, ties broken by player id.
///
/// A pure sort over borrowed records; the input set is never mutated.
pub fn rank_by_impact(records: &[ClassifiedShiftRecord]) -> Vec<ShiftRecordView> {
    let mut ordered: Vec<&ClassifiedShiftRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        b.impact
            .total_cmp(&a.impact)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    ordered.into_iter().map(ShiftRecordView::from).collect()
}

/// Urgency ranking: remaining effective seconds ascending, ties by player id.
pub fn rank_by_urgency(records: &[ClassifiedShiftRecord]) -> Vec<ShiftRecordView> {
    let mut ordered: Vec<&ClassifiedShiftRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        a.res
            .cmp(&b.res)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    ordered.into_iter().map(ShiftRecordView::from).collect()
}
