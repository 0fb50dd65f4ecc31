use super::config::PolicyConfig;

/// Derived metrics for one record, in derivation order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShiftMetrics {
    pub(crate) reward: f32,
    pub(crate) res: i32,
    pub(crate) impact: f32,
}

/// Derive reward, remaining effective seconds, and impact for one record.
///
/// Reward accrues only for seconds past the cliff and is scaled by the
/// fatigue weight. RES is the raw time margin against the cliff and ignores
/// fatigue weighting entirely.
pub(crate) fn derive(
    shift_seconds: f32,
    stability_score: f32,
    fatigue_weight: f32,
    config: &PolicyConfig,
) -> ShiftMetrics {
    let overrun = shift_seconds - config.cliff_threshold_seconds;
    let reward = if overrun > 0.0 {
        -(overrun * fatigue_weight)
    } else {
        0.0
    };

    let res = (config.cliff_threshold_seconds - shift_seconds).round() as i32;

    let blend = &config.impact_blend;
    let impact = (stability_score * blend.stability_weight + reward * blend.reward_weight)
        / blend.normalization;

    ShiftMetrics {
        reward,
        res,
        impact,
    }
}
