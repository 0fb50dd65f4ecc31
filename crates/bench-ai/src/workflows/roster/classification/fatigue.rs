use super::super::domain::{FatigueState, Position};
use super::config::PolicyConfig;

/// Readiness assessment produced by the two-state fatigue chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FatigueAssessment {
    pub state: FatigueState,
    pub weight: f32,
}

/// Classify one shift against the reliability cliff.
///
/// Normal holds while `shift_seconds` is below the cliff. At and past it the
/// player is in the Lethal state and the turnover uplift applies, scaled by
/// the position load multiplier. The uplift is a deterministic severity
/// weight, never sampled.
pub(crate) fn assess(
    shift_seconds: f32,
    position: Position,
    config: &PolicyConfig,
) -> FatigueAssessment {
    if shift_seconds >= config.cliff_threshold_seconds {
        FatigueAssessment {
            state: FatigueState::Lethal,
            weight: (1.0 + config.turnover_uplift) * config.position_multiplier(position),
        }
    } else {
        FatigueAssessment {
            state: FatigueState::Normal,
            weight: 1.0,
        }
    }
}
