use serde::{Deserialize, Serialize};

/// Identifier wrapper for players; unique within a roster snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

/// Skating positions tracked by the bench model.
///
/// Only the position class matters here: Defensemen carry the lateral-load
/// multiplier, every other class weighs 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Defenseman,
    Goaltender,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Position::Forward => "forward",
            Position::Defenseman => "defenseman",
            Position::Goaltender => "goaltender",
        }
    }
}

/// Raw per-player shift observation captured at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftObservation {
    pub player_id: PlayerId,
    pub position: Position,
    /// Duration of the most recent shift, in seconds.
    pub shift_seconds: f32,
    /// The "Ice Rating": decision stability under pressure, higher is better.
    pub stability_score: f32,
}

/// Readiness states of the two-state fatigue chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatigueState {
    Normal,
    Lethal,
}

impl FatigueState {
    pub const fn label(self) -> &'static str {
        match self {
            FatigueState::Normal => "normal",
            FatigueState::Lethal => "lethal",
        }
    }
}

/// Substitution call derived from remaining effective seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenchDecision {
    ExitNow,
    Maintain,
}

impl BenchDecision {
    pub const fn label(self) -> &'static str {
        match self {
            BenchDecision::ExitNow => "EXIT_NOW",
            BenchDecision::Maintain => "MAINTAIN",
        }
    }
}

/// Fully derived record for one player in one pipeline run.
///
/// Raw fields are carried through unchanged; everything from `fatigue_state`
/// down is appended by the classification stages. Records live for a single
/// run and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedShiftRecord {
    pub player_id: PlayerId,
    pub position: Position,
    pub shift_seconds: f32,
    pub stability_score: f32,
    pub fatigue_state: FatigueState,
    pub fatigue_weight: f32,
    /// Tactical-debt penalty for seconds spent past the cliff; never positive.
    pub reward: f32,
    /// Remaining effective seconds: positive margin or negative debt.
    pub res: i32,
    /// Composite rankable score blending stability and reward.
    pub impact: f32,
    pub decision: BenchDecision,
}
