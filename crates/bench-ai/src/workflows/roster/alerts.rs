use serde::{Deserialize, Serialize};

use super::domain::PlayerId;

/// Outbound bench call raised when a player crosses into lethal debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchAlert {
    pub player_id: PlayerId,
    pub res: i32,
    pub message: String,
}

/// Trait describing outbound alert hooks (bench tablet, arena ops console).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: BenchAlert) -> Result<(), AlertError>;
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}
