use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::roster::alerts::{AlertError, AlertPublisher, BenchAlert};
use crate::workflows::roster::classification::{PolicyConfig, RosterEngine};
use crate::workflows::roster::domain::{PlayerId, Position, ShiftObservation};
use crate::workflows::roster::router::roster_router;
use crate::workflows::roster::service::ShiftBoardService;

pub(super) fn observation(
    player_id: &str,
    position: Position,
    shift_seconds: f32,
    stability_score: f32,
) -> ShiftObservation {
    ShiftObservation {
        player_id: PlayerId(player_id.to_string()),
        position,
        shift_seconds,
        stability_score,
    }
}

/// A defenseman 15 seconds past the cliff.
pub(super) fn overextended_defenseman() -> ShiftObservation {
    observation("Adamson Mikey", Position::Defenseman, 63.0, -31.04)
}

/// A forward still under the cliff with margin to spare.
pub(super) fn fresh_forward() -> ShiftObservation {
    observation("Levyy Vitaly", Position::Forward, 44.0, -28.20)
}

pub(super) fn sample_snapshot() -> Vec<ShiftObservation> {
    vec![
        overextended_defenseman(),
        observation("Tardif Charles", Position::Forward, 52.0, -12.89),
        fresh_forward(),
    ]
}

pub(super) fn policy_config() -> PolicyConfig {
    PolicyConfig::default()
}

pub(super) fn engine() -> RosterEngine {
    RosterEngine::new(policy_config()).expect("default config is valid")
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<BenchAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<BenchAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: BenchAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct UnreachableAlerts;

impl AlertPublisher for UnreachableAlerts {
    fn publish(&self, _alert: BenchAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("bench tablet offline".to_string()))
    }
}

pub(super) fn build_service() -> (ShiftBoardService<MemoryAlerts>, Arc<MemoryAlerts>) {
    let alerts = Arc::new(MemoryAlerts::default());
    let service = ShiftBoardService::new(alerts.clone(), policy_config())
        .expect("default config is valid");
    (service, alerts)
}

pub(super) fn roster_router_with_service(
    service: ShiftBoardService<MemoryAlerts>,
) -> axum::Router {
    roster_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
