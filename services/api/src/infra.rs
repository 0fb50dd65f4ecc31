use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use bench_ai::workflows::roster::{AlertError, AlertPublisher, BenchAlert};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Collects bench calls in process; the arena ops integration consumes them.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAlertPublisher {
    events: Arc<Mutex<Vec<BenchAlert>>>,
}

impl AlertPublisher for InMemoryAlertPublisher {
    fn publish(&self, alert: BenchAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryAlertPublisher {
    pub(crate) fn events(&self) -> Vec<BenchAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}
