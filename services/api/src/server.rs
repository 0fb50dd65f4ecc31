use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bench_ai::config::AppConfig;
use bench_ai::error::AppError;
use bench_ai::telemetry;
use bench_ai::workflows::roster::ShiftBoardService;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAlertPublisher};
use crate::routes::with_roster_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let shift_board = Arc::new(ShiftBoardService::new(alerts, config.policy.clone())?);

    let app = with_roster_routes(shift_board)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "prescriptive shift board ready");

    axum::serve(listener, app).await?;
    Ok(())
}
