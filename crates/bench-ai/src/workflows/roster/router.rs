use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::workflows::toi::ToiReportImporter;

use super::alerts::AlertPublisher;
use super::domain::ShiftObservation;
use super::report::summary::BenchSummary;
use super::report::views::ShiftRecordView;
use super::service::{ShiftBoardError, ShiftBoardService};

/// Request payload: an inline TOI report or explicit observations, not both.
#[derive(Debug, Deserialize)]
pub struct ClassifyRosterRequest {
    #[serde(default)]
    pub toi_csv: Option<String>,
    #[serde(default)]
    pub observations: Option<Vec<ShiftObservation>>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyRosterResponse {
    pub roster_size: usize,
    pub by_impact: Vec<ShiftRecordView>,
    pub by_urgency: Vec<ShiftRecordView>,
    pub summary: BenchSummary,
}

/// Router builder exposing the classification endpoint.
pub fn roster_router<A>(service: Arc<ShiftBoardService<A>>) -> Router
where
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/roster/classify", post(classify_handler::<A>))
        .with_state(service)
}

pub(crate) async fn classify_handler<A>(
    State(service): State<Arc<ShiftBoardService<A>>>,
    axum::Json(request): axum::Json<ClassifyRosterRequest>,
) -> Response
where
    A: AlertPublisher + 'static,
{
    let observations = match (request.toi_csv, request.observations) {
        (Some(csv), None) => {
            match ToiReportImporter::from_reader(Cursor::new(csv.into_bytes())) {
                Ok(observations) => observations,
                Err(error) => {
                    let payload = json!({ "error": error.to_string() });
                    return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
                }
            }
        }
        (None, Some(observations)) => observations,
        _ => {
            let payload = json!({
                "error": "provide exactly one of toi_csv or observations",
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.classify_snapshot(observations) {
        Ok(roster) => {
            let response = ClassifyRosterResponse {
                roster_size: roster.records.len(),
                by_impact: roster.by_impact,
                by_urgency: roster.by_urgency,
                summary: roster.summary,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(ShiftBoardError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
