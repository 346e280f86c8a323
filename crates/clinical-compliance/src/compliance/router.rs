use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::domain::{ComplianceSnapshot, SessionRecord};
use crate::config::ComplianceConfig;
use super::report::ComplianceReport;
use super::validator::{validate_for_signing, SigningError, SigningGate};

/// Request-boundary settings shared by the compliance handlers.
#[derive(Debug, Clone, Default)]
pub struct ComplianceApiState {
    config: ComplianceConfig,
    gate: SigningGate,
}

impl ComplianceApiState {
    pub fn new(pinned_as_of: Option<NaiveDate>) -> Self {
        Self {
            config: ComplianceConfig { pinned_as_of },
            gate: SigningGate,
        }
    }

    /// Evaluation date for a request: explicit value, then the pinned date, then today.
    pub fn resolve_as_of(&self, requested: Option<NaiveDate>) -> NaiveDate {
        self.config.resolve_as_of(requested, Local::now().date_naive())
    }
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(flatten)]
    pub snapshot: ComplianceSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct SignRequest {
    pub session: SessionRecord,
    #[serde(default)]
    pub signed_at: Option<DateTime<Utc>>,
}

/// Router builder exposing evaluation, pre-signing validation and signing endpoints.
pub fn compliance_router(state: Arc<ComplianceApiState>) -> Router {
    Router::new()
        .route("/api/v1/compliance/evaluate", post(evaluate_handler))
        .route(
            "/api/v1/sessions/validate-signing",
            post(validate_signing_handler),
        )
        .route("/api/v1/sessions/sign", post(sign_handler))
        .with_state(state)
}

pub(crate) async fn evaluate_handler(
    State(state): State<Arc<ComplianceApiState>>,
    Json(request): Json<EvaluateRequest>,
) -> Response {
    let as_of = state.resolve_as_of(request.as_of);
    let report = ComplianceReport::for_snapshot(&request.snapshot, as_of);
    (StatusCode::OK, Json(report.to_view())).into_response()
}

pub(crate) async fn validate_signing_handler(Json(session): Json<SessionRecord>) -> Response {
    let validation = validate_for_signing(&session);
    (StatusCode::OK, Json(validation)).into_response()
}

pub(crate) async fn sign_handler(
    State(state): State<Arc<ComplianceApiState>>,
    Json(request): Json<SignRequest>,
) -> Response {
    let signed_at = request.signed_at.unwrap_or_else(Utc::now);
    match state.gate.sign(&request.session, signed_at) {
        Ok(signed) => {
            info!(session_id = %signed.id, "session signed");
            (StatusCode::OK, Json(signed)).into_response()
        }
        Err(SigningError::IncompleteDocumentation { errors }) => {
            let payload = json!({
                "error": "session documentation incomplete",
                "errors": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(error @ SigningError::NotDraft { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
    }
}
