//! # Evaluation Endpoint
//!
//! `POST /api/evaluate` accepts a JSON object of facts, e.g.
//! `{ "credits_percentage": 100, "social_service_completed": true, ... }`,
//! and answers with the diagnosis:
//!
//! ```json
//! { "success": true, "message": "Evaluación completada.", "passed": false,
//!   "reasons": ["Debes concluir y liberar tu Servicio Social (500 horas)."] }
//! ```
//!
//! Missing keys are not an error; they count as unmet (or, for debts, as
//! "no debt").

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use gradcheck_engine::Verdict;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorBody};
use crate::extractors::extract_facts;
use crate::state::AppState;

pub const COMPLETED_MESSAGE: &str = "Evaluación completada.";

/// Fact keys understood by the standard catalog. Every field is optional
/// and unknown keys are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EvaluateRequest {
    /// Percentage of approved credits (pass at 100 or more).
    pub credits_percentage: Option<f64>,
    pub social_service_completed: Option<bool>,
    pub professional_practices_completed: Option<bool>,
    pub humanist_formation_completed: Option<bool>,
    pub language_requirement_met: Option<bool>,
    pub exit_exam_presented: Option<bool>,
    /// Outstanding tuition debt.
    pub debt_tuition: Option<bool>,
    /// Outstanding library debt.
    pub debt_library: Option<bool>,
    /// Outstanding laboratory debt.
    pub debt_lab: Option<bool>,
    pub title_fee_paid: Option<bool>,
}

/// Diagnosis returned to the questionnaire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EvaluateResponse {
    /// The request was processed.
    pub success: bool,
    pub message: String,
    /// Whether every requirement is met.
    pub passed: bool,
    /// One message per unmet requirement, in catalog order.
    pub reasons: Vec<String>,
}

impl From<&Verdict> for EvaluateResponse {
    fn from(verdict: &Verdict) -> Self {
        Self {
            success: true,
            message: COMPLETED_MESSAGE.to_string(),
            passed: verdict.passed,
            reasons: verdict.reasons().into_iter().map(String::from).collect(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/evaluate", post(evaluate))
}

/// POST /api/evaluate: Evaluate a fact set against the graduation requirements.
#[utoipa::path(
    post,
    path = "/api/evaluate",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Evaluation completed", body = EvaluateResponse),
        (status = 400, description = "Body is not a JSON object", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody),
    ),
    tag = "evaluation"
)]
pub(crate) async fn evaluate(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let facts = extract_facts(body)?;
    tracing::info!(facts = ?facts, "facts received for evaluation");

    let verdict = state.engine.evaluate(&facts);
    tracing::info!(
        passed = verdict.passed,
        failed = ?verdict.failed_names(),
        faults = verdict.fault_count(),
        "evaluation completed"
    );

    Ok(Json(EvaluateResponse::from(&verdict)))
}
