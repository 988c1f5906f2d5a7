//! # Catalog Endpoints
//!
//! Read-only views of the rule catalog:
//! - `GET /api/questions`: the questionnaire, in prompt order.
//! - `GET /api/rules`: rule metadata, in catalog order.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use gradcheck_core::Question;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// One question a UI should ask.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionView {
    /// Fact key the answer is stored under.
    pub key: String,
    /// Prompt text.
    pub text: String,
    /// Input kind: `numeric` or `boolean`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            key: q.key.to_string(),
            text: q.text.to_string(),
            kind: q.kind.as_str().to_string(),
        }
    }
}

/// Rule metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RuleView {
    pub name: String,
    pub description: String,
    pub error_message: String,
    pub fact_keys: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/questions", get(list_questions))
        .route("/api/rules", get(list_rules))
}

/// GET /api/questions: The questionnaire used to collect facts.
#[utoipa::path(
    get,
    path = "/api/questions",
    responses((status = 200, description = "Questions in prompt order", body = [QuestionView])),
    tag = "catalog"
)]
pub(crate) async fn list_questions(State(state): State<AppState>) -> Json<Vec<QuestionView>> {
    Json(
        state
            .engine
            .catalog()
            .questions()
            .iter()
            .map(QuestionView::from)
            .collect(),
    )
}

/// GET /api/rules: Requirement rules in catalog order.
#[utoipa::path(
    get,
    path = "/api/rules",
    responses((status = 200, description = "Rules in catalog order", body = [RuleView])),
    tag = "catalog"
)]
pub(crate) async fn list_rules(State(state): State<AppState>) -> Json<Vec<RuleView>> {
    Json(
        state
            .engine
            .catalog()
            .rules()
            .iter()
            .map(|rule| {
                let s = rule.summary();
                RuleView {
                    name: s.name,
                    description: s.description,
                    error_message: s.error_message,
                    fact_keys: s.fact_keys,
                }
            })
            .collect(),
    )
}
