//! # OpenAPI Document
//!
//! Assembles the utoipa-documented routes into one OpenAPI document served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "gradcheck API",
        description = "Graduation requirement evaluation: submit a fact set, receive the unmet requirements."
    ),
    paths(
        crate::routes::evaluate::evaluate,
        crate::routes::catalog::list_questions,
        crate::routes::catalog::list_rules,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::routes::evaluate::EvaluateRequest,
        crate::routes::evaluate::EvaluateResponse,
        crate::routes::catalog::QuestionView,
        crate::routes::catalog::RuleView,
    )),
    tags(
        (name = "evaluation", description = "Requirement evaluation"),
        (name = "catalog", description = "Questionnaire and rule metadata"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
