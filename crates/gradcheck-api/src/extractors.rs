//! # Request Extraction
//!
//! Turns a raw JSON body into a [`FactSet`], mapping every transport-level
//! problem to [`ApiError::BadRequest`].

use axum::extract::rejection::JsonRejection;
use axum::Json;
use gradcheck_core::facts::json_type_name;
use gradcheck_core::FactSet;

use crate::error::ApiError;

/// Extract a JSON body, mapping deserialization errors to [`ApiError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| ApiError::BadRequest(err.body_text()))
}

/// Extract a fact set. The body must be a JSON object.
pub fn extract_facts(
    result: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<FactSet, ApiError> {
    let value = extract_json(result)?;
    let found = json_type_name(&value);
    FactSet::from_json(value)
        .ok_or_else(|| ApiError::BadRequest(format!("se esperaba un objeto JSON, se recibió {found}")))
}
