//! Palm template endpoints.
//!
//! These trust the caller-supplied `user_id`: signin issues no token, so there
//! is no ownership check to perform. Landmark payloads are stored without
//! shape validation; verification maps anything malformed to similarity 0.0.

use crate::PalmgateError;
use crate::router::PalmgateState;
use crate::service::similarity::{SIMILARITY_THRESHOLD, cosine_similarity};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "hasRegistered")]
    pub has_registered: bool,
}

#[derive(Debug, Deserialize)]
pub struct PalmRegisterRequest {
    pub user_id: String,
    pub landmarks: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
}

#[derive(Debug, Deserialize)]
pub struct PalmVerifyRequest {
    pub user_id: String,
    pub landmarks: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    pub similarity: f64,
}

/// GET /palm/status?user_id=... -> whether a template row exists.
pub async fn status(
    State(state): State<PalmgateState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, PalmgateError> {
    let has_registered = state.storage.has_palm_template(&query.user_id).await?;
    Ok(Json(StatusResponse { has_registered }))
}

/// POST /palm/register -> upsert the reference template for the account.
pub async fn register(
    State(state): State<PalmgateState>,
    Json(body): Json<PalmRegisterRequest>,
) -> Result<Json<RegisterResponse>, PalmgateError> {
    let landmarks_json = serde_json::to_string(&body.landmarks)?;
    state
        .storage
        .upsert_palm_template(&body.user_id, &landmarks_json)
        .await?;

    info!(
        user_id = %body.user_id,
        points = body.landmarks.len(),
        "palm template registered"
    );
    Ok(Json(RegisterResponse { ok: true }))
}

/// POST /palm/verify -> cosine similarity of the sample against the template.
pub async fn verify(
    State(state): State<PalmgateState>,
    Json(body): Json<PalmVerifyRequest>,
) -> Result<Json<VerifyResponse>, PalmgateError> {
    let stored = state
        .storage
        .get_palm_template(&body.user_id)
        .await?
        .ok_or(PalmgateError::NoTemplateRegistered)?;

    // An unreadable stored template degrades to an empty sequence, which
    // scores 0.0 against anything, same as any other malformed input.
    let stored_landmarks: Vec<Value> =
        serde_json::from_str(&stored.landmarks_json).unwrap_or_default();

    let similarity = cosine_similarity(&body.landmarks, &stored_landmarks);
    let is_verified = similarity >= SIMILARITY_THRESHOLD;

    info!(user_id = %body.user_id, similarity, is_verified, "palm verification");
    Ok(Json(VerifyResponse {
        is_verified,
        similarity,
    }))
}
