use crate::PalmgateError;
use crate::router::PalmgateState;
use crate::service::password;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: AccountSummary,
}

/// POST /auth/signup -> creates an account, rejecting duplicate emails.
pub async fn signup(
    State(state): State<PalmgateState>,
    Json(body): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, PalmgateError> {
    if state.storage.get_user_by_email(&body.email).await?.is_some() {
        return Err(PalmgateError::DuplicateEmail);
    }

    let password_hash = password::hash(&body.password)?;
    let user = state.storage.create_user(&body.email, &password_hash).await?;

    info!(user_id = %user.id, email = %user.email, "account created");
    Ok(Json(AuthResponse {
        user: AccountSummary {
            id: user.id,
            email: user.email,
        },
    }))
}

/// POST /auth/signin -> verifies credentials; no session token is issued.
///
/// Unknown email and wrong password produce the same error so the response
/// does not reveal which one failed.
pub async fn signin(
    State(state): State<PalmgateState>,
    Json(body): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, PalmgateError> {
    let user = state
        .storage
        .get_user_by_email(&body.email)
        .await?
        .ok_or(PalmgateError::InvalidCredentials)?;

    if !password::verify(&body.password, &user.password_hash)? {
        return Err(PalmgateError::InvalidCredentials);
    }

    info!(user_id = %user.id, "signin succeeded");
    Ok(Json(AuthResponse {
        user: AccountSummary {
            id: user.id,
            email: user.email,
        },
    }))
}
