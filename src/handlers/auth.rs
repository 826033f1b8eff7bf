use axum::{Json, body::Bytes};
use tracing::info;
use crate::data::{DEMO_PASSWORD, DEMO_USER, DEMO_USERNAME};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};

// Mock login: one hardcoded account, token is just a timestamp
pub async fn login_handler(body: Bytes) -> Result<Json<LoginResponse>, ApiError> {
    // unparseable body counts as empty credentials
    let creds: LoginRequest = serde_json::from_slice(&body).unwrap_or_default();

    let valid = creds.username.as_deref() == Some(DEMO_USERNAME)
        && creds.password.as_deref() == Some(DEMO_PASSWORD);
    if !valid {
        info!(username = ?creds.username, "Login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(LoginResponse {
        success: true,
        token: format!("demo-token-{}", chrono::Utc::now().timestamp_millis()),
        user: DEMO_USER,
    }))
}
