//! Message validation endpoint.
//! Used by: server.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

const MAX_MESSAGE_CHARS: usize = 256;

#[derive(Debug, Default, Deserialize)]
pub struct ValidateParams {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub message: Option<String>,
    pub reason: Option<&'static str>,
}

fn validate_message(message: Option<&str>) -> Result<(), &'static str> {
    let message = message.ok_or("message is required")?;
    let len = message.chars().count();
    if len == 0 || len > MAX_MESSAGE_CHARS {
        return Err("message must be 1-256 characters");
    }
    if message.chars().any(|c| c.is_control()) {
        return Err("message contains control characters");
    }
    Ok(())
}

/// Always answers 200; the verdict is carried in the body.
pub async fn validate(Query(params): Query<ValidateParams>) -> Json<ValidateResponse> {
    let verdict = validate_message(params.message.as_deref());
    tracing::info!(valid = verdict.is_ok(), "message validated");
    Json(ValidateResponse {
        valid: verdict.is_ok(),
        reason: verdict.err(),
        message: params.message,
    })
}
