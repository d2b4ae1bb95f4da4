use actix_web::{web, HttpResponse};
use log::info;
use serde_json::json;

use crate::errors::ApiError;
use crate::validation::{validate_new_user, NewUser};

/// POST /users - Stub account creation
///
/// Validates the body and echoes the email back. Nothing is persisted and
/// no credentials or tokens are issued.
pub async fn create_user_handler(
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /users request");

    // Missing fields fall through to the validator as empty values so the
    // client gets per-field detail instead of a deserialization error.
    let user = NewUser {
        email: body
            .get("email")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        password: body
            .get("password")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
    };

    validate_new_user(&user)
        .map_err(|details| ApiError::validation("Invalid user data.", details))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User created successfully",
        "user": { "email": user.email },
    })))
}
