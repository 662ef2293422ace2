// handlers/auth.rs - account sign-up, sign-in and the password-reset notice
//
// Accounts are kept apart from the staff list in `users`. There are no
// sessions or tokens: a successful sign-in just returns the account identity
// for the client to keep.

use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api::{ApiResponse, ApiResult, JsonBody};
use crate::auth::{hash_password, verify_password};
use crate::database::models::NewAccount;
use crate::database::service;
use crate::error::ApiError;

use super::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub full_name: String,
    pub name_with_initials: String,
    pub nic: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupRequest {
    fn into_account(self) -> Result<NewAccount, ApiError> {
        let required = [
            &self.full_name,
            &self.name_with_initials,
            &self.email,
            &self.username,
            &self.password,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(ApiError::validation_error("All fields are required", None));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation_error("Passwords do not match", None));
        }

        Ok(NewAccount {
            full_name: self.full_name,
            name_with_initials: self.name_with_initials,
            nic: self.nic,
            email: self.email,
            username: self.username,
            password: self.password,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> ApiResult<Value> {
    let account = request.into_account()?;
    let password_hash = hash_password(&account.password)?;

    let account_id = service::create_account(&state.pool, &account, &password_hash)
        .await
        .map_err(super::users::taken)?;
    info!("Account created for {}", account.username.trim());

    Ok(ApiResponse::created(json!({
        "message": "Account created",
        "user_id": account_id
    })))
}

/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SigninRequest>,
) -> ApiResult<Value> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Username and password required"));
    }

    let credentials = service::find_credentials(&state.pool, request.username.trim())
        .await?
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    if !verify_password(&request.password, &credentials.password_hash) {
        warn!("Failed sign-in for {}", credentials.username);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    info!("Signed in {}", credentials.username);
    Ok(ApiResponse::success(json!({
        "message": "Login successful",
        "user_id": credentials.account_id,
        "username": credentials.username,
        "full_name": credentials.full_name
    })))
}

/// POST /forgot-password - no reset flow; points the user at the admin
pub async fn forgot_password(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ForgotPasswordRequest>,
) -> ApiResult<Value> {
    if request.email.trim().is_empty() {
        return Err(ApiError::bad_request("Email is required"));
    }
    Ok(ApiResponse::success(json!({
        "message": format!(
            "Please contact the admin at {} to reset your password.",
            state.config.inventory.admin_contact
        )
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SignupRequest {
        SignupRequest {
            full_name: "Kamala Silva".to_string(),
            name_with_initials: "K. Silva".to_string(),
            email: "kamala@example.com".to_string(),
            username: "kamala".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn signup_requires_every_field() {
        let mut r = request();
        r.email = " ".to_string();
        let err = r.into_account().unwrap_err();
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn signup_requires_matching_passwords() {
        let mut r = request();
        r.confirm_password = "other".to_string();
        assert_eq!(r.into_account().unwrap_err().message(), "Passwords do not match");
    }

    #[test]
    fn signup_builds_account() {
        let account = request().into_account().unwrap();
        assert_eq!(account.email, "kamala@example.com");
        assert_eq!(account.password, "pw");
    }
}
