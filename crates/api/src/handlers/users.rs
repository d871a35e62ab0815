//! Handlers for account signup and login.
//!
//! Both flows look the username up first. Signup rejects an existing name
//! before checking lengths; login only compares passwords when an account
//! was found.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use showtime_core::credentials::validate_new_account;
use showtime_core::error::CoreError;
use showtime_db::models::user::NewUser;
use showtime_db::repositories::UserRepo;

use super::require_field;
use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

const ACCOUNT_CREATED: &str = "Account created successfully!!";
const ACCOUNT_NOT_CREATED: &str = "Account could not be created!!";
const USER_EXISTS: &str = "user already exists!!";
const LOGIN_SUCCESSFUL: &str = "login successful!!";
const INCORRECT_CREDENTIALS: &str = "Incorrect credentials!!";
const PLEASE_SIGN_UP: &str = "please sign up!!";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup` and `POST /login`.
///
/// Fields are optional so a missing one is reported as a 400 with a
/// readable message rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub msg: &'static str,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<Json<MessageResponse>> {
    let username = require_field(input.username, "username")?;
    let password = require_field(input.password, "password")?;

    // 1. An existing name short-circuits every other check.
    if UserRepo::find_by_username(state.store.as_ref(), &username)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(USER_EXISTS.into()).into());
    }

    // 2. Length rules: password first, then username.
    validate_new_account(&username, &password)?;

    // 3. Hash off the async workers, then store.
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = NewUser {
        username,
        password_hash,
    };
    let outcome = UserRepo::create(state.store.as_ref(), &input)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "User insert failed");
            AppError::NotAcknowledged(ACCOUNT_NOT_CREATED)
        })?;

    if !outcome.acknowledged {
        return Err(AppError::NotAcknowledged(ACCOUNT_NOT_CREATED));
    }

    tracing::info!(username = %input.username, "Account created");
    Ok(Json(MessageResponse::new(ACCOUNT_CREATED)))
}

/// POST /login
///
/// Returns the token in the body and as an `Authorization: Bearer` header.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<Response> {
    let username = require_field(input.username, "username")?;
    let password = require_field(input.password, "password")?;

    // 1. No account: prompt for signup without touching any password.
    let Some(user) = UserRepo::find_by_username(state.store.as_ref(), &username).await? else {
        return Err(CoreError::NotFound(PLEASE_SIGN_UP.into()).into());
    };

    // 2. Compare against the stored hash off the async workers.
    let stored_hash = user.password_hash;
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password check task failed: {e}")))?;
    if !matches {
        tracing::info!(username = %user.username, "Login rejected");
        return Err(CoreError::Unauthorized(INCORRECT_CREDENTIALS.into()).into());
    }

    // 3. Issue the token.
    let token = generate_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| AppError::InternalError(format!("Token header error: {e}")))?;

    tracing::info!(username = %user.username, user_id = user.id, "Login successful");

    let body = LoginResponse {
        msg: LOGIN_SUCCESSFUL,
        token,
    };
    Ok(([(AUTHORIZATION, bearer)], Json(body)).into_response())
}
