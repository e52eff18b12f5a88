//! Handlers for the `/auth` resource (signup, login, me).
//!
//! Each call is a stateless, single-step operation against the user store;
//! there are no sessions or refresh tokens to manage.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use voxnotes_core::error::CoreError;
use voxnotes_core::types::DbId;
use voxnotes_db::models::user::{CreateUser, PublicUser};
use voxnotes_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by signup and login.
///
/// Flat shape with the token at top level; `_id` naming matches the wire
/// contract the dashboard client was built against.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
///
/// Register a new user. Duplicate emails are rejected with 409 and create
/// no user row.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    if input.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".into()));
    }
    if input.email.trim().is_empty() {
        return Err(AppError::BadRequest("Email is required".into()));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(AppError::BadRequest)?;

    // Checked up front for a clean message; the uq_users_email constraint
    // still backstops concurrent signups.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            token,
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Unknown email and wrong password
/// produce the same 401 so the response is not a membership oracle.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        token,
    }))
}

/// GET /api/auth/me
///
/// Resolve the bearer token's subject to a user record. Public fields only.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<PublicUser>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(PublicUser::from(&user)))
}
