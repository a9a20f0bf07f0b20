//! Account lifecycle: signup, login, token refresh, logout, and the
//! OTP-based password-reset flow.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use vestra_core::error::CoreError;
use vestra_core::wardrobe::{validate_email, validate_full_name, validate_password};
use vestra_db::models::user::{CreateUser, User, UserResponse};
use vestra_db::repositories::{PasswordResetRepo, SessionRepo, UserRepo};

use crate::auth::{jwt, otp, password};
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Consecutive failed logins before an account is temporarily locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;
/// Lockout duration once the failure threshold is reached.
const LOCK_DURATION_MINS: i64 = 15;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Tokens plus the safe user representation, returned by signup/login/refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// `POST /api/v1/auth/signup`
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    validate_full_name(&req.full_name)?;

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: req.email.trim().to_lowercase(),
            password_hash,
            full_name: req.full_name.trim().to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "New user registered");
    let response = issue_tokens(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /api/v1/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let Some(user) = UserRepo::find_by_email(&state.pool, &req.email).await? else {
        return Err(invalid_credentials());
    };

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(CoreError::Forbidden(
                "Account temporarily locked due to repeated failed logins. Try again later."
                    .to_string(),
            )
            .into());
        }
    }

    let verified = password::verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if !verified {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if user.failed_login_count + 1 >= MAX_FAILED_ATTEMPTS {
            let locked_until = Utc::now() + Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, locked_until).await?;
            tracing::warn!(user_id = %user.id, "Account locked after repeated failed logins");
        }
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    let response = issue_tokens(&state, &user).await?;
    Ok(Json(response))
}

/// `POST /api/v1/auth/refresh`
///
/// Rotates the refresh token: the presented session is revoked and a new one
/// issued, so a stolen token can be used at most once.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = jwt::hash_refresh_token(&req.refresh_token);
    let Some(session) = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash).await?
    else {
        return Err(CoreError::Unauthorized("Invalid or expired refresh token".to_string()).into());
    };

    let Some(user) = UserRepo::find_by_id(&state.pool, session.user_id).await? else {
        return Err(CoreError::Unauthorized("Invalid or expired refresh token".to_string()).into());
    };

    SessionRepo::revoke(&state.pool, session.id).await?;
    let response = issue_tokens(&state, &user).await?;
    Ok(Json(response))
}

/// `POST /api/v1/auth/logout`
///
/// Revokes the presented session. Unknown tokens still get a 200 so the
/// endpoint leaks nothing about session state.
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> AppResult<Json<MessageResponse>> {
    let token_hash = jwt::hash_refresh_token(&req.refresh_token);
    if let Some(session) = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash).await?
    {
        SessionRepo::revoke(&state.pool, session.id).await?;
    }
    Ok(Json(MessageResponse {
        message: "Logged out",
    }))
}

/// `POST /api/v1/auth/forgot-password`
///
/// Always answers with the same message regardless of whether the email is
/// registered.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    validate_email(&req.email)?;

    if let Some(user) = UserRepo::find_by_email(&state.pool, &req.email).await? {
        let code = otp::generate_otp();
        let expires_at = Utc::now() + Duration::minutes(otp::OTP_EXPIRY_MINS);
        PasswordResetRepo::create(&state.pool, user.id, &otp::hash_otp(&code), expires_at).await?;
        state.mailer.send_reset_code(&user.email, &code).await?;
    }

    Ok(Json(MessageResponse {
        message: "If that email is registered, a reset code has been sent",
    }))
}

/// `POST /api/v1/auth/verify-otp`
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> AppResult<Json<MessageResponse>> {
    find_valid_reset(&state, &req.email, &req.otp).await?;
    Ok(Json(MessageResponse {
        message: "Code verified",
    }))
}

/// `POST /api/v1/auth/reset-password`
///
/// Consumes the OTP, replaces the password, and revokes every active session.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    validate_password(&req.new_password)?;

    let (user_id, reset_id) = find_valid_reset(&state, &req.email, &req.otp).await?;

    let password_hash = password::hash_password(&req.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    PasswordResetRepo::consume(&state.pool, reset_id).await?;
    UserRepo::update_password(&state.pool, user_id, &password_hash).await?;
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, user_id).await?;

    tracing::info!(%user_id, revoked, "Password reset completed");
    Ok(Json(MessageResponse {
        message: "Password has been reset",
    }))
}

/// Resolve an email + OTP pair to its pending reset record.
async fn find_valid_reset(
    state: &AppState,
    email: &str,
    code: &str,
) -> Result<(vestra_core::types::DbId, vestra_core::types::DbId), AppError> {
    let invalid = || CoreError::Validation("Invalid or expired code".to_string());

    let Some(user) = UserRepo::find_by_email(&state.pool, email).await? else {
        return Err(invalid().into());
    };
    let Some(reset) = PasswordResetRepo::find_pending(&state.pool, user.id, &otp::hash_otp(code))
        .await?
    else {
        return Err(invalid().into());
    };
    Ok((user.id, reset.id))
}

/// Generate an access token and a fresh refresh-token session for a user.
async fn issue_tokens(state: &AppState, user: &User) -> Result<AuthResponse, AppError> {
    let access_token = jwt::generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = jwt::generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days);
    SessionRepo::create(&state.pool, user.id, &refresh_hash, expires_at).await?;

    Ok(AuthResponse {
        user: UserResponse::from(user),
        access_token,
        refresh_token,
    })
}

fn invalid_credentials() -> AppError {
    CoreError::Unauthorized("Invalid email or password".to_string()).into()
}
