// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, extract::AppJson, response::ApiResponse},
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, Claims, CredentialsPayload},
};

// Handler de registro
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "Usuário registrado"),
        (status = 400, description = "Usuário já existe ou dados inválidos")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CredentialsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .auth_service
        .register_user(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Usuário registrado com sucesso"))))
}

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "Token emitido", body = AuthResponse),
        (status = 401, description = "Usuário ou senha incorretos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CredentialsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .login_user(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(AuthResponse { token }, "Login realizado"))))
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Claims do token atual", body = Claims),
        (status = 401, description = "Token inválido ou ausente")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(claims): AuthenticatedUser) -> Json<ApiResponse<Claims>> {
    Json(ApiResponse::ok(claims, "Usuário autenticado"))
}
