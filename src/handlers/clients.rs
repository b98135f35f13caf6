// src/handlers/clients.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath, AppQuery},
        response::ApiResponse,
    },
    config::AppState,
    handlers::ListQuery,
    models::client::{Client, ClientPayload},
};

// 1. OBTER CLIENTES (só os ativos, a menos que includeInactive=true)
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clients",
    params(ListQuery),
    responses((status = 200, description = "Lista de clientes", body = Vec<Client>))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state
        .client_service
        .list_clients(query.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(clients, "Lista de clientes obtida corretamente"))))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente", body = Client),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn get_client(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.get_client(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(client, "Cliente encontrado"))))
}

// 2. CRIAR CLIENTE
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clients",
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Cliente criado", body = Client),
        (status = 400, description = "E-mail já registrado ou dados inválidos")
    )
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state.client_service.create_client(&payload).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(client, "Cliente criado com sucesso!"))))
}

// 3. ATUALIZAR CLIENTE
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Clients",
    request_body = ClientPayload,
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 400, description = "E-mail já registrado por outro cliente"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state.client_service.update_client(id, &payload).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(client, "Cliente atualizado corretamente"))))
}

// 4. ELIMINAR CLIENTE (soft delete)
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente eliminado"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_service.delete_client(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::message("Cliente eliminado corretamente"))))
}
