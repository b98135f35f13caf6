// src/handlers/sales.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
        response::ApiResponse,
    },
    config::AppState,
    models::sale::{CreateSalePayload, CreatedSale, SaleSummary, UpdateSalePayload},
};

// CRIAR UMA VENDA COMPLETA
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    request_body = CreateSalePayload,
    responses(
        (status = 200, description = "Venda registrada", body = CreatedSale),
        (status = 400, description = "Estoque insuficiente, produto inexistente ou dados inválidos")
    )
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sale_id = app_state.sale_service.create_sale(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(CreatedSale { sale_id }, "Venda registrada com sucesso.")),
    ))
}

// HISTÓRICO DE VENDAS
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    responses((status = 200, description = "Histórico agregado", body = Vec<SaleSummary>))
)]
pub async fn list_sales(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sales = app_state.sale_service.list_sales().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(sales, "Histórico de vendas obtido"))))
}

#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "ID da venda")),
    responses(
        (status = 200, description = "Venda", body = SaleSummary),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn get_sale(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let sale = app_state.sale_service.get_sale(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(sale, "Venda encontrada"))))
}

// ATUALIZAR VENDA: só cliente e data. Para mudar itens, elimine e crie de novo.
#[utoipa::path(
    put,
    path = "/api/sales/{id}",
    tag = "Sales",
    request_body = UpdateSalePayload,
    params(("id" = i32, Path, description = "ID da venda")),
    responses(
        (status = 200, description = "Venda atualizada (Cliente/Data)"),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn update_sale(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.sale_service.update_sale_header(id, &payload).await?;
    Ok((StatusCode::OK, Json(ApiResponse::message("Venda atualizada (Cliente/Data)."))))
}

// ELIMINAR VENDA (com devolução de estoque)
#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "ID da venda")),
    responses(
        (status = 200, description = "Venda eliminada e estoque restaurado"),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn delete_sale(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.sale_service.delete_sale(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::message("Venda eliminada e estoque restaurado."))))
}
