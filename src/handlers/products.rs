// src/handlers/products.rs

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
    models::product::{Product, ProductPayload},
};

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ListQuery),
    responses((status = 200, description = "Lista de produtos", body = Vec<Product>))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state
        .product_service
        .list_products(query.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(products, "Lista de produtos obtida corretamente"))))
}

// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.product_service.get_product(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(product, "Produto encontrado"))))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Produto criado", body = Product),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state.product_service.create_product(&payload).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(product, "Produto criado com sucesso!"))))
}

// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    request_body = ProductPayload,
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state.product_service.update_product(id, &payload).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(product, "Produto atualizado!"))))
}

// DELETE /api/products/{id} (soft delete)
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto eliminado"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.product_service.delete_product(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::message("Produto eliminado!"))))
}
