// src/db/product_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::product::{Product, ProductPayload},
};

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, is_active";

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active OR $1 ORDER BY id ASC"
        ))
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn create(&self, payload: &ProductPayload) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, description, price, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&payload.name)
        .bind(payload.description.as_deref())
        .bind(payload.price)
        .bind(payload.stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    /// Atualiza todos os campos editáveis, inclusive o estoque (ajuste manual).
    /// `None` quando nenhuma linha corresponde ao id.
    pub async fn update(&self, id: i32, payload: &ProductPayload) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, stock = $5
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&payload.name)
        .bind(payload.description.as_deref())
        .bind(payload.price)
        .bind(payload.stock)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    // Soft delete: as vendas antigas continuam apontando para o produto.
    pub async fn deactivate(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE products SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
