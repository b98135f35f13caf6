// src/db/inventory_repo.rs

use sqlx::{Executor, Postgres};

use crate::{common::error::AppError, models::inventory::StockSnapshot};

// Leitura e escrita de products.stock. Sempre roda no executor recebido
// (normalmente a transação da venda), por isso não guarda a pool.
#[derive(Clone, Default)]
pub struct InventoryRepository;

impl InventoryRepository {
    pub fn new() -> Self {
        Self
    }

    /// Saldo atual do produto; `None` se o id não existe.
    pub async fn get_stock<'e, E>(
        &self,
        executor: E,
        product_id: i32,
    ) -> Result<Option<StockSnapshot>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let snapshot = sqlx::query_as::<_, StockSnapshot>(
            "SELECT name, stock FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(executor)
        .await?;
        Ok(snapshot)
    }

    /// Soma `delta` ao saldo (negativo = baixa, positivo = devolução).
    /// Nenhuma linha afetada significa que o produto não existe.
    pub async fn adjust_stock<'e, E>(
        &self,
        executor: E,
        product_id: i32,
        delta: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE products SET stock = stock + $1 WHERE id = $2")
            .bind(delta)
            .bind(product_id)
            .execute(executor)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ProductNotFound(product_id));
        }
        Ok(())
    }
}
