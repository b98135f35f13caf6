// src/db/sale_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::{
        inventory::StockAdjustment,
        sale::{SaleHistoryRow, SaleLinePayload},
    },
};

// JOIN usado pelo histórico: uma linha por item vendido
const HISTORY_QUERY: &str = r#"
    SELECT s.id, s.date, s.total, c.name AS client_name,
           sd.quantity, p.name AS product_name
    FROM sales s
    INNER JOIN clients c ON s.client_id = c.id
    INNER JOIN sale_details sd ON s.id = sd.sale_id
    INNER JOIN products p ON sd.product_id = p.id
"#;

#[derive(Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  ESCRITA (sempre dentro da transação da venda)
    // =========================================================================

    /// Insere o cabeçalho e devolve o id gerado.
    pub async fn insert_header<'e, E>(
        &self,
        executor: E,
        client_id: i32,
        total: Decimal,
        date: DateTime<Utc>,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO sales (date, client_id, total) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(date)
        .bind(client_id)
        .bind(total)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }

    pub async fn insert_detail<'e, E>(
        &self,
        executor: E,
        sale_id: i32,
        line: &SaleLinePayload,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO sale_details (sale_id, product_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(sale_id)
        .bind(line.product_id)
        .bind(line.quantity)
        .bind(line.unit_price)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Quantidades vendidas por produto, para devolver ao estoque.
    pub async fn get_detail_quantities<'e, E>(
        &self,
        executor: E,
        sale_id: i32,
    ) -> Result<Vec<StockAdjustment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, StockAdjustment>(
            "SELECT product_id, quantity FROM sale_details WHERE sale_id = $1 ORDER BY id",
        )
        .bind(sale_id)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    pub async fn delete_details<'e, E>(&self, executor: E, sale_id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM sale_details WHERE sale_id = $1")
            .bind(sale_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_header<'e, E>(&self, executor: E, sale_id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM sales WHERE id = $1")
            .bind(sale_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  CABEÇALHO E LEITURA (comando único, usa a pool)
    // =========================================================================

    pub async fn update_header(
        &self,
        sale_id: i32,
        client_id: i32,
        date: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE sales SET client_id = $2, date = $3 WHERE id = $1")
            .bind(sale_id)
            .bind(client_id)
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn history(&self) -> Result<Vec<SaleHistoryRow>, AppError> {
        let rows = sqlx::query_as::<_, SaleHistoryRow>(&format!(
            "{HISTORY_QUERY} ORDER BY s.date DESC, s.id, sd.id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn history_for_sale(&self, sale_id: i32) -> Result<Vec<SaleHistoryRow>, AppError> {
        let rows = sqlx::query_as::<_, SaleHistoryRow>(&format!(
            "{HISTORY_QUERY} WHERE s.id = $1 ORDER BY sd.id"
        ))
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
