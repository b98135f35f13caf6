// src/db/client_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::client::{Client, ClientPayload},
};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

// Converte a violação do índice único de e-mail em um erro amigável
fn map_email_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::EmailAlreadyExists;
        }
    }
    e.into()
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, email, phone, is_active
            FROM clients
            WHERE is_active OR $1
            ORDER BY name ASC
            "#,
        )
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await?;
        Ok(clients)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, email, phone, is_active FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(client)
    }

    /// O e-mail já pertence a outro cliente? Sem diferenciar maiúsculas.
    /// `except_id` ignora o próprio registro no update.
    pub async fn email_in_use(&self, email: &str, except_id: Option<i32>) -> Result<bool, AppError> {
        let in_use: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE lower(email) = lower($1) AND ($2::INT IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(in_use)
    }

    pub async fn create(&self, payload: &ClientPayload) -> Result<Client, AppError> {
        sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone, is_active
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(payload.phone.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_email_conflict)
    }

    pub async fn update(&self, id: i32, payload: &ClientPayload) -> Result<Option<Client>, AppError> {
        sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $2, email = $3, phone = $4
            WHERE id = $1
            RETURNING id, name, email, phone, is_active
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(payload.phone.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_email_conflict)
    }

    pub async fn deactivate(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE clients SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
