// src/db/pool.rs

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

/// Provedor de conexões: cria a pool a partir da configuração.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await
}

/// Cria as tabelas que faltam e aplica as migrações aditivas (ex: is_active).
/// Todas as migrações são idempotentes.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
