//src/main.rs

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod router;
mod services;

#[cfg(test)]
mod test_utils;

use crate::config::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Nível de log controlado por RUST_LOG (padrão: info)
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = AppConfig::from_env().context("Falha ao carregar a configuração")?;

    let app_state = AppState::new(&config)
        .await
        .context("Falha ao inicializar o estado da aplicação.")?;

    // Cria/atualiza o esquema antes de aceitar requisições
    db::run_migrations(&app_state.db_pool)
        .await
        .context("Falha ao rodar as migrações do banco de dados.")?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = router::create_router(app_state, &config.cors_origin);

    let listener = TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Falha ao iniciar o listener TCP em {}", config.server_addr))?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    tracing::info!("📚 Documentação em http://{}/swagger-ui", config.server_addr);

    axum::serve(listener, app).await.context("Erro no servidor Axum")?;
    Ok(())
}
