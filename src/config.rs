// src/config.rs

use std::{env, time::Duration};

use sqlx::PgPool;

use crate::{
    db::{self, ClientRepository, InventoryRepository, ProductRepository, SaleRepository, UserRepository},
    services::{
        auth::AuthService, client_service::ClientService, product_service::ProductService,
        sale_service::SaleService,
    },
};

/// Configurações do token JWT emitido no login.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration: chrono::Duration,
}

/// Configuração lida uma única vez na inicialização e repassada explicitamente.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub server_addr: String,
    pub cors_origin: String,
    pub jwt: JwtSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} deve ser definida")]
    MissingRequired(&'static str),

    #[error("Valor inválido para {0}")]
    InvalidValue(&'static str),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de busca (env, mapa de testes...).
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| get(key).ok_or(ConfigError::MissingRequired(key));
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let db_max_connections = or_default("DB_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS"))?;
        let acquire_secs: u64 = or_default("DB_ACQUIRE_TIMEOUT_SECS", "3")
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DB_ACQUIRE_TIMEOUT_SECS"))?;
        let expiration_hours: i64 = or_default("JWT_EXPIRATION_HOURS", "2")
            .parse()
            .ok()
            .filter(|h| *h > 0)
            .ok_or(ConfigError::InvalidValue("JWT_EXPIRATION_HOURS"))?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_secs),
            server_addr: or_default("SERVER_ADDR", "0.0.0.0:3000"),
            cors_origin: or_default("CORS_ORIGIN", "http://localhost:5173"),
            jwt: JwtSettings {
                secret: required("JWT_SECRET")?,
                issuer: or_default("JWT_ISSUER", "pdv-backend"),
                audience: or_default("JWT_AUDIENCE", "pdv-frontend"),
                expiration: chrono::Duration::hours(expiration_hours),
            },
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub product_service: ProductService,
    pub client_service: ClientService,
    pub sale_service: SaleService,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = db::connect(config).await?;
        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, config))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool, config: &AppConfig) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let sale_repo = SaleRepository::new(db_pool.clone());
        let inventory_repo = InventoryRepository::new();

        Self {
            auth_service: AuthService::new(user_repo, config.jwt.clone()),
            product_service: ProductService::new(product_repo),
            client_service: ClientService::new(client_repo),
            sale_service: SaleService::new(db_pool.clone(), sale_repo, inventory_repo),
            db_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/pdv"),
            ("JWT_SECRET", "segredo"),
        ]))
        .unwrap();

        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(3));
        assert_eq!(config.server_addr, "0.0.0.0:3000");
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.jwt.expiration, chrono::Duration::hours(2));
    }

    #[test]
    fn missing_secret_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/pdv")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired("JWT_SECRET")));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/pdv"),
            ("JWT_SECRET", "segredo"),
            ("JWT_EXPIRATION_HOURS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("JWT_EXPIRATION_HOURS")));
    }
}
