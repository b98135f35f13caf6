use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::common::response::ApiResponse;

// Código SQLSTATE do Postgres para "coluna inexistente".
const UNDEFINED_COLUMN: &str = "42703";

// Nosso tipo de erro, agora com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Um ou mais campos são inválidos.")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("O correio eletrônico já está registrado.")]
    EmailAlreadyExists,

    #[error("O usuário já existe.")]
    UsernameAlreadyExists,

    #[error("Estoque insuficiente para o produto '{product}'. Disponível: {available}, Solicitado: {requested}")]
    InsufficientStock {
        product: String,
        available: i32,
        requested: i32,
    },

    #[error("O produto com ID {0} não existe.")]
    ProductNotFound(i32),

    #[error("Referência inválida: {0}")]
    InvalidReference(String),

    #[error("{0}")]
    NotFound(String),

    // Falha dentro de um fluxo transacional (venda). A transação já sofreu rollback.
    #[error("{action}: {source}")]
    Transaction {
        action: &'static str,
        #[source]
        source: Box<AppError>,
    },

    #[error("Usuário ou senha incorretos")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Erro interno: o banco de dados não está atualizado ({0}). Reinicie o backend.")]
    SchemaOutdated(String),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Corpo da requisição inválido: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Parâmetro de rota inválido: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Parâmetro de consulta inválido: {0}")]
    QueryRejection(#[from] QueryRejection),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some(UNDEFINED_COLUMN) {
                return AppError::SchemaOutdated(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                let constraint = db_err.constraint().unwrap_or("desconhecida");
                return AppError::InvalidReference(constraint.to_string());
            }
            if db_err.is_unique_violation() {
                return AppError::BadRequest("Registro duplicado.".to_string());
            }
        }
        AppError::DatabaseError(e)
    }
}

impl AppError {
    /// Envolve o erro com o contexto da operação transacional que falhou.
    pub fn in_transaction(self, action: &'static str) -> Self {
        AppError::Transaction {
            action,
            source: Box::new(self),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::EmailAlreadyExists
            | AppError::UsernameAlreadyExists
            | AppError::InsufficientStock { .. }
            | AppError::ProductNotFound(_)
            | AppError::InvalidReference(_)
            | AppError::SchemaOutdated(_)
            | AppError::JsonRejection(_)
            | AppError::PathRejection(_)
            | AppError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Transaction { source, .. } => source.status(),
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensagem exposta ao cliente. Erros internos não vazam detalhes.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::JwtError(_) => "Ocorreu um erro inesperado.".to_string(),
            AppError::Transaction { action, source } => {
                format!("{}: {}", action, source.public_message())
            }
            other => other.to_string(),
        }
    }

    fn validation_details(&self) -> Option<Value> {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                serde_json::to_value(details).ok()
            }
            AppError::Transaction { source, .. } => source.validation_details(),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Erro Interno do Servidor: {}", self);
        } else if let AppError::SchemaOutdated(ref detail) = self {
            tracing::error!("🔥 Esquema desatualizado: {}", detail);
        }

        let body = ApiResponse {
            success: false,
            message: self.public_message(),
            data: self.validation_details(),
        };
        (status, Json(body)).into_response()
    }
}
