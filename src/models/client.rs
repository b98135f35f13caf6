// src/models/client.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 1, max = 150, message = "O nome é obrigatório."))]
    #[schema(example = "Maria Souza")]
    pub name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "maria@example.com")]
    pub email: String,

    pub phone: Option<String>,
}
