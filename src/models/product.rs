// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = f64, example = 1500.00)]
    pub price: Decimal,
    pub stock: i32,
    // false = eliminado (soft delete)
    pub is_active: bool,
}

// Dados para criar ou atualizar um produto
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, max = 150, message = "O nome é obrigatório."))]
    #[schema(example = "Coca Cola")]
    pub name: String,

    #[schema(example = "Bebida gaseosa 500ml")]
    pub description: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = f64, example = 2.50)]
    pub price: Decimal,

    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    #[serde(default)]
    pub stock: i32,
}
