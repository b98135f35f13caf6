// src/models/sale.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative;

// --- Cabeçalho da venda (tabela 'sales') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub client_id: i32,
    #[schema(value_type = f64)]
    pub total: Decimal,
}

// --- Linha da venda (tabela 'sale_details') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetail {
    pub id: i32,
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub unit_price: Decimal, // preço praticado no momento da venda
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleLinePayload {
    #[validate(range(min = 1, message = "O produto é obrigatório."))]
    pub product_id: i32,

    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantity: i32,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalePayload {
    #[validate(range(min = 1, message = "O cliente é obrigatório."))]
    pub client_id: i32,

    // Aceito como enviado pelo front-end; não é recalculado a partir das linhas.
    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = f64)]
    pub total: Decimal,

    #[validate(length(min = 1, message = "A venda precisa de pelo menos um item."), nested)]
    pub details: Vec<SaleLinePayload>,
}

impl CreateSalePayload {
    pub fn lines_total(&self) -> Decimal {
        self.details
            .iter()
            .map(|line| line.unit_price * Decimal::from(line.quantity))
            .sum()
    }
}

// Só cliente e data: itens e estoque nunca mudam por aqui.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalePayload {
    #[validate(range(min = 1, message = "O cliente é obrigatório."))]
    pub client_id: i32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSale {
    pub sale_id: i32,
}

// Linha crua do JOIN sales/clients/sale_details/products
#[derive(Debug, Clone, FromRow)]
pub struct SaleHistoryRow {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub total: Decimal,
    pub client_name: String,
    pub quantity: i32,
    pub product_name: String,
}

// Venda agregada para o histórico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    pub id: i32,
    pub date: DateTime<Utc>,
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub client_name: String,
    pub items: Vec<String>,
}
