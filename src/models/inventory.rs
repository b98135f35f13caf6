// src/models/inventory.rs

use sqlx::FromRow;

// Saldo atual de um produto, lido dentro da transação da venda.
#[derive(Debug, Clone, FromRow)]
pub struct StockSnapshot {
    pub name: String,
    pub stock: i32,
}

// Resultado da verificação de estoque de uma linha da venda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockCheck {
    Available,
    Insufficient {
        product: String,
        available: i32,
        requested: i32,
    },
    ProductNotFound(i32),
}

// Um ajuste de saldo (positivo = devolução, negativo = baixa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct StockAdjustment {
    pub product_id: i32,
    pub quantity: i32,
}
