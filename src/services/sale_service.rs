// src/services/sale_service.rs

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::{
    common::error::AppError,
    db::{InventoryRepository, SaleRepository},
    models::{
        inventory::{StockAdjustment, StockCheck, StockSnapshot},
        sale::{CreateSalePayload, SaleHistoryRow, SaleLinePayload, SaleSummary, UpdateSalePayload},
    },
};

const CREATE_ACTION: &str = "Erro ao registrar a venda";
const DELETE_ACTION: &str = "Erro ao eliminar a venda";

/// Verifica todas as linhas contra o saldo lido. A quantidade pedida é
/// acumulada por produto, então repetir o item em várias linhas não fura o saldo.
/// Devolve a primeira linha que falhar, na ordem do pedido.
pub fn evaluate_lines(lines: &[SaleLinePayload], stock: &HashMap<i32, StockSnapshot>) -> StockCheck {
    let mut requested: HashMap<i32, i32> = HashMap::new();

    for line in lines {
        let Some(snapshot) = stock.get(&line.product_id) else {
            return StockCheck::ProductNotFound(line.product_id);
        };

        let total = requested.entry(line.product_id).or_insert(0);
        *total = total.saturating_add(line.quantity);

        if snapshot.stock < *total {
            return StockCheck::Insufficient {
                product: snapshot.name.clone(),
                available: snapshot.stock,
                requested: *total,
            };
        }
    }

    StockCheck::Available
}

// Converte o resultado da verificação no erro que aborta a transação.
pub fn ensure_available(check: StockCheck) -> Result<(), AppError> {
    match check {
        StockCheck::Available => Ok(()),
        StockCheck::Insufficient { product, available, requested } => {
            Err(AppError::InsufficientStock { product, available, requested })
        }
        StockCheck::ProductNotFound(id) => Err(AppError::ProductNotFound(id)),
    }
}

/// Agrupa as linhas do JOIN por venda, mantendo a ordem em que aparecem.
pub fn group_history(rows: Vec<SaleHistoryRow>) -> Vec<SaleSummary> {
    let mut index: HashMap<i32, usize> = HashMap::new();
    let mut sales: Vec<SaleSummary> = Vec::new();

    for row in rows {
        let position = *index.entry(row.id).or_insert_with(|| {
            sales.push(SaleSummary {
                id: row.id,
                date: row.date,
                total: row.total,
                client_name: row.client_name.clone(),
                items: Vec::new(),
            });
            sales.len() - 1
        });

        sales[position]
            .items
            .push(format!("{} (x{})", row.product_name, row.quantity));
    }

    sales
}

// Fecha a transação: commit no sucesso, rollback explícito em qualquer falha.
async fn settle<T>(
    tx: Transaction<'_, Postgres>,
    outcome: Result<T, AppError>,
    action: &'static str,
) -> Result<T, AppError> {
    match outcome {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| AppError::from(e).in_transaction(action))?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("🔥 Falha no rollback: {}", rollback_err);
            }
            tracing::warn!("{}: {}", action, e);
            Err(e.in_transaction(action))
        }
    }
}

#[derive(Clone)]
pub struct SaleService {
    pool: PgPool,
    sale_repo: SaleRepository,
    inventory_repo: InventoryRepository,
}

impl SaleService {
    pub fn new(pool: PgPool, sale_repo: SaleRepository, inventory_repo: InventoryRepository) -> Self {
        Self { pool, sale_repo, inventory_repo }
    }

    // --- CRIAR VENDA (cabeçalho + itens + baixa de estoque) ---
    pub async fn create_sale(&self, payload: &CreateSalePayload) -> Result<i32, AppError> {
        let lines_total = payload.lines_total();
        if lines_total != payload.total {
            // O total enviado é gravado como veio.
            tracing::warn!(
                "⚠️ Total informado ({}) difere da soma dos itens ({})",
                payload.total,
                lines_total
            );
        }

        let mut tx = self.pool.begin().await?;
        let outcome = self.stage_sale(&mut tx, payload).await;
        let sale_id = settle(tx, outcome, CREATE_ACTION).await?;

        tracing::info!("🧾 Venda {} registrada com {} itens", sale_id, payload.details.len());
        Ok(sale_id)
    }

    async fn stage_sale(
        &self,
        conn: &mut PgConnection,
        payload: &CreateSalePayload,
    ) -> Result<i32, AppError> {
        // 0. Lê o saldo de todos os produtos ANTES de qualquer escrita
        let mut stock: HashMap<i32, StockSnapshot> = HashMap::new();
        for line in &payload.details {
            if stock.contains_key(&line.product_id) {
                continue;
            }
            if let Some(snapshot) = self.inventory_repo.get_stock(&mut *conn, line.product_id).await? {
                stock.insert(line.product_id, snapshot);
            }
        }
        ensure_available(evaluate_lines(&payload.details, &stock))?;

        // 1. Insere a venda (cabeçalho) e obtém o id gerado
        let sale_id = self
            .sale_repo
            .insert_header(&mut *conn, payload.client_id, payload.total, Utc::now())
            .await?;

        // 2. Insere os detalhes e desconta do estoque
        for line in &payload.details {
            self.sale_repo.insert_detail(&mut *conn, sale_id, line).await?;
            self.inventory_repo
                .adjust_stock(&mut *conn, line.product_id, -line.quantity)
                .await?;
        }

        Ok(sale_id)
    }

    // --- ELIMINAR VENDA (com devolução de estoque) ---
    pub async fn delete_sale(&self, sale_id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let outcome = self.unstage_sale(&mut tx, sale_id).await;
        let restored = settle(tx, outcome, DELETE_ACTION).await?;

        tracing::info!("↩️ Venda {} eliminada, {} itens devolvidos ao estoque", sale_id, restored.len());
        Ok(())
    }

    async fn unstage_sale(
        &self,
        conn: &mut PgConnection,
        sale_id: i32,
    ) -> Result<Vec<StockAdjustment>, AppError> {
        // 1. Quantidades a devolver
        let details = self.sale_repo.get_detail_quantities(&mut *conn, sale_id).await?;

        // 2. Devolve o estoque
        for detail in &details {
            self.inventory_repo
                .adjust_stock(&mut *conn, detail.product_id, detail.quantity)
                .await?;
        }

        // 3. Remove os detalhes e depois o cabeçalho
        self.sale_repo.delete_details(&mut *conn, sale_id).await?;
        let rows = self.sale_repo.delete_header(&mut *conn, sale_id).await?;
        if rows == 0 {
            // Desfaz a devolução já aplicada nesta transação
            return Err(AppError::NotFound("Venda não encontrada.".to_string()));
        }

        Ok(details)
    }

    // --- ATUALIZAR CABEÇALHO (só cliente e data) ---
    pub async fn update_sale_header(
        &self,
        sale_id: i32,
        payload: &UpdateSalePayload,
    ) -> Result<(), AppError> {
        let rows = self
            .sale_repo
            .update_header(sale_id, payload.client_id, payload.date)
            .await?;
        if rows == 0 {
            return Err(AppError::NotFound("Venda não encontrada.".to_string()));
        }
        Ok(())
    }

    // --- HISTÓRICO ---
    pub async fn list_sales(&self) -> Result<Vec<SaleSummary>, AppError> {
        let rows = self.sale_repo.history().await?;
        Ok(group_history(rows))
    }

    pub async fn get_sale(&self, sale_id: i32) -> Result<SaleSummary, AppError> {
        let rows = self.sale_repo.history_for_sale(sale_id).await?;
        group_history(rows)
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Venda não encontrada.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn line(product_id: i32, quantity: i32) -> SaleLinePayload {
        SaleLinePayload { product_id, quantity, unit_price: dec!(10.00) }
    }

    fn stock_of(entries: &[(i32, &str, i32)]) -> HashMap<i32, StockSnapshot> {
        entries
            .iter()
            .map(|(id, name, stock)| (*id, StockSnapshot { name: name.to_string(), stock: *stock }))
            .collect()
    }

    fn history_row(id: i32, day: u32, product: &str, quantity: i32) -> SaleHistoryRow {
        SaleHistoryRow {
            id,
            date: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            total: dec!(100.00),
            client_name: "Maria".into(),
            quantity,
            product_name: product.into(),
        }
    }

    #[test]
    fn sufficient_stock_is_available() {
        let stock = stock_of(&[(1, "Laptop", 10), (2, "Mouse", 3)]);
        assert_eq!(evaluate_lines(&[line(1, 4), line(2, 3)], &stock), StockCheck::Available);
    }

    #[test]
    fn request_above_stock_is_rejected_with_quantities() {
        let stock = stock_of(&[(1, "Laptop", 10)]);
        assert_eq!(
            evaluate_lines(&[line(1, 15)], &stock),
            StockCheck::Insufficient { product: "Laptop".into(), available: 10, requested: 15 }
        );
    }

    #[test]
    fn unknown_product_is_reported() {
        let stock = stock_of(&[(1, "Laptop", 10)]);
        assert_eq!(
            evaluate_lines(&[line(1, 1), line(99, 1)], &stock),
            StockCheck::ProductNotFound(99)
        );
    }

    #[test]
    fn repeated_product_accumulates_quantity() {
        let stock = stock_of(&[(1, "Laptop", 10)]);
        assert_eq!(
            evaluate_lines(&[line(1, 6), line(1, 6)], &stock),
            StockCheck::Insufficient { product: "Laptop".into(), available: 10, requested: 12 }
        );
    }

    #[test]
    fn first_failing_line_wins() {
        let stock = stock_of(&[(1, "Laptop", 1), (2, "Mouse", 0)]);
        assert_eq!(
            evaluate_lines(&[line(2, 1), line(1, 5)], &stock),
            StockCheck::Insufficient { product: "Mouse".into(), available: 0, requested: 1 }
        );
    }

    #[test]
    fn stock_check_converts_into_app_error() {
        assert!(matches!(
            ensure_available(StockCheck::ProductNotFound(7)),
            Err(AppError::ProductNotFound(7))
        ));
        assert!(ensure_available(StockCheck::Available).is_ok());
    }

    #[test]
    fn history_is_grouped_per_sale_in_row_order() {
        let rows = vec![
            history_row(2, 20, "Laptop", 1),
            history_row(2, 20, "Mouse", 2),
            history_row(1, 10, "Teclado", 3),
        ];

        let sales = group_history(rows);

        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].id, 2);
        assert_eq!(sales[0].items, vec!["Laptop (x1)", "Mouse (x2)"]);
        assert_eq!(sales[1].id, 1);
        assert_eq!(sales[1].items, vec!["Teclado (x3)"]);
        assert_eq!(sales[1].client_name, "Maria");
    }

    #[test]
    fn empty_history_yields_no_sales() {
        assert!(group_history(Vec::new()).is_empty());
    }

    #[test]
    fn lines_total_sums_quantity_times_price() {
        let payload = CreateSalePayload {
            client_id: 1,
            total: dec!(0),
            details: vec![
                SaleLinePayload { product_id: 1, quantity: 2, unit_price: dec!(1500.00) },
                SaleLinePayload { product_id: 2, quantity: 3, unit_price: dec!(2.50) },
            ],
        };
        assert_eq!(payload.lines_total(), dec!(3007.50));
    }
}
