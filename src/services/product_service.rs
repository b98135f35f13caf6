// src/services/product_service.rs

use crate::{
    common::error::AppError,
    db::ProductRepository,
    models::product::{Product, ProductPayload},
};

#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

fn not_found() -> AppError {
    AppError::NotFound("Produto não encontrado.".to_string())
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    pub async fn list_products(&self, include_inactive: bool) -> Result<Vec<Product>, AppError> {
        self.repo.list(include_inactive).await
    }

    pub async fn get_product(&self, id: i32) -> Result<Product, AppError> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, AppError> {
        self.repo.create(payload).await
    }

    pub async fn update_product(&self, id: i32, payload: &ProductPayload) -> Result<Product, AppError> {
        self.repo.update(id, payload).await?.ok_or_else(not_found)
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), AppError> {
        if self.repo.deactivate(id).await? == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
