// src/services/client_service.rs

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::client::{Client, ClientPayload},
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

fn not_found() -> AppError {
    AppError::NotFound("Cliente não encontrado".to_string())
}

impl ClientService {
    pub fn new(repo: ClientRepository) -> Self {
        Self { repo }
    }

    pub async fn list_clients(&self, include_inactive: bool) -> Result<Vec<Client>, AppError> {
        self.repo.list(include_inactive).await
    }

    pub async fn get_client(&self, id: i32) -> Result<Client, AppError> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client, AppError> {
        // Validação: verificar se o e-mail já existe
        if self.repo.email_in_use(&payload.email, None).await? {
            return Err(AppError::EmailAlreadyExists);
        }
        self.repo.create(payload).await
    }

    pub async fn update_client(&self, id: i32, payload: &ClientPayload) -> Result<Client, AppError> {
        if self.repo.email_in_use(&payload.email, Some(id)).await? {
            return Err(AppError::EmailAlreadyExists);
        }
        self.repo.update(id, payload).await?.ok_or_else(not_found)
    }

    pub async fn delete_client(&self, id: i32) -> Result<(), AppError> {
        tracing::info!("[DELETE CLIENT] Eliminando cliente {} (soft delete)", id);
        if self.repo.deactivate(id).await? == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
