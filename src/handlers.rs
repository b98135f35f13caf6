use serde::Deserialize;
use utoipa::IntoParams;

pub mod auth;
pub mod clients;
pub mod products;
pub mod sales;

// Filtro comum das listagens com soft delete
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Inclui registros eliminados (is_active = false)
    #[serde(default)]
    pub include_inactive: bool,
}
