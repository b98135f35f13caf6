// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::create_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Sales ---
        handlers::sales::create_sale,
        handlers::sales::list_sales,
        handlers::sales::get_sale,
        handlers::sales::update_sale,
        handlers::sales::delete_sale,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::CredentialsPayload,
            models::auth::AuthResponse,
            models::auth::Claims,

            // --- Catálogo ---
            models::product::Product,
            models::product::ProductPayload,
            models::client::Client,
            models::client::ClientPayload,

            // --- Vendas ---
            models::sale::Sale,
            models::sale::SaleDetail,
            models::sale::SaleLinePayload,
            models::sale::CreateSalePayload,
            models::sale::UpdateSalePayload,
            models::sale::CreatedSale,
            models::sale::SaleSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Products", description = "Catálogo e Estoque"),
        (name = "Clients", description = "Gestão de Clientes"),
        (name = "Sales", description = "Vendas com baixa e devolução de estoque")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
