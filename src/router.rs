// src/router.rs

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

pub fn create_router(app_state: AppState, cors_origin: &str) -> Router {
    // Define as rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route(
            "/me",
            get(handlers::auth::get_me).layer(axum_middleware::from_fn_with_state(
                app_state.clone(),
                auth_guard,
            )),
        );

    let product_routes = Router::new()
        .route(
            "/",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    let client_routes = Router::new()
        .route(
            "/",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route(
            "/{id}",
            get(handlers::clients::get_client)
                .put(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        );

    let sale_routes = Router::new()
        .route(
            "/",
            get(handlers::sales::list_sales).post(handlers::sales::create_sale),
        )
        .route(
            "/{id}",
            get(handlers::sales::get_sale)
                .put(handlers::sales::update_sale)
                .delete(handlers::sales::delete_sale),
        );

    let api = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/products", product_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/sales", sale_routes)
        .with_state(app_state);

    // A API aceita "/api/products/" e "/api/products". O Swagger UI fica fora:
    // ele redireciona "/swagger-ui" para "/swagger-ui/".
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(NormalizePath::trim_trailing_slash(api))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
}

// Libera o front-end (Vite) a chamar a API
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!("⚠️ CORS_ORIGIN inválida ({}), CORS desativado", origin);
            layer
        }
    }
}
