pub mod auth;
pub mod client_service;
pub mod product_service;
pub mod sale_service;
