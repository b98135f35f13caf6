pub mod auth;
pub mod client;
pub mod inventory;
pub mod product;
pub mod sale;
