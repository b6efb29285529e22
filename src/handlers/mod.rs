pub mod health;
pub mod pages;

pub use health::{health_handler, openapi_handler};
pub use pages::not_found_handler;
