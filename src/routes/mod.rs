// Route exports
pub mod error;
pub mod pages;

use actix_web::web;

pub use error::{handle_query_payload_error, PageError};
pub use pages::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure);
}
